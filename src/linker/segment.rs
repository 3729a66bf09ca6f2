//! Segment tree: the renderable output of the auto-linking pipeline
//!
//! A linked text is an ordered sequence of segments:
//! - `Text` - unlinked literal text
//! - `Url` - an external hyperlink detected by the URL pre-pass
//! - `Link` - an internal reference to a dictionary term; its label is itself
//!   a segment sequence, so a long matched phrase can carry nested links
//! - `Choice` - a matched span that resolves to more than one term, rendered
//!   as a disambiguation affordance
//!
//! Serialized with a `type` tag so the JS side can switch on segment kind.

use serde::{Deserialize, Serialize};

/// One possible destination for a matched span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCandidate {
    pub term: String,
    pub slug: String,
}

/// A single node of the linked-text tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    /// Unlinked literal text
    Text { value: String },
    /// External URL; `href` is `display` with `https://` prepended when the
    /// source text carried no scheme
    Url { display: String, href: String },
    /// Internal term reference; `label` preserves the source casing
    Link { label: Vec<Segment>, slug: String },
    /// Ambiguous span: `primary` is the link that won the match, `candidates`
    /// lists every slug-distinct destination (primary included, first)
    Choice {
        primary: Box<Segment>,
        candidates: Vec<LinkCandidate>,
    },
}

impl Segment {
    /// Plain text chunk
    pub fn text(value: impl Into<String>) -> Self {
        Segment::Text {
            value: value.into(),
        }
    }

    /// Link whose label is a single literal chunk
    pub fn simple_link(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Segment::Link {
            label: vec![Segment::text(label)],
            slug: slug.into(),
        }
    }

    /// Reconstruct the literal source text covered by this segment.
    ///
    /// Concatenating `plain_text` over a whole output sequence yields the
    /// original input exactly; the renderer and the coverage tests rely on it.
    pub fn plain_text(&self) -> String {
        match self {
            Segment::Text { value } => value.clone(),
            Segment::Url { display, .. } => display.clone(),
            Segment::Link { label, .. } => label.iter().map(Segment::plain_text).collect(),
            Segment::Choice { primary, .. } => primary.plain_text(),
        }
    }
}

/// Literal text covered by a segment sequence
pub fn segments_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::plain_text).collect()
}

// =============================================================================
// Tests
// =============================================================================
