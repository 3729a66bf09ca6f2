//! HtmlRenderer: segment tree to HTML markup
//!
//! Pure tree-to-string transform, no matching logic:
//! - text renders escaped,
//! - URLs render as external new-tab anchors that stop click propagation, so
//!   a link inside a clickable card never triggers the card,
//! - term links render as internal anchors under the configured route prefix,
//! - choice segments render the primary link inside a `<details>` disclosure
//!   listing every candidate destination.

use crate::linker::segment::{LinkCandidate, Segment};

/// Segment renderer bound to a frontend route prefix
pub struct HtmlRenderer {
    route_prefix: String,
}

impl HtmlRenderer {
    pub fn new(route_prefix: impl Into<String>) -> Self {
        HtmlRenderer {
            route_prefix: route_prefix.into(),
        }
    }

    pub fn route_prefix(&self) -> &str {
        &self.route_prefix
    }

    /// Render a full segment sequence
    pub fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for segment in segments {
            self.render_segment(segment, &mut out);
        }
        out
    }

    fn render_segment(&self, segment: &Segment, out: &mut String) {
        match segment {
            Segment::Text { value } => out.push_str(&escape_html(value)),
            Segment::Url { display, href } => {
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" \
                     class=\"external-link\" onclick=\"event.stopPropagation()\">{}</a>",
                    escape_html(href),
                    escape_html(display)
                ));
            }
            Segment::Link { label, slug } => {
                out.push_str(&format!(
                    "<a href=\"{}/{}\" class=\"term-link\">",
                    escape_html(&self.route_prefix),
                    escape_html(slug)
                ));
                for inner in label {
                    self.render_segment(inner, out);
                }
                out.push_str("</a>");
            }
            Segment::Choice {
                primary,
                candidates,
            } => {
                out.push_str("<details class=\"term-choice\"><summary>");
                self.render_segment(primary, out);
                out.push_str("</summary><ul class=\"term-choice-list\">");
                for candidate in candidates {
                    self.render_candidate(candidate, out);
                }
                out.push_str("</ul></details>");
            }
        }
    }

    fn render_candidate(&self, candidate: &LinkCandidate, out: &mut String) {
        out.push_str(&format!(
            "<li><a href=\"{}/{}\" class=\"term-link\">{}</a></li>",
            escape_html(&self.route_prefix),
            escape_html(&candidate.slug),
            escape_html(&candidate.term)
        ));
    }
}

/// Minimal HTML escaping, also safe inside double-quoted attributes
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
