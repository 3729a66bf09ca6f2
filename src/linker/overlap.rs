//! OverlapResolver: nested-term candidates for a matched span
//!
//! Once the segmenter has consumed a span for one term, every other candidate
//! term whose text sits verbatim inside that span is still a valid link
//! target. This module computes, for a matched span:
//! - `nested`: the strictly-contained candidates, which seed the recursive
//!   pass that turns the link label into its own segment tree,
//! - `candidates`: every slug-distinct destination for the span, primary
//!   first, then contained terms in index order.
//!
//! An entry whose text coincides with the whole span (a homograph under a
//! different slug) is a disambiguation candidate but is kept out of `nested`,
//! so label recursion only ever descends into strictly shorter terms.

use crate::linker::index::TermIndex;
use crate::linker::segment::LinkCandidate;

/// Resolution of one matched span
#[derive(Debug, Clone)]
pub struct Overlap {
    /// Entry indices for the label recursion, index order, strictly shorter
    /// than the span
    pub nested: Vec<usize>,
    /// Slug-deduplicated destinations, primary first
    pub candidates: Vec<LinkCandidate>,
}

/// Resolve a matched span against the candidate scope of the current pass.
///
/// `scope` is the (index-ordered) candidate list the segmenter was invoked
/// with; containment is evaluated against that scope, not whatever else the
/// catalog holds. `primary` is the entry that produced the match and
/// `matched_text` the span slice with its source casing preserved.
pub fn resolve(
    index: &TermIndex,
    scope: &[usize],
    primary: usize,
    matched_text: &str,
) -> Overlap {
    let contained = index.contained_in(matched_text);

    let mut nested: Vec<usize> = Vec::new();
    let mut candidates: Vec<LinkCandidate> = vec![LinkCandidate {
        term: matched_text.to_string(),
        slug: index.entry(primary).slug.clone(),
    }];

    for &idx in scope {
        if idx == primary || !contained.contains(&idx) {
            continue;
        }
        let entry = index.entry(idx);
        if entry.term != matched_text {
            nested.push(idx);
        }
        if !candidates.iter().any(|c| c.slug == entry.slug) {
            candidates.push(LinkCandidate {
                term: entry.term.clone(),
                slug: entry.slug.clone(),
            });
        }
    }

    Overlap { nested, candidates }
}

// =============================================================================
// Tests
// =============================================================================
