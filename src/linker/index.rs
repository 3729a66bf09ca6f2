//! TermIndex: immutable per-render snapshot of the published term catalog
//!
//! Built from the raw catalog records the frontend already holds:
//! - keeps only `status == "published"` entries,
//! - drops empty-string terms (a zero-width pattern would match forever),
//! - sorts longest term first with a stable sort, so ties keep catalog order.
//!
//! The index owns the matching machinery shared by the segmenter and the
//! overlap resolver: one case-insensitive word-bounded regex per entry, and a
//! single case-sensitive Aho-Corasick automaton over every term for
//! containment scans inside matched spans.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Catalog status of entries eligible for linking
pub const STATUS_PUBLISHED: &str = "published";

/// Raw catalog record as supplied by the term CRUD layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermRecord {
    #[serde(default)]
    pub id: String,
    pub term: String,
    pub slug: String,
    pub status: String,
}

/// One indexed term: display form plus stable route key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermIndexEntry {
    pub term: String,
    pub slug: String,
}

/// Snapshot of the published terms, longest first
pub struct TermIndex {
    entries: Vec<TermIndexEntry>,
    /// One `(?i)`-word-bounded pattern per entry, same order as `entries`
    patterns: Vec<Regex>,
    /// Case-sensitive containment automaton; pattern id == entry index
    automaton: Option<AhoCorasick>,
}

impl TermIndex {
    /// Empty index; every span passes through unlinked
    pub fn empty() -> Self {
        TermIndex {
            entries: Vec::new(),
            patterns: Vec::new(),
            automaton: None,
        }
    }

    /// Build the snapshot from raw catalog records
    pub fn build(records: Vec<TermRecord>) -> Result<Self, String> {
        let mut entries: Vec<TermIndexEntry> = records
            .into_iter()
            .filter(|r| r.status == STATUS_PUBLISHED && !r.term.is_empty())
            .map(|r| TermIndexEntry {
                term: r.term,
                slug: r.slug,
            })
            .collect();

        // Stable sort: ties keep catalog order
        entries.sort_by(|a, b| {
            let len_a = a.term.chars().count();
            let len_b = b.term.chars().count();
            len_b.cmp(&len_a)
        });

        let mut patterns = Vec::with_capacity(entries.len());
        for entry in &entries {
            let re = Regex::new(&term_pattern(&entry.term))
                .map_err(|e| format!("Failed to compile pattern for '{}': {}", entry.term, e))?;
            patterns.push(re);
        }

        let automaton = if entries.is_empty() {
            None
        } else {
            let terms: Vec<&str> = entries.iter().map(|e| e.term.as_str()).collect();
            Some(
                AhoCorasickBuilder::new()
                    .match_kind(MatchKind::Standard)
                    .build(&terms)
                    .map_err(|e| format!("Failed to build containment automaton: {}", e))?,
            )
        };

        Ok(TermIndex {
            entries,
            patterns,
            automaton,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in priority order (longest first, stable)
    pub fn entries(&self) -> &[TermIndexEntry] {
        &self.entries
    }

    pub fn entry(&self, idx: usize) -> &TermIndexEntry {
        &self.entries[idx]
    }

    /// First case-insensitive word-bounded occurrence of entry `idx` in `text`
    pub fn find_entry(&self, idx: usize, text: &str) -> Option<(usize, usize)> {
        self.patterns[idx].find(text).map(|m| (m.start(), m.end()))
    }

    /// Entry indices whose term occurs verbatim inside `span`, in index order.
    ///
    /// Plain substring containment, case-sensitive: this mirrors how the
    /// matched span's own casing decides which nested terms are offered.
    pub fn contained_in(&self, span: &str) -> Vec<usize> {
        let automaton = match &self.automaton {
            Some(a) => a,
            None => return vec![],
        };

        let mut seen = vec![false; self.entries.len()];
        for mat in automaton.find_overlapping_iter(span) {
            seen[mat.pattern().as_usize()] = true;
        }

        // Pattern ids were assigned in entry order, so index order falls out
        seen.iter()
            .enumerate()
            .filter_map(|(i, &hit)| if hit { Some(i) } else { None })
            .collect()
    }
}

/// Word-bounded case-insensitive pattern for one term.
///
/// `\b` is only anchored on sides that start or end with a word character;
/// a term like "C++" would otherwise never match.
fn term_pattern(term: &str) -> String {
    let mut pat = String::from("(?i)");
    if term.chars().next().is_some_and(is_word_char) {
        pat.push_str(r"\b");
    }
    pat.push_str(&regex::escape(term));
    if term.chars().last().is_some_and(is_word_char) {
        pat.push_str(r"\b");
    }
    pat
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(term: &str, slug: &str, status: &str) -> TermRecord {
        TermRecord {
            id: format!("id-{}", slug),
            term: term.to_string(),
            slug: slug.to_string(),
            status: status.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Requirement 1: only published entries are indexed
    // -------------------------------------------------------------------------
    #[test]
    fn test_only_published_terms_indexed() {
        let index = TermIndex::build(vec![
            record("Coaching", "coaching", "published"),
            record("Mentorat", "mentorat", "pending"),
            record("Supervision", "supervision", "rejected"),
        ])
        .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.entry(0).slug, "coaching");
    }

    // -------------------------------------------------------------------------
    // Requirement 2: longest first, stable on ties
    // -------------------------------------------------------------------------
    #[test]
    fn test_longest_first_stable_order() {
        let index = TermIndex::build(vec![
            record("PNL", "pnl-a", "published"),
            record("Intelligence Émotionnelle", "ie", "published"),
            record("ABC", "abc", "published"),
            record("PNL", "pnl-b", "published"),
        ])
        .unwrap();

        let slugs: Vec<&str> = index.entries().iter().map(|e| e.slug.as_str()).collect();
        // Same-length entries keep their catalog order
        assert_eq!(slugs, vec!["ie", "pnl-a", "abc", "pnl-b"]);
    }

    // -------------------------------------------------------------------------
    // Requirement 3: zero-length terms are excluded
    // -------------------------------------------------------------------------
    #[test]
    fn test_empty_terms_excluded() {
        let index = TermIndex::build(vec![
            record("", "empty", "published"),
            record("Coaching", "coaching", "published"),
        ])
        .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.entry(0).slug, "coaching");
    }

    // -------------------------------------------------------------------------
    // Requirement 4: word-bounded, case-insensitive entry search
    // -------------------------------------------------------------------------
    #[test]
    fn test_find_entry_is_word_bounded() {
        let index = TermIndex::build(vec![record("coach", "coach", "published")]).unwrap();

        assert_eq!(index.find_entry(0, "coaching session"), None);
        assert_eq!(index.find_entry(0, "le coach parle"), Some((3, 8)));
    }

    #[test]
    fn test_find_entry_case_insensitive_accents() {
        let index =
            TermIndex::build(vec![record("Écoute active", "ecoute-active", "published")]).unwrap();

        let text = "pratique l'écoute active avec";
        let (start, end) = index.find_entry(0, text).unwrap();
        assert_eq!(&text[start..end], "écoute active");
    }

    // -------------------------------------------------------------------------
    // Requirement 5: containment scan in index order
    // -------------------------------------------------------------------------
    #[test]
    fn test_contained_in_index_order() {
        let index = TermIndex::build(vec![
            record("Intelligence Émotionnelle", "ie", "published"),
            record("Émotionnelle", "em", "published"),
            record("Intelligence", "int", "published"),
        ])
        .unwrap();

        let contained = index.contained_in("Intelligence Émotionnelle");
        let slugs: Vec<&str> = contained
            .iter()
            .map(|&i| index.entry(i).slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["ie", "em", "int"]);
    }

    #[test]
    fn test_contained_in_is_case_sensitive() {
        let index = TermIndex::build(vec![record("Émotionnelle", "em", "published")]).unwrap();

        assert!(index.contained_in("intelligence émotionnelle").is_empty());
        assert_eq!(index.contained_in("Intelligence Émotionnelle"), vec![0]);
    }
}
