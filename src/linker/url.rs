//! UrlCortex - URL extraction pre-pass via Regex
//!
//! Splits raw text into alternating plain chunks and URL segments before any
//! term matching runs, so a term occurring inside a URL is never linked as a
//! dictionary term. Recognized forms:
//! - `http://...` / `https://...`
//! - `www....`
//! - bare domains with a known TLD: `example.com/path`, `mon-site.fr`
//!
//! Hrefs are normalized by prepending `https://` when the source text carries
//! no scheme.

use regex::Regex;

use crate::linker::segment::Segment;

/// URL detector with its pattern compiled once
pub struct UrlCortex {
    url_re: Regex,
}

impl Default for UrlCortex {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlCortex {
    pub fn new() -> Self {
        // Three arms, leftmost occurrence wins:
        // 1. explicit scheme, 2. www. prefix, 3. bare label + known TLD,
        // each swallowing trailing non-space characters (paths, queries)
        let url_re = Regex::new(
            r"(?i)(?:https?://\S+|www\.\S+|\b[a-z0-9][a-z0-9.-]*\.(?:com|fr|org|net|edu|gov|info|biz|co|io)\S*)",
        )
        .expect("URL pattern is valid");

        UrlCortex { url_re }
    }

    /// Split `text` into plain chunks and URL segments.
    ///
    /// Plain chunks are what the term matcher consumes downstream; when no
    /// URL is present the whole text comes back as a single plain chunk.
    pub fn extract(&self, text: &str) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut cursor = 0;

        for mat in self.url_re.find_iter(text) {
            if mat.start() > cursor {
                segments.push(Segment::text(&text[cursor..mat.start()]));
            }
            let display = mat.as_str();
            segments.push(Segment::Url {
                display: display.to_string(),
                href: normalize_href(display),
            });
            cursor = mat.end();
        }

        if segments.is_empty() {
            // No URL at all: the matcher still has to see the full text
            return vec![Segment::text(text)];
        }

        if cursor < text.len() {
            segments.push(Segment::text(&text[cursor..]));
        }

        segments
    }
}

/// Prefix `https://` unless the display text already carries a scheme
fn normalize_href(display: &str) -> String {
    let lower = display.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        display.to_string()
    } else {
        format!("https://{}", display)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linker::segment::segments_text;

    // -------------------------------------------------------------------------
    // Requirement 1: no URL means one untouched plain chunk
    // -------------------------------------------------------------------------
    #[test]
    fn test_no_url_single_chunk() {
        let cortex = UrlCortex::new();
        let segments = cortex.extract("Le coaching aide les clients.");
        assert_eq!(segments, vec![Segment::text("Le coaching aide les clients.")]);
    }

    #[test]
    fn test_empty_text_single_chunk() {
        let cortex = UrlCortex::new();
        assert_eq!(cortex.extract(""), vec![Segment::text("")]);
    }

    // -------------------------------------------------------------------------
    // Requirement 2: scheme URLs are cut out with surrounding text preserved
    // -------------------------------------------------------------------------
    #[test]
    fn test_scheme_url_extracted() {
        let cortex = UrlCortex::new();
        let segments = cortex.extract("Voir https://example.com/coaching pour plus.");

        assert_eq!(
            segments,
            vec![
                Segment::text("Voir "),
                Segment::Url {
                    display: "https://example.com/coaching".to_string(),
                    href: "https://example.com/coaching".to_string(),
                },
                Segment::text(" pour plus."),
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 3: scheme normalization for www. and bare domains
    // -------------------------------------------------------------------------
    #[test]
    fn test_www_url_gets_https_prefix() {
        let cortex = UrlCortex::new();
        let segments = cortex.extract("www.exemple.fr");

        assert_eq!(
            segments,
            vec![Segment::Url {
                display: "www.exemple.fr".to_string(),
                href: "https://www.exemple.fr".to_string(),
            }]
        );
    }

    #[test]
    fn test_bare_domain_with_path() {
        let cortex = UrlCortex::new();
        let segments = cortex.extract("Inscription sur exemple.com/cours ce soir");

        assert_eq!(
            segments,
            vec![
                Segment::text("Inscription sur "),
                Segment::Url {
                    display: "exemple.com/cours".to_string(),
                    href: "https://exemple.com/cours".to_string(),
                },
                Segment::text(" ce soir"),
            ]
        );
    }

    #[test]
    fn test_multiple_urls() {
        let cortex = UrlCortex::new();
        let segments = cortex.extract("a http://x.org b www.y.net c");

        assert_eq!(segments.len(), 5);
        assert_eq!(segments_text(&segments), "a http://x.org b www.y.net c");
        assert!(matches!(segments[1], Segment::Url { .. }));
        assert!(matches!(segments[3], Segment::Url { .. }));
    }

    // -------------------------------------------------------------------------
    // Requirement 4: word inside a normal sentence is not a domain
    // -------------------------------------------------------------------------
    #[test]
    fn test_plain_words_not_urls() {
        let cortex = UrlCortex::new();
        let segments = cortex.extract("fin de phrase. Com une suite");
        assert_eq!(segments.len(), 1);
    }
}
