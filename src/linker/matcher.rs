//! LinkerCortex: recursive term matching and segmentation
//!
//! The core of the auto-linking engine. For each plain-text chunk produced by
//! the URL pre-pass, the segmenter:
//! 1. walks the candidate list in index order (longest term first, stable)
//!    and takes the first entry with a word-bounded, case-insensitive
//!    occurrence anywhere in the span - the longest known term wins even when
//!    a shorter term appears earlier in reading order,
//! 2. splits the span into before / match / after,
//! 3. resolves nested terms and disambiguation candidates for the match,
//! 4. recurses on before and after with the same candidate list, and on the
//!    matched text with only its strictly-contained terms.
//!
//! Everything is synchronous and allocation-local: one call, one snapshot of
//! the index, no shared state.

use wasm_bindgen::prelude::*;

use crate::linker::index::{TermIndex, TermRecord};
use crate::linker::overlap;
use crate::linker::render::HtmlRenderer;
use crate::linker::segment::Segment;
use crate::linker::url::UrlCortex;

/// Term auto-linker over a published-catalog snapshot
#[wasm_bindgen]
pub struct LinkerCortex {
    index: TermIndex,
    url_cortex: UrlCortex,
    renderer: HtmlRenderer,
}

impl Default for LinkerCortex {
    fn default() -> Self {
        Self::new(None)
    }
}

#[wasm_bindgen]
impl LinkerCortex {
    /// `route_prefix` is the frontend route under which term pages live,
    /// e.g. `/terms`; links render as `<route_prefix>/<slug>`.
    #[wasm_bindgen(constructor)]
    pub fn new(route_prefix: Option<String>) -> Self {
        LinkerCortex {
            index: TermIndex::empty(),
            url_cortex: UrlCortex::new(),
            renderer: HtmlRenderer::new(route_prefix.unwrap_or_else(|| "/terms".to_string())),
        }
    }

    /// Number of indexed (published, non-empty) terms
    #[wasm_bindgen(js_name = termCount)]
    pub fn term_count(&self) -> usize {
        self.index.len()
    }

    #[wasm_bindgen(js_name = setRoutePrefix)]
    pub fn set_route_prefix(&mut self, prefix: String) {
        self.renderer = HtmlRenderer::new(prefix);
    }

    /// Rebuild the index from raw catalog records (JS binding)
    #[wasm_bindgen(js_name = hydrateTerms)]
    pub fn js_hydrate_terms(&mut self, terms: JsValue) -> Result<(), JsValue> {
        let records: Vec<TermRecord> = serde_wasm_bindgen::from_value(terms)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse term records: {}", e)))?;

        self.hydrate_terms(records).map_err(|e| JsValue::from_str(&e))
    }

    /// Link a text into a segment tree (JS binding).
    ///
    /// A null/undefined/non-string input comes back as-is inside a
    /// one-element array, matching what display components expect.
    #[wasm_bindgen(js_name = link)]
    pub fn js_link(&self, text: JsValue) -> JsValue {
        let text = match text.as_string() {
            Some(s) => s,
            None => return js_sys::Array::of1(&text).into(),
        };

        let segments = self.link_text(&text);
        match serde_wasm_bindgen::to_value(&segments) {
            Ok(v) => v,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[LinkerCortex] Serialization failed: {:?}", e).into(),
                );
                JsValue::NULL
            }
        }
    }

    /// Link a text and render it straight to HTML (JS binding)
    #[wasm_bindgen(js_name = linkHtml)]
    pub fn js_link_html(&self, text: &str) -> String {
        self.renderer.render(&self.link_text(text))
    }
}

impl LinkerCortex {
    /// Rebuild the index from raw catalog records
    pub fn hydrate_terms(&mut self, records: Vec<TermRecord>) -> Result<(), String> {
        self.index = TermIndex::build(records)?;
        Ok(())
    }

    /// Full pipeline: URL pre-pass, then term segmentation of each plain chunk
    pub fn link_text(&self, text: &str) -> Vec<Segment> {
        let scope: Vec<usize> = (0..self.index.len()).collect();

        let mut out: Vec<Segment> = Vec::new();
        for piece in self.url_cortex.extract(text) {
            match piece {
                Segment::Text { value } => {
                    out.extend(self.segment_span(&value, &scope));
                }
                url => out.push(url),
            }
        }
        out
    }

    /// Recursive segmentation of one span against an index-ordered candidate
    /// scope. Returns the span untouched when nothing in scope matches.
    fn segment_span(&self, text: &str, scope: &[usize]) -> Vec<Segment> {
        if text.is_empty() {
            return vec![Segment::text(text)];
        }

        // Index order is priority order: first entry with any occurrence wins
        let hit = scope
            .iter()
            .find_map(|&idx| self.index.find_entry(idx, text).map(|(s, e)| (idx, s, e)));

        let (primary, start, end) = match hit {
            Some(h) => h,
            None => return vec![Segment::text(text)],
        };

        let before = &text[..start];
        let matched = &text[start..end];
        let after = &text[end..];

        let resolved = overlap::resolve(&self.index, scope, primary, matched);

        let label = if resolved.nested.is_empty() {
            vec![Segment::text(matched)]
        } else {
            self.segment_span(matched, &resolved.nested)
        };

        let link = Segment::Link {
            label,
            slug: self.index.entry(primary).slug.clone(),
        };

        let segment = if resolved.candidates.len() > 1 {
            Segment::Choice {
                primary: Box::new(link),
                candidates: resolved.candidates,
            }
        } else {
            link
        };

        let mut out = self.segment_span(before, scope);
        out.push(segment);
        out.extend(self.segment_span(after, scope));
        out
    }
}

// =============================================================================
// Tests
// =============================================================================
