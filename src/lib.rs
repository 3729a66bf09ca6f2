//! LexiCore: Term Auto-Linking Engine
//!
//! A Rust/WASM implementation of the LexiCloud dictionary auto-linking pipeline.
//!
//! # Architecture
//!
//! ## Linker Components
//! - `index.rs` - TermIndex: published-term snapshot, longest-first ordering
//! - `url.rs` - UrlCortex: URL extraction pre-pass via Regex
//! - `matcher.rs` - LinkerCortex: recursive term matching and segmentation
//! - `overlap.rs` - OverlapResolver: nested-term candidates via Aho-Corasick
//! - `segment.rs` - Segment tree (text / link / choice / url)
//! - `render.rs` - HtmlRenderer: segment tree to HTML markup
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { LinkerCortex } from 'lexicore';
//!
//! await init();
//!
//! const cortex = new LinkerCortex('/terms');
//!
//! // Hydrate with the published term catalog
//! cortex.hydrateTerms([
//!   { id: 't1', term: 'Coaching', slug: 'coaching', status: 'published' }
//! ]);
//!
//! // Segment tree for custom rendering
//! const segments = cortex.link("Le coaching aide.");
//!
//! // Or ready-to-mount HTML
//! const html = cortex.linkHtml("Le coaching aide.");
//! ```

pub mod linker;

pub use linker::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("lexicore v{}", env!("CARGO_PKG_VERSION"))
}
