//! Signature highlighting for sigview.
//!
//! Turns type and member descriptors into colour-tagged markup for the
//! inspector's signature views.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! 1. **Classify**: [`classify_type`] / [`classify_member`] pick a colour category
//! 2. **Type**: [`Highlighter::format_type`] renders one type, memoized
//! 3. **Signature**: [`Highlighter::format_signature`] adds `ref`, namespace,
//!    declaring chain, and an optional member
//! 4. **Method**: [`Highlighter::format_method`] renders a full callable, memoized
//!
//! All mutable state lives in a [`SignatureCache`], constructed once and
//! passed by reference. The cache owns the [`HighlightConfig`] because cached
//! markup embeds palette colours.
//!
//! # Modules
//!
//! - [`names`]: raw-name conventions (arity suffixes, array rank tokens)
//! - [`markup`]: tag constants and [`strip_markup`]

mod cache;
mod classify;
mod config;
mod error;
mod highlighter;
pub mod markup;
pub mod names;
mod palette;

use std::sync::Once;

pub use cache::{CacheStats, RenderedSignature, SignatureCache};
pub use classify::{classify_member, classify_type};
pub use config::HighlightConfig;
pub use error::{HighlightError, HighlightResult, PaletteError};
pub use highlighter::Highlighter;
pub use markup::strip_markup;
pub use palette::{HexColor, Palette};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=sigview_highlight=debug` or `RUST_LOG=sigview_highlight=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
