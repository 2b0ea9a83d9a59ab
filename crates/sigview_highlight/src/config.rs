//! Highlighter configuration.

use sigview_stack::DEFAULT_MAX_DEPTH;

use crate::palette::Palette;

/// Settings that shape rendered output.
///
/// Owned by the [`SignatureCache`](crate::SignatureCache): cached markup
/// embeds palette colours, so a cache is only valid for one configuration.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HighlightConfig {
    pub palette: Palette,
    /// Deepest descriptor nesting the formatter will follow.
    pub max_depth: u32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HighlightConfig {
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}
