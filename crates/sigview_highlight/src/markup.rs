//! Markup emission.
//!
//! Output uses rich-text tags understood by the host text renderer:
//! `<color=#rrggbb>…</color>` and `<i>…</i>`. Tags nest and are always
//! balanced in anything this crate produces.

use std::sync::LazyLock;

use regex::Regex;
use sigview_ir::ColorToken;

use crate::palette::Palette;

pub const OPEN_COLOR: &str = "<color=";
pub const CLOSE_COLOR: &str = "</color>";
pub const OPEN_ITALIC: &str = "<i>";
pub const CLOSE_ITALIC: &str = "</i>";

#[expect(clippy::expect_used, reason = "literal pattern is known to compile")]
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?color(?:=#?[0-9A-Za-z]*)?>|</?i>").expect("markup tag pattern")
});

/// Remove colour and italic tags, leaving plain text.
///
/// ```
/// use sigview_highlight::strip_markup;
///
/// let plain = strip_markup("<color=#a8a8a8>Shapes</color>.<i>Widget</i>");
/// assert_eq!(plain, "Shapes.Widget");
/// ```
pub fn strip_markup(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

/// Markup buffer bound to a palette.
pub(crate) struct Markup<'p> {
    palette: &'p Palette,
    buf: String,
}

impl<'p> Markup<'p> {
    pub(crate) fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            buf: String::with_capacity(64),
        }
    }

    /// Append `text` wrapped in the colour for `token`.
    pub(crate) fn colored(&mut self, token: ColorToken, text: &str) {
        self.buf.push_str(OPEN_COLOR);
        self.palette.color(token).push_to(&mut self.buf);
        self.buf.push('>');
        self.buf.push_str(text);
        self.buf.push_str(CLOSE_COLOR);
    }

    pub(crate) fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Append already-rendered markup.
    pub(crate) fn push_str(&mut self, markup: &str) {
        self.buf.push_str(markup);
    }

    /// Append the array bracket token for `rank` dimensions.
    pub(crate) fn rank_suffix(&mut self, rank: usize) {
        crate::names::push_rank(&mut self.buf, rank);
    }

    /// Byte offset of the end of the buffer, for [`italicize_from`](Self::italicize_from).
    pub(crate) fn mark(&self) -> usize {
        self.buf.len()
    }

    /// Wrap everything from `start` to the end in italics.
    ///
    /// `start` must come from [`mark`](Self::mark) so it sits on a tag boundary.
    pub(crate) fn italicize_from(&mut self, start: usize) {
        self.buf.insert_str(start, OPEN_ITALIC);
        self.buf.push_str(CLOSE_ITALIC);
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}
