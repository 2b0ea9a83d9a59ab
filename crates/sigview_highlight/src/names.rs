//! Raw-name conventions.
//!
//! Reflection names encode structure textually: generic definitions end in
//! a backtick and the parameter count, arrays end in a bracket rank token.
//! These helpers read that encoding and degrade to "no match" on anything
//! unexpected. Descriptors that carry a display name skip them entirely.

use std::sync::LazyLock;

use regex::Regex;
use sigview_ir::{TypeDescriptor, ARITY_MARKER};

#[expect(clippy::expect_used, reason = "literal pattern is known to compile")]
static ARRAY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(,*)\]$").expect("array token pattern"));

/// `name` without its arity suffix, if the suffix is exactly the marker
/// followed by the decimal digits of `arity`.
///
/// Returns `name` unchanged on any mismatch, including a zero-padded count
/// such as `List`01`.
pub fn strip_arity_suffix(name: &str, arity: usize) -> &str {
    if arity == 0 {
        return name;
    }
    match name.rsplit_once(ARITY_MARKER) {
        Some((base, digits)) if digits == arity.to_string() => base,
        _ => name,
    }
}

/// Rank of the trailing array token in `name`: `[]` is 1, `[,,]` is 3.
pub fn array_rank(name: &str) -> Option<usize> {
    ARRAY_TOKEN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|commas| commas.as_str().len() + 1)
}

/// Bare name for display: the descriptor's display name when it has one,
/// otherwise the raw name with a matching arity suffix removed.
pub fn bare_name(ty: &TypeDescriptor) -> &str {
    match ty.display_name() {
        Some(display) => display,
        None => strip_arity_suffix(ty.name(), ty.generic_args().len()),
    }
}

/// Append the bracket token for `rank` dimensions.
pub(crate) fn push_rank(buf: &mut String, rank: usize) {
    buf.push('[');
    for _ in 1..rank {
        buf.push(',');
    }
    buf.push(']');
}
