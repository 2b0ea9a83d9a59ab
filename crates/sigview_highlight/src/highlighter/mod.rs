//! Signature formatting engine.
//!
//! A [`Highlighter`] is a cheap borrowed view over a [`SignatureCache`]; all
//! state lives in the cache. Formatting is split by what is rendered:
//!
//! - [`ty`]: a single type, memoized by canonical type key
//! - [`signature`]: namespace, declaring chain, type, and optional member
//! - [`method`]: full callable signatures, memoized by signature key
//!
//! Every recursive step threads a [`Depth`] budget taken from
//! [`HighlightConfig::max_depth`](crate::HighlightConfig::max_depth).

mod method;
mod signature;
mod ty;

use sigview_ir::{BuiltinAlias, ColorToken, TypeDescriptor};
use sigview_stack::Depth;

use crate::cache::SignatureCache;
use crate::error::{HighlightError, HighlightResult};
use crate::markup::Markup;

/// Renders descriptors into colour-tagged markup.
///
/// # Example
///
/// ```
/// use sigview_highlight::{strip_markup, Highlighter, SignatureCache};
/// use sigview_ir::TypeDescriptor;
///
/// let cache = SignatureCache::new();
/// let highlighter = Highlighter::new(&cache);
///
/// let widget = TypeDescriptor::class("Shapes", "Widget");
/// let markup = highlighter.format_signature(&widget, true, None)?;
/// assert_eq!(strip_markup(&markup), "Shapes.Widget");
/// # Ok::<(), sigview_highlight::HighlightError>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Highlighter<'c> {
    cache: &'c SignatureCache,
}

impl<'c> Highlighter<'c> {
    pub fn new(cache: &'c SignatureCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &'c SignatureCache {
        self.cache
    }

    fn root_depth(&self) -> Depth {
        Depth::root(self.cache.config().max_depth)
    }

    fn markup(&self) -> Markup<'c> {
        Markup::new(&self.cache.config().palette)
    }
}

/// Element type demanded by the descriptor's modifiers.
///
/// `Ok(None)` when the descriptor has no element type and claims none.
fn element_of(ty: &TypeDescriptor) -> HighlightResult<Option<&TypeDescriptor>> {
    match ty.element_type() {
        None if ty.has_element_type() || ty.is_by_ref() => Err(HighlightError::NullDescriptor {
            role: "element type",
            owner: ty.key().to_owned(),
        }),
        element => Ok(element),
    }
}

/// The descriptor beneath a by-ref wrapper, or `ty` itself.
fn unwrap_by_ref(ty: &TypeDescriptor) -> HighlightResult<&TypeDescriptor> {
    if !ty.is_by_ref() {
        return Ok(ty);
    }
    match element_of(ty)? {
        Some(element) => Ok(element),
        None => Err(HighlightError::NullDescriptor {
            role: "element type",
            owner: ty.key().to_owned(),
        }),
    }
}

/// Generic parameters, and wrappers directly around one, render bare.
fn is_generic_like(ty: &TypeDescriptor) -> bool {
    ty.is_generic_parameter()
        || ty
            .element_type()
            .is_some_and(TypeDescriptor::is_generic_parameter)
}

/// Whether `ty`, or what its array/by-ref/pointer wrappers hold, is a
/// built-in alias.
fn is_builtin_through_wrappers(ty: &TypeDescriptor) -> bool {
    let mut current = ty;
    loop {
        if BuiltinAlias::of(current).is_some() {
            return true;
        }
        match current.element_type() {
            Some(element) => current = element,
            None => return false,
        }
    }
}

/// Append `<A, B>` for method generic parameters, each constant-coloured.
fn push_generic_params(out: &mut Markup<'_>, params: &[String]) {
    if params.is_empty() {
        return;
    }
    out.push('<');
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.colored(ColorToken::Constant, param);
    }
    out.push('>');
}
