//! Type formatting.
//!
//! Order of checks for one type:
//!
//! 1. by-ref wrappers are looked through (the `ref` marker is a signature
//!    concern)
//! 2. a trailing array token records the rank and formats the element
//! 3. built-in aliases render as their keyword
//! 4. generic parameters render as their raw name
//! 5. anything else renders its bare name in its category colour, followed
//!    by closed generic arguments

use sigview_ir::{BuiltinAlias, ColorToken, TypeDescriptor};
use sigview_stack::{ensure_sufficient_stack, Depth};

use super::{element_of, is_generic_like, unwrap_by_ref, Highlighter};
use crate::cache::RenderedSignature;
use crate::classify::classify_type;
use crate::error::HighlightResult;
use crate::names;

impl Highlighter<'_> {
    /// Render a single type, without namespace or declaring types.
    ///
    /// Memoized by [`TypeDescriptor::key`]; a repeated call returns the
    /// cached value.
    #[tracing::instrument(level = "trace", skip_all, fields(key = ty.key()))]
    pub fn format_type(&self, ty: &TypeDescriptor) -> HighlightResult<RenderedSignature> {
        self.format_type_at(ty, self.root_depth())
    }

    pub(super) fn format_type_at(
        &self,
        ty: &TypeDescriptor,
        depth: Depth,
    ) -> HighlightResult<RenderedSignature> {
        if let Some(hit) = self.cache.lookup_type(ty.key()) {
            return Ok(hit);
        }
        let depth = depth.descend().inspect_err(|err| {
            tracing::debug!(key = ty.key(), %err, "type nesting limit reached");
        })?;
        let markup = ensure_sufficient_stack(|| self.render_type(ty, depth))?;
        Ok(self.cache.store_type(ty.key(), markup))
    }

    fn render_type(&self, ty: &TypeDescriptor, depth: Depth) -> HighlightResult<String> {
        let ty = unwrap_by_ref(ty)?;
        let element = element_of(ty)?;
        let mut out = self.markup();

        if let (Some(rank), Some(element)) = (names::array_rank(ty.name()), element) {
            out.push_str(&self.format_type_at(element, depth)?);
            out.rank_suffix(rank);
            return Ok(out.finish());
        }

        if let Some(alias) = BuiltinAlias::of(ty) {
            out.colored(ColorToken::Keyword, alias.keyword());
            return Ok(out.finish());
        }

        if is_generic_like(ty) {
            out.colored(ColorToken::Constant, ty.name());
            return Ok(out.finish());
        }

        out.colored(classify_type(ty), names::bare_name(ty));
        let args = ty.generic_args();
        if !args.is_empty() {
            out.push('<');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&self.format_type_at(arg, depth)?);
            }
            out.push('>');
        }
        Ok(out.finish())
    }
}
