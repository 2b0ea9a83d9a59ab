//! Callable signatures.

use sigview_ir::{ConstructorDescriptor, MethodDescriptor, TypeRef};
use sigview_stack::Depth;

use super::{push_generic_params, Highlighter};
use crate::cache::RenderedSignature;
use crate::classify::method_token;
use crate::error::HighlightResult;
use crate::markup::Markup;

impl Highlighter<'_> {
    /// Render `Declaring.Name<T>(A, B)`.
    ///
    /// The declaring type is not namespace-qualified. Parentheses are always
    /// present. Memoized by [`MethodDescriptor::signature_key`].
    #[tracing::instrument(level = "trace", skip_all, fields(method = %method.name))]
    pub fn format_method(&self, method: &MethodDescriptor) -> HighlightResult<RenderedSignature> {
        let key = method.signature_key();
        if let Some(hit) = self.cache.lookup_method(&key) {
            return Ok(hit);
        }
        let depth = self.root_depth().descend()?;

        let mut out = self.markup();
        out.push_str(&self.format_signature_at(&method.declaring, false, None, depth)?);
        out.push('.');
        out.colored(method_token(method.is_static), &method.name);
        push_generic_params(&mut out, &method.generic_params);
        self.push_params(&mut out, &method.params, depth)?;

        Ok(self.cache.store_method(&key, out.finish()))
    }

    /// Render `Declaring..ctor(A, B)`, or `Declaring..cctor()` for a type
    /// initializer. Shares the method cache.
    #[tracing::instrument(level = "trace", skip_all, fields(key = ctor.declaring.key()))]
    pub fn format_constructor(
        &self,
        ctor: &ConstructorDescriptor,
    ) -> HighlightResult<RenderedSignature> {
        let key = ctor.signature_key();
        if let Some(hit) = self.cache.lookup_method(&key) {
            return Ok(hit);
        }
        let depth = self.root_depth().descend()?;

        let mut out = self.markup();
        out.push_str(&self.format_signature_at(&ctor.declaring, false, None, depth)?);
        out.push('.');
        out.colored(method_token(ctor.is_static), ctor.name());
        self.push_params(&mut out, &ctor.params, depth)?;

        Ok(self.cache.store_method(&key, out.finish()))
    }

    fn push_params(
        &self,
        out: &mut Markup<'_>,
        params: &[TypeRef],
        depth: Depth,
    ) -> HighlightResult<()> {
        out.push('(');
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.format_type_at(param, depth)?);
        }
        out.push(')');
        Ok(())
    }
}
