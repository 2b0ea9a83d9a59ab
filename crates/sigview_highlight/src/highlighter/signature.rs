//! Qualified signatures: `ref`, namespace, declaring chain, type, member.

use sigview_ir::{ColorToken, MemberDescriptor, TypeDescriptor};
use sigview_stack::Depth;
use smallvec::SmallVec;

use super::{is_builtin_through_wrappers, is_generic_like, push_generic_params, Highlighter};
use crate::classify::classify_member;
use crate::error::HighlightResult;

impl Highlighter<'_> {
    /// Render `ty` with its qualification and an optional trailing member.
    ///
    /// The namespace is emitted only when `include_namespace` is set, the
    /// type is not a built-in alias (looking through wrappers), and it is not
    /// a generic parameter. Generic parameters also never show a declaring
    /// chain. A static member puts the whole `Type.member` span in italics.
    ///
    /// The member is classified before anything is rendered; constructors
    /// and events fail with
    /// [`UnsupportedMemberKind`](crate::HighlightError::UnsupportedMemberKind).
    /// Use [`format_constructor`](Self::format_constructor) for constructors.
    #[tracing::instrument(level = "trace", skip_all, fields(key = ty.key()))]
    pub fn format_signature(
        &self,
        ty: &TypeDescriptor,
        include_namespace: bool,
        member: Option<&MemberDescriptor>,
    ) -> HighlightResult<String> {
        self.format_signature_at(ty, include_namespace, member, self.root_depth())
    }

    /// Shorthand for a namespace-qualified type with no member.
    pub fn format_type_qualified(&self, ty: &TypeDescriptor) -> HighlightResult<String> {
        self.format_signature(ty, true, None)
    }

    pub(super) fn format_signature_at(
        &self,
        ty: &TypeDescriptor,
        include_namespace: bool,
        member: Option<&MemberDescriptor>,
        depth: Depth,
    ) -> HighlightResult<String> {
        let classified = member.map(classify_member).transpose()?;

        let mut out = self.markup();
        if ty.is_by_ref() {
            out.colored(ColorToken::Keyword, "ref ");
        }

        if !is_generic_like(ty) {
            if include_namespace && !is_builtin_through_wrappers(ty) {
                if let Some(namespace) = ty.namespace() {
                    out.colored(ColorToken::Namespace, namespace);
                    out.push('.');
                }
            }

            let chain: SmallVec<[&TypeDescriptor; 4]> = ty.declaring_chain().collect();
            for declaring in chain.into_iter().rev() {
                out.push_str(&self.format_type_at(declaring, depth)?);
                out.push('.');
            }
        }

        let span_start = out.mark();
        out.push_str(&self.format_type_at(ty, depth)?);

        if let (Some(member), Some((token, is_static))) = (member, classified) {
            out.push('.');
            out.colored(token, member.name());
            if is_static {
                out.italicize_from(span_start);
            }
            if let MemberDescriptor::Method(method) = member {
                push_generic_params(&mut out, &method.generic_params);
            }
        }

        Ok(out.finish())
    }
}
