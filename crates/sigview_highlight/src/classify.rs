//! Descriptor classification.
//!
//! Maps descriptors to their display category. Type classification is total;
//! member classification refuses kinds that have no category.

use sigview_ir::{ColorToken, MemberDescriptor, TypeDescriptor};

use crate::error::{HighlightError, HighlightResult};

/// Colour category of a type. First matching rule wins:
///
/// 1. abstract and sealed (a static class)
/// 2. enum or generic parameter
/// 3. value type
/// 4. interface
/// 5. any other class
pub fn classify_type(ty: &TypeDescriptor) -> ColorToken {
    if ty.is_abstract() && ty.is_sealed() {
        ColorToken::StaticClass
    } else if ty.is_enum() || ty.is_generic_parameter() {
        ColorToken::Constant
    } else if ty.is_value_type() {
        ColorToken::Struct
    } else if ty.is_interface() {
        ColorToken::Interface
    } else {
        ColorToken::InstanceClass
    }
}

/// Colour category and static-ness of a member.
///
/// Properties take their static-ness from their accessor. Constructors and
/// events have no category and fail with
/// [`HighlightError::UnsupportedMemberKind`].
pub fn classify_member(member: &MemberDescriptor) -> HighlightResult<(ColorToken, bool)> {
    let classified = match member {
        MemberDescriptor::Field(field) => {
            let token = if field.is_static {
                ColorToken::StaticField
            } else {
                ColorToken::InstanceField
            };
            (token, field.is_static)
        }
        MemberDescriptor::Method(method) => (method_token(method.is_static), method.is_static),
        MemberDescriptor::Property(property) => {
            let is_static = property.accessor().is_some_and(|a| a.is_static);
            let token = if is_static {
                ColorToken::StaticProperty
            } else {
                ColorToken::InstanceProperty
            };
            (token, is_static)
        }
        MemberDescriptor::Constructor(_) | MemberDescriptor::Event(_) => {
            tracing::debug!(
                kind = member.kind_name(),
                member = member.name(),
                "member kind has no colour category"
            );
            return Err(HighlightError::UnsupportedMemberKind {
                kind: member.kind_name(),
                member: format!("{}.{}", member.owner().key(), member.name()),
            });
        }
    };
    Ok(classified)
}

/// Colour for a callable name.
pub(crate) const fn method_token(is_static: bool) -> ColorToken {
    if is_static {
        ColorToken::StaticMethod
    } else {
        ColorToken::InstanceMethod
    }
}

#[cfg(test)]
mod tests;
