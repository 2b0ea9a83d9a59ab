//! Descriptor model for sigview.
//!
//! Read-only structural views over an external type system: types, their
//! members, the built-in alias table, and the semantic colour categories the
//! highlighter assigns to them.
//!
//! # Key Types
//!
//! - [`TypeDescriptor`]: a type with its name, kind, modifiers, element type,
//!   generic arguments, and declaring type
//! - [`MemberDescriptor`]: a field, property, method, constructor, or event
//! - [`BuiltinAlias`]: short keyword forms for primitive and core types
//! - [`ColorToken`]: semantic display categories
//!
//! Descriptors are shared through [`TypeRef`] so that deep generic graphs and
//! declaring-type chains clone in O(1).

mod builtin_alias;
mod color;
mod descriptor;
mod member;

pub use builtin_alias::BuiltinAlias;
pub use color::ColorToken;
pub use descriptor::{
    DeclaringChain, TypeDescriptor, TypeFlags, TypeKind, TypeRef, ARITY_MARKER,
};
pub use member::{
    Accessor, ConstructorDescriptor, EventDescriptor, FieldDescriptor, MemberDescriptor,
    MethodDescriptor, PropertyDescriptor,
};
