//! Built-in type aliases.
//!
//! Core runtime types have short keyword spellings (`System.Int32` is
//! `int`). An aliased type always renders by its keyword and is never
//! namespace-qualified, whatever array or by-ref wrapper surrounds it.
//!
//! # Usage
//!
//! ```
//! use sigview_ir::{BuiltinAlias, TypeDescriptor};
//!
//! let int32 = TypeDescriptor::value_type("System", "Int32");
//! assert_eq!(BuiltinAlias::of(&int32), Some(BuiltinAlias::Int));
//! assert_eq!(BuiltinAlias::Int.keyword(), "int");
//! ```

use crate::descriptor::TypeDescriptor;

/// A core type with a keyword alias.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinAlias {
    Object,
    String,
    Bool,
    Byte,
    SByte,
    Char,
    Decimal,
    Double,
    /// 32-bit floating point
    Float,
    /// 32-bit signed integer
    Int,
    UInt,
    Long,
    ULong,
    Short,
    UShort,
    Void,
}

impl BuiltinAlias {
    /// All aliases, in declaration order.
    pub const ALL: [BuiltinAlias; 16] = [
        Self::Object,
        Self::String,
        Self::Bool,
        Self::Byte,
        Self::SByte,
        Self::Char,
        Self::Decimal,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::ULong,
        Self::Short,
        Self::UShort,
        Self::Void,
    ];

    /// Look up the alias for a fully qualified runtime type name.
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let alias = match full_name {
            "System.Object" => Self::Object,
            "System.String" => Self::String,
            "System.Boolean" => Self::Bool,
            "System.Byte" => Self::Byte,
            "System.SByte" => Self::SByte,
            "System.Char" => Self::Char,
            "System.Decimal" => Self::Decimal,
            "System.Double" => Self::Double,
            "System.Single" => Self::Float,
            "System.Int32" => Self::Int,
            "System.UInt32" => Self::UInt,
            "System.Int64" => Self::Long,
            "System.UInt64" => Self::ULong,
            "System.Int16" => Self::Short,
            "System.UInt16" => Self::UShort,
            "System.Void" => Self::Void,
            _ => return None,
        };
        Some(alias)
    }

    /// Alias for this exact descriptor, ignoring any wrapper.
    ///
    /// Generic parameters never alias, even one named like a core type.
    #[must_use]
    pub fn of(ty: &TypeDescriptor) -> Option<Self> {
        if ty.is_generic_parameter() || !ty.generic_args().is_empty() {
            return None;
        }
        Self::from_full_name(ty.full_name())
    }

    /// Keyword spelling, e.g. `"int"`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Char => "char",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Void => "void",
        }
    }

    /// Fully qualified runtime name, e.g. `"System.Int32"`.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Object => "System.Object",
            Self::String => "System.String",
            Self::Bool => "System.Boolean",
            Self::Byte => "System.Byte",
            Self::SByte => "System.SByte",
            Self::Char => "System.Char",
            Self::Decimal => "System.Decimal",
            Self::Double => "System.Double",
            Self::Float => "System.Single",
            Self::Int => "System.Int32",
            Self::UInt => "System.UInt32",
            Self::Long => "System.Int64",
            Self::ULong => "System.UInt64",
            Self::Short => "System.Int16",
            Self::UShort => "System.UInt16",
            Self::Void => "System.Void",
        }
    }
}

#[cfg(test)]
mod tests;
