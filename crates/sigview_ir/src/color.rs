//! Semantic colour categories.

/// Display category assigned to a piece of a rendered signature.
///
/// The mapping from category to an actual colour lives in the highlighter's
/// palette; tokens only name the role.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ColorToken {
    Namespace,
    /// Enums, enum members, and generic parameters.
    Constant,
    StaticClass,
    InstanceClass,
    Struct,
    Interface,
    StaticField,
    InstanceField,
    StaticMethod,
    InstanceMethod,
    StaticProperty,
    InstanceProperty,
    LocalArg,
    /// Built-in aliases and the `ref` marker.
    Keyword,
}

impl ColorToken {
    pub const COUNT: usize = 14;

    /// All tokens, in declaration order.
    pub const ALL: [ColorToken; Self::COUNT] = [
        Self::Namespace,
        Self::Constant,
        Self::StaticClass,
        Self::InstanceClass,
        Self::Struct,
        Self::Interface,
        Self::StaticField,
        Self::InstanceField,
        Self::StaticMethod,
        Self::InstanceMethod,
        Self::StaticProperty,
        Self::InstanceProperty,
        Self::LocalArg,
        Self::Keyword,
    ];

    /// Snake-case category name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Constant => "constant",
            Self::StaticClass => "static_class",
            Self::InstanceClass => "instance_class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::StaticField => "static_field",
            Self::InstanceField => "instance_field",
            Self::StaticMethod => "static_method",
            Self::InstanceMethod => "instance_method",
            Self::StaticProperty => "static_property",
            Self::InstanceProperty => "instance_property",
            Self::LocalArg => "local_arg",
            Self::Keyword => "keyword",
        }
    }

    /// Parse a snake-case category name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> usize {
        self as usize
    }
}
