//! Type descriptors.
//!
//! A [`TypeDescriptor`] mirrors what a reflection system reports about a
//! type. Names follow the reflection conventions the descriptors are bridged
//! from: generic definitions carry a backtick arity suffix (`List`1`),
//! arrays carry bracket rank tokens (`Int32[,]`), by-ref types end in `&`,
//! pointers in `*`, and nested types join their declaring type with `+` in
//! the full name.
//!
//! The builder methods keep the raw name, full name, and canonical key
//! consistent with each other. Descriptors bridged from elsewhere can be
//! assembled with [`TypeDescriptor::new`] and [`TypeDescriptor::with_flags`];
//! nothing here validates that the pieces agree.

use std::sync::Arc;

use bitflags::bitflags;

/// Shared handle to a type descriptor.
pub type TypeRef = Arc<TypeDescriptor>;

/// Marker that introduces the arity suffix in generic type names.
pub const ARITY_MARKER: char = '`';

/// Structural kind of a type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    /// A placeholder bound by a generic type or method definition.
    GenericParameter,
}

impl TypeKind {
    /// Lowercase kind name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::GenericParameter => "generic parameter",
        }
    }
}

bitflags! {
    /// Type modifiers as reported by the reflection system.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u8 {
        const ABSTRACT = 1 << 0;
        const SEALED = 1 << 1;
        /// Managed reference wrapper (`T&`).
        const BY_REF = 1 << 2;
        /// Unmanaged pointer wrapper (`T*`).
        const POINTER = 1 << 3;
        /// Arrays, pointers, and by-ref types wrap an element type.
        const HAS_ELEMENT_TYPE = 1 << 4;

        /// Static classes are reported as abstract and sealed.
        const STATIC_CLASS = Self::ABSTRACT.bits() | Self::SEALED.bits();
    }
}

/// Structural description of a type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    /// Canonical textual form, unique per distinct rendering.
    key: String,
    full_name: String,
    namespace: Option<String>,
    /// Raw reflection name, possibly with arity suffix or rank tokens.
    name: String,
    /// Name without any synthetic suffix, when the source provides one.
    display_name: Option<String>,
    kind: TypeKind,
    flags: TypeFlags,
    element: Option<TypeRef>,
    generic_args: Vec<TypeRef>,
    declaring: Option<TypeRef>,
}

impl TypeDescriptor {
    /// Create a top-level type with no generic arguments.
    ///
    /// An empty namespace is treated as no namespace.
    pub fn new(kind: TypeKind, namespace: Option<&str>, name: &str) -> Self {
        let namespace = namespace.filter(|ns| !ns.is_empty()).map(str::to_owned);
        let full_name = match &namespace {
            Some(ns) => format!("{ns}.{name}"),
            None => name.to_owned(),
        };
        let key = if kind == TypeKind::GenericParameter {
            format!("!{name}")
        } else {
            full_name.clone()
        };
        Self {
            key,
            full_name,
            namespace,
            name: name.to_owned(),
            display_name: None,
            kind,
            flags: TypeFlags::empty(),
            element: None,
            generic_args: Vec::new(),
            declaring: None,
        }
    }

    /// Reference type in `namespace`.
    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new(TypeKind::Class, Some(namespace), name)
    }

    /// Value type in `namespace`.
    pub fn value_type(namespace: &str, name: &str) -> Self {
        Self::new(TypeKind::Struct, Some(namespace), name)
    }

    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::new(TypeKind::Interface, Some(namespace), name)
    }

    pub fn enumeration(namespace: &str, name: &str) -> Self {
        Self::new(TypeKind::Enum, Some(namespace), name)
    }

    /// Abstract sealed class, the reflection shape of a static class.
    pub fn static_class(namespace: &str, name: &str) -> Self {
        Self::class(namespace, name).with_flags(TypeFlags::STATIC_CLASS)
    }

    /// Generic parameter placeholder such as `T`.
    pub fn generic_param(name: &str) -> Self {
        Self::new(TypeKind::GenericParameter, None, name)
    }

    /// Single or multi-dimensional array of `element`.
    ///
    /// A rank of zero is treated as one.
    pub fn array_of(element: TypeRef, rank: usize) -> Self {
        let mut suffix = String::from("[");
        for _ in 1..rank.max(1) {
            suffix.push(',');
        }
        suffix.push(']');
        Self::wrapping(element, &suffix, TypeFlags::HAS_ELEMENT_TYPE)
    }

    /// Managed reference to `element`.
    pub fn by_ref(element: TypeRef) -> Self {
        Self::wrapping(
            element,
            "&",
            TypeFlags::BY_REF | TypeFlags::HAS_ELEMENT_TYPE,
        )
    }

    /// Unmanaged pointer to `element`.
    pub fn pointer_to(element: TypeRef) -> Self {
        Self::wrapping(
            element,
            "*",
            TypeFlags::POINTER | TypeFlags::HAS_ELEMENT_TYPE,
        )
    }

    fn wrapping(element: TypeRef, suffix: &str, flags: TypeFlags) -> Self {
        Self {
            key: format!("{}{suffix}", element.key),
            full_name: format!("{}{suffix}", element.full_name),
            namespace: element.namespace.clone(),
            name: format!("{}{suffix}", element.name),
            display_name: None,
            kind: TypeKind::Class,
            flags,
            element: Some(element),
            generic_args: Vec::new(),
            declaring: None,
        }
    }

    /// Close (or open) this generic definition over `args`.
    ///
    /// The raw name is left untouched; callers bridging a generic definition
    /// pass the name with its arity suffix, e.g. `Dictionary`2`.
    #[must_use]
    pub fn with_generic_args(mut self, args: impl IntoIterator<Item = TypeRef>) -> Self {
        self.generic_args = args.into_iter().collect();
        self.rebuild_key();
        self
    }

    /// Nest this type inside `declaring`.
    ///
    /// The namespace is inherited from the outermost declaring type. The
    /// key is built from the declaring type's key, so inner types of two
    /// different closed generic outers stay distinct.
    #[must_use]
    pub fn nested_in(mut self, declaring: TypeRef) -> Self {
        self.namespace.clone_from(&declaring.namespace);
        self.full_name = format!("{}+{}", declaring.full_name, self.name);
        self.declaring = Some(declaring);
        self.rebuild_key();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TypeFlags) -> Self {
        self.flags |= flags;
        self.rebuild_key();
        self
    }

    /// Attach a name free of synthetic suffixes.
    ///
    /// When present the highlighter uses it verbatim instead of stripping
    /// the arity suffix from the raw name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_owned());
        self.rebuild_key();
        self
    }

    /// Attach an element type without touching names or flags.
    ///
    /// For bridging descriptors whose names were produced elsewhere. When
    /// the raw name extends the element's name, the key is rebuilt on the
    /// element's key.
    #[must_use]
    pub fn with_element(mut self, element: TypeRef) -> Self {
        self.element = Some(element);
        self.rebuild_key();
        self
    }

    fn rebuild_key(&mut self) {
        let wrapped = self.element.as_deref().and_then(|element| {
            self.name
                .strip_prefix(element.name.as_str())
                .map(|suffix| format!("{}{suffix}", element.key))
        });
        let mut key = if self.kind == TypeKind::GenericParameter {
            format!("!{}", self.name)
        } else if let Some(wrapped) = wrapped {
            wrapped
        } else if let Some(declaring) = &self.declaring {
            format!("{}+{}", declaring.key, self.name)
        } else {
            self.full_name.clone()
        };
        if !self.generic_args.is_empty() {
            key.push('[');
            for (i, arg) in self.generic_args.iter().enumerate() {
                if i > 0 {
                    key.push(',');
                }
                key.push_str(&arg.key);
            }
            key.push(']');
        }
        if self.flags.contains(TypeFlags::STATIC_CLASS) {
            key.push_str("@static");
        }
        if let Some(display) = &self.display_name {
            key.push('=');
            key.push_str(display);
        }
        self.key = key;
    }

    /// Wrap in a shared handle.
    pub fn into_ref(self) -> TypeRef {
        Arc::new(self)
    }

    /// Canonical key: equal keys render identically.
    ///
    /// Built from the full name (or the declaring type's key for nested
    /// types, or the element's key for wrappers), closed generic argument
    /// keys, the static-class modifiers, and the display name. The kind is
    /// not part of the key; one full name denotes one kind.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Raw reflection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        self.element.as_deref()
    }

    pub fn generic_args(&self) -> &[TypeRef] {
        &self.generic_args
    }

    pub fn declaring_type(&self) -> Option<&TypeDescriptor> {
        self.declaring.as_deref()
    }

    pub fn is_abstract(&self) -> bool {
        self.flags.contains(TypeFlags::ABSTRACT)
    }

    pub fn is_sealed(&self) -> bool {
        self.flags.contains(TypeFlags::SEALED)
    }

    pub fn is_by_ref(&self) -> bool {
        self.flags.contains(TypeFlags::BY_REF)
    }

    pub fn is_pointer(&self) -> bool {
        self.flags.contains(TypeFlags::POINTER)
    }

    /// Whether the modifiers declare an element type.
    ///
    /// This reads the flag only; [`element_type`](Self::element_type) may
    /// still be `None` for a malformed bridge descriptor.
    pub fn has_element_type(&self) -> bool {
        self.flags.contains(TypeFlags::HAS_ELEMENT_TYPE)
    }

    pub fn is_generic_parameter(&self) -> bool {
        self.kind == TypeKind::GenericParameter
    }

    /// Enums are value types too.
    pub fn is_value_type(&self) -> bool {
        matches!(self.kind, TypeKind::Struct | TypeKind::Enum)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    /// Declaring types from nearest to outermost.
    pub fn declaring_chain(&self) -> DeclaringChain<'_> {
        DeclaringChain {
            next: self.declaring_type(),
        }
    }
}

/// Iterator over a type's enclosing types, nearest first.
pub struct DeclaringChain<'a> {
    next: Option<&'a TypeDescriptor>,
}

impl<'a> Iterator for DeclaringChain<'a> {
    type Item = &'a TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.declaring_type();
        Some(current)
    }
}
