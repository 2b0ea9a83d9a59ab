//! Member descriptors.
//!
//! [`MemberDescriptor`] is a closed set over the member kinds a reflection
//! system reports. Only fields, properties, and methods have a colour
//! category; constructors and events are modelled so that callers can pass
//! anything a type exposes and get a typed refusal instead of a mis-render.

use crate::descriptor::{TypeDescriptor, TypeRef};

/// A member of a type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemberDescriptor {
    Field(FieldDescriptor),
    Property(PropertyDescriptor),
    Method(MethodDescriptor),
    Constructor(ConstructorDescriptor),
    Event(EventDescriptor),
}

impl MemberDescriptor {
    /// Type that declares this member.
    pub fn owner(&self) -> &TypeDescriptor {
        match self {
            MemberDescriptor::Field(f) => &f.owner,
            MemberDescriptor::Property(p) => &p.owner,
            MemberDescriptor::Method(m) => &m.declaring,
            MemberDescriptor::Constructor(c) => &c.declaring,
            MemberDescriptor::Event(e) => &e.owner,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MemberDescriptor::Field(f) => &f.name,
            MemberDescriptor::Property(p) => &p.name,
            MemberDescriptor::Method(m) => &m.name,
            MemberDescriptor::Constructor(c) => c.name(),
            MemberDescriptor::Event(e) => &e.name,
        }
    }

    /// Reflection kind name, e.g. `"field"`.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            MemberDescriptor::Field(_) => "field",
            MemberDescriptor::Property(_) => "property",
            MemberDescriptor::Method(_) => "method",
            MemberDescriptor::Constructor(_) => "constructor",
            MemberDescriptor::Event(_) => "event",
        }
    }
}

impl From<FieldDescriptor> for MemberDescriptor {
    fn from(field: FieldDescriptor) -> Self {
        MemberDescriptor::Field(field)
    }
}

impl From<PropertyDescriptor> for MemberDescriptor {
    fn from(property: PropertyDescriptor) -> Self {
        MemberDescriptor::Property(property)
    }
}

impl From<MethodDescriptor> for MemberDescriptor {
    fn from(method: MethodDescriptor) -> Self {
        MemberDescriptor::Method(method)
    }
}

impl From<ConstructorDescriptor> for MemberDescriptor {
    fn from(ctor: ConstructorDescriptor) -> Self {
        MemberDescriptor::Constructor(ctor)
    }
}

impl From<EventDescriptor> for MemberDescriptor {
    fn from(event: EventDescriptor) -> Self {
        MemberDescriptor::Event(event)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDescriptor {
    pub owner: TypeRef,
    pub name: String,
    pub is_static: bool,
}

impl FieldDescriptor {
    pub fn new(owner: TypeRef, name: &str, is_static: bool) -> Self {
        Self {
            owner,
            name: name.to_owned(),
            is_static,
        }
    }
}

/// A property getter or setter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Accessor {
    pub is_static: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PropertyDescriptor {
    pub owner: TypeRef,
    pub name: String,
    pub getter: Option<Accessor>,
    pub setter: Option<Accessor>,
}

impl PropertyDescriptor {
    /// Property with a getter of the given static-ness and no setter.
    pub fn new(owner: TypeRef, name: &str, is_static: bool) -> Self {
        Self {
            owner,
            name: name.to_owned(),
            getter: Some(Accessor { is_static }),
            setter: None,
        }
    }

    #[must_use]
    pub fn with_setter(mut self, setter: Accessor) -> Self {
        self.setter = Some(setter);
        self
    }

    /// First accessor in getter, setter order.
    pub fn accessor(&self) -> Option<Accessor> {
        self.getter.or(self.setter)
    }
}

/// A callable: declaring type, name, generic parameters, parameter types.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodDescriptor {
    pub declaring: TypeRef,
    pub name: String,
    pub is_static: bool,
    pub generic_params: Vec<String>,
    pub params: Vec<TypeRef>,
}

impl MethodDescriptor {
    pub fn new(declaring: TypeRef, name: &str) -> Self {
        Self {
            declaring,
            name: name.to_owned(),
            is_static: false,
            generic_params: Vec::new(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_generic_params<S: Into<String>>(
        mut self,
        params: impl IntoIterator<Item = S>,
    ) -> Self {
        self.generic_params = params.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: impl IntoIterator<Item = TypeRef>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    /// Canonical signature key, unique per overload.
    ///
    /// `static Ns.Type::Name<T>(System.Int32, !T)`
    pub fn signature_key(&self) -> String {
        let mut key = String::new();
        if self.is_static {
            key.push_str("static ");
        }
        key.push_str(self.declaring.key());
        key.push_str("::");
        key.push_str(&self.name);
        if !self.generic_params.is_empty() {
            key.push('<');
            key.push_str(&self.generic_params.join(","));
            key.push('>');
        }
        push_param_keys(&mut key, &self.params);
        key
    }
}

/// An instance or static (type initializer) constructor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstructorDescriptor {
    pub declaring: TypeRef,
    pub is_static: bool,
    pub params: Vec<TypeRef>,
}

impl ConstructorDescriptor {
    pub fn new(declaring: TypeRef, params: impl IntoIterator<Item = TypeRef>) -> Self {
        Self {
            declaring,
            is_static: false,
            params: params.into_iter().collect(),
        }
    }

    /// Type initializer; it never takes parameters.
    pub fn type_initializer(declaring: TypeRef) -> Self {
        Self {
            declaring,
            is_static: true,
            params: Vec::new(),
        }
    }

    /// Reflection name: `.ctor` or `.cctor`.
    pub const fn name(&self) -> &'static str {
        if self.is_static {
            ".cctor"
        } else {
            ".ctor"
        }
    }

    pub fn signature_key(&self) -> String {
        let mut key = String::from(self.declaring.key());
        key.push_str("::");
        key.push_str(self.name());
        push_param_keys(&mut key, &self.params);
        key
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EventDescriptor {
    pub owner: TypeRef,
    pub name: String,
    pub is_static: bool,
}

impl EventDescriptor {
    pub fn new(owner: TypeRef, name: &str, is_static: bool) -> Self {
        Self {
            owner,
            name: name.to_owned(),
            is_static,
        }
    }
}

fn push_param_keys(key: &mut String, params: &[TypeRef]) {
    key.push('(');
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            key.push_str(", ");
        }
        key.push_str(param.key());
    }
    key.push(')');
}
