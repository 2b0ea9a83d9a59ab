use super::*;
use pretty_assertions::assert_eq;
use sigview_ir::{
    Accessor, ConstructorDescriptor, EventDescriptor, FieldDescriptor, MethodDescriptor,
    PropertyDescriptor, TypeFlags, TypeRef,
};

fn widget() -> TypeRef {
    TypeDescriptor::class("Shapes", "Widget").into_ref()
}

#[test]
fn type_categories() {
    let cases = [
        (TypeDescriptor::static_class("System", "Math"), ColorToken::StaticClass),
        (TypeDescriptor::enumeration("System", "DayOfWeek"), ColorToken::Constant),
        (TypeDescriptor::generic_param("T"), ColorToken::Constant),
        (TypeDescriptor::value_type("Shapes", "Point"), ColorToken::Struct),
        (TypeDescriptor::interface("System", "IDisposable"), ColorToken::Interface),
        (TypeDescriptor::class("Shapes", "Widget"), ColorToken::InstanceClass),
    ];
    for (ty, expected) in cases {
        assert_eq!(classify_type(&ty), expected, "{}", ty.key());
    }
}

#[test]
fn static_class_rule_wins_over_kind() {
    // Abstract+sealed is checked before every other rule.
    let odd = TypeDescriptor::value_type("Shapes", "Odd").with_flags(TypeFlags::STATIC_CLASS);
    assert_eq!(classify_type(&odd), ColorToken::StaticClass);
}

#[test]
fn abstract_alone_is_instance_class() {
    let base = TypeDescriptor::class("Shapes", "Shape").with_flags(TypeFlags::ABSTRACT);
    assert_eq!(classify_type(&base), ColorToken::InstanceClass);

    let sealed = TypeDescriptor::class("Shapes", "Leaf").with_flags(TypeFlags::SEALED);
    assert_eq!(classify_type(&sealed), ColorToken::InstanceClass);
}

#[test]
fn fields() {
    let stat = FieldDescriptor::new(widget(), "Count", true).into();
    assert_eq!(classify_member(&stat), Ok((ColorToken::StaticField, true)));

    let inst = FieldDescriptor::new(widget(), "size", false).into();
    assert_eq!(classify_member(&inst), Ok((ColorToken::InstanceField, false)));
}

#[test]
fn methods() {
    let stat = MethodDescriptor::new(widget(), "Create").with_static(true).into();
    assert_eq!(classify_member(&stat), Ok((ColorToken::StaticMethod, true)));

    let inst = MethodDescriptor::new(widget(), "Draw").into();
    assert_eq!(classify_member(&inst), Ok((ColorToken::InstanceMethod, false)));
}

#[test]
fn properties_follow_accessor() {
    let stat = PropertyDescriptor::new(widget(), "Default", true).into();
    assert_eq!(classify_member(&stat), Ok((ColorToken::StaticProperty, true)));

    let inst = PropertyDescriptor::new(widget(), "Size", false).into();
    assert_eq!(classify_member(&inst), Ok((ColorToken::InstanceProperty, false)));

    let set_only = PropertyDescriptor {
        owner: widget(),
        name: "Sink".to_owned(),
        getter: None,
        setter: Some(Accessor { is_static: true }),
    }
    .into();
    assert_eq!(classify_member(&set_only), Ok((ColorToken::StaticProperty, true)));
}

#[test]
fn property_without_accessors_is_instance() {
    let bare = PropertyDescriptor {
        owner: widget(),
        name: "Ghost".to_owned(),
        getter: None,
        setter: None,
    }
    .into();
    assert_eq!(classify_member(&bare), Ok((ColorToken::InstanceProperty, false)));
}

#[test]
fn constructors_and_events_are_unsupported() {
    let ctor = ConstructorDescriptor::new(widget(), Vec::<TypeRef>::new()).into();
    assert_eq!(
        classify_member(&ctor),
        Err(HighlightError::UnsupportedMemberKind {
            kind: "constructor",
            member: "Shapes.Widget..ctor".to_owned(),
        })
    );

    let event = EventDescriptor::new(widget(), "Changed", false).into();
    let Err(err) = classify_member(&event) else {
        panic!("events must not classify");
    };
    assert_eq!(
        err.to_string(),
        "unsupported member kind `event` for `Shapes.Widget.Changed`"
    );
}
