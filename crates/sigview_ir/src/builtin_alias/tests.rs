use super::*;
use crate::TypeKind;

#[test]
fn full_name_roundtrip_for_every_alias() {
    for alias in BuiltinAlias::ALL {
        assert_eq!(BuiltinAlias::from_full_name(alias.full_name()), Some(alias));
    }
}

#[test]
fn keywords_are_unique() {
    let mut keywords: Vec<&str> = BuiltinAlias::ALL.iter().map(|a| a.keyword()).collect();
    keywords.sort_unstable();
    keywords.dedup();
    assert_eq!(keywords.len(), BuiltinAlias::ALL.len());
}

#[test]
fn non_core_types_have_no_alias() {
    assert_eq!(BuiltinAlias::from_full_name("System.DateTime"), None);
    assert_eq!(BuiltinAlias::from_full_name("Int32"), None);
    assert_eq!(
        BuiltinAlias::of(&TypeDescriptor::class("Shapes", "Widget")),
        None
    );
}

#[test]
fn descriptor_lookup() {
    let single = TypeDescriptor::value_type("System", "Single");
    assert_eq!(BuiltinAlias::of(&single), Some(BuiltinAlias::Float));

    let object = TypeDescriptor::class("System", "Object");
    assert_eq!(BuiltinAlias::of(&object).map(BuiltinAlias::keyword), Some("object"));
}

#[test]
fn wrappers_do_not_alias_themselves() {
    let int32 = TypeDescriptor::value_type("System", "Int32").into_ref();
    let array = TypeDescriptor::array_of(int32, 1);
    assert_eq!(BuiltinAlias::of(&array), None);
}

#[test]
fn generic_parameter_never_aliases() {
    let odd = TypeDescriptor::new(TypeKind::GenericParameter, Some("System"), "Int32");
    assert_eq!(BuiltinAlias::of(&odd), None);
}
