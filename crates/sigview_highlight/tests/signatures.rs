//! End-to-end signature rendering through the public API.
//!
//! Assertions compare plain text via `strip_markup` where the exact colours
//! are covered by the unit tests, and full markup where the tag layout is
//! the point of the test.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::thread;

use pretty_assertions::assert_eq;
use sigview_highlight::{
    strip_markup, HighlightConfig, HighlightError, Highlighter, Palette, RenderedSignature,
    SignatureCache,
};
use sigview_ir::{
    FieldDescriptor, MemberDescriptor, MethodDescriptor, PropertyDescriptor, TypeDescriptor,
    TypeRef,
};

fn system(name: &str) -> TypeRef {
    TypeDescriptor::value_type("System", name).into_ref()
}

fn list_of(arg: TypeRef) -> TypeRef {
    TypeDescriptor::class("System.Collections.Generic", "List`1")
        .with_generic_args([arg])
        .into_ref()
}

fn dictionary_of(key: TypeRef, value: TypeRef) -> TypeRef {
    TypeDescriptor::class("System.Collections.Generic", "Dictionary`2")
        .with_generic_args([key, value])
        .into_ref()
}

fn plain_signature(
    highlighter: Highlighter<'_>,
    ty: &TypeDescriptor,
    member: Option<&MemberDescriptor>,
) -> String {
    strip_markup(&highlighter.format_signature(ty, true, member).unwrap())
}

#[test]
fn inspector_member_rows() {
    let cache = SignatureCache::new();
    let highlighter = Highlighter::new(&cache);

    let transform = TypeDescriptor::class("UnityEngine", "Transform").into_ref();
    let vector = TypeDescriptor::value_type("UnityEngine", "Vector3").into_ref();
    let position = PropertyDescriptor::new(transform.clone(), "position", false).into();
    let children = FieldDescriptor::new(transform.clone(), "m_Children", false).into();
    let find = MethodDescriptor::new(transform.clone(), "Find")
        .with_params([TypeDescriptor::class("System", "String").into_ref()])
        .into();
    let zero = PropertyDescriptor::new(vector.clone(), "zero", true).into();

    assert_eq!(
        plain_signature(highlighter, &transform, Some(&position)),
        "UnityEngine.Transform.position"
    );
    assert_eq!(
        plain_signature(highlighter, &transform, Some(&children)),
        "UnityEngine.Transform.m_Children"
    );
    assert_eq!(
        plain_signature(highlighter, &transform, Some(&find)),
        "UnityEngine.Transform.Find"
    );
    assert_eq!(
        plain_signature(highlighter, &vector, Some(&zero)),
        "UnityEngine.Vector3.zero"
    );
}

#[test]
fn generic_collections_read_like_source() {
    let cache = SignatureCache::new();
    let highlighter = Highlighter::new(&cache);

    let string = TypeDescriptor::class("System", "String").into_ref();
    let lookup = dictionary_of(string, list_of(system("Int32")));
    assert_eq!(
        plain_signature(highlighter, &lookup, None),
        "System.Collections.Generic.Dictionary<string, List<int>>"
    );

    let grid = TypeDescriptor::array_of(system("Single"), 2);
    assert_eq!(plain_signature(highlighter, &grid, None), "float[,]");
}

#[test]
fn method_signatures_read_like_source() {
    let cache = SignatureCache::new();
    let highlighter = Highlighter::new(&cache);

    let object = TypeDescriptor::class("UnityEngine", "Object").into_ref();
    let t = TypeDescriptor::generic_param("T").into_ref();
    let instantiate = MethodDescriptor::new(object, "Instantiate")
        .with_static(true)
        .with_generic_params(["T"])
        .with_params([t.clone(), TypeDescriptor::by_ref(system("Boolean")).into_ref()]);

    let rendered = highlighter.format_method(&instantiate).unwrap();
    assert_eq!(strip_markup(&rendered), "Object.Instantiate<T>(T, bool)");
    assert!(!rendered.contains("<i>"));
}

#[test]
fn output_tags_are_balanced() {
    let cache = SignatureCache::new();
    let highlighter = Highlighter::new(&cache);

    let math = TypeDescriptor::static_class("System", "Math").into_ref();
    let pi = FieldDescriptor::new(math.clone(), "PI", true).into();
    let out = highlighter.format_signature(&math, true, Some(&pi)).unwrap();

    assert_eq!(out.matches("<color=").count(), out.matches("</color>").count());
    assert_eq!(out.matches("<i>").count(), 1);
    assert_eq!(out.matches("</i>").count(), 1);
    assert!(out.find("<i>") < out.find("</i>"));
}

#[test]
fn palette_overrides_flow_into_output() {
    let palette = Palette::default()
        .with_overrides([("namespace", "#FFFFFF"), ("keyword", "000000")])
        .unwrap();
    let cache = SignatureCache::with_config(HighlightConfig::default().with_palette(palette));
    let highlighter = Highlighter::new(&cache);

    let widget = TypeDescriptor::class("Shapes", "Widget");
    let out = highlighter.format_signature(&widget, true, None).unwrap();
    assert!(out.starts_with("<color=#ffffff>Shapes</color>."));

    let int = highlighter.format_type(&system("Int32")).unwrap();
    assert_eq!(int, "<color=#000000>int</color>");
}

#[test]
fn separate_caches_do_not_share_entries() {
    let plain = SignatureCache::new();
    let dimmed = SignatureCache::with_config(
        HighlightConfig::default().with_palette(
            Palette::default()
                .with_overrides([("instance_class", "#101010")])
                .unwrap(),
        ),
    );
    let widget = TypeDescriptor::class("Shapes", "Widget");

    let a = Highlighter::new(&plain).format_type(&widget).unwrap();
    let b = Highlighter::new(&dimmed).format_type(&widget).unwrap();
    assert_ne!(a, b);
    assert_eq!(strip_markup(&a), strip_markup(&b));
}

#[test]
fn unsupported_member_leaves_caches_usable() {
    let cache = SignatureCache::new();
    let highlighter = Highlighter::new(&cache);

    let widget = TypeDescriptor::class("Shapes", "Widget").into_ref();
    let clicked = MemberDescriptor::Event(sigview_ir::EventDescriptor::new(
        widget.clone(),
        "Clicked",
        false,
    ));
    let err = highlighter
        .format_signature(&widget, true, Some(&clicked))
        .unwrap_err();
    assert!(matches!(err, HighlightError::UnsupportedMemberKind { kind: "event", .. }));
    assert_eq!(
        err.to_string(),
        "unsupported member kind `event` for `Shapes.Widget.Clicked`"
    );

    assert_eq!(plain_signature(highlighter, &widget, None), "Shapes.Widget");
}

#[test]
fn deep_generic_nesting_is_rejected_not_overflowed() {
    let cache = SignatureCache::new();
    let highlighter = Highlighter::new(&cache);

    let mut ty = system("Int32");
    for _ in 0..200 {
        ty = list_of(ty);
    }
    let err = highlighter.format_type(&ty).unwrap_err();
    assert!(matches!(err, HighlightError::DepthExceeded(_)));
}

#[test]
fn configured_depth_allows_deeper_nesting() {
    let cache = SignatureCache::with_config(HighlightConfig::default().with_max_depth(512));
    let highlighter = Highlighter::new(&cache);

    let mut ty = system("Int32");
    for _ in 0..200 {
        ty = list_of(ty);
    }
    let out = highlighter.format_type(&ty).unwrap();
    assert_eq!(strip_markup(&out).matches("List<").count(), 200);
}

#[test]
fn concurrent_callers_share_one_entry() {
    let cache = SignatureCache::new();
    let key_ty = TypeDescriptor::class("System", "String").into_ref();
    let lookup = dictionary_of(key_ty, list_of(system("Int32")));
    let method = MethodDescriptor::new(lookup.clone(), "TryGetValue")
        .with_params([system("Int32"), TypeDescriptor::by_ref(system("Int32")).into_ref()]);

    let results: Vec<(RenderedSignature, RenderedSignature)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let highlighter = Highlighter::new(&cache);
                    (
                        highlighter.format_type(&lookup).unwrap(),
                        highlighter.format_method(&method).unwrap(),
                    )
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let (first_ty, first_method) = &results[0];
    for (ty, method) in &results {
        assert_eq!(ty, first_ty);
        assert_eq!(method, first_method);
    }

    // Every caller after the race holds the stored value.
    let highlighter = Highlighter::new(&cache);
    let stored = highlighter.format_type(&lookup).unwrap();
    assert!(results
        .iter()
        .all(|(ty, _)| RenderedSignature::ptr_eq(ty, &stored)));
    assert_eq!(cache.stats().method_entries, 1);
}

#[test]
fn init_tracing_can_be_called_repeatedly() {
    sigview_highlight::init_tracing();
    sigview_highlight::init_tracing();

    let cache = SignatureCache::new();
    let widget = TypeDescriptor::class("Shapes", "Widget");
    assert!(Highlighter::new(&cache).format_type(&widget).is_ok());
}
