use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_palette_is_distinct_per_category() {
    let palette = Palette::default();
    let mut colors: Vec<[u8; 3]> = ColorToken::ALL
        .into_iter()
        .map(|token| palette.color(token).components())
        .collect();
    colors.sort_unstable();
    colors.dedup();
    assert_eq!(colors.len(), ColorToken::COUNT);
}

#[test]
fn hex_display_is_lowercase_with_hash() {
    assert_eq!(HexColor::rgb(0x2d, 0xf7, 0xb2).to_string(), "#2df7b2");
    assert_eq!(HexColor::rgb(0, 0, 0).to_string(), "#000000");
}

#[test]
fn parse_accepts_optional_hash_and_any_case() {
    assert_eq!(HexColor::parse("#A8A8A8"), Ok(HexColor::rgb(0xa8, 0xa8, 0xa8)));
    assert_eq!(HexColor::parse("ff8000"), Ok(HexColor::rgb(0xff, 0x80, 0x00)));
}

#[test]
fn parse_rejects_malformed() {
    for bad in ["", "#fff", "#12345g", "#+12345", "#1234567", "#ééé"] {
        assert_eq!(
            HexColor::parse(bad),
            Err(PaletteError::InvalidHex {
                value: bad.to_owned()
            }),
            "{bad}"
        );
    }
}

#[test]
fn with_overrides_one_category() {
    let red = HexColor::rgb(0xff, 0, 0);
    let palette = Palette::default().with(ColorToken::Keyword, red);
    assert_eq!(palette.color(ColorToken::Keyword), red);
    assert_eq!(
        palette.color(ColorToken::Namespace),
        Palette::default().namespace
    );
}

#[test]
fn named_overrides() {
    let palette = Palette::default()
        .with_overrides([("namespace", "#010203"), ("struct", "#040506")])
        .map_err(|e| e.to_string());
    let palette = match palette {
        Ok(p) => p,
        Err(e) => panic!("overrides rejected: {e}"),
    };
    assert_eq!(palette.namespace, HexColor::rgb(1, 2, 3));
    assert_eq!(palette.color(ColorToken::Struct), HexColor::rgb(4, 5, 6));
}

#[test]
fn named_overrides_reject_unknown_category() {
    let result = Palette::default().with_overrides([("comment", "#010203")]);
    assert_eq!(
        result,
        Err(PaletteError::UnknownToken {
            name: "comment".to_owned()
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_hex_strings_and_defaults_missing_fields() {
    let json = r##"{"namespace": "#010203"}"##;
    let palette: Palette = match serde_json::from_str(json) {
        Ok(p) => p,
        Err(e) => panic!("palette did not deserialize: {e}"),
    };
    assert_eq!(palette.namespace, HexColor::rgb(1, 2, 3));
    assert_eq!(palette.keyword, Palette::default().keyword);

    let out = match serde_json::to_value(&palette) {
        Ok(v) => v,
        Err(e) => panic!("palette did not serialize: {e}"),
    };
    assert_eq!(out["struct"], "#0fba3a");
}
