//! Colour palette.
//!
//! One [`HexColor`] per [`ColorToken`]. The default table is the fixed
//! house palette; overrides exist for hosts with a different theme. Every
//! category must map to a distinct colour for the markup to stay readable,
//! but nothing enforces that on overrides.

use std::fmt;

use sigview_ir::ColorToken;

use crate::error::PaletteError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A `#RRGGBB` colour.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, digits are case-insensitive).
    pub fn parse(value: &str) -> Result<Self, PaletteError> {
        let invalid = || PaletteError::InvalidHex {
            value: value.to_owned(),
        };
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let mut rgb = [0u8; 3];
        for (slot, i) in rgb.iter_mut().zip((0..6).step_by(2)) {
            *slot = u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(rgb))
    }

    pub const fn components(self) -> [u8; 3] {
        self.0
    }

    /// Append `#rrggbb` to `buf`.
    pub fn push_to(self, buf: &mut String) {
        buf.push('#');
        for byte in self.0 {
            buf.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            buf.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(7);
        self.push_to(&mut buf);
        f.write_str(&buf)
    }
}

impl TryFrom<String> for HexColor {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Colour for every display category.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Palette {
    pub namespace: HexColor,
    pub constant: HexColor,
    pub static_class: HexColor,
    pub instance_class: HexColor,
    #[cfg_attr(feature = "serde", serde(rename = "struct"))]
    pub value_type: HexColor,
    pub interface: HexColor,
    pub static_field: HexColor,
    pub instance_field: HexColor,
    pub static_method: HexColor,
    pub instance_method: HexColor,
    pub static_property: HexColor,
    pub instance_property: HexColor,
    pub local_arg: HexColor,
    pub keyword: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            namespace: HexColor::rgb(0xa8, 0xa8, 0xa8),
            constant: HexColor::rgb(0x92, 0xc4, 0x70),
            static_class: HexColor::rgb(0x3a, 0x8d, 0x71),
            instance_class: HexColor::rgb(0x2d, 0xf7, 0xb2),
            value_type: HexColor::rgb(0x0f, 0xba, 0x3a),
            interface: HexColor::rgb(0x9b, 0x9b, 0x82),
            static_field: HexColor::rgb(0x8d, 0x8d, 0xc6),
            instance_field: HexColor::rgb(0xc2, 0x66, 0xff),
            static_method: HexColor::rgb(0xb5, 0x5b, 0x02),
            instance_method: HexColor::rgb(0xff, 0x80, 0x00),
            static_property: HexColor::rgb(0x58, 0x80, 0x75),
            instance_property: HexColor::rgb(0x55, 0xa3, 0x8e),
            local_arg: HexColor::rgb(0xa6, 0xe9, 0xe9),
            keyword: HexColor::rgb(0x4c, 0x9b, 0xd3),
        }
    }
}

impl Palette {
    pub const fn color(&self, token: ColorToken) -> HexColor {
        match token {
            ColorToken::Namespace => self.namespace,
            ColorToken::Constant => self.constant,
            ColorToken::StaticClass => self.static_class,
            ColorToken::InstanceClass => self.instance_class,
            ColorToken::Struct => self.value_type,
            ColorToken::Interface => self.interface,
            ColorToken::StaticField => self.static_field,
            ColorToken::InstanceField => self.instance_field,
            ColorToken::StaticMethod => self.static_method,
            ColorToken::InstanceMethod => self.instance_method,
            ColorToken::StaticProperty => self.static_property,
            ColorToken::InstanceProperty => self.instance_property,
            ColorToken::LocalArg => self.local_arg,
            ColorToken::Keyword => self.keyword,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut HexColor {
        match token {
            ColorToken::Namespace => &mut self.namespace,
            ColorToken::Constant => &mut self.constant,
            ColorToken::StaticClass => &mut self.static_class,
            ColorToken::InstanceClass => &mut self.instance_class,
            ColorToken::Struct => &mut self.value_type,
            ColorToken::Interface => &mut self.interface,
            ColorToken::StaticField => &mut self.static_field,
            ColorToken::InstanceField => &mut self.instance_field,
            ColorToken::StaticMethod => &mut self.static_method,
            ColorToken::InstanceMethod => &mut self.instance_method,
            ColorToken::StaticProperty => &mut self.static_property,
            ColorToken::InstanceProperty => &mut self.instance_property,
            ColorToken::LocalArg => &mut self.local_arg,
            ColorToken::Keyword => &mut self.keyword,
        }
    }

    /// Override one category.
    #[must_use]
    pub fn with(mut self, token: ColorToken, color: HexColor) -> Self {
        *self.slot_mut(token) = color;
        self
    }

    /// Override categories from `(name, "#RRGGBB")` pairs, e.g. read from a
    /// host settings file.
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, PaletteError> {
        for (name, value) in overrides {
            let token = ColorToken::from_name(name).ok_or_else(|| PaletteError::UnknownToken {
                name: name.to_owned(),
            })?;
            *self.slot_mut(token) = HexColor::parse(value)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests;
