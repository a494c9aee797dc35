use serde::{Deserialize, Deserializer, Serialize, de};
use std::str::FromStr;

/// A paint value as supplied by the host: either a symbolic name or an
/// RGBA byte quadruple.
///
/// An alpha byte of 0 in the RGBA form means "no paint", which is distinct
/// from any explicit color. Backends decide how to spell that out (most
/// emit a `none` token).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Named(String),
    Rgba(u8, u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Color::Named("black".to_string())
    }
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba(r, g, b, 255)
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba(r, g, b, a)
    }

    /// True when this color paints nothing: RGBA with alpha 0, or one of
    /// the named tokens `transparent` / `none` (ASCII case-insensitive).
    pub fn is_transparent(&self) -> bool {
        match self {
            Color::Rgba(_, _, _, a) => *a == 0,
            Color::Named(name) => {
                name.eq_ignore_ascii_case("transparent") || name.eq_ignore_ascii_case("none")
            }
        }
    }

    /// Parse a color from a string.
    ///
    /// `#rgb`, `#rrggbb` and `#rrggbbaa` hex forms become [`Color::Rgba`];
    /// anything else (non-empty) is taken as a symbolic name.
    pub fn parse(s: &str) -> Result<Color, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty color string".to_string());
        }
        if !s.starts_with('#') {
            return Ok(Color::Named(s.to_string()));
        }
        let hex = &s[1..];
        // All-ASCII check first: the length classes below count bytes and
        // slice byte ranges, which multi-byte input would break.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex digit in color: {}", s));
        }

        match hex.len() {
            3 => {
                // #rgb format - expand each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color::Rgba(r, g, b, 255))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                let a = if hex.len() == 8 {
                    u8::from_str_radix(&hex[6..8], 16)
                        .map_err(|e| format!("Invalid alpha component: {}", e))?
                } else {
                    255
                };
                Ok(Color::Rgba(r, g, b, a))
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3, 6 or 8 digits, got {}",
                hex.len()
            )),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

fn default_alpha() -> u8 {
    255
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_alpha")]
                a: u8,
            },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Color::parse(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color::Rgba(r, g, b, a)),
        }
    }
}
