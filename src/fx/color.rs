//! RGB colors for glows, particles and the trail

use serde::{Deserialize, Serialize};

/// 8-bit sRGB color. Serializes as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Emerald card glow
    pub const GREEN: Rgb = Rgb::new(34, 197, 94);
    /// Blue card glow
    pub const BLUE: Rgb = Rgb::new(59, 130, 246);
    /// Pixel trail
    pub const TRAIL: Rgb = Rgb::new(0x29, 0xff, 0x7b);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb` or `#rgb`
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `"r, g, b"` triple for `rgba(var(--glow-rgb), a)` style variables
    pub fn css_triple(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    pub fn css_rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, crate::saturate(alpha))
    }

    /// Normalized channels for GPU uniforms
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::from_hex("#29ff7b"), Some(Rgb::TRAIL));
        assert_eq!(Rgb::from_hex("fff"), Some(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_css_strings() {
        assert_eq!(Rgb::GREEN.css_triple(), "34, 197, 94");
        assert_eq!(Rgb::BLUE.to_hex(), "#3b82f6");
        assert_eq!(Rgb::WHITE.css_rgba(0.2), "rgba(255, 255, 255, 0.2)");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::TRAIL).unwrap();
        assert_eq!(json, "\"#29ff7b\"");
        let back: Rgb = serde_json::from_str("\"#3b82f6\"").unwrap();
        assert_eq!(back, Rgb::BLUE);
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
