use std::fmt;

use serde::{Serialize, Serializer};

pub const PASTEL_SATURATION: u8 = 70;
pub const PASTEL_LIGHTNESS: u8 = 85;

/// Pastel HSL color, serialized as a CSS `hsl(...)` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl HslColor {
    pub fn pastel(hue: u16) -> Self {
        HslColor {
            hue: hue % 360,
            saturation: PASTEL_SATURATION,
            lightness: PASTEL_LIGHTNESS,
        }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl Serialize for HslColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rolling hash over the UTF-16 code units of `name`:
/// `hash = unit + ((hash << 5) - hash)`, i.e. `hash * 31 + unit`.
/// Every step wraps at 32 bits (two's complement), which keeps colors
/// identical to any other implementation using signed 32-bit arithmetic.
pub fn subject_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |hash, unit| {
        (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Deterministic pastel color for a subject name
pub fn color_of(name: &str) -> HslColor {
    // unsigned_abs keeps i32::MIN defined
    let hue = subject_hash(name).unsigned_abs() % 360;
    HslColor::pastel(hue as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_known_values() {
        assert_eq!(subject_hash(""), 0);
        assert_eq!(subject_hash("a"), 97);
        assert_eq!(subject_hash("ab"), 3105);
        assert_eq!(subject_hash("Calculo I"), 720326028);
        assert_eq!(subject_hash("Base de Datos"), -508741749);
    }

    #[test]
    fn colors_are_pastel_css_strings() {
        assert_eq!(color_of("a").to_string(), "hsl(97, 70%, 85%)");
        assert_eq!(color_of("ab").to_string(), "hsl(225, 70%, 85%)");
        assert_eq!(color_of("Calculo I").to_string(), "hsl(228, 70%, 85%)");
        assert_eq!(color_of("Física General").to_string(), "hsl(139, 70%, 85%)");
        assert_eq!(color_of("Base de Datos").to_string(), "hsl(189, 70%, 85%)");
        assert_eq!(color_of("Programación Orientada a Objetos").hue, 2);
    }

    #[test]
    fn color_is_pure() {
        let first = color_of("Sistemas Operativos");
        color_of("something else");
        assert_eq!(first, color_of("Sistemas Operativos"));
    }

    #[test]
    fn serializes_as_css() {
        let json = serde_json::to_string(&color_of("a")).unwrap();
        assert_eq!(json, "\"hsl(97, 70%, 85%)\"");
    }
}
