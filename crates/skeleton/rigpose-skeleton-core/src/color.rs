//! RGBA color with channels in [0, 1].

use serde::{Deserialize, Serialize};

use crate::error::SkeletonError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse an 8 digit `RRGGBBAA` hex string as used by skeleton and
    /// animation descriptors.
    pub fn from_hex(s: &str) -> Result<Self, SkeletonError> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SkeletonError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| -> Result<f32, SkeletonError> {
            u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| SkeletonError::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(1)?,
            b: channel(2)?,
            a: channel(3)?,
        })
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rrggbbaa() {
        let c = Color::from_hex("ff800000").expect("valid color");
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn rejects_short_or_non_hex() {
        assert!(matches!(
            Color::from_hex("fff"),
            Err(SkeletonError::InvalidColor(_))
        ));
        assert!(Color::from_hex("zz000000").is_err());
        assert!(Color::from_hex("+f+f+f+f").is_err());
        assert!(Color::from_hex("-1000000").is_err());
    }
}
