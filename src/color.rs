use serde::{Deserialize, Serialize};

/// A 24-bit RGB color, stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self(0x00_0000);
    pub const WHITE: Self = Self(0xff_ffff);
    pub const BLUE: Self = Self(0x00_00ff);
    pub const GRAY: Self = Self(0x80_8080);

    /// Creates a color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Returns the `(r, g, b)` channels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Returns the channels normalized to `[0, 1]`.
    #[must_use]
    pub fn to_linear_rgb(self) -> [f32; 3] {
        let (r, g, b) = self.rgb();
        [f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        let c = Color::from_rgb(0xf0, 0xea, 0xdc);
        assert_eq!(c, Color(0xF0_EADC));
        assert_eq!(c.rgb(), (0xf0, 0xea, 0xdc));
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(Color(0x0a_0a0a).to_string(), "#0a0a0a");
    }

    #[test]
    fn linear_channels() {
        assert_eq!(Color::WHITE.to_linear_rgb(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_linear_rgb(), [0.0, 0.0, 0.0]);
    }
}
