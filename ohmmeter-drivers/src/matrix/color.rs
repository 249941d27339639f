//! Normalized RGB colour and its WS2812 wire word

/// Colour with each component nominally in `[0.0, 1.0]`
///
/// Components are not clamped. Values outside the range encode to
/// whatever the float-to-byte conversion yields (saturating at 0 and 255),
/// so scale and clamp before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Multiply every component by `k`
    ///
    /// The emitters run without current limiting, so colours are normally
    /// scaled by a small on-intensity before they reach the matrix.
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// Pack into the word the shift-out program consumes
    ///
    /// Each component becomes `(c * 255)` truncated to a byte. The word is
    /// `G << 24 | R << 16 | B << 8`: the program shifts out the top 24 bits,
    /// MSB first, in the GRB order the LEDs expect.
    pub fn encode(self) -> u32 {
        let red = (self.r * 255.0) as u8;
        let green = (self.g * 255.0) as u8;
        let blue = (self.b * 255.0) as u8;

        (u32::from(green) << 24) | (u32::from(red) << 16) | (u32::from(blue) << 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_black_and_white() {
        assert_eq!(Color::BLACK.encode(), 0);
        assert_eq!(Color::WHITE.encode(), (255 << 24) | (255 << 16) | (255 << 8));
    }

    #[test]
    fn test_encode_byte_positions() {
        assert_eq!(Color::RED.encode(), 0x00FF_0000);
        assert_eq!(Color::GREEN.encode(), 0xFF00_0000);
        assert_eq!(Color::BLUE.encode(), 0x0000_FF00);
        assert_eq!(Color::new(0.2, 0.4, 0.6).encode() & 0xFF, 0);
    }

    #[test]
    fn test_encode_truncates() {
        // 0.5 * 255 = 127.5
        assert_eq!(Color::new(0.5, 0.0, 0.0).encode(), 127 << 16);
        // 0.02 * 255 = 5.1
        assert_eq!(Color::new(0.0, 0.0, 0.02).encode(), 5 << 8);
    }

    #[test]
    fn test_scale() {
        let dimmed = Color::WHITE.scale(0.5);
        assert_eq!(dimmed, Color::new(0.5, 0.5, 0.5));
        assert_eq!(Color::RED.scale(0.0), Color::BLACK);
    }
}
