//! RGBA colours.

/// Colour with float channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Colour {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a colour from float channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks `0xRRGGBBAA`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn from_rgba(packed: u32) -> Self {
        let channel = |shift: u32| f32::from(((packed >> shift) & 0xFF) as u8) / 255.0;
        Self::new(channel(24), channel(16), channel(8), channel(0))
    }

    /// Packs into `0xRRGGBBAA`, rounding each channel.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn to_rgba(self) -> u32 {
        let channel = |c: f32| u32::from((c.clamp(0.0, 1.0) * 255.0).round() as u8);
        (channel(self.r) << 24) | (channel(self.g) << 16) | (channel(self.b) << 8) | channel(self.a)
    }

    /// Channels as an array, the layout vertices store.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::WHITE
    }
}
