//! Color tokens for the light and dark modes.
//!
//! A [`Palette`] holds five nine-step color scales. Dark mode scales run from
//! light (100) to dark (900); light mode mostly mirrors them, with its own
//! `primary` scale so the body background stays light.

use std::fmt;

use serde::{Serialize, Serializer};

use super::adaptive::ColorMode;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One step of a color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    fn index(self) -> usize {
        self as usize
    }
}

/// Nine shades of one hue, 100 through 900.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale([Rgb; 9]);

impl ColorScale {
    const fn new(hexes: [u32; 9]) -> Self {
        let mut shades = [Rgb(0, 0, 0); 9];
        let mut i = 0;
        while i < 9 {
            shades[i] = Rgb::from_hex(hexes[i]);
            i += 1;
        }
        ColorScale(shades)
    }

    pub fn shade(&self, shade: Shade) -> Rgb {
        self.0[shade.index()]
    }

    /// The same scale read from 900 down to 100.
    const fn reversed(self) -> Self {
        let mut shades = self.0;
        let mut i = 0;
        while i < 9 {
            shades[i] = self.0[8 - i];
            i += 1;
        }
        ColorScale(shades)
    }
}

/// The named color scales for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grey: ColorScale,
    pub primary: ColorScale,
    pub green_accent: ColorScale,
    pub red_accent: ColorScale,
    pub blue_accent: ColorScale,
}

const GREY: ColorScale = ColorScale::new([
    0xe0e0e0, 0xc2c2c2, 0xa3a3a3, 0x858585, 0x666666, 0x525252, 0x3d3d3d, 0x292929, 0x141414,
]);
const PRIMARY_DARK: ColorScale = ColorScale::new([
    0xd0d1d5, 0xa1a4ab, 0x727681, 0x1f2a40, 0x141b2d, 0x101624, 0x0c101b, 0x080b12, 0x040509,
]);
const PRIMARY_LIGHT: ColorScale = ColorScale::new([
    0x040509, 0x080b12, 0x0c101b, 0xf2f0f0, 0x141b2d, 0x1f2a40, 0x727681, 0xa1a4ab, 0xd0d1d5,
]);
const GREEN_ACCENT: ColorScale = ColorScale::new([
    0xdbf5ee, 0xb7ebde, 0x94e2cd, 0x70d8bd, 0x4cceac, 0x3da58a, 0x2e7c67, 0x1e5245, 0x0f2922,
]);
const RED_ACCENT: ColorScale = ColorScale::new([
    0xf8dcdb, 0xf1b9b7, 0xe99592, 0xe2726e, 0xdb4f4a, 0xaf3f3b, 0x832f2c, 0x58201e, 0x2c100f,
]);
const BLUE_ACCENT: ColorScale = ColorScale::new([
    0xe1e2fe, 0xc3c6fd, 0xa4a9fc, 0x868dfb, 0x6870fa, 0x535ac8, 0x3e4396, 0x2a2d64, 0x151632,
]);

const DARK: Palette = Palette {
    grey: GREY,
    primary: PRIMARY_DARK,
    green_accent: GREEN_ACCENT,
    red_accent: RED_ACCENT,
    blue_accent: BLUE_ACCENT,
};

const LIGHT: Palette = Palette {
    grey: GREY.reversed(),
    primary: PRIMARY_LIGHT,
    green_accent: GREEN_ACCENT.reversed(),
    red_accent: RED_ACCENT.reversed(),
    blue_accent: BLUE_ACCENT.reversed(),
};

/// Returns the color tokens for a mode.
///
/// # Example
///
/// ```rust
/// use betboard::{palette_for, ColorMode, Shade};
///
/// let dark = palette_for(ColorMode::Dark);
/// assert_eq!(dark.green_accent.shade(Shade::S300).to_string(), "#94e2cd");
/// ```
pub fn palette_for(mode: ColorMode) -> Palette {
    match mode {
        ColorMode::Light => LIGHT,
        ColorMode::Dark => DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_display() {
        assert_eq!(Rgb::from_hex(0x1f2a40).to_string(), "#1f2a40");
        assert_eq!(Rgb::from_hex(0x1f2a40), Rgb(0x1f, 0x2a, 0x40));
    }

    #[test]
    fn test_light_mirrors_dark_accents() {
        let dark = palette_for(ColorMode::Dark);
        let light = palette_for(ColorMode::Light);
        assert_eq!(
            light.blue_accent.shade(Shade::S700),
            dark.blue_accent.shade(Shade::S300)
        );
        assert_eq!(light.grey.shade(Shade::S100), dark.grey.shade(Shade::S900));
    }

    #[test]
    fn test_primary_400_is_body_background() {
        assert_eq!(
            palette_for(ColorMode::Dark).primary.shade(Shade::S400),
            Rgb::from_hex(0x1f2a40)
        );
        assert_eq!(
            palette_for(ColorMode::Light).primary.shade(Shade::S400),
            Rgb::from_hex(0xf2f0f0)
        );
    }

    #[test]
    fn test_palette_is_pure() {
        assert_eq!(palette_for(ColorMode::Dark), palette_for(ColorMode::Dark));
        assert_ne!(palette_for(ColorMode::Dark), palette_for(ColorMode::Light));
    }
}
