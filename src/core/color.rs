// sRGB colors as written in the clock configuration.
//
// Colors are authored in sRGB (hex or CSS names) and converted to linear
// floats at upload time, since the swapchain format is an sRGB one.

/// An opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const LIGHT_BLUE: Color = Color::rgb(0xad, 0xd8, 0xe6);
    pub const DARK_BLUE: Color = Color::rgb(0x00, 0x00, 0x8b);
    pub const DARK_RED: Color = Color::rgb(0x8b, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parse `#rrggbb` or one of the CSS names used by the clock palette.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 {
                return None;
            }
            return u32::from_str_radix(hex, 16).ok().map(Self::from_hex);
        }
        match s.to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::rgb(0xff, 0xff, 0xff)),
            "lightblue" => Some(Self::LIGHT_BLUE),
            "darkblue" => Some(Self::DARK_BLUE),
            "darkred" => Some(Self::DARK_RED),
            _ => None,
        }
    }

    /// Linear-light RGBA with alpha 1.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            1.0,
        ]
    }
}

#[inline]
pub fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
