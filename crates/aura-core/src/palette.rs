use glam::Vec3;

/// A named particle colour with its secondary glow tint, packed `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub value_hex: u32,
    pub glow_hex: u32,
}

impl ColorOption {
    pub fn value(&self) -> Vec3 {
        rgb_hex(self.value_hex)
    }

    pub fn glow(&self) -> Vec3 {
        rgb_hex(self.glow_hex)
    }
}

/// RGB from a packed `0xRRGGBB` value, each channel in \[0, 1\].
pub fn rgb_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32,
        ((hex >> 8) & 0xff) as f32,
        (hex & 0xff) as f32,
    ) / 255.0
}

const fn color(name: &'static str, value_hex: u32, glow_hex: u32) -> ColorOption {
    ColorOption {
        name,
        value_hex,
        glow_hex,
    }
}

pub const DEFAULT_COLOR_INDEX: usize = 0;

pub static PALETTE: [ColorOption; 23] = [
    color("Dreamwave Aqua", 0x7FFBF1, 0xA3FFF6),
    color("Lotus Bloom", 0xFF93C9, 0xFFACD7),
    color("Mint Radiance", 0xA8FFD0, 0xC0FFE0),
    color("Celestial Pink", 0xFFB3F1, 0xFFC2F5),
    color("Soft Sunrise", 0xFFE6A7, 0xFFEFBE),
    color("Blush Pink", 0xFFB8D1, 0xFFB8D1),
    color("Seafoam", 0xC8FFE0, 0xC8FFE0),
    color("Baby Blue", 0xBEE8FF, 0xBEE8FF),
    color("Heavenly Blue", 0x96D8FF, 0xB4E6FF),
    color("Azure", 0x70B7FF, 0x70B7FF),
    color("Ocean Blue", 0x4EC8FF, 0x4EC8FF),
    color("Cyan Flash", 0x00F6FF, 0x00F6FF),
    color("Aqua", 0x57FFF7, 0x57FFF7),
    color("Violet", 0x8E71FF, 0x8E71FF),
    color("Iridescent Violet", 0xD7A6FF, 0xE4C4FF),
    color("Lilac", 0xB68BFF, 0xB68BFF),
    color("Tangerine", 0xFFB66E, 0xFFB66E),
    color("Coral", 0xFF8A5C, 0xFF8A5C),
    color("Peach", 0xFFD8C2, 0xFFD8C2),
    color("Golden", 0xFFD700, 0xFFAA00),
    color("Red", 0xFF0000, 0xFF0000),
    color("Hot Pink", 0xFF00FF, 0xFF00FF),
    color("Ghost White", 0xF4F7FF, 0xF4F7FF),
];

/// Palette entry at `index`, wrapping out-of-range indices.
pub fn palette_color(index: usize) -> &'static ColorOption {
    &PALETTE[index % PALETTE.len()]
}
