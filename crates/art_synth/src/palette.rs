//! Color types and the static palette table.
//!
//! Palettes are process-wide immutable configuration: const records looked
//! up by string id. An unknown id resolves to the default palette and is
//! never reported, since it is not fatal to composition.

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear mix toward `other`; `t` is clamped to [0, 1].
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Mix toward white.
    pub fn lighten(self, t: f32) -> Rgb {
        self.mix(Rgb::WHITE, t)
    }

    /// Mix toward black.
    pub fn darken(self, t: f32) -> Rgb {
        self.mix(Rgb::BLACK, t)
    }
}

/// An ordered list of foreground colors plus background and ink.
///
/// Foreground order matters: the color-selection strategies weight earlier
/// entries more heavily, so `foreground[0]` dominates a composition.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub id: &'static str,
    pub foreground: &'static [Rgb],
    pub background: Rgb,
    pub ink: Rgb,
}

/// Emphasis color for the signal accent every composer places.
///
/// Deliberately absent from every palette so the accent reads as a shared
/// signature across archetypes.
pub const SIGNAL: Rgb = Rgb::new(0xFF, 0x4D, 0x2E);

/// Id of the palette substituted for unknown ids.
pub const DEFAULT_PALETTE_ID: &str = "CLASSIC_BAUHAUS";

const CLASSIC_BAUHAUS: Palette = Palette {
    id: "CLASSIC_BAUHAUS",
    foreground: &[
        Rgb::new(0xE0, 0x3A, 0x2E),
        Rgb::new(0x1D, 0x55, 0xA0),
        Rgb::new(0xF2, 0xB6, 0x30),
        Rgb::new(0x17, 0x17, 0x17),
    ],
    background: Rgb::new(0xF4, 0xEF, 0xE6),
    ink: Rgb::new(0x1A, 0x18, 0x16),
};

const WEIMAR_PRINT: Palette = Palette {
    id: "WEIMAR_PRINT",
    foreground: &[
        Rgb::new(0x2B, 0x2B, 0x2B),
        Rgb::new(0xC8, 0x3F, 0x2A),
        Rgb::new(0xE8, 0xC5, 0x47),
    ],
    background: Rgb::new(0xEF, 0xE8, 0xD8),
    ink: Rgb::new(0x21, 0x1E, 0x1B),
};

const DESERT_DUSK: Palette = Palette {
    id: "DESERT_DUSK",
    foreground: &[
        Rgb::new(0xC9, 0x6F, 0x4A),
        Rgb::new(0x8C, 0x4A, 0x5E),
        Rgb::new(0xE3, 0xB5, 0x87),
        Rgb::new(0x52, 0x3A, 0x47),
    ],
    background: Rgb::new(0xF6, 0xE9, 0xDA),
    ink: Rgb::new(0x3A, 0x2C, 0x28),
};

const NORDIC_FROST: Palette = Palette {
    id: "NORDIC_FROST",
    foreground: &[
        Rgb::new(0x4F, 0x74, 0x8E),
        Rgb::new(0x9D, 0xB4, 0xC0),
        Rgb::new(0x2E, 0x40, 0x4F),
        Rgb::new(0xCB, 0xD9, 0xDE),
    ],
    background: Rgb::new(0xF2, 0xF5, 0xF4),
    ink: Rgb::new(0x23, 0x2D, 0x35),
};

const GALLERY_NOIR: Palette = Palette {
    id: "GALLERY_NOIR",
    foreground: &[
        Rgb::new(0x2A, 0x2A, 0x2A),
        Rgb::new(0x6E, 0x6E, 0x6E),
        Rgb::new(0xB9, 0xA8, 0x8C),
        Rgb::new(0x44, 0x44, 0x44),
        Rgb::new(0x8F, 0x8F, 0x8F),
    ],
    background: Rgb::new(0xEC, 0xEA, 0xE6),
    ink: Rgb::new(0x14, 0x14, 0x14),
};

const RIVIERA_SUMMER: Palette = Palette {
    id: "RIVIERA_SUMMER",
    foreground: &[
        Rgb::new(0x0E, 0x7C, 0x86),
        Rgb::new(0xF2, 0x99, 0x3B),
        Rgb::new(0xE4, 0x57, 0x4C),
        Rgb::new(0x34, 0x56, 0x35),
    ],
    background: Rgb::new(0xFB, 0xF3, 0xE4),
    ink: Rgb::new(0x1F, 0x2A, 0x2C),
};

const TERRACOTTA_FIELD: Palette = Palette {
    id: "TERRACOTTA_FIELD",
    foreground: &[
        Rgb::new(0xB5, 0x54, 0x32),
        Rgb::new(0xDA, 0x8A, 0x5E),
        Rgb::new(0x6B, 0x4B, 0x3A),
    ],
    background: Rgb::new(0xF1, 0xE3, 0xD3),
    ink: Rgb::new(0x31, 0x24, 0x1D),
};

const ULTRAMARINE_DEPTH: Palette = Palette {
    id: "ULTRAMARINE_DEPTH",
    foreground: &[
        Rgb::new(0x1B, 0x2F, 0x73),
        Rgb::new(0x3E, 0x5C, 0xB0),
        Rgb::new(0x9A, 0xAE, 0xD9),
        Rgb::new(0xD8, 0xC8, 0x6A),
    ],
    background: Rgb::new(0xEF, 0xF1, 0xF7),
    ink: Rgb::new(0x16, 0x1C, 0x33),
};

/// Every shipped palette, in catalog order.
pub const ALL: [&Palette; 8] = [
    &CLASSIC_BAUHAUS,
    &WEIMAR_PRINT,
    &DESERT_DUSK,
    &NORDIC_FROST,
    &GALLERY_NOIR,
    &RIVIERA_SUMMER,
    &TERRACOTTA_FIELD,
    &ULTRAMARINE_DEPTH,
];

/// Resolve a palette id. Unknown ids yield the default palette.
pub fn resolve(id: &str) -> &'static Palette {
    match id {
        "CLASSIC_BAUHAUS" => &CLASSIC_BAUHAUS,
        "WEIMAR_PRINT" => &WEIMAR_PRINT,
        "DESERT_DUSK" => &DESERT_DUSK,
        "NORDIC_FROST" => &NORDIC_FROST,
        "GALLERY_NOIR" => &GALLERY_NOIR,
        "RIVIERA_SUMMER" => &RIVIERA_SUMMER,
        "TERRACOTTA_FIELD" => &TERRACOTTA_FIELD,
        "ULTRAMARINE_DEPTH" => &ULTRAMARINE_DEPTH,
        _ => &CLASSIC_BAUHAUS,
    }
}
