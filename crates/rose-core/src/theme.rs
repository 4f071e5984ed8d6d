//! Theme table: the two fixed color/bloom bundles the scene can switch between.

use crate::error::{Result, RoseError};
use std::fmt;
use std::str::FromStr;

/// Linear RGB triple decoded from a `#rrggbb` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([1.0, 1.0, 1.0]);

    /// Decode sRGB `#rrggbb` (case-insensitive, leading `#` optional) into
    /// linear RGB.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RoseError::InvalidHexColor(hex.to_string()));
        }
        let mut out = [0.0_f32; 3];
        for (c, pair) in out.iter_mut().zip(digits.as_bytes().chunks(2)) {
            let v = (hex_nibble(pair[0]) << 4) | hex_nibble(pair[1]);
            *c = srgb_to_linear(v as f32 / 255.0);
        }
        Ok(Rgb(out))
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], a]
    }
}

// caller has checked `b` is an ASCII hex digit
#[inline]
fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// sRGB electro-optical transfer, per channel in \[0, 1\].
#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else if v >= 1.0 {
        1.0
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeId {
    #[default]
    Tatami,
    Midnight,
}

impl ThemeId {
    pub const ALL: [ThemeId; 2] = [ThemeId::Tatami, ThemeId::Midnight];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Tatami => "tatami",
            ThemeId::Midnight => "midnight",
        }
    }

    /// The other theme; used by the UI toggle.
    pub fn toggled(self) -> Self {
        match self {
            ThemeId::Tatami => ThemeId::Midnight,
            ThemeId::Midnight => ThemeId::Tatami,
        }
    }

    pub fn params(self) -> &'static ThemeParams {
        match self {
            ThemeId::Tatami => &TATAMI,
            ThemeId::Midnight => &MIDNIGHT,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = RoseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tatami" => Ok(ThemeId::Tatami),
            "midnight" => Ok(ThemeId::Midnight),
            other => Err(RoseError::UnknownTheme(other.to_string())),
        }
    }
}

/// Color and bloom bundle for one theme. Colors are kept as hex strings so the
/// table reads like the palette it was designed from.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeParams {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub ground: &'static str,
    pub trunk: &'static str,
    pub bloom_threshold: f32,
    pub bloom_intensity: f32,
}

impl ThemeParams {
    pub fn primary_rgb(&self) -> Rgb {
        decode_or_white(self.primary)
    }
    pub fn secondary_rgb(&self) -> Rgb {
        decode_or_white(self.secondary)
    }
    pub fn accent_rgb(&self) -> Rgb {
        decode_or_white(self.accent)
    }
    pub fn background_rgb(&self) -> Rgb {
        decode_or_white(self.background)
    }
    pub fn ground_rgb(&self) -> Rgb {
        decode_or_white(self.ground)
    }
    pub fn trunk_rgb(&self) -> Rgb {
        decode_or_white(self.trunk)
    }
}

fn decode_or_white(hex: &str) -> Rgb {
    Rgb::from_hex(hex).unwrap_or_else(|e| {
        log::warn!("[theme] {e}; using white");
        Rgb::WHITE
    })
}

pub static TATAMI: ThemeParams = ThemeParams {
    primary: "#FF0055",    // vibrant rose red
    secondary: "#FF0099",  // hot magenta
    accent: "#FFFFFF",     // stark white for contrast
    background: "#FFCce6", // pale pink sky
    ground: "#FF66B2",     // darker pink ground
    trunk: "#4A0E2E",      // dark maroon trunks
    bloom_threshold: 0.4,
    bloom_intensity: 2.5,
};

pub static MIDNIGHT: ThemeParams = ThemeParams {
    primary: "#990033",
    secondary: "#550022",
    accent: "#FFD700",
    background: "#1a0505",
    ground: "#0f0202",
    trunk: "#1a0505",
    bloom_threshold: 0.2,
    bloom_intensity: 1.5,
};

/// Lenient lookup used by the render loop: unknown ids fall back to the
/// default theme (`tatami`) instead of failing.
pub fn get_theme(id: &str) -> &'static ThemeParams {
    resolve_theme(id).params()
}

/// Same fallback as [`get_theme`], returning the id that was actually chosen.
pub fn resolve_theme(id: &str) -> ThemeId {
    id.parse().unwrap_or_else(|e| {
        log::warn!("[theme] {e}; falling back to {}", ThemeId::default());
        ThemeId::default()
    })
}
