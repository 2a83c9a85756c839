//! Color parsing and perceptual darkness classification
//!
//! Backgrounds sampled from a rendering surface arrive as CSS color strings
//! (`rgb(...)`, `rgba(...)`, hex, or the `transparent` keyword). A color is
//! classified as dark when its perceptual brightness falls below 128 on the
//! 0-255 scale.

use thiserror::Error;

/// A resolved RGBA color. Channels are 0-255, alpha is 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Failure to interpret a CSS color string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unrecognized color syntax: {0:?}")]
    Unrecognized(String),
    #[error("color component out of range in {0:?}")]
    OutOfRange(String),
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Fully transparent colors contribute no visible background
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Perceptual brightness: `0.299·R + 0.587·G + 0.114·B`
    pub fn brightness(&self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Brightness strictly below 128 counts as dark; 128 itself does not.
    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.0
    }
}

/// Parse a CSS color string.
///
/// Accepts `rgb(r, g, b)`, `rgba(r, g, b, a)`, `#rrggbb`, `#rgb`, and the
/// `transparent` keyword. Anything else is an error; callers that sample
/// live backgrounds treat that as "light" rather than failing.
pub fn parse(input: &str) -> Result<Rgba, ColorParseError> {
    let s = input.trim();

    if s.eq_ignore_ascii_case("transparent") {
        return Ok(Rgba::TRANSPARENT);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorParseError::Unrecognized(input.to_string()));
    }

    let (body, has_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = s.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return Err(ColorParseError::Unrecognized(input.to_string()));
    };

    let body = body
        .strip_suffix(')')
        .ok_or_else(|| ColorParseError::Unrecognized(input.to_string()))?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != if has_alpha { 4 } else { 3 } {
        return Err(ColorParseError::Unrecognized(input.to_string()));
    }

    let channel = |part: &str| -> Result<u8, ColorParseError> {
        part.parse::<u16>()
            .ok()
            .filter(|v| *v <= 255)
            .map(|v| v as u8)
            .ok_or_else(|| ColorParseError::OutOfRange(input.to_string()))
    };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if has_alpha {
        parts[3]
            .parse::<f32>()
            .ok()
            .filter(|a| (0.0..=1.0).contains(a))
            .ok_or_else(|| ColorParseError::OutOfRange(input.to_string()))?
    } else {
        1.0
    };

    Ok(Rgba { r, g, b, a })
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    // Length checks below count bytes; multi-byte input must not reach the
    // byte slicing.
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgba::new(r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
            let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
            // #abc expands to #aabbcc
            Some(Rgba::new(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
