//! Canonical 8-bit RGB color and the conversions into it.

use crate::{Error, Result};

/// The one color representation every effect works with.
pub type Color = palette::Srgb<u8>;

pub const BLACK: Color = Color::new(0, 0, 0);
pub const RED: Color = Color::new(255, 0, 0);
pub const YELLOW: Color = Color::new(255, 150, 0);
pub const ORANGE: Color = Color::new(255, 40, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const TEAL: Color = Color::new(0, 255, 120);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const PURPLE: Color = Color::new(180, 0, 255);
pub const MAGENTA: Color = Color::new(255, 0, 20);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const GOLD: Color = Color::new(255, 222, 30);
pub const PINK: Color = Color::new(242, 90, 255);
pub const AQUA: Color = Color::new(50, 255, 255);
pub const JADE: Color = Color::new(0, 255, 40);
pub const AMBER: Color = Color::new(255, 100, 0);

const NAMED_COLORS: [(&str, Color); 16] = [
    ("black", BLACK),
    ("red", RED),
    ("yellow", YELLOW),
    ("orange", ORANGE),
    ("green", GREEN),
    ("teal", TEAL),
    ("cyan", CYAN),
    ("blue", BLUE),
    ("purple", PURPLE),
    ("magenta", MAGENTA),
    ("white", WHITE),
    ("gold", GOLD),
    ("pink", PINK),
    ("aqua", AQUA),
    ("jade", JADE),
    ("amber", AMBER),
];

/// Any of the accepted ways to spell a color before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    /// `0xRRGGBB`, bits above the low 24 are ignored
    Packed(u32),
    Rgb(Color),
}

impl From<u32> for ColorValue {
    fn from(value: u32) -> Self {
        ColorValue::Packed(value)
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        ColorValue::Rgb(Color::new(red, green, blue))
    }
}

impl From<[u8; 3]> for ColorValue {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        ColorValue::Rgb(Color::new(red, green, blue))
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        ColorValue::Rgb(color)
    }
}

/// Turns any accepted color input into the canonical form.
pub fn normalize(value: impl Into<ColorValue>) -> Color {
    match value.into() {
        ColorValue::Packed(packed) => Color::new(
            (packed >> 16 & 0xff) as u8,
            (packed >> 8 & 0xff) as u8,
            (packed & 0xff) as u8,
        ),
        ColorValue::Rgb(color) => color,
    }
}

/// Multiplies every channel by `factor` and truncates. Results above 255 saturate.
pub fn scale(color: Color, factor: f64) -> Color {
    let channel = |c: u8| (c as f64 * factor) as u8;
    Color::new(channel(color.red), channel(color.green), channel(color.blue))
}

/// Parses a color name, `#RRGGBB`, `0xRRGGBB` or `r,g,b`.
pub fn parse_color(text: &str) -> Result<Color> {
    let text = text.trim();
    let invalid = || Error::InvalidColor(text.to_string());

    if let Some((_, color)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
    {
        return Ok(*color);
    }

    let hex = text
        .strip_prefix('#')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"));
    if let Some(hex) = hex {
        if hex.len() != 6 {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return Ok(normalize(packed));
    }

    let channels = text
        .split(',')
        .map(|c| c.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|_| invalid())?;
    match channels[..] {
        [red, green, blue] => Ok(Color::new(red, green, blue)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_integer_splits_into_three_bytes() {
        assert_eq!(normalize(0x123456u32), Color::new(0x12, 0x34, 0x56));
        assert_eq!(normalize(0xff00_0080u32), Color::new(0, 0, 0x80));
    }

    #[test]
    fn normalizing_a_canonical_color_is_a_no_op() {
        let color = Color::new(10, 20, 30);
        assert_eq!(normalize(color), color);
        assert_eq!(normalize(normalize(color)), color);
        assert_eq!(normalize((10, 20, 30)), color);
        assert_eq!(normalize([10, 20, 30]), color);
    }

    #[test]
    fn scale_truncates_each_channel() {
        assert_eq!(scale(Color::new(255, 100, 9), 0.5), Color::new(127, 50, 4));
        assert_eq!(scale(WHITE, 0.0), BLACK);
        assert_eq!(scale(Color::new(200, 0, 0), 2.0), Color::new(255, 0, 0));
    }

    #[test]
    fn parses_names_hex_and_triples() {
        assert_eq!(parse_color("Red").unwrap(), RED);
        assert_eq!(parse_color("#00ff78").unwrap(), TEAL);
        assert_eq!(parse_color("0xFF6400").unwrap(), AMBER);
        assert_eq!(parse_color(" 1, 2 ,3 ").unwrap(), Color::new(1, 2, 3));
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "chartreuse", "#12345", "#gggggg", "1,2", "1,2,300"] {
            assert!(matches!(parse_color(text), Err(Error::InvalidColor(_))), "{text}");
        }
    }
}
