//! Color: True-color RGB and script color-attribute parsing.
//!
//! Scripts carry colors as strings (`"#4bfcd2"`, `"cyan"`). Parsing is
//! lossy by design: an unrecognised color yields `None` and the line
//! renders uncolored rather than failing.

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth, supporting 16.7 million colors.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a script color attribute.
    ///
    /// Accepts `#rgb` and `#rrggbb` hex forms plus a small palette of
    /// CSS-style color names. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        Self::parse_named(s)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        match hex.len() {
            3 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                // Expand each nibble: #abc -> #aabbcc
                let r = ((value >> 8) & 0xF) as u8;
                let g = ((value >> 4) & 0xF) as u8;
                let b = (value & 0xF) as u8;
                Some(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::from_u32(value))
            }
            _ => None,
        }
    }

    fn parse_named(name: &str) -> Option<Self> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::new(205, 49, 49),
            "green" => Self::new(13, 188, 121),
            "yellow" => Self::new(229, 229, 16),
            "blue" => Self::new(36, 114, 200),
            "magenta" => Self::new(188, 63, 188),
            "cyan" => Self::new(17, 168, 205),
            "gray" | "grey" => Self::new(128, 128, 128),
            _ => return None,
        };
        Some(rgb)
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_long() {
        assert_eq!(Rgb::parse("#4bfcd2"), Some(Rgb::new(0x4b, 0xfc, 0xd2)));
        assert_eq!(Rgb::parse("#FFFFFF"), Some(Rgb::WHITE));
    }

    #[test]
    fn test_parse_hex_short() {
        assert_eq!(Rgb::parse("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::parse("#000"), Some(Rgb::BLACK));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Rgb::parse("cyan"), Some(Rgb::new(17, 168, 205)));
        assert_eq!(Rgb::parse("Gray"), Rgb::parse("grey"));
    }

    #[test]
    fn test_parse_unknown_degrades_to_none() {
        assert_eq!(Rgb::parse("chartreuse-ish"), None);
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#zzzzzz"), None);
        assert_eq!(Rgb::parse(""), None);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Rgb::new(0x4b, 0xfc, 0xd2)), "#4bfcd2");
    }
}
