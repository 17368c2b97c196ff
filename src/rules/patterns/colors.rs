//! CSS color parsing

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `rgb()` / `rgba()` in comma or space syntax, with optional alpha
    static ref RGB_FUNCTION: Regex = Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*(?:[,/]\s*([0-9.]+)(%)?\s*)?\)$"
    )
    .unwrap();

    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
    static ref HEX_COLOR: Regex =
        Regex::new(r"^#([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap();
}

/// Named colors understood without a stylesheet
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("white", (255, 255, 255)),
    ("black", (0, 0, 0)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("lime", (0, 255, 0)),
    ("aqua", (0, 255, 255)),
    ("cyan", (0, 255, 255)),
    ("teal", (0, 128, 128)),
    ("navy", (0, 0, 128)),
    ("fuchsia", (255, 0, 255)),
    ("magenta", (255, 0, 255)),
    ("purple", (128, 0, 128)),
    ("orange", (255, 165, 0)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
    ("darkgray", (169, 169, 169)),
    ("darkgrey", (169, 169, 169)),
];

/// An sRGB color with alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Fully transparent colors do not paint anything
    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Parse a CSS color value. Returns `None` for anything unrecognised.
pub fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim().to_lowercase();

    if value == "transparent" {
        return Some(Rgba {
            alpha: 0.0,
            ..Rgba::opaque(0, 0, 0)
        });
    }
    if value.starts_with('#') {
        return parse_hex(&value);
    }
    if value.starts_with("rgb") {
        return parse_rgb_function(&value);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, (r, g, b))| Rgba::opaque(*r, *g, *b))
}

fn parse_hex(value: &str) -> Option<Rgba> {
    let digits = HEX_COLOR.captures(value)?.get(1)?.as_str();

    let channels: Vec<u8> = if digits.len() <= 4 {
        digits
            .chars()
            .map(|c| u8::from_str_radix(&c.to_string().repeat(2), 16).ok())
            .collect::<Option<_>>()?
    } else {
        (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
            .collect::<Option<_>>()?
    };

    let alpha = channels.get(3).map_or(1.0, |a| f64::from(*a) / 255.0);
    Some(Rgba {
        r: channels[0],
        g: channels[1],
        b: channels[2],
        alpha,
    })
}

fn parse_rgb_function(value: &str) -> Option<Rgba> {
    let caps = RGB_FUNCTION.captures(value)?;
    let channel = |i: usize| -> Option<u8> { caps[i].parse::<u16>().ok().map(|c| c.min(255) as u8) };

    let alpha = match caps.get(4) {
        Some(a) => {
            let raw: f64 = a.as_str().parse().ok()?;
            let raw = if caps.get(5).is_some() { raw / 100.0 } else { raw };
            raw.clamp(0.0, 1.0)
        }
        None => 1.0,
    };

    Some(Rgba {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
        alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#fff"), Some(Rgba::opaque(255, 255, 255)));
        assert_eq!(parse_color("#1A2b3C"), Some(Rgba::opaque(0x1a, 0x2b, 0x3c)));
        assert!(parse_color("#00000000").unwrap().is_transparent());
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#ggg"), None);
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(parse_color("rgb(0, 0, 0)"), Some(Rgba::opaque(0, 0, 0)));
        assert_eq!(parse_color("rgb(10 20 30)"), Some(Rgba::opaque(10, 20, 30)));

        let half = parse_color("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!((half.r, half.g, half.b), (255, 0, 0));
        assert!((half.alpha - 0.5).abs() < f64::EPSILON);

        let pct = parse_color("rgb(0 0 0 / 25%)").unwrap();
        assert!((pct.alpha - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_background_is_transparent() {
        assert!(parse_color("rgba(0, 0, 0, 0)").unwrap().is_transparent());
        assert!(parse_color("transparent").unwrap().is_transparent());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color(" White "), Some(Rgba::WHITE));
        assert_eq!(parse_color("navy"), Some(Rgba::opaque(0, 0, 128)));
        assert_eq!(parse_color("rebeccapurple"), None);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("var(--fg)"), None);
    }
}
