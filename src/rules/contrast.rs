//! Contrast judgment used by the color contrast check
//!
//! The check itself only resolves the foreground and background of each
//! text-bearing node; whether that pair is "low contrast" is decided by a
//! [`ContrastPredicate`] supplied to the analyzer.

use super::patterns::colors::{parse_color, Rgba};

/// Decides whether a foreground/background pair of CSS colors is too close.
pub trait ContrastPredicate: Send + Sync {
    fn is_low_contrast(&self, foreground: &str, background: &str) -> bool;
}

impl<F> ContrastPredicate for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_low_contrast(&self, foreground: &str, background: &str) -> bool {
        self(foreground, background)
    }
}

/// Never reports low contrast.
///
/// This is the default judgment: the contrast check runs and resolves
/// colors but raises nothing until a real predicate is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderContrast;

impl ContrastPredicate for PlaceholderContrast {
    fn is_low_contrast(&self, _foreground: &str, _background: &str) -> bool {
        false
    }
}

/// WCAG AA minimum for normal text
pub const WCAG_AA_RATIO: f64 = 4.5;

/// WCAG AAA minimum for normal text
pub const WCAG_AAA_RATIO: f64 = 7.0;

/// WCAG 2.x contrast-ratio test.
///
/// Colors that cannot be parsed are never judged low contrast.
#[derive(Debug, Clone, Copy)]
pub struct WcagContrast {
    pub min_ratio: f64,
}

impl WcagContrast {
    pub fn new(min_ratio: f64) -> Self {
        Self { min_ratio }
    }

    pub fn aa() -> Self {
        Self::new(WCAG_AA_RATIO)
    }

    pub fn aaa() -> Self {
        Self::new(WCAG_AAA_RATIO)
    }
}

impl Default for WcagContrast {
    fn default() -> Self {
        Self::aa()
    }
}

impl ContrastPredicate for WcagContrast {
    fn is_low_contrast(&self, foreground: &str, background: &str) -> bool {
        match (parse_color(foreground), parse_color(background)) {
            (Some(fg), Some(bg)) => contrast_ratio(fg, bg) < self.min_ratio,
            _ => false,
        }
    }
}

/// Relative luminance per WCAG 2.x, alpha ignored
pub fn relative_luminance(color: Rgba) -> f64 {
    let linear = [color.r, color.g, color.b].map(|c| {
        let v = f64::from(c) / 255.0;
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2]
}

/// Contrast ratio between two colors, in `1.0..=21.0`
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
