//! Reusable scene building blocks. Each component is a pure function (or a
//! struct holding pre-seeded decoration data) from a local frame to a
//! [`crate::render::tree::Node`] subtree.

pub mod backgrounds;
pub mod browser_window;
pub mod flow;
pub mod glow;
pub mod light_leak;
pub mod logo;
pub mod matrix_rain;
pub mod particle_field;
pub mod shapes3d;
pub mod text_fx;
pub mod typewriter;

/// Coarse advance-width estimate in pixels for laying out per-character
/// text. The host renderer owns real font metrics; this only positions
/// characters of animated headlines relative to each other.
pub fn char_advance(ch: char, size_px: f64) -> f64 {
    let factor = match ch {
        ' ' => 0.3,
        'i' | 'j' | 'l' | 't' | 'f' | 'r' | '.' | ',' | '\'' | '!' | ':' | ';' | '|' => 0.32,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        'I' | '1' => 0.38,
        c if c.is_ascii_uppercase() || c.is_ascii_digit() => 0.68,
        _ => 0.54,
    };
    size_px * factor
}

/// Estimated total width of `text` at `size_px`, including letter spacing.
pub fn text_width(text: &str, size_px: f64, letter_spacing_px: f64) -> f64 {
    let advances: f64 = text.chars().map(|c| char_advance(c, size_px)).sum();
    let spacing = letter_spacing_px * text.chars().count().saturating_sub(1) as f64;
    advances + spacing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_glyphs_advance_more() {
        assert!(char_advance('W', 100.0) > char_advance('i', 100.0));
        assert!(char_advance('A', 100.0) > char_advance('a', 100.0));
    }

    #[test]
    fn width_scales_with_spacing() {
        let tight = text_width("CREATE", 100.0, 0.0);
        let loose = text_width("CREATE", 100.0, 4.0);
        assert_eq!(loose - tight, 20.0);
    }
}
