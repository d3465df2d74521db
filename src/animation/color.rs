//! Color breakpoint interpolation.
//!
//! Per-channel linear blend (alpha included) under the same breakpoint,
//! easing and extrapolation rules as scalar interpolation. Perceptual
//! blending is deliberately not attempted; the host renderer gets plain
//! channel lerps, which is what the scenes were tuned against.

use crate::animation::interp::{InterpConfig, interpolate};
use crate::foundation::core::Color;

/// Interpolate `t` over `input` breakpoints onto `colors`.
///
/// Same panics as [`interpolate`] for malformed breakpoints.
pub fn interpolate_color(t: f64, input: &[f64], colors: &[Color], cfg: InterpConfig) -> Color {
    assert_eq!(
        input.len(),
        colors.len(),
        "interpolate_color input/color length mismatch: {} vs {}",
        input.len(),
        colors.len()
    );

    let channel = |pick: fn(&Color) -> f64| {
        let outs: Vec<f64> = colors.iter().map(pick).collect();
        interpolate(t, input, &outs, cfg)
    };

    Color {
        r: channel(|c| c.r),
        g: channel(|c| c.g),
        b: channel(|c| c.b),
        a: channel(|c| c.a),
    }
}

/// Two-color blend by normalized progress in [0, 1].
pub fn blend(progress: f64, from: Color, to: Color) -> Color {
    interpolate_color(
        progress,
        &[0.0, 1.0],
        &[from, to],
        InterpConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_blends_channels() {
        let c = blend(0.5, Color::rgb(0, 0, 0), Color::rgb(255, 255, 255));
        assert_eq!(c.r, 127.5);
        assert_eq!(c.g, 127.5);
        assert_eq!(c.b, 127.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn alpha_interpolates_with_rgb() {
        let from = Color::rgba(16, 32, 64, 0.0);
        let to = Color::rgba(16, 32, 64, 1.0);
        let c = blend(0.25, from, to);
        assert_eq!(c.a, 0.25);
        assert_eq!(c.r, 16.0);
    }

    #[test]
    fn clamps_outside_domain() {
        let colors = [Color::rgb(10, 0, 0), Color::rgb(20, 0, 0)];
        let lo = interpolate_color(-5.0, &[0.0, 10.0], &colors, InterpConfig::default());
        let hi = interpolate_color(50.0, &[0.0, 10.0], &colors, InterpConfig::default());
        assert_eq!(lo.r, 10.0);
        assert_eq!(hi.r, 20.0);
    }

    #[test]
    fn multi_breakpoint_gradient() {
        let colors = [
            Color::rgb(0, 0, 0),
            Color::rgb(100, 0, 0),
            Color::rgb(200, 0, 0),
        ];
        let c = interpolate_color(15.0, &[0.0, 10.0, 20.0], &colors, InterpConfig::default());
        assert_eq!(c.r, 150.0);
    }

    #[test]
    fn deterministic_across_calls() {
        let colors = [Color::rgb(3, 7, 11), Color::rgb(200, 100, 50)];
        let a = interpolate_color(0.37, &[0.0, 1.0], &colors, InterpConfig::default());
        let b = interpolate_color(0.37, &[0.0, 1.0], &colors, InterpConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn mismatched_lengths_panic() {
        interpolate_color(
            0.0,
            &[0.0, 1.0, 2.0],
            &[Color::rgb(0, 0, 0), Color::rgb(1, 1, 1)],
            InterpConfig::default(),
        );
    }
}
