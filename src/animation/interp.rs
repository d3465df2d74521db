//! Breakpoint interpolation.
//!
//! The workhorse of every scene: map a frame (or any scalar) through an
//! ordered list of input breakpoints onto output values. Pure and
//! order-independent, so frames may be evaluated in any order.

use crate::animation::ease::Ease;

/// Behavior outside the breakpoint domain, per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Hold the edge value. The default: scrubbing far past a range must not
    /// produce runaway values.
    #[default]
    Clamp,
    /// Continue the slope of the edge segment.
    Extend,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpConfig {
    pub ease: Ease,
    pub left: Extrapolate,
    pub right: Extrapolate,
}

impl InterpConfig {
    pub fn eased(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::default()
        }
    }

    pub fn extend() -> Self {
        Self {
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
            ..Self::default()
        }
    }
}

/// Interpolate `t` over `input` breakpoints onto `output` values.
///
/// Breakpoints must be strictly increasing and both slices must hold the same
/// number (>= 2) of elements; violating that is a programmer error and
/// panics. The easing curve applies to the normalized progress within the
/// bracketing pair; extrapolation (when `Extend`) continues the raw edge
/// slope, uneased.
pub fn interpolate(t: f64, input: &[f64], output: &[f64], cfg: InterpConfig) -> f64 {
    validate_breakpoints(input, output);

    let k = input.len();
    if t < input[0] {
        return match cfg.left {
            Extrapolate::Clamp => output[0],
            Extrapolate::Extend => extend_segment(t, input[0], input[1], output[0], output[1]),
        };
    }
    if t >= input[k - 1] {
        if t == input[k - 1] {
            return output[k - 1];
        }
        return match cfg.right {
            Extrapolate::Clamp => output[k - 1],
            Extrapolate::Extend => {
                extend_segment(t, input[k - 2], input[k - 1], output[k - 2], output[k - 1])
            }
        };
    }

    let idx = input.partition_point(|&b| b <= t);
    let (i0, i1) = (idx - 1, idx);
    let progress = (t - input[i0]) / (input[i1] - input[i0]);
    let eased = cfg.ease.apply(progress);
    output[i0] + (output[i1] - output[i0]) * eased
}

/// Shorthand for the common case: linear, clamped on both sides.
pub fn ramp(t: f64, input: &[f64], output: &[f64]) -> f64 {
    interpolate(t, input, output, InterpConfig::default())
}

fn extend_segment(t: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let slope = (y1 - y0) / (x1 - x0);
    y0 + (t - x0) * slope
}

fn validate_breakpoints(input: &[f64], output: &[f64]) {
    assert!(
        input.len() >= 2,
        "interpolate needs at least 2 breakpoints, got {}",
        input.len()
    );
    assert_eq!(
        input.len(),
        output.len(),
        "interpolate input/output length mismatch: {} vs {}",
        input.len(),
        output.len()
    );
    assert!(
        input.windows(2).all(|w| w[0] < w[1]),
        "interpolate breakpoints must be strictly increasing: {input:?}"
    );
    assert!(
        input.iter().chain(output).all(|v| v.is_finite()),
        "interpolate breakpoints and outputs must be finite"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ease::CubicBezier;

    #[test]
    fn linear_midpoint() {
        assert_eq!(ramp(5.0, &[0.0, 10.0], &[0.0, 100.0]), 50.0);
    }

    #[test]
    fn multi_segment_brackets_correctly() {
        let input = [0.0, 10.0, 20.0];
        let output = [0.0, 100.0, 0.0];
        assert_eq!(ramp(15.0, &input, &output), 50.0);
        assert_eq!(ramp(10.0, &input, &output), 100.0);
    }

    #[test]
    fn clamp_holds_edges() {
        let input = [10.0, 20.0];
        let output = [3.0, 7.0];
        assert_eq!(ramp(-100.0, &input, &output), 3.0);
        assert_eq!(ramp(0.0, &input, &output), 3.0);
        assert_eq!(ramp(20.0, &input, &output), 7.0);
        assert_eq!(ramp(10_000.0, &input, &output), 7.0);
    }

    #[test]
    fn extend_continues_slope() {
        let cfg = InterpConfig::extend();
        assert_eq!(
            interpolate(20.0, &[0.0, 10.0], &[0.0, 10.0], cfg),
            20.0
        );
        assert_eq!(
            interpolate(-5.0, &[0.0, 10.0], &[0.0, 10.0], cfg),
            -5.0
        );
    }

    #[test]
    fn sides_are_independent() {
        let cfg = InterpConfig {
            left: Extrapolate::Clamp,
            right: Extrapolate::Extend,
            ..InterpConfig::default()
        };
        assert_eq!(interpolate(-5.0, &[0.0, 10.0], &[0.0, 10.0], cfg), 0.0);
        assert_eq!(interpolate(15.0, &[0.0, 10.0], &[0.0, 10.0], cfg), 15.0);
    }

    #[test]
    fn easing_applies_within_segment() {
        let cfg = InterpConfig::eased(Ease::InQuad);
        let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], cfg);
        assert_eq!(v, 25.0);
    }

    #[test]
    fn bezier_easing_hits_endpoints() {
        let cfg = InterpConfig::eased(Ease::Bezier(CubicBezier::new(0.22, 1.0, 0.36, 1.0)));
        assert_eq!(interpolate(0.0, &[0.0, 10.0], &[2.0, 8.0], cfg), 2.0);
        assert_eq!(interpolate(10.0, &[0.0, 10.0], &[2.0, 8.0], cfg), 8.0);
    }

    #[test]
    #[should_panic(expected = "at least 2 breakpoints")]
    fn single_breakpoint_panics() {
        ramp(0.0, &[1.0], &[1.0]);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn non_monotonic_panics() {
        ramp(0.0, &[0.0, 10.0, 5.0], &[0.0, 1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn length_mismatch_panics() {
        ramp(0.0, &[0.0, 10.0], &[0.0, 1.0, 2.0]);
    }
}
