//! Damped harmonic oscillator progress curve.
//!
//! Solved in closed form at each integer frame offset, never integrated, so
//! playback can sample frames in any order and always get the same value.

use crate::foundation::core::Fps;

/// Threshold used both for settle measurement and the "is it done" notion of
/// a spring-timed transition.
const SETTLE_THRESHOLD: f64 = 0.005;

/// Hard cap on measured settle duration, in seconds.
const MAX_SETTLE_SECS: f64 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// When set, the effective time constant is rescaled so the spring
    /// settles within this many frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_frames: Option<u64>,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            duration_frames: None,
        }
    }
}

impl SpringConfig {
    /// The heavily damped, overshoot-free config used for most entrances and
    /// transition pacing.
    pub fn smooth() -> Self {
        Self {
            damping: 200.0,
            ..Self::default()
        }
    }

    pub fn with_damping(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    pub fn over_frames(self, frames: u64) -> Self {
        Self {
            duration_frames: Some(frames),
            ..self
        }
    }
}

/// Oscillator position at `frame_offset` frames after release, moving from
/// rest at 0 toward 1. Exactly 0 at offset 0.
pub fn spring(frame_offset: u64, fps: Fps, cfg: &SpringConfig) -> f64 {
    let mut t = fps.frames_to_secs(frame_offset);
    if let Some(frames) = cfg.duration_frames {
        let natural = natural_settle_secs(cfg);
        let wanted = fps.frames_to_secs(frames.max(1));
        t *= natural / wanted;
    }
    position_at(t, cfg)
}

/// Convenience: `spring` with the offset clamped at zero, for
/// `frame - delay` call sites that may go negative.
pub fn spring_delayed(frame: i64, delay: i64, fps: Fps, cfg: &SpringConfig) -> f64 {
    let offset = (frame - delay).max(0) as u64;
    spring(offset, fps, cfg)
}

/// Frames until the spring stays within the settle threshold of 1, at the
/// given frame rate. Used as the implied duration of spring-paced
/// transitions when no explicit duration is configured.
pub fn settle_duration_frames(cfg: &SpringConfig, fps: Fps) -> u64 {
    let cap = (MAX_SETTLE_SECS * fps.as_f64()).ceil() as u64;
    for f in 1..=cap {
        if (1.0 - position_at(fps.frames_to_secs(f), cfg)).abs() <= SETTLE_THRESHOLD {
            return f;
        }
    }
    cap
}

fn position_at(t: f64, cfg: &SpringConfig) -> f64 {
    let m = cfg.mass.max(1e-9);
    let k = cfg.stiffness.max(1e-9);
    let c = cfg.damping.max(0.0);

    let omega0 = (k / m).sqrt();
    let zeta = c / (2.0 * (k * m).sqrt());

    // From rest (x=0, v=0) toward 1.
    if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        1.0 - envelope * ((zeta * omega0 / omega1) * (omega1 * t).sin() + (omega1 * t).cos())
    } else {
        // The critically damped form is used for all zeta >= 1: this is what
        // the ubiquitous `damping: 200` tuning in scene code assumes
        // (settles in under a second instead of the several seconds the
        // exact overdamped solution would take).
        let envelope = (-omega0 * t).exp();
        1.0 - envelope * (1.0 + omega0 * t)
    }
}

/// Seconds until the undisturbed spring's decay envelope drops below the
/// settle threshold.
fn natural_settle_secs(cfg: &SpringConfig) -> f64 {
    let m = cfg.mass.max(1e-9);
    let k = cfg.stiffness.max(1e-9);
    let c = cfg.damping.max(0.0);
    let omega0 = (k / m).sqrt();
    let zeta = c / (2.0 * (k * m).sqrt());

    let eps = SETTLE_THRESHOLD;
    let t = if zeta < 1.0 {
        // Envelope amplitude bounds the oscillating residual.
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let amp = (1.0 + (zeta * omega0 / omega1).powi(2)).sqrt();
        (amp / eps).ln() / (zeta * omega0).max(1e-9)
    } else {
        // Residual is (1 + u) e^-u with u = omega0 t; solve for u by Newton.
        let mut u = (1.0 / eps).ln();
        u += (1.0 + u).ln();
        for _ in 0..8 {
            let e = (-u).exp();
            let f = (1.0 + u) * e - eps;
            let df = -u * e;
            if df.abs() < 1e-300 {
                break;
            }
            u -= f / df;
        }
        u / omega0
    };
    t.clamp(0.0, MAX_SETTLE_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps30() -> Fps {
        Fps::new(30, 1).unwrap()
    }

    #[test]
    fn starts_exactly_at_zero() {
        for cfg in [
            SpringConfig::default(),
            SpringConfig::smooth(),
            SpringConfig::with_damping(12.0),
        ] {
            assert_eq!(spring(0, fps30(), &cfg), 0.0);
        }
    }

    #[test]
    fn converges_to_one_and_stays() {
        for cfg in [
            SpringConfig::default(),
            SpringConfig::smooth(),
            SpringConfig {
                mass: 0.4,
                stiffness: 100.0,
                damping: 12.0,
                duration_frames: None,
            },
        ] {
            for f in 300..330 {
                assert!((spring(f, fps30(), &cfg) - 1.0).abs() < 1e-3, "f={f}");
            }
        }
    }

    #[test]
    fn heavily_damped_is_monotonic_and_settled_by_frame_60() {
        let cfg = SpringConfig::smooth();
        let mut prev = -1.0;
        for f in 0..=60 {
            let v = spring(f, fps30(), &cfg);
            assert!(v >= prev, "non-monotonic at frame {f}");
            prev = v;
        }
        assert!(prev >= 0.99);
    }

    #[test]
    fn underdamped_overshoots() {
        let cfg = SpringConfig {
            mass: 0.4,
            stiffness: 100.0,
            damping: 5.0,
            duration_frames: None,
        };
        let peak = (0..120)
            .map(|f| spring(f, fps30(), &cfg))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.01);
    }

    #[test]
    fn sampling_is_stateless() {
        let cfg = SpringConfig::with_damping(12.0);
        let forward: Vec<f64> = (0..50).map(|f| spring(f, fps30(), &cfg)).collect();
        let backward: Vec<f64> = (0..50).rev().map(|f| spring(f, fps30(), &cfg)).collect();
        for (i, v) in backward.into_iter().rev().enumerate() {
            assert_eq!(forward[i], v);
        }
    }

    #[test]
    fn settle_duration_matches_threshold() {
        let cfg = SpringConfig::smooth();
        let n = settle_duration_frames(&cfg, fps30());
        assert_eq!(n, 23);
        assert!((1.0 - spring(n, fps30(), &cfg)).abs() <= SETTLE_THRESHOLD);
        assert!((1.0 - spring(n - 1, fps30(), &cfg)).abs() > SETTLE_THRESHOLD);
    }

    #[test]
    fn duration_override_rescales_settling() {
        let cfg = SpringConfig::smooth().over_frames(10);
        assert_eq!(spring(0, fps30(), &cfg), 0.0);
        assert!((1.0 - spring(10, fps30(), &cfg)).abs() <= 0.01);
    }

    #[test]
    fn delayed_offsets_clamp_at_zero() {
        let cfg = SpringConfig::default();
        assert_eq!(spring_delayed(3, 10, fps30(), &cfg), 0.0);
        assert_eq!(
            spring_delayed(15, 10, fps30(), &cfg),
            spring(5, fps30(), &cfg)
        );
    }
}
