use motionreel::{Fps, SpringConfig, settle_duration_frames, spring};

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn heavily_damped_spring_is_monotone_and_near_one_by_frame_60() {
    let cfg = SpringConfig::smooth();
    let mut prev = -1.0;
    for f in 0..=60u64 {
        let v = spring(f, fps30(), &cfg);
        assert!(v >= prev, "frame {f}: {v} < {prev}");
        prev = v;
    }
    assert!(prev >= 0.99, "frame 60 value {prev}");
}

#[test]
fn default_spring_overshoots_then_settles() {
    let cfg = SpringConfig::default();
    let overshoot = (0..120u64).any(|f| spring(f, fps30(), &cfg) > 1.0);
    assert!(overshoot);
    let late = spring(300, fps30(), &cfg);
    assert!((late - 1.0).abs() < 0.005);
}

#[test]
fn duration_override_rescales_settling() {
    let cfg = SpringConfig::smooth().over_frames(10);
    let at_override = spring(10, fps30(), &cfg);
    assert!((at_override - 1.0).abs() <= 0.01, "value {at_override}");

    // Same physics, natural pace: still well short of settled at frame 10.
    let natural = spring(10, fps30(), &SpringConfig::smooth());
    assert!(natural < at_override);
}

#[test]
fn settle_duration_matches_scan() {
    let cfg = SpringConfig::smooth();
    let frames = settle_duration_frames(&cfg, fps30());
    assert_eq!(frames, 23);

    // Every frame at or past the settle point stays within the threshold.
    for f in frames..frames + 60 {
        let v = spring(f, fps30(), &cfg);
        assert!((v - 1.0).abs() <= 0.005, "frame {f}: {v}");
    }
}

#[test]
fn spring_starts_at_rest() {
    for cfg in [SpringConfig::default(), SpringConfig::smooth()] {
        assert_eq!(spring(0, fps30(), &cfg), 0.0);
    }
}
