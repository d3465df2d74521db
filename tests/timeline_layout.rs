use motionreel::{
    FrameIndex, Fps, FrameState, SpringConfig, Timeline, Timing, TransitionKind,
    settle_duration_frames,
};

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn two_segments_with_overlap() {
    let tl = Timeline::builder(fps30())
        .segment("a", 90)
        .transition(TransitionKind::CrossFade, Timing::linear(18))
        .segment("b", 60)
        .build()
        .unwrap();

    assert_eq!(tl.total_frames(), 132);

    match tl.state_at(FrameIndex(80)).unwrap() {
        FrameState::Blend {
            from_local,
            to_local,
            progress,
            ..
        } => {
            assert_eq!(from_local, 80);
            assert_eq!(to_local, 8);
            assert!((progress - 8.0 / 17.0).abs() < 1e-12);
        }
        other => panic!("expected blend at frame 80, got {other:?}"),
    }
}

#[test]
fn transition_progress_reaches_one_on_last_window_frame() {
    let tl = Timeline::builder(fps30())
        .segment("a", 90)
        .transition(TransitionKind::CrossFade, Timing::linear(18))
        .segment("b", 60)
        .build()
        .unwrap();

    match tl.state_at(FrameIndex(89)).unwrap() {
        FrameState::Blend { progress, .. } => assert_eq!(progress, 1.0),
        other => panic!("expected blend, got {other:?}"),
    }
    match tl.state_at(FrameIndex(90)).unwrap() {
        FrameState::Single { segment, .. } => assert_eq!(segment.name, "b"),
        other => panic!("expected single, got {other:?}"),
    }
}

#[test]
fn chained_total_subtracts_each_overlap_once() {
    let tl = Timeline::builder(fps30())
        .segment("a", 120)
        .transition(TransitionKind::CrossFade, Timing::linear(20))
        .segment("b", 100)
        .transition(TransitionKind::ClockWipe, Timing::linear(15))
        .segment("c", 80)
        .transition(TransitionKind::CrossFade, Timing::linear(10))
        .segment("d", 90)
        .build()
        .unwrap();

    let seg_sum: u64 = tl.segments().iter().map(|s| s.duration).sum();
    let tr_sum: u64 = tl.transitions().iter().map(|t| t.duration).sum();
    assert_eq!(seg_sum, 390);
    assert_eq!(tr_sum, 45);
    assert_eq!(tl.total_frames(), 345);

    // Segments tile the axis: every frame resolves.
    for f in 0..tl.total_frames() {
        tl.state_at(FrameIndex(f)).unwrap();
    }
}

#[test]
fn overlays_never_change_the_total() {
    let without = Timeline::builder(fps30())
        .segment("a", 90)
        .segment("b", 60)
        .build()
        .unwrap();
    let with = Timeline::builder(fps30())
        .segment("a", 90)
        .overlay("leak", 30)
        .segment("b", 60)
        .build()
        .unwrap();

    assert_eq!(without.total_frames(), with.total_frames());
    assert_eq!(with.overlays().len(), 1);
    // Active across the cut at frame 90, centered.
    assert_eq!(with.overlays()[0].start, 75);
    assert_eq!(with.overlays_at(FrameIndex(90)).len(), 1);
    assert!(with.overlays_at(FrameIndex(60)).is_empty());
}

#[test]
fn spring_timed_transition_uses_settle_duration() {
    let cfg = SpringConfig::smooth();
    let expected = settle_duration_frames(&cfg, fps30());
    assert_eq!(expected, 23);

    let tl = Timeline::builder(fps30())
        .segment("a", 90)
        .transition(TransitionKind::CrossFade, Timing::spring(cfg))
        .segment("b", 60)
        .build()
        .unwrap();
    assert_eq!(tl.total_frames(), 90 + 60 - 23);
    assert_eq!(tl.transitions()[0].duration, 23);
}

#[test]
fn invalid_layouts_are_rejected() {
    // Transition at least as long as a neighbor.
    assert!(
        Timeline::builder(fps30())
            .segment("a", 18)
            .transition(TransitionKind::CrossFade, Timing::linear(18))
            .segment("b", 60)
            .build()
            .is_err()
    );
    // Dangling transition.
    assert!(
        Timeline::builder(fps30())
            .segment("a", 90)
            .transition(TransitionKind::CrossFade, Timing::linear(10))
            .build()
            .is_err()
    );
}
