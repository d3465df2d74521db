use motionreel::brand::components::particle_field::ParticleField;
use motionreel::brand::constants::colors;
use motionreel::{BrandVideo, FlipDir, FrameIndex, Node, SlideDir, TransitionKind, WipeDir};

#[test]
fn total_duration_is_1550_frames() {
    let video = BrandVideo::new().unwrap();
    assert_eq!(video.total_frames(), 1550);

    let tl = video.timeline();
    let seg_sum: u64 = tl.segments().iter().map(|s| s.duration).sum();
    let tr_sum: u64 = tl.transitions().iter().map(|t| t.duration).sum();
    assert_eq!(seg_sum - tr_sum, video.total_frames());
}

#[test]
fn segments_are_contiguous_and_ordered() {
    let video = BrandVideo::new().unwrap();
    let segs = video.timeline().segments();
    assert_eq!(segs[0].name, "intro");
    assert_eq!(segs[0].start, 0);
    assert_eq!(segs.last().unwrap().name, "outro");
    assert_eq!(segs.last().unwrap().end(), video.total_frames());

    for pair in segs.windows(2) {
        assert!(pair[1].start <= pair[0].end());
        assert!(pair[1].start > pair[0].start);
    }
}

#[test]
fn cut_list_matches_the_storyboard() {
    let video = BrandVideo::new().unwrap();
    let tl = video.timeline();

    let kinds: Vec<TransitionKind> = tl.transitions().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TransitionKind::CrossFade,
            TransitionKind::Slide { dir: SlideDir::FromBottom },
            TransitionKind::Wipe { dir: WipeDir::FromRight },
            TransitionKind::Flip { dir: FlipDir::FromRight },
            TransitionKind::Slide { dir: SlideDir::FromTop },
            TransitionKind::CrossFade,
            TransitionKind::Wipe { dir: WipeDir::FromLeft },
            TransitionKind::Slide { dir: SlideDir::FromBottom },
            TransitionKind::Flip { dir: FlipDir::FromLeft },
            TransitionKind::ClockWipe,
            TransitionKind::CrossFade,
            TransitionKind::Slide { dir: SlideDir::FromRight },
            TransitionKind::Wipe { dir: WipeDir::FromRight },
        ]
    );

    let durs: Vec<u64> = tl.transitions().iter().map(|t| t.duration).collect();
    assert_eq!(durs, vec![18, 23, 20, 25, 23, 20, 20, 23, 25, 20, 20, 23, 20]);

    let starts: Vec<(&str, u64)> = tl
        .segments()
        .iter()
        .map(|s| (s.name.as_str(), s.start))
        .collect();
    assert_eq!(
        starts,
        vec![
            ("intro", 0),
            ("flow-demo", 87),
            ("templates", 229),
            ("focused-demo", 319),
            ("collaboration", 419),
            ("models", 484),
            ("text-generation", 566),
            ("style-presets", 651),
            ("audio-generation", 751),
            ("recorder", 833),
            ("editor", 923),
            ("inpainting", 1003),
            ("upscaling", 1103),
            ("batch-generation", 1188),
            ("performance", 1270),
            ("open-source", 1325),
            ("outro", 1430),
        ]
    );

    // The light leaks sit centered on the three plain cuts.
    let overlays: Vec<(&str, u64)> = tl
        .overlays()
        .iter()
        .map(|o| (o.name.as_str(), o.start))
        .collect();
    assert_eq!(
        overlays,
        vec![("leak-focused", 304), ("leak-editor", 908), ("leak-outro", 1413)]
    );
}

#[test]
fn every_tenth_frame_renders() {
    let video = BrandVideo::new().unwrap();
    for f in (0..video.total_frames()).step_by(10) {
        let node = video.render_frame(FrameIndex(f)).unwrap();
        assert!(matches!(node, Node::Group(_)), "frame {f}");
    }
}

#[test]
fn transition_windows_produce_two_layers() {
    let video = BrandVideo::new().unwrap();
    let tr = &video.timeline().transitions()[0]; // crossfade out of the intro
    let mid = tr.start + tr.duration / 2;
    let Node::Group(g) = video.render_frame(FrameIndex(mid)).unwrap() else {
        panic!()
    };
    assert_eq!(g.children.len(), 2);
}

#[test]
fn light_leaks_ride_their_cuts() {
    let video = BrandVideo::new().unwrap();
    let tl = video.timeline();
    assert_eq!(tl.overlays().len(), 3);

    for ov in tl.overlays() {
        let mid = ov.start + ov.duration / 2;
        assert_eq!(tl.overlays_at(FrameIndex(mid)).len(), 1, "{}", ov.name);
        // One extra layer on top of the scene content.
        let Node::Group(with) = video.render_frame(FrameIndex(mid)).unwrap() else {
            panic!()
        };
        assert!(with.children.len() >= 2, "{}", ov.name);
    }
}

#[test]
fn seeded_decorations_survive_reconstruction() {
    let a = ParticleField::new("intro", 60, colors::TEXT);
    let b = ParticleField::new("intro", 60, colors::TEXT);
    assert_eq!(a.particles()[7], b.particles()[7]);

    // The same stability holds end to end through two separate videos.
    let v1 = BrandVideo::new().unwrap();
    let v2 = BrandVideo::new().unwrap();
    for f in [3u64, 450, 1100, 1549] {
        assert_eq!(
            serde_json::to_string(&v1.render_frame(FrameIndex(f)).unwrap()).unwrap(),
            serde_json::to_string(&v2.render_frame(FrameIndex(f)).unwrap()).unwrap(),
        );
    }
}

#[test]
fn out_of_range_frames_error() {
    let video = BrandVideo::new().unwrap();
    assert!(video.render_frame(FrameIndex(1550)).is_err());
    assert!(video.render_frame(FrameIndex(u64::MAX)).is_err());
}
