//! Assembly of the full brand video: scene order, transition choreography
//! and the light leak overlays riding the hard cuts.

use std::collections::BTreeMap;

use crate::brand::components::light_leak::LightLeak;
use crate::brand::constants::{TRANSITION_FRAMES, durations, video_canvas, video_fps};
use crate::brand::scenes::all_scenes;
use crate::eval::evaluator::{Evaluator, VideoConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::EngineResult;
use crate::render::tree::Node;
use crate::scene::Scene;
use crate::timeline::composer::Timeline;
use crate::timeline::model::{FlipDir, SlideDir, Timing, TransitionKind, WipeDir};
use crate::animation::spring::SpringConfig;

/// The composed Creativly promo. Construction validates the whole timeline
/// and scene registry; after that every frame renders independently.
pub struct BrandVideo {
    evaluator: Evaluator,
}

impl BrandVideo {
    pub fn new() -> EngineResult<Self> {
        let fps = video_fps();
        let config = VideoConfig {
            fps,
            canvas: video_canvas(),
        };

        let smooth = || Timing::spring(SpringConfig::smooth());
        let flip = || Timing::spring(SpringConfig::smooth().over_frames(25));
        let linear = || Timing::linear(TRANSITION_FRAMES);

        let timeline = Timeline::builder(fps)
            .segment("intro", fps.frames(durations::INTRO))
            .transition(TransitionKind::CrossFade, Timing::linear(18))
            .segment("flow-demo", fps.frames(durations::FLOW_DEMO))
            .transition(TransitionKind::Slide { dir: SlideDir::FromBottom }, smooth())
            .segment("templates", fps.frames(durations::TEMPLATES))
            // Hard cut into the demo, softened by the first light leak.
            .overlay("leak-focused", 30)
            .segment("focused-demo", fps.frames(durations::FOCUSED_DEMO))
            .transition(TransitionKind::Wipe { dir: WipeDir::FromRight }, linear())
            .segment("collaboration", fps.frames(durations::COLLABORATION))
            .transition(TransitionKind::Flip { dir: FlipDir::FromRight }, flip())
            .segment("models", fps.frames(durations::MODELS))
            .transition(TransitionKind::Slide { dir: SlideDir::FromTop }, smooth())
            .segment("text-generation", fps.frames(durations::TEXT_GEN))
            .transition(TransitionKind::CrossFade, linear())
            .segment("style-presets", fps.frames(durations::STYLE_PRESETS))
            .transition(TransitionKind::Wipe { dir: WipeDir::FromLeft }, linear())
            .segment("audio-generation", fps.frames(durations::AUDIO_GEN))
            .transition(TransitionKind::Slide { dir: SlideDir::FromBottom }, smooth())
            .segment("recorder", fps.frames(durations::RECORDER))
            .overlay("leak-editor", 30)
            .segment("editor", fps.frames(durations::EDITOR))
            .transition(TransitionKind::Flip { dir: FlipDir::FromLeft }, flip())
            .segment("inpainting", fps.frames(durations::INPAINTING))
            .transition(TransitionKind::ClockWipe, linear())
            .segment("upscaling", fps.frames(durations::UPSCALING))
            .transition(TransitionKind::CrossFade, linear())
            .segment("batch-generation", fps.frames(durations::BATCH_GEN))
            .transition(TransitionKind::Slide { dir: SlideDir::FromRight }, smooth())
            .segment("performance", fps.frames(durations::PERFORMANCE))
            .transition(TransitionKind::Wipe { dir: WipeDir::FromRight }, linear())
            .segment("open-source", fps.frames(durations::OPEN_SOURCE))
            .overlay("leak-outro", 35)
            .segment("outro", fps.frames(durations::OUTRO))
            .build()?;

        let scenes: BTreeMap<String, Box<dyn Scene>> = all_scenes()
            .into_iter()
            .map(|s| (s.name().to_string(), s))
            .collect();

        let mut overlays: BTreeMap<String, Box<dyn Scene>> = BTreeMap::new();
        overlays.insert(
            "leak-focused".into(),
            Box::new(LightLeak::new("leak-focused", 0.0, 30)),
        );
        overlays.insert(
            "leak-editor".into(),
            Box::new(LightLeak::new("leak-editor", 0.35, 30)),
        );
        overlays.insert(
            "leak-outro".into(),
            Box::new(LightLeak::new("leak-outro", 0.7, 35)),
        );

        Ok(Self {
            evaluator: Evaluator::new(config, timeline, scenes, overlays)?,
        })
    }

    pub fn config(&self) -> VideoConfig {
        self.evaluator.config()
    }

    pub fn timeline(&self) -> &Timeline {
        self.evaluator.timeline()
    }

    pub fn total_frames(&self) -> u64 {
        self.evaluator.timeline().total_frames()
    }

    pub fn render_frame(&self, frame: FrameIndex) -> EngineResult<Node> {
        self.evaluator.render_frame(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_builds() {
        BrandVideo::new().unwrap();
    }

    #[test]
    fn total_is_segment_sum_minus_transition_overlaps() {
        let video = BrandVideo::new().unwrap();
        let tl = video.timeline();
        let seg_sum: u64 = tl.segments().iter().map(|s| s.duration).sum();
        let tr_sum: u64 = tl.transitions().iter().map(|t| t.duration).sum();
        assert_eq!(seg_sum, 1830);
        assert_eq!(tr_sum, 280);
        assert_eq!(video.total_frames(), 1550);
    }

    #[test]
    fn seventeen_segments_thirteen_transitions_three_overlays() {
        let video = BrandVideo::new().unwrap();
        let tl = video.timeline();
        assert_eq!(tl.segments().len(), 17);
        assert_eq!(tl.transitions().len(), 13);
        assert_eq!(tl.overlays().len(), 3);
    }

    #[test]
    fn first_and_last_frames_render() {
        let video = BrandVideo::new().unwrap();
        video.render_frame(FrameIndex(0)).unwrap();
        video.render_frame(FrameIndex(1549)).unwrap();
        assert!(video.render_frame(FrameIndex(1550)).is_err());
    }
}
