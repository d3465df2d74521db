//! Frame evaluation: timeline state + scenes -> one style tree.
//!
//! Transition presentation happens here, as wrapper attributes on the two
//! scene subtrees: cross-fades become opacity, slides and flips become
//! transforms, wipes become clip shapes. Overlay layers are appended last in
//! paint order.

use std::collections::BTreeMap;

use crate::foundation::core::{Canvas, FrameIndex, Fps};
use crate::foundation::error::{EngineError, EngineResult};
use crate::render::tree::{ClipShape, Node, Transform};
use crate::scene::{Scene, SceneCtx};
use crate::timeline::composer::{FrameState, Timeline};
use crate::timeline::model::{FlipDir, SlideDir, TransitionKind, WipeDir};

/// Fixed host configuration; decided once, never renegotiated per frame.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct VideoConfig {
    pub fps: Fps,
    pub canvas: Canvas,
}

/// Stateless evaluator binding a timeline to its scene implementations.
pub struct Evaluator {
    config: VideoConfig,
    timeline: Timeline,
    scenes: BTreeMap<String, Box<dyn Scene>>,
    overlays: BTreeMap<String, Box<dyn Scene>>,
}

impl core::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Evaluator")
            .field("config", &self.config)
            .field("timeline", &self.timeline)
            .field("scenes", &self.scenes.keys().collect::<Vec<_>>())
            .field("overlays", &self.overlays.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Evaluator {
    pub fn new(
        config: VideoConfig,
        timeline: Timeline,
        scenes: BTreeMap<String, Box<dyn Scene>>,
        overlays: BTreeMap<String, Box<dyn Scene>>,
    ) -> EngineResult<Self> {
        for seg in timeline.segments() {
            if !scenes.contains_key(&seg.name) {
                return Err(EngineError::validation(format!(
                    "timeline segment '{}' has no scene implementation",
                    seg.name
                )));
            }
        }
        for ov in timeline.overlays() {
            if !overlays.contains_key(&ov.name) {
                return Err(EngineError::validation(format!(
                    "timeline overlay '{}' has no scene implementation",
                    ov.name
                )));
            }
        }
        Ok(Self {
            config,
            timeline,
            scenes,
            overlays,
        })
    }

    pub fn config(&self) -> VideoConfig {
        self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[tracing::instrument(skip(self))]
    pub fn render_frame(&self, frame: FrameIndex) -> EngineResult<Node> {
        let mut layers = Vec::new();

        match self.timeline.state_at(frame)? {
            FrameState::Single { segment, local } => {
                layers.push(self.render_scene(&segment.name, local)?);
            }
            FrameState::Blend {
                from,
                from_local,
                to,
                to_local,
                transition,
                progress,
            } => {
                let exiting = self.render_scene(&from.name, from_local)?;
                let entering = self.render_scene(&to.name, to_local)?;
                layers.extend(self.present_transition(
                    transition.kind,
                    progress,
                    exiting,
                    entering,
                ));
            }
        }

        for (overlay, local) in self.timeline.overlays_at(frame) {
            layers.push(self.render_overlay(&overlay.name, local)?);
        }

        Ok(Node::group(layers))
    }

    fn render_scene(&self, name: &str, local: u64) -> EngineResult<Node> {
        let scene = self
            .scenes
            .get(name)
            .ok_or_else(|| EngineError::evaluation(format!("unknown scene '{name}'")))?;
        let ctx = SceneCtx::new(local, self.config.fps, self.config.canvas);
        Ok(scene.render(&ctx))
    }

    fn render_overlay(&self, name: &str, local: u64) -> EngineResult<Node> {
        let scene = self
            .overlays
            .get(name)
            .ok_or_else(|| EngineError::evaluation(format!("unknown overlay '{name}'")))?;
        let ctx = SceneCtx::new(local, self.config.fps, self.config.canvas);
        Ok(scene.render(&ctx))
    }

    /// Wrap the exiting and entering subtrees in the attributes that realize
    /// the transition, in paint order (bottom first).
    fn present_transition(
        &self,
        kind: TransitionKind,
        progress: f64,
        exiting: Node,
        entering: Node,
    ) -> Vec<Node> {
        let w = f64::from(self.config.canvas.width);
        let h = f64::from(self.config.canvas.height);
        let p = progress.clamp(0.0, 1.0);

        match kind {
            TransitionKind::CrossFade => {
                vec![exiting, entering.with_opacity(p)]
            }
            TransitionKind::Slide { dir } => {
                let (ex, ey, nx, ny) = match dir {
                    SlideDir::FromBottom => (0.0, -h * p, 0.0, h * (1.0 - p)),
                    SlideDir::FromTop => (0.0, h * p, 0.0, -h * (1.0 - p)),
                    SlideDir::FromRight => (-w * p, 0.0, w * (1.0 - p), 0.0),
                    SlideDir::FromLeft => (w * p, 0.0, -w * (1.0 - p), 0.0),
                };
                vec![
                    exiting.with_transform(Transform::translate(ex, ey)),
                    entering.with_transform(Transform::translate(nx, ny)),
                ]
            }
            TransitionKind::Wipe { dir } => {
                let clip = match dir {
                    WipeDir::FromLeft => ClipShape::Inset {
                        left: 0.0,
                        right: 1.0 - p,
                        top: 0.0,
                        bottom: 0.0,
                    },
                    WipeDir::FromRight => ClipShape::Inset {
                        left: 1.0 - p,
                        right: 0.0,
                        top: 0.0,
                        bottom: 0.0,
                    },
                    WipeDir::FromTop => ClipShape::Inset {
                        left: 0.0,
                        right: 0.0,
                        top: 0.0,
                        bottom: 1.0 - p,
                    },
                    WipeDir::FromBottom => ClipShape::Inset {
                        left: 0.0,
                        right: 0.0,
                        top: 1.0 - p,
                        bottom: 0.0,
                    },
                };
                vec![exiting, entering.with_clip(clip)]
            }
            TransitionKind::ClockWipe => {
                let clip = ClipShape::Wedge {
                    cx: w / 2.0,
                    cy: h / 2.0,
                    sweep_deg: 360.0 * p,
                };
                vec![exiting, entering.with_clip(clip)]
            }
            TransitionKind::Flip { dir } => {
                let sign = match dir {
                    FlipDir::FromRight => 1.0,
                    FlipDir::FromLeft => -1.0,
                };
                let perspective = w;
                // Edge-on at the halfway point hides the swap between faces.
                if p < 0.5 {
                    vec![exiting.with_transform(Transform::flip_y(sign * 180.0 * p, perspective))]
                } else {
                    vec![
                        entering.with_transform(Transform::flip_y(
                            sign * (180.0 * p - 180.0),
                            perspective,
                        )),
                    ]
                }
            }
        }
    }
}
