//! Audio generation: a seeded waveform breathing under the headline.

use crate::brand::components::backgrounds::aurora_background;
use crate::brand::components::text_fx::{CharacterReveal, fade_in};
use crate::brand::constants::colors;
use crate::foundation::rand::seeded_unit;
use crate::render::tree::{Node, RectNode, TextNode};
use crate::scene::{Scene, SceneCtx};

const BAR_COUNT: usize = 64;
const ENGINES: [&str; 3] = ["Suno", "Udio", "ElevenLabs"];

pub struct AudioGeneration {
    kicker: CharacterReveal,
    headline: CharacterReveal,
    /// Per-bar base heights, seeded once.
    bar_heights: Vec<f64>,
}

impl AudioGeneration {
    pub fn new() -> Self {
        Self {
            kicker: CharacterReveal::new("SOUND", 28.0, colors::SUCCESS)
                .spacing(10.0)
                .delay(3),
            headline: CharacterReveal::new("GENERATIVE AUDIO", 96.0, colors::TEXT)
                .stagger(2)
                .delay(10),
            bar_heights: (0..BAR_COUNT as u64)
                .map(|i| seeded_unit("audio-bar", i) * 0.8 + 0.2)
                .collect(),
        }
    }
}

impl Default for AudioGeneration {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for AudioGeneration {
    fn name(&self) -> &'static str {
        "audio-generation"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let cx = ctx.width / 2.0;
        let mut children = vec![
            aurora_background(ctx, 0.6),
            self.kicker.render(ctx, cx, 300.0),
            self.headline.render(ctx, cx, 430.0),
        ];

        // Waveform: each bar's height modulates on its own phase.
        let wave_w = 1100.0;
        let bar_w = wave_w / BAR_COUNT as f64;
        let base_y = 640.0;
        let grow = fade_in(ctx, 20.0, 45.0);
        for (i, base) in self.bar_heights.iter().enumerate() {
            let phase = ctx.f() * 0.12 + i as f64 * 0.35;
            let h = (base * (0.55 + 0.45 * phase.sin())) * 140.0 * grow;
            let x = cx - wave_w / 2.0 + i as f64 * bar_w;
            children.push(Node::Rect(RectNode {
                corner_radius: 2.0,
                ..RectNode::filled(x, base_y - h / 2.0, bar_w * 0.6, h, colors::SUCCESS)
            }));
        }

        // Engine chips.
        let chip_y = 780.0;
        let chip_w = 170.0;
        let total = ENGINES.len() as f64 * chip_w + 40.0;
        for (i, engine) in ENGINES.iter().enumerate() {
            let x = cx - total / 2.0 + i as f64 * (chip_w + 20.0);
            let opacity = fade_in(ctx, 45.0 + i as f64 * 6.0, 55.0 + i as f64 * 6.0);
            children.push(
                Node::group(vec![
                    Node::Rect(RectNode {
                        corner_radius: 20.0,
                        stroke: Some(colors::BORDER_BRIGHT),
                        stroke_width: 1.0,
                        ..RectNode::filled(x, chip_y, chip_w, 44.0, colors::GLASS)
                    }),
                    Node::Text(
                        TextNode::new(x + chip_w / 2.0, chip_y + 28.0, *engine, 18.0, colors::TEXT)
                            .align(crate::render::tree::TextAlign::Center),
                    ),
                ])
                .with_opacity(opacity),
            );
        }

        Node::group(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{video_canvas, video_fps};

    #[test]
    fn waveform_bar_heights_are_stable() {
        let a = AudioGeneration::new();
        let b = AudioGeneration::new();
        assert_eq!(a.bar_heights, b.bar_heights);
    }

    #[test]
    fn waveform_animates() {
        let scene = AudioGeneration::new();
        let a = scene.render(&SceneCtx::new(60, video_fps(), video_canvas()));
        let b = scene.render(&SceneCtx::new(61, video_fps(), video_canvas()));
        assert_ne!(a, b);
    }
}
