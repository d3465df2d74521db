//! Style presets: one source image re-imagined across five looks.

use crate::animation::interp::{InterpConfig, interpolate};
use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::text_fx::{CharacterReveal, word_highlight};
use crate::brand::constants::{colors, easing};
use crate::foundation::core::Color;
use crate::render::tree::{Gradient, Node, RectNode, TextNode, Transform};
use crate::scene::{Scene, SceneCtx};

const PRESETS: [(&str, Color, Color); 5] = [
    ("Cinematic", Color::rgb(0x1E, 0x29, 0x3B), Color::rgb(0xF5, 0x9E, 0x0B)),
    ("Anime", Color::rgb(0xFF, 0x6B, 0x9D), Color::rgb(0x67, 0xE8, 0xF9)),
    ("Claymation", Color::rgb(0xC2, 0x7B, 0x4E), Color::rgb(0xF0, 0xE6, 0xD2)),
    ("Line Art", Color::rgb(0xFA, 0xFA, 0xFA), Color::rgb(0x0A, 0x0A, 0x0A)),
    ("Photographic", Color::rgb(0x2D, 0x3A, 0x2E), Color::rgb(0x9A, 0xB8, 0x9D)),
];

pub struct StylePresets {
    title: CharacterReveal,
}

impl StylePresets {
    pub fn new() -> Self {
        Self {
            title: CharacterReveal::new("ONE SHOT, EVERY STYLE", 60.0, colors::TEXT).spacing(4.0),
        }
    }
}

impl Default for StylePresets {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for StylePresets {
    fn name(&self) -> &'static str {
        "style-presets"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let mut children = vec![
            grid_background(ctx),
            word_highlight(ctx, 560.0, 118.0, 380.0, 56.0, colors::PRIMARY.with_alpha(0.3), 20),
            self.title.render(ctx, ctx.width / 2.0, 160.0),
        ];

        let cfg = SpringConfig {
            mass: 0.5,
            stiffness: 150.0,
            damping: 15.0,
            duration_frames: None,
        };
        let card_w = 320.0;
        let card_h = 480.0;
        let gap = 28.0;
        let x0 = (ctx.width - (5.0 * card_w + 4.0 * gap)) / 2.0;
        let y0 = 300.0;

        for (i, (name, top, bottom)) in PRESETS.iter().enumerate() {
            let x = x0 + i as f64 * (card_w + gap);
            let delay = 15 + i as u64 * 5;
            let spr = spring_delayed(ctx.frame as i64, delay as i64, ctx.fps, &cfg);
            let slide = interpolate(
                ctx.f(),
                &[delay as f64, delay as f64 + 20.0],
                &[80.0, 0.0],
                InterpConfig::eased(easing::CINEMATIC),
            );

            children.push(
                Node::group(vec![
                    Node::Rect(RectNode {
                        corner_radius: 18.0,
                        gradient: Some(Gradient {
                            angle_deg: 180.0,
                            stops: vec![(0.0, *top), (1.0, *bottom)],
                        }),
                        stroke: Some(colors::BORDER),
                        stroke_width: 1.0,
                        ..RectNode::filled(x, y0, card_w, card_h, *top)
                    }),
                    Node::Rect(RectNode::filled(
                        x,
                        y0 + card_h - 70.0,
                        card_w,
                        70.0,
                        colors::BG.with_alpha(0.7),
                    )),
                    Node::Text(
                        TextNode::new(
                            x + card_w / 2.0,
                            y0 + card_h - 28.0,
                            *name,
                            22.0,
                            colors::TEXT,
                        )
                        .weight(600)
                        .align(crate::render::tree::TextAlign::Center),
                    ),
                ])
                .with_transform(Transform::translate(0.0, slide))
                .with_opacity(spr),
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
    fn five_preset_cards() {
        let scene = StylePresets::new();
        let Node::Group(g) = scene.render(&SceneCtx::new(100, video_fps(), video_canvas()))
        else {
            panic!()
        };
        assert_eq!(g.children.len(), 3 + 5);
    }
}
