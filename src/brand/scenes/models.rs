//! Model roster: the frontier-model grid flipping in card by card.

use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::brand::components::backgrounds::aurora_background;
use crate::brand::components::shapes3d::rotating_sphere;
use crate::brand::components::text_fx::{SplitText, fade_in};
use crate::brand::constants::colors;
use crate::foundation::core::Color;
use crate::render::tree::{EllipseNode, Node, RectNode, TextNode, Transform};
use crate::scene::{Scene, SceneCtx};

const MODELS: [(&str, &str); 8] = [
    ("GPT-4o", "TEXT + VISION"),
    ("Claude 3.5", "TEXT + VISION"),
    ("Midjourney 6", "IMAGE"),
    ("Runway Gen-3", "VIDEO"),
    ("Pika Art", "VIDEO"),
    ("Suno v3", "AUDIO"),
    ("ElevenLabs", "VOICE"),
    ("Gemini 1.5", "TEXT + VISION"),
];

const MODEL_ACCENTS: [Color; 8] = [
    colors::SUCCESS,
    colors::WARNING,
    colors::SECONDARY,
    colors::BRAND_CYAN,
    colors::ACCENT,
    colors::PRIMARY,
    colors::BRAND_LIGHT,
    colors::BRAND,
];

pub struct Models {
    headline: SplitText,
}

impl Models {
    pub fn new() -> Self {
        Self {
            headline: SplitText::new("Every frontier model", 64.0, colors::TEXT),
        }
    }
}

impl Default for Models {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Models {
    fn name(&self) -> &'static str {
        "models"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let mut children = vec![
            aurora_background(ctx, 0.5),
            rotating_sphere(ctx, ctx.width - 180.0, 160.0, 130.0, colors::BORDER_BRIGHT, 6)
                .with_opacity(0.5),
            self.headline.render(ctx, ctx.width / 2.0, 160.0),
            Node::Text(
                TextNode::new(
                    ctx.width / 2.0,
                    210.0,
                    "One canvas. No tab-switching.",
                    22.0,
                    colors::TEXT_MUTED,
                )
                .align(crate::render::tree::TextAlign::Center),
            )
            .with_opacity(fade_in(ctx, 12.0, 26.0)),
        ];

        let cfg = SpringConfig {
            mass: 0.6,
            stiffness: 140.0,
            damping: 16.0,
            duration_frames: None,
        };
        let card_w = 380.0;
        let card_h = 260.0;
        let gap = 32.0;
        let x0 = (ctx.width - (4.0 * card_w + 3.0 * gap)) / 2.0;
        let y0 = 300.0;

        for (i, (name, tag)) in MODELS.iter().enumerate() {
            let col = i % 4;
            let row = i / 4;
            let x = x0 + col as f64 * (card_w + gap);
            let y = y0 + row as f64 * (card_h + gap);
            let accent = MODEL_ACCENTS[i];

            let spr = spring_delayed(ctx.frame as i64, 15 + i as i64 * 3, ctx.fps, &cfg);

            children.push(
                Node::group(vec![
                    Node::Rect(RectNode {
                        corner_radius: 14.0,
                        stroke: Some(colors::BORDER),
                        stroke_width: 1.0,
                        ..RectNode::filled(x, y, card_w, card_h, colors::GLASS)
                    }),
                    Node::Ellipse(EllipseNode::circle(
                        x + card_w / 2.0,
                        y + 90.0,
                        34.0,
                        accent.with_alpha(0.25),
                    )),
                    Node::Ellipse(EllipseNode::circle(x + card_w / 2.0, y + 90.0, 14.0, accent)),
                    Node::Text(
                        TextNode::new(x + card_w / 2.0, y + 170.0, *name, 26.0, colors::TEXT)
                            .weight(700)
                            .align(crate::render::tree::TextAlign::Center),
                    ),
                    Node::Text(
                        TextNode::new(x + card_w / 2.0, y + 205.0, *tag, 12.0, colors::TEXT_MUTED)
                            .letter_spacing(2.0)
                            .align(crate::render::tree::TextAlign::Center),
                    ),
                ])
                .with_transform(Transform {
                    translate_y: 40.0 * (1.0 - spr),
                    scale: 0.9 + 0.1 * spr,
                    ..Transform::default()
                })
                .with_opacity(spr),
            );
        }

        Node::group(children)
    }
}
