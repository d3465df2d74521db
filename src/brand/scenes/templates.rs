//! Template gallery: six project cards cascading in.

use crate::brand::components::backgrounds::aurora_background;
use crate::brand::components::text_fx::{CharacterReveal, fade_in_out};
use crate::brand::constants::colors;
use crate::foundation::core::Color;
use crate::render::tree::{Gradient, Node, RectNode, Shadow, TextNode, Transform};
use crate::scene::{Scene, SceneCtx};
use crate::animation::spring::{SpringConfig, spring_delayed};

const CARDS: [(&str, &str); 6] = [
    ("Surrealist Concept Art", "IMAGE"),
    ("Launch Film + Ad Suite", "VIDEO"),
    ("UGC Product Story", "VIDEO"),
    ("Director Storyboard", "LLM"),
    ("Character Perf Rig", "VIDEO"),
    ("Brand Identity System", "IMAGE"),
];

const CARD_ACCENTS: [Color; 6] = [
    colors::PRIMARY,
    colors::SECONDARY,
    colors::ACCENT,
    colors::WARNING,
    colors::BRAND_CYAN,
    colors::SUCCESS,
];

pub struct Templates {
    title: CharacterReveal,
}

impl Templates {
    pub fn new() -> Self {
        Self {
            title: CharacterReveal::new("TEMPLATES", 64.0, colors::TEXT)
                .stagger(2)
                .spacing(10.0),
        }
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Templates {
    fn name(&self) -> &'static str {
        "templates"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let mut children = vec![
            aurora_background(ctx, 0.7),
            self.title.render(ctx, ctx.width / 2.0, 150.0),
            Node::Text(
                TextNode::new(
                    ctx.width / 2.0,
                    200.0,
                    "Start from a proven workflow",
                    24.0,
                    colors::TEXT_MUTED,
                )
                .align(crate::render::tree::TextAlign::Center),
            )
            .with_opacity(fade_in_out(ctx, (15.0, 30.0), (78.0, 89.0))),
        ];

        let cfg = SpringConfig {
            mass: 0.6,
            stiffness: 130.0,
            damping: 15.0,
            duration_frames: None,
        };
        let card_w = 480.0;
        let card_h = 300.0;
        let gap = 40.0;
        let grid_w = 3.0 * card_w + 2.0 * gap;
        let x0 = (ctx.width - grid_w) / 2.0;
        let y0 = 280.0;

        for (i, (title, kind)) in CARDS.iter().enumerate() {
            let col = i % 3;
            let row = i / 3;
            let x = x0 + col as f64 * (card_w + gap);
            let y = y0 + row as f64 * (card_h + gap);
            let accent = CARD_ACCENTS[i];

            let spr = spring_delayed(ctx.frame as i64, 12 + i as i64 * 4, ctx.fps, &cfg);
            let rise = 50.0 * (1.0 - spr);

            let card = Node::group(vec![
                Node::Rect(RectNode {
                    corner_radius: 16.0,
                    stroke: Some(colors::BORDER),
                    stroke_width: 1.0,
                    shadow: Some(Shadow {
                        dx: 0.0,
                        dy: 12.0,
                        blur_px: 32.0,
                        color: Color::rgba(0, 0, 0, 0.45),
                    }),
                    ..RectNode::filled(x, y, card_w, card_h, colors::BG_SURFACE)
                }),
                // Preview band.
                Node::Rect(RectNode {
                    corner_radius: 16.0,
                    gradient: Some(Gradient {
                        angle_deg: 135.0,
                        stops: vec![
                            (0.0, accent.with_alpha(0.35)),
                            (1.0, accent.with_alpha(0.05)),
                        ],
                    }),
                    ..RectNode::filled(x, y, card_w, card_h * 0.62, accent.with_alpha(0.2))
                }),
                Node::Text(
                    TextNode::new(x + 24.0, y + card_h - 62.0, *title, 22.0, colors::TEXT)
                        .weight(600),
                ),
                Node::Text(
                    TextNode::new(x + 24.0, y + card_h - 28.0, *kind, 12.0, accent)
                        .weight(700)
                        .letter_spacing(2.0),
                ),
            ]);

            children.push(
                card.with_transform(Transform::translate(0.0, rise))
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
    fn all_six_cards_present() {
        let scene = Templates::new();
        let Node::Group(g) = scene.render(&SceneCtx::new(60, video_fps(), video_canvas()))
        else {
            panic!()
        };
        // background + title + subtitle + 6 cards
        assert_eq!(g.children.len(), 9);
    }
}
