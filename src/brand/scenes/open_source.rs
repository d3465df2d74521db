//! Open source: the repository card on the GitHub-dark backdrop.

use crate::animation::interp::{InterpConfig, interpolate};
use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::brand::components::particle_field::ParticleField;
use crate::brand::components::text_fx::{CharacterReveal, fade_in};
use crate::brand::constants::{colors, easing};
use crate::render::tree::{EllipseNode, Node, RectNode, TextNode, Transform};
use crate::scene::{Scene, SceneCtx};

pub struct OpenSource {
    kicker: CharacterReveal,
    headline: CharacterReveal,
    stars: ParticleField,
}

impl OpenSource {
    pub fn new() -> Self {
        Self {
            kicker: CharacterReveal::new("OPEN", 120.0, colors::TEXT).stagger(2),
            headline: CharacterReveal::new("SOURCE", 120.0, colors::SUCCESS)
                .stagger(2)
                .delay(8),
            stars: ParticleField::new("oss-stars", 40, colors::TEXT).fade_in_secs(1.0),
        }
    }
}

impl Default for OpenSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for OpenSource {
    fn name(&self) -> &'static str {
        "open-source"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let cx = ctx.width / 2.0;
        let card_w = 760.0;
        let card_x = cx - card_w / 2.0;
        let card_y = 620.0;

        let cfg = SpringConfig {
            mass: 0.7,
            stiffness: 120.0,
            damping: 14.0,
            duration_frames: None,
        };
        let card_spr = spring_delayed(ctx.frame as i64, 25, ctx.fps, &cfg);

        let star_count = interpolate(
            ctx.f(),
            &[35.0, 75.0],
            &[0.0, 24_800.0],
            InterpConfig::eased(easing::EXP),
        );

        Node::group(vec![
            Node::Rect(RectNode::filled(0.0, 0.0, ctx.width, ctx.height, colors::BG_GITHUB)),
            self.stars.render(ctx),
            self.kicker.render(ctx, cx, 380.0),
            self.headline.render(ctx, cx, 520.0),
            // Repo card.
            Node::group(vec![
                Node::Rect(RectNode {
                    corner_radius: 14.0,
                    stroke: Some(colors::BORDER),
                    stroke_width: 1.0,
                    ..RectNode::filled(card_x, card_y, card_w, 150.0, colors::BG_SURFACE)
                }),
                Node::Text(
                    TextNode::new(
                        card_x + 34.0,
                        card_y + 52.0,
                        "creativly / studio",
                        26.0,
                        colors::TEXT,
                    )
                    .weight(600)
                    .font("JetBrains Mono"),
                ),
                Node::Text(
                    TextNode::new(
                        card_x + 34.0,
                        card_y + 95.0,
                        "The generative playground. Self-host everything.",
                        17.0,
                        colors::TEXT_MUTED,
                    ),
                ),
                Node::Ellipse(EllipseNode::circle(
                    card_x + card_w - 190.0,
                    card_y + 68.0,
                    7.0,
                    colors::WARNING,
                )),
                Node::Text(
                    TextNode::new(
                        card_x + card_w - 170.0,
                        card_y + 75.0,
                        format!("{:.0}", star_count),
                        24.0,
                        colors::TEXT,
                    )
                    .weight(700)
                    .font("JetBrains Mono"),
                ),
            ])
            .with_transform(Transform::translate(0.0, 50.0 * (1.0 - card_spr)))
            .with_opacity(card_spr),
            Node::Text(
                TextNode::new(cx, 870.0, "MIT licensed. Forever.", 22.0, colors::TEXT_MUTED)
                    .align(crate::render::tree::TextAlign::Center),
            )
            .with_opacity(fade_in(ctx, 60.0, 75.0)),
        ])
    }
}
