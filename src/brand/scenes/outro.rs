//! Outro: the mark breathes over the call to action.

use crate::brand::components::backgrounds::aurora_background;
use crate::brand::components::glow::pulse_rings;
use crate::brand::components::logo::{LogoMode, logo};
use crate::brand::components::particle_field::ParticleField;
use crate::brand::components::text_fx::{CharacterReveal, fade_in};
use crate::brand::constants::colors;
use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::render::tree::{Node, RectNode, TextNode, Transform};
use crate::scene::{Scene, SceneCtx};

pub struct Outro {
    particles: ParticleField,
    headline: CharacterReveal,
}

impl Outro {
    pub fn new() -> Self {
        Self {
            particles: ParticleField::new("outro", 50, colors::TEXT).fade_in_secs(1.0),
            headline: CharacterReveal::new("START CREATING", 96.0, colors::TEXT)
                .stagger(2)
                .delay(20)
                .spacing(3.0),
        }
    }
}

impl Default for Outro {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Outro {
    fn name(&self) -> &'static str {
        "outro"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let cx = ctx.width / 2.0;
        let cy = ctx.height / 2.0;

        let cfg = SpringConfig {
            mass: 0.6,
            stiffness: 130.0,
            damping: 14.0,
            duration_frames: None,
        };
        let cta_spr = spring_delayed(ctx.frame as i64, 55, ctx.fps, &cfg);
        let cta_w = 340.0;

        Node::group(vec![
            aurora_background(ctx, 0.8),
            self.particles.render(ctx),
            pulse_rings(ctx, cx, cy - 180.0, 260.0, colors::BRAND.with_alpha(0.4), 0.6),
            logo(ctx, cx, cy - 180.0, 190.0, colors::TEXT, LogoMode::Pulse),
            self.headline.render(ctx, cx, cy + 120.0),
            Node::Text(
                TextNode::new(
                    cx,
                    cy + 180.0,
                    "creativly.ai",
                    26.0,
                    colors::TEXT_MUTED,
                )
                .align(crate::render::tree::TextAlign::Center)
                .letter_spacing(4.0),
            )
            .with_opacity(fade_in(ctx, 45.0, 60.0)),
            // CTA button.
            Node::group(vec![
                Node::Rect(RectNode {
                    corner_radius: 28.0,
                    ..RectNode::filled(cx - cta_w / 2.0, cy + 230.0, cta_w, 64.0, colors::PRIMARY)
                }),
                Node::Text(
                    TextNode::new(cx, cy + 270.0, "Try it free", 24.0, colors::TEXT)
                        .weight(700)
                        .align(crate::render::tree::TextAlign::Center),
                ),
            ])
            .with_transform(Transform {
                translate_y: 30.0 * (1.0 - cta_spr),
                scale: 0.9 + 0.1 * cta_spr,
                ..Transform::default()
            })
            .with_opacity(cta_spr),
        ])
    }
}
