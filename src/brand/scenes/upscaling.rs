//! Upscaling: before/after split with a sweeping divider.

use crate::animation::interp::{InterpConfig, interpolate};
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::text_fx::{CharacterReveal, fade_in};
use crate::brand::constants::{colors, easing};
use crate::render::tree::{ClipShape, Gradient, Node, RectNode, TextNode};
use crate::scene::{Scene, SceneCtx};

pub struct Upscaling {
    title: CharacterReveal,
}

impl Upscaling {
    pub fn new() -> Self {
        Self {
            title: CharacterReveal::new("AI UPSCALING", 84.0, colors::TEXT)
                .stagger(2)
                .spacing(4.0),
        }
    }
}

impl Default for Upscaling {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Upscaling {
    fn name(&self) -> &'static str {
        "upscaling"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let img_x = 360.0;
        let img_y = 280.0;
        let img_w = 1200.0;
        let img_h = 560.0;

        // Divider sweeps left to right, revealing the sharp version.
        let sweep = interpolate(
            ctx.f(),
            &[25.0, 85.0],
            &[0.0, 1.0],
            InterpConfig::eased(easing::CINEMATIC),
        );

        let blurry = Node::Rect(RectNode {
            corner_radius: 16.0,
            blur_px: Some(6.0),
            gradient: Some(Gradient {
                angle_deg: 140.0,
                stops: vec![
                    (0.0, colors::TEXT_DIM.with_alpha(0.6)),
                    (1.0, colors::BG_SURFACE.with_alpha(1.0)),
                ],
            }),
            ..RectNode::filled(img_x, img_y, img_w, img_h, colors::BG_SURFACE)
        });

        let sharp = Node::Rect(RectNode {
            corner_radius: 16.0,
            gradient: Some(Gradient {
                angle_deg: 140.0,
                stops: vec![
                    (0.0, colors::BRAND_LIGHT.with_alpha(0.5)),
                    (1.0, colors::BRAND_DARK.with_alpha(0.8)),
                ],
            }),
            ..RectNode::filled(img_x, img_y, img_w, img_h, colors::BG_SURFACE)
        })
        .with_clip(ClipShape::Inset {
            left: 0.0,
            right: 1.0 - sweep,
            top: 0.0,
            bottom: 0.0,
        });

        let divider_x = img_x + img_w * sweep;

        Node::group(vec![
            grid_background(ctx),
            self.title.render(ctx, ctx.width / 2.0, 180.0),
            blurry,
            sharp,
            Node::Rect(RectNode::filled(divider_x - 1.5, img_y, 3.0, img_h, colors::TEXT)),
            Node::Text(
                TextNode::new(img_x + 30.0, img_y + 40.0, "720p", 20.0, colors::TEXT_MUTED)
                    .font("JetBrains Mono"),
            ),
            Node::Text(
                TextNode::new(img_x + img_w - 30.0, img_y + 40.0, "4K", 20.0, colors::TEXT)
                    .font("JetBrains Mono")
                    .align(crate::render::tree::TextAlign::Right),
            )
            .with_opacity(fade_in(ctx, 40.0, 55.0)),
            Node::Text(
                TextNode::new(
                    ctx.width / 2.0,
                    920.0,
                    "Detail recovered, not invented",
                    24.0,
                    colors::TEXT_MUTED,
                )
                .align(crate::render::tree::TextAlign::Center),
            )
            .with_opacity(fade_in(ctx, 60.0, 75.0)),
        ])
    }
}
