//! Generative fill: a brushed mask region regenerates, with the tool chips
//! underneath.

use crate::animation::interp::ramp;
use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::glow::glow_orb;
use crate::brand::components::text_fx::{CharacterReveal, fade_in};
use crate::brand::constants::colors;
use crate::render::tree::{EllipseNode, Gradient, Node, RectNode, TextNode};
use crate::scene::{Scene, SceneCtx};

const TOOLS: [&str; 4] = [
    "Fill & Fix",
    "Object Removal",
    "Style Transfer",
    "Background Replace",
];

pub struct Inpainting {
    title: CharacterReveal,
}

impl Inpainting {
    pub fn new() -> Self {
        Self {
            title: CharacterReveal::new("GENERATIVE FILL", 84.0, colors::TEXT)
                .stagger(2)
                .blurred(),
        }
    }
}

impl Default for Inpainting {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Inpainting {
    fn name(&self) -> &'static str {
        "inpainting"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let cx = ctx.width / 2.0;
        let img_x = cx - 500.0;
        let img_y = 280.0;

        // Mask sweeps across the brushed region, then the fill resolves.
        let brush = ramp(ctx.f(), &[20.0, 50.0], &[0.0, 1.0]);
        let resolve = ramp(ctx.f(), &[55.0, 80.0], &[0.0, 1.0]);

        let mut children = vec![
            grid_background(ctx),
            self.title.render(ctx, cx, 180.0),
            // Source image stand-in.
            Node::Rect(RectNode {
                corner_radius: 16.0,
                gradient: Some(Gradient {
                    angle_deg: 150.0,
                    stops: vec![
                        (0.0, colors::BRAND_DARK.with_alpha(0.5)),
                        (1.0, colors::BG_SURFACE.with_alpha(1.0)),
                    ],
                }),
                stroke: Some(colors::BORDER),
                stroke_width: 1.0,
                ..RectNode::filled(img_x, img_y, 1000.0, 520.0, colors::BG_SURFACE)
            }),
            // Brushed mask.
            Node::Ellipse(EllipseNode {
                blur_px: Some(30.0),
                ..EllipseNode::circle(
                    img_x + 620.0,
                    img_y + 260.0,
                    170.0 * brush,
                    colors::SECONDARY.with_alpha(0.35 * (1.0 - resolve)),
                )
            }),
            glow_orb(
                ctx,
                img_x + 620.0,
                img_y + 260.0,
                150.0 * resolve,
                colors::BRAND_CYAN.with_alpha(0.3 * resolve),
                0.0,
                0.08,
            ),
        ];

        let cfg = SpringConfig {
            mass: 0.5,
            stiffness: 160.0,
            damping: 16.0,
            duration_frames: None,
        };
        let chip_w = 280.0;
        let total = TOOLS.len() as f64 * chip_w + 3.0 * 24.0;
        for (i, tool) in TOOLS.iter().enumerate() {
            let x = cx - total / 2.0 + i as f64 * (chip_w + 24.0);
            let spr = spring_delayed(ctx.frame as i64, 60 + i as i64 * 4, ctx.fps, &cfg);
            children.push(
                Node::group(vec![
                    Node::Rect(RectNode {
                        corner_radius: 22.0,
                        stroke: Some(colors::BORDER_BRIGHT),
                        stroke_width: 1.0,
                        ..RectNode::filled(x, 860.0, chip_w, 48.0, colors::GLASS)
                    }),
                    Node::Text(
                        TextNode::new(x + chip_w / 2.0, 890.0, *tool, 18.0, colors::TEXT)
                            .align(crate::render::tree::TextAlign::Center),
                    ),
                ])
                .with_opacity(spr),
            );
        }

        children.push(
            Node::Text(
                TextNode::new(cx, 230.0, "Paint what should change", 22.0, colors::TEXT_MUTED)
                    .align(crate::render::tree::TextAlign::Center),
            )
            .with_opacity(fade_in(ctx, 20.0, 35.0)),
        );

        Node::group(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{video_canvas, video_fps};

    #[test]
    fn tool_chips_arrive_after_the_fill() {
        let scene = Inpainting::new();
        let ctx_early = SceneCtx::new(30, video_fps(), video_canvas());
        let ctx_late = SceneCtx::new(100, video_fps(), video_canvas());
        assert_ne!(scene.render(&ctx_early), scene.render(&ctx_late));
    }
}
