//! Performance flex: a render-time counter racing to its result.

use crate::animation::interp::{InterpConfig, interpolate, ramp};
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::glow::glow_orb;
use crate::brand::components::text_fx::{KineticWord, kinetic_type};
use crate::brand::constants::{colors, easing};
use crate::render::tree::{Node, RectNode, TextNode};
use crate::scene::{Scene, SceneCtx};

pub struct Performance;

impl Performance {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Performance {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Performance {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let cx = ctx.width / 2.0;

        let words = [
            KineticWord::new("LIGHTNING", 150.0, cx, 340.0)
                .color(colors::WARNING)
                .rotation(-1.0),
            KineticWord::new("FAST", 150.0, cx + 15.0, 500.0)
                .color(colors::TEXT)
                .rotation(0.5),
        ];

        // Counter races up, easing out into the final figure.
        let seconds = interpolate(
            ctx.f(),
            &[15.0, 55.0],
            &[0.0, 8.4],
            InterpConfig::eased(easing::EXP),
        );
        let counter_opacity = ramp(ctx.f(), &[12.0, 20.0], &[0.0, 1.0]);

        // Progress bar under the counter.
        let bar_w = 520.0;
        let fill = ramp(ctx.f(), &[15.0, 55.0], &[0.0, 1.0]);

        Node::group(vec![
            grid_background(ctx),
            glow_orb(ctx, cx, 420.0, 380.0, colors::WARNING.with_alpha(0.1), 0.0, 0.05),
            kinetic_type(ctx, &words, 3, 4, 2.0),
            Node::group(vec![
                Node::Text(
                    TextNode::new(cx, 680.0, "Rendered in", 24.0, colors::TEXT_MUTED)
                        .align(crate::render::tree::TextAlign::Center),
                ),
                Node::Text(
                    TextNode::new(cx, 760.0, format!("{seconds:.1}s"), 72.0, colors::TEXT)
                        .weight(800)
                        .font("JetBrains Mono")
                        .align(crate::render::tree::TextAlign::Center),
                ),
                Node::Rect(RectNode {
                    corner_radius: 3.0,
                    ..RectNode::filled(cx - bar_w / 2.0, 800.0, bar_w, 6.0, colors::BORDER)
                }),
                Node::Rect(RectNode {
                    corner_radius: 3.0,
                    ..RectNode::filled(cx - bar_w / 2.0, 800.0, bar_w * fill, 6.0, colors::WARNING)
                }),
            ])
            .with_opacity(counter_opacity),
        ])
    }
}
