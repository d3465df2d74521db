//! Screen recorder: REC badge, pulse rings and a capture region marquee.

use crate::animation::interp::ramp;
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::glow::pulse_rings;
use crate::brand::components::text_fx::CharacterReveal;
use crate::brand::constants::colors;
use crate::render::tree::{EllipseNode, Node, RectNode, TextNode};
use crate::scene::{Scene, SceneCtx};

pub struct Recorder {
    title: CharacterReveal,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            title: CharacterReveal::new("SCREEN RECORDER", 80.0, colors::TEXT)
                .stagger(1)
                .spacing(2.0),
        }
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let cx = ctx.width / 2.0;

        // Capture region expands from center.
        let expand = ramp(ctx.f(), &[10.0, 40.0], &[0.0, 1.0]);
        let region_w = 1200.0 * expand;
        let region_h = 600.0 * expand;

        // REC dot blinks once a second.
        let fps = ctx.fps.as_f64();
        let rec_on = (ctx.f() % fps) < fps / 2.0;

        let mut children = vec![
            grid_background(ctx),
            self.title.render(ctx, cx, 180.0),
            pulse_rings(ctx, cx, 620.0, 420.0, colors::ACCENT.with_alpha(0.5), 0.8),
            Node::Rect(RectNode {
                fill: None,
                stroke: Some(colors::ACCENT),
                stroke_width: 2.0,
                corner_radius: 10.0,
                ..RectNode::filled(
                    cx - region_w / 2.0,
                    620.0 - region_h / 2.0,
                    region_w,
                    region_h,
                    colors::ACCENT,
                )
            }),
        ];

        if rec_on {
            children.push(Node::Ellipse(EllipseNode::circle(
                cx - 46.0,
                300.0,
                9.0,
                colors::ACCENT,
            )));
        }
        children.push(
            Node::Text(
                TextNode::new(cx - 28.0, 307.0, "REC", 22.0, colors::TEXT)
                    .weight(700)
                    .letter_spacing(3.0),
            ),
        );

        Node::group(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{video_canvas, video_fps};

    #[test]
    fn rec_dot_blinks() {
        let scene = Recorder::new();
        let on = scene.render(&SceneCtx::new(5, video_fps(), video_canvas()));
        let off = scene.render(&SceneCtx::new(20, video_fps(), video_canvas()));
        let count = |n: &Node| match n {
            Node::Group(g) => g.children.len(),
            _ => 0,
        };
        assert_eq!(count(&on), count(&off) + 1);
    }
}
