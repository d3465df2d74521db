//! Focused generation demo: a settings panel with animated sliders beside a
//! generating preview.

use crate::animation::color::blend;
use crate::animation::interp::ramp;
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::browser_window::BrowserWindow;
use crate::brand::components::glow::pulse_rings;
use crate::brand::components::text_fx::fade_in;
use crate::brand::components::typewriter::Typewriter;
use crate::brand::constants::colors;
use crate::render::tree::{EllipseNode, Gradient, Node, RectNode, TextNode};
use crate::scene::{Scene, SceneCtx};

struct Slider {
    label: &'static str,
    /// Final fill fraction.
    target: f64,
    value_text: &'static str,
    delay: f64,
}

const SLIDERS: [Slider; 3] = [
    Slider { label: "CFG Scale", target: 0.7, value_text: "7.0", delay: 20.0 },
    Slider { label: "Steps", target: 0.55, value_text: "28", delay: 30.0 },
    Slider { label: "Sampler", target: 1.0, value_text: "DPM++", delay: 40.0 },
];

pub struct FocusedDemo {
    window: BrowserWindow,
    prompt: Typewriter,
}

impl FocusedDemo {
    pub fn new() -> Self {
        Self {
            window: BrowserWindow::new(160.0, 90.0, 1600.0, 900.0, "generate"),
            prompt: Typewriter::new(
                "A still mountain lake at dawn, mist rising, ultra detailed",
                20.0,
                colors::TEXT,
            )
            .speed(1.1)
            .delay(8),
        }
    }
}

impl Default for FocusedDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for FocusedDemo {
    fn name(&self) -> &'static str {
        "focused-demo"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let panel_x = 260.0;
        let panel_y = 220.0;
        let panel_w = 480.0;

        let mut children = vec![
            grid_background(ctx),
            self.window.render(ctx),
            // Settings panel.
            Node::Rect(RectNode {
                corner_radius: 14.0,
                stroke: Some(colors::BORDER),
                stroke_width: 1.0,
                ..RectNode::filled(panel_x, panel_y, panel_w, 620.0, colors::GLASS)
            })
            .with_opacity(fade_in(ctx, 5.0, 15.0)),
            self.prompt.render(ctx, panel_x + 30.0, panel_y + 60.0),
        ];

        for (i, slider) in SLIDERS.iter().enumerate() {
            let y = panel_y + 140.0 + i as f64 * 110.0;
            let track_w = panel_w - 60.0;
            let fill = slider.target
                * ramp(ctx.f(), &[slider.delay, slider.delay + 25.0], &[0.0, 1.0]);
            let opacity = fade_in(ctx, slider.delay - 5.0, slider.delay + 5.0);

            children.push(
                Node::group(vec![
                    Node::Text(
                        TextNode::new(panel_x + 30.0, y, slider.label, 16.0, colors::TEXT_MUTED)
                            .weight(500),
                    ),
                    Node::Text(
                        TextNode::new(
                            panel_x + panel_w - 30.0,
                            y,
                            slider.value_text,
                            16.0,
                            colors::TEXT,
                        )
                        .weight(600)
                        .align(crate::render::tree::TextAlign::Right),
                    ),
                    Node::Rect(RectNode {
                        corner_radius: 3.0,
                        ..RectNode::filled(panel_x + 30.0, y + 18.0, track_w, 6.0, colors::BORDER)
                    }),
                    Node::Rect(RectNode {
                        corner_radius: 3.0,
                        ..RectNode::filled(
                            panel_x + 30.0,
                            y + 18.0,
                            track_w * fill,
                            6.0,
                            colors::PRIMARY,
                        )
                    }),
                    Node::Ellipse(EllipseNode::circle(
                        panel_x + 30.0 + track_w * fill,
                        y + 21.0,
                        9.0,
                        colors::TEXT,
                    )),
                ])
                .with_opacity(opacity),
            );
        }

        // Preview area: shimmer until "done", then the result gradient.
        let preview_x = panel_x + panel_w + 60.0;
        let done = ramp(ctx.f(), &[70.0, 90.0], &[0.0, 1.0]);
        // Status dot warms from amber to green as the render completes.
        children.push(Node::Ellipse(EllipseNode::circle(
            panel_x + panel_w - 34.0,
            panel_y + 30.0,
            6.0,
            blend(done, colors::WARNING, colors::SUCCESS),
        )));
        children.push(Node::Rect(RectNode {
            corner_radius: 14.0,
            gradient: Some(Gradient {
                angle_deg: 160.0,
                stops: vec![
                    (0.0, colors::BRAND_CYAN.with_alpha(0.2 + 0.5 * done)),
                    (0.5, colors::PRIMARY.with_alpha(0.15 + 0.45 * done)),
                    (1.0, colors::SECONDARY.with_alpha(0.2 + 0.4 * done)),
                ],
            }),
            ..RectNode::filled(preview_x, panel_y, 940.0, 620.0, colors::BG_SURFACE)
        }));
        if done < 1.0 {
            children.push(
                pulse_rings(
                    ctx,
                    preview_x + 470.0,
                    panel_y + 310.0,
                    140.0,
                    colors::BRAND,
                    1.2,
                )
                .with_opacity(1.0 - done),
            );
            children.push(
                Node::Text(
                    TextNode::new(
                        preview_x + 470.0,
                        panel_y + 330.0,
                        "GENERATING",
                        18.0,
                        colors::TEXT_MUTED,
                    )
                    .weight(700)
                    .letter_spacing(4.0)
                    .align(crate::render::tree::TextAlign::Center),
                )
                .with_opacity(1.0 - done),
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
    fn generating_badge_disappears_when_done() {
        let scene = FocusedDemo::new();
        let mid = scene.render(&SceneCtx::new(40, video_fps(), video_canvas()));
        let end = scene.render(&SceneCtx::new(110, video_fps(), video_canvas()));
        let count = |n: &Node| match n {
            Node::Group(g) => g.children.len(),
            _ => 0,
        };
        assert!(count(&mid) > count(&end));
    }
}
