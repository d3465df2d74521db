//! Editor: a multitrack timeline mock with a sweeping playhead.

use crate::animation::interp::{InterpConfig, interpolate, ramp};
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::browser_window::BrowserWindow;
use crate::brand::components::text_fx::{CharacterReveal, fade_in};
use crate::brand::constants::{colors, easing};
use crate::foundation::core::Color;
use crate::render::tree::{Node, RectNode, TextNode};
use crate::scene::{Scene, SceneCtx};

struct Clip {
    track: usize,
    start: f64,
    len: f64,
    color: Color,
}

const CLIPS: [Clip; 7] = [
    Clip { track: 0, start: 0.00, len: 0.35, color: colors::PRIMARY },
    Clip { track: 0, start: 0.38, len: 0.30, color: colors::PRIMARY },
    Clip { track: 0, start: 0.71, len: 0.29, color: colors::PRIMARY },
    Clip { track: 1, start: 0.10, len: 0.45, color: colors::SECONDARY },
    Clip { track: 1, start: 0.60, len: 0.32, color: colors::SECONDARY },
    Clip { track: 2, start: 0.00, len: 0.65, color: colors::SUCCESS },
    Clip { track: 2, start: 0.68, len: 0.32, color: colors::SUCCESS },
];

pub struct Editor {
    window: BrowserWindow,
    kicker: CharacterReveal,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            window: BrowserWindow::new(160.0, 90.0, 1600.0, 900.0, "editor"),
            kicker: CharacterReveal::new("PROFESSIONAL VIDEO EDITING", 48.0, colors::TEXT)
                .stagger(1),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Editor {
    fn name(&self) -> &'static str {
        "editor"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let tl_x = 260.0;
        let tl_y = 560.0;
        let tl_w = 1400.0;
        let track_h = 64.0;

        let mut children = vec![
            grid_background(ctx),
            self.window.render(ctx),
            self.kicker.render(ctx, ctx.width / 2.0, 260.0),
            // Preview monitor.
            Node::Rect(RectNode {
                corner_radius: 10.0,
                stroke: Some(colors::BORDER),
                stroke_width: 1.0,
                ..RectNode::filled(660.0, 310.0, 600.0, 210.0, Color::rgb(0x00, 0x00, 0x00))
            })
            .with_opacity(fade_in(ctx, 8.0, 18.0)),
        ];

        for (i, clip) in CLIPS.iter().enumerate() {
            let grow = interpolate(
                ctx.f(),
                &[12.0 + i as f64 * 3.0, 32.0 + i as f64 * 3.0],
                &[0.0, 1.0],
                InterpConfig::eased(easing::EXP),
            );
            let y = tl_y + clip.track as f64 * (track_h + 10.0);
            children.push(Node::Rect(RectNode {
                corner_radius: 6.0,
                stroke: Some(clip.color),
                stroke_width: 1.0,
                ..RectNode::filled(
                    tl_x + clip.start * tl_w,
                    y,
                    clip.len * tl_w * grow,
                    track_h,
                    clip.color.with_alpha(0.35),
                )
            }));
        }

        // Playhead sweeps the timeline once the clips are in.
        let head = ramp(ctx.f(), &[40.0, 100.0], &[0.0, 1.0]);
        children.push(Node::Rect(RectNode::filled(
            tl_x + head * tl_w,
            tl_y - 14.0,
            2.0,
            3.0 * (track_h + 10.0) + 4.0,
            colors::TEXT,
        )));
        children.push(
            Node::Text(
                TextNode::new(tl_x, tl_y - 26.0, "V1  V2  A1", 14.0, colors::TEXT_DIM)
                    .font("JetBrains Mono"),
            ),
        );

        Node::group(children)
    }
}
