//! The Creativly mark: a seven-circle cluster, with assemble, pulse and
//! static presentation modes.

use crate::animation::interp::ramp;
use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::foundation::core::Color;
use crate::render::tree::{EllipseNode, Node, Transform};
use crate::scene::SceneCtx;

/// Circle centers in the logo's native 106 x 118 viewBox.
const CIRCLES: [(f64, f64); 7] = [
    (52.58, 17.07),
    (17.03, 37.80),
    (88.12, 37.80),
    (52.58, 58.54),
    (17.03, 79.27),
    (88.12, 79.27),
    (52.58, 100.01),
];

const CIRCLE_R: f64 = 17.03;
const VIEW_W: f64 = 106.0;
const VIEW_H: f64 = 118.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogoMode {
    /// Circles fly in one by one, rotating into place.
    Assemble { delay: u64 },
    /// Gentle whole-mark breathing.
    Pulse,
    Static,
}

/// Render the mark centered at `(cx, cy)` scaled so its height is `size`.
pub fn logo(ctx: &SceneCtx, cx: f64, cy: f64, size: f64, color: Color, mode: LogoMode) -> Node {
    let scale = size / VIEW_H;
    let cfg = SpringConfig {
        mass: 0.8,
        stiffness: 100.0,
        damping: 12.0,
        duration_frames: None,
    };

    let children = CIRCLES
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let local_x = (x - VIEW_W / 2.0) * scale;
            let local_y = (y - VIEW_H / 2.0) * scale;
            let node = EllipseNode::circle(local_x, local_y, CIRCLE_R * scale, color);

            match mode {
                LogoMode::Assemble { delay } => {
                    let spr = spring_delayed(
                        ctx.frame as i64,
                        (delay + i as u64 * 2) as i64,
                        ctx.fps,
                        &cfg,
                    );
                    let opacity = ramp(spr, &[0.0, 0.3], &[0.0, 1.0]);
                    let y_offset = 60.0 * (1.0 - spr);
                    let rotate = -90.0 * (1.0 - spr);
                    Node::Ellipse(node)
                        .with_transform(Transform {
                            translate_y: y_offset,
                            rotate_deg: rotate,
                            ..Transform::default()
                        })
                        .with_opacity(opacity)
                }
                LogoMode::Pulse | LogoMode::Static => Node::Ellipse(node),
            }
        })
        .collect();

    let breath = match mode {
        LogoMode::Pulse => 1.0 + 0.03 * (ctx.f() * 0.05).sin(),
        _ => 1.0,
    };

    Node::group(children).with_transform(Transform {
        translate_x: cx,
        translate_y: cy,
        scale: breath,
        ..Transform::default()
    })
}
