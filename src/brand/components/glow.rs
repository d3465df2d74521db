//! Glow orbs and expanding pulse rings.

use crate::animation::interp::ramp;
use crate::foundation::core::Color;
use crate::render::tree::{EllipseNode, Node};
use crate::scene::SceneCtx;

/// Heavily blurred circle whose radius breathes on a sine. `delay` phase
/// shifts the pulse so neighbouring orbs don't beat in unison.
pub fn glow_orb(ctx: &SceneCtx, cx: f64, cy: f64, radius: f64, color: Color, delay: f64, speed: f64) -> Node {
    let pulse = 0.8 + 0.2 * ((ctx.f() + delay) * speed).sin();
    Node::Ellipse(EllipseNode {
        blur_px: Some(radius * 0.6),
        ..EllipseNode::circle(cx, cy, radius * pulse, color)
    })
}

/// Concentric stroke rings expanding from a point, each one a third of a
/// cycle behind the last. Rings fade in fast and out slow as they grow.
pub fn pulse_rings(ctx: &SceneCtx, cx: f64, cy: f64, max_radius: f64, color: Color, speed: f64) -> Node {
    const RING_COUNT: usize = 4;
    let cycle = ctx.fps.as_f64() / speed;

    let children = (0..RING_COUNT)
        .map(|i| {
            let phase = ((ctx.f() + cycle * i as f64 / RING_COUNT as f64) % cycle) / cycle;
            let radius = max_radius * phase;
            let opacity = ramp(phase, &[0.0, 0.2, 1.0], &[0.0, 0.8, 0.0]);
            Node::Ellipse(EllipseNode {
                fill: None,
                stroke: Some(color),
                stroke_width: 2.0,
                ..EllipseNode::circle(cx, cy, radius, color)
            })
            .with_opacity(opacity)
        })
        .collect();

    Node::group(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{colors, video_canvas, video_fps};

    fn ctx(frame: u64) -> SceneCtx {
        SceneCtx::new(frame, video_fps(), video_canvas())
    }

    #[test]
    fn orb_radius_stays_within_pulse_band() {
        for f in 0..200 {
            let node = glow_orb(&ctx(f), 960.0, 540.0, 100.0, colors::PRIMARY, 0.0, 0.05);
            let Node::Ellipse(e) = node else { panic!() };
            assert!(e.rx >= 60.0 && e.rx <= 100.0, "rx {} out of band", e.rx);
        }
    }

    #[test]
    fn rings_are_staggered() {
        let node = pulse_rings(&ctx(10), 960.0, 540.0, 300.0, colors::BRAND, 1.0);
        let Node::Group(g) = node else { panic!() };
        assert_eq!(g.children.len(), 4);
    }
}
