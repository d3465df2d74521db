//! Faux-3D decorations: a ring-latitude wireframe sphere and a floating
//! diamond, both driven purely by the frame number.

use crate::animation::noise::noise2;
use crate::foundation::core::Color;
use crate::render::tree::{EllipseNode, Node, PathNode, Transform};
use crate::scene::SceneCtx;

/// Wireframe sphere built from latitude rings; the whole assembly spins
/// slowly around Y via per-ring horizontal squash.
pub fn rotating_sphere(ctx: &SceneCtx, cx: f64, cy: f64, radius: f64, color: Color, rings: usize) -> Node {
    let spin = ctx.f() * 0.8;
    let mut children = Vec::with_capacity(rings + 1);

    // Outline.
    children.push(Node::Ellipse(EllipseNode {
        fill: None,
        stroke: Some(color),
        stroke_width: 1.5,
        ..EllipseNode::circle(cx, cy, radius, color)
    }));

    for i in 0..rings {
        // Longitude rings: squash each ellipse's rx by the spin phase.
        let phase = (spin + i as f64 * 180.0 / rings as f64).to_radians();
        let rx = radius * phase.cos().abs();
        children.push(
            Node::Ellipse(EllipseNode {
                fill: None,
                stroke: Some(color.with_alpha(color.a * 0.6)),
                stroke_width: 1.0,
                rx,
                ry: radius,
                cx,
                cy,
                ..EllipseNode::default()
            }),
        );
    }

    // Latitude rings are static.
    for i in 1..rings {
        let t = i as f64 / rings as f64 * 2.0 - 1.0;
        let ry = radius * 0.25 * (1.0 - t * t).max(0.0);
        let y = cy + t * radius;
        children.push(Node::Ellipse(EllipseNode {
            fill: None,
            stroke: Some(color.with_alpha(color.a * 0.4)),
            stroke_width: 1.0,
            rx: radius * (1.0 - t * t).sqrt(),
            ry,
            cx,
            cy: y,
            ..EllipseNode::default()
        }));
    }

    Node::group(children)
}

/// Rotating diamond drifting on coherent noise, used as a corner accent.
pub fn floating_diamond(ctx: &SceneCtx, cx: f64, cy: f64, size: f64, color: Color, key: &str) -> Node {
    let t = ctx.f() * 0.01;
    let dx = noise2(key, t, 0.0) * 25.0;
    let dy = noise2(key, 0.0, t) * 25.0;
    let rot = ctx.f() * 0.5;

    let half = size / 2.0;
    let d = format!(
        "M 0 {:.2} L {:.2} 0 L 0 {:.2} L {:.2} 0 Z",
        -half, half, half, -half
    );

    Node::Path(PathNode {
        d,
        fill: Some(color.with_alpha(color.a * 0.15)),
        stroke: Some(color),
        stroke_width: 1.5,
        ..PathNode::default()
    })
    .with_transform(Transform {
        translate_x: cx + dx,
        translate_y: cy + dy,
        rotate_deg: rot,
        ..Transform::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{colors, video_canvas, video_fps};

    fn ctx(frame: u64) -> SceneCtx {
        SceneCtx::new(frame, video_fps(), video_canvas())
    }

    #[test]
    fn sphere_ring_count() {
        let Node::Group(g) = rotating_sphere(&ctx(0), 960.0, 540.0, 200.0, colors::BRAND, 6)
        else {
            panic!()
        };
        // outline + 6 longitude + 5 latitude
        assert_eq!(g.children.len(), 12);
    }

    #[test]
    fn sphere_spins() {
        let a = rotating_sphere(&ctx(0), 960.0, 540.0, 200.0, colors::BRAND, 6);
        let b = rotating_sphere(&ctx(10), 960.0, 540.0, 200.0, colors::BRAND, 6);
        assert_ne!(a, b);
    }

    #[test]
    fn diamond_is_deterministic() {
        let a = floating_diamond(&ctx(25), 200.0, 200.0, 60.0, colors::SECONDARY, "d1");
        let b = floating_diamond(&ctx(25), 200.0, 200.0, 60.0, colors::SECONDARY, "d1");
        assert_eq!(a, b);
    }
}
