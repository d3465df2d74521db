//! Full-bleed scene backdrops: the scrolling grid and the drifting aurora.

use crate::animation::noise::noise2;
use crate::brand::constants::colors;
use crate::foundation::core::Color;
use crate::render::tree::{EllipseNode, Node, PathNode, RectNode};
use crate::scene::SceneCtx;

const GRID_SPACING: f64 = 100.0;

/// Dark base fill, a slowly scrolling line grid and a center vignette.
pub fn grid_background(ctx: &SceneCtx) -> Node {
    grid_background_colored(ctx, colors::BG, colors::BG_GRID)
}

pub fn grid_background_colored(ctx: &SceneCtx, base: Color, line: Color) -> Node {
    let scroll = (ctx.f() * 0.3) % GRID_SPACING;
    let mut children = vec![Node::Rect(RectNode::filled(
        0.0, 0.0, ctx.width, ctx.height, base,
    ))];

    let line_color = line.with_alpha(line.a * 0.5);
    let mut x = -GRID_SPACING + scroll;
    while x < ctx.width + GRID_SPACING {
        children.push(Node::Path(PathNode::stroked(
            format!("M {x:.2} 0 L {x:.2} {:.0}", ctx.height),
            line_color,
            1.0,
        )));
        x += GRID_SPACING;
    }
    let mut y = -GRID_SPACING + scroll;
    while y < ctx.height + GRID_SPACING {
        children.push(Node::Path(PathNode::stroked(
            format!("M 0 {y:.2} L {:.0} {y:.2}", ctx.width),
            line_color,
            1.0,
        )));
        y += GRID_SPACING;
    }

    // Vignette: oversized radial blob that darkens the edges.
    children.push(Node::Ellipse(EllipseNode {
        blur_px: Some(300.0),
        ..EllipseNode::circle(
            ctx.width / 2.0,
            ctx.height / 2.0,
            ctx.width * 0.75,
            base.with_alpha(0.0),
        )
    }));

    Node::group(children)
}

struct AuroraBlob {
    color: Color,
    base_x: f64,
    base_y: f64,
    radius: f64,
    drift_key: &'static str,
    speed: f64,
}

const AURORA_BLOBS: [AuroraBlob; 4] = [
    AuroraBlob {
        color: colors::PRIMARY,
        base_x: 0.25,
        base_y: 0.3,
        radius: 420.0,
        drift_key: "aurora-0",
        speed: 0.008,
    },
    AuroraBlob {
        color: colors::SECONDARY,
        base_x: 0.75,
        base_y: 0.35,
        radius: 380.0,
        drift_key: "aurora-1",
        speed: 0.011,
    },
    AuroraBlob {
        color: colors::BRAND_CYAN,
        base_x: 0.5,
        base_y: 0.75,
        radius: 460.0,
        drift_key: "aurora-2",
        speed: 0.006,
    },
    AuroraBlob {
        color: colors::ACCENT,
        base_x: 0.15,
        base_y: 0.8,
        radius: 320.0,
        drift_key: "aurora-3",
        speed: 0.009,
    },
];

/// Dark base with four heavily blurred color blobs drifting on coherent
/// noise. `intensity` scales blob opacity.
pub fn aurora_background(ctx: &SceneCtx, intensity: f64) -> Node {
    let mut children = vec![Node::Rect(RectNode::filled(
        0.0,
        0.0,
        ctx.width,
        ctx.height,
        colors::BG,
    ))];

    for blob in &AURORA_BLOBS {
        let t = ctx.f() * blob.speed;
        let dx = noise2(blob.drift_key, t, 0.0) * 180.0;
        let dy = noise2(blob.drift_key, 0.0, t) * 120.0;
        children.push(Node::Ellipse(EllipseNode {
            blur_px: Some(160.0),
            ..EllipseNode::circle(
                blob.base_x * ctx.width + dx,
                blob.base_y * ctx.height + dy,
                blob.radius,
                blob.color.with_alpha(0.16 * intensity),
            )
        }));
    }

    Node::group(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{video_canvas, video_fps};

    fn ctx(frame: u64) -> SceneCtx {
        SceneCtx::new(frame, video_fps(), video_canvas())
    }

    #[test]
    fn grid_covers_the_canvas() {
        let node = grid_background(&ctx(0));
        let Node::Group(g) = node else { panic!() };
        // base fill + at least 19 vertical + 10 horizontal lines + vignette
        assert!(g.children.len() > 30);
    }

    #[test]
    fn grid_scrolls_between_frames() {
        assert_eq!(grid_background(&ctx(7)), grid_background(&ctx(7)));
        assert_ne!(grid_background(&ctx(7)), grid_background(&ctx(8)));
    }

    #[test]
    fn aurora_is_deterministic() {
        assert_eq!(
            aurora_background(&ctx(42), 1.0),
            aurora_background(&ctx(42), 1.0),
        );
    }
}
