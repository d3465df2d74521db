//! Light leak overlay: blurred warm blobs sweeping across the frame during
//! a cut, layered on top of whatever the timeline is showing.

use crate::animation::interp::ramp;
use crate::foundation::core::Color;
use crate::foundation::rand::seeded_unit;
use crate::render::tree::{EllipseNode, Node};
use crate::scene::{Scene, SceneCtx};

#[derive(Clone, Copy, Debug)]
struct LeakBlob {
    x: f64,
    y: f64,
    radius: f64,
    hue_pick: f64,
    drift: f64,
}

/// A seeded light leak. `hue_shift` rotates the blob palette so each leak in
/// the video reads slightly different; `duration_frames` shapes the fade
/// envelope and matches the overlay's placement on the timeline.
pub struct LightLeak {
    name: &'static str,
    blobs: Vec<LeakBlob>,
    hue_shift: f64,
    duration_frames: u64,
}

const LEAK_PALETTE: [Color; 4] = [
    Color::rgb(0xFF, 0xB3, 0x6B),
    Color::rgb(0xFF, 0x6B, 0x9D),
    Color::rgb(0x8B, 0x5C, 0xF6),
    Color::rgb(0x67, 0xE8, 0xF9),
];

impl LightLeak {
    pub fn new(name: &'static str, hue_shift: f64, duration_frames: u64) -> Self {
        let blobs = (0..5u64)
            .map(|i| LeakBlob {
                x: seeded_unit(&format!("{name}-x"), i),
                y: seeded_unit(&format!("{name}-y"), i) * 0.6,
                radius: seeded_unit(&format!("{name}-r"), i) * 300.0 + 200.0,
                hue_pick: seeded_unit(&format!("{name}-hue"), i),
                drift: seeded_unit(&format!("{name}-drift"), i) * 2.0 - 1.0,
            })
            .collect();
        Self {
            name,
            blobs,
            hue_shift,
            duration_frames,
        }
    }

    fn envelope(&self, frame: f64) -> f64 {
        let d = self.duration_frames.max(2) as f64;
        ramp(frame, &[0.0, d * 0.35, d * 0.65, d - 1.0], &[0.0, 1.0, 1.0, 0.0])
    }
}

impl Scene for LightLeak {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let strength = self.envelope(ctx.f());
        if strength <= 0.0 {
            return Node::empty();
        }

        let sweep = ctx.f() / self.duration_frames.max(1) as f64;
        let children = self
            .blobs
            .iter()
            .map(|blob| {
                let pick = (blob.hue_pick + self.hue_shift) % 1.0;
                let color = LEAK_PALETTE[(pick * LEAK_PALETTE.len() as f64) as usize
                    % LEAK_PALETTE.len()];
                let x = (blob.x + sweep * 0.4 * blob.drift) * ctx.width;
                let y = blob.y * ctx.height;
                Node::Ellipse(EllipseNode {
                    blur_px: Some(blob.radius * 0.5),
                    ..EllipseNode::circle(x, y, blob.radius, color.with_alpha(0.35))
                })
            })
            .collect();

        Node::group(children).with_opacity(strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{video_canvas, video_fps};

    fn ctx(frame: u64) -> SceneCtx {
        SceneCtx::new(frame, video_fps(), video_canvas())
    }

    #[test]
    fn leak_is_invisible_at_its_edges() {
        let leak = LightLeak::new("leak-test", 0.0, 30);
        assert_eq!(leak.render(&ctx(0)), Node::empty());
        assert_eq!(leak.render(&ctx(29)), Node::empty());
    }

    #[test]
    fn leak_peaks_mid_window() {
        let leak = LightLeak::new("leak-test", 0.0, 30);
        let Node::Group(mid) = leak.render(&ctx(15)) else { panic!() };
        assert_eq!(mid.opacity, 1.0);
    }

    #[test]
    fn distinct_names_seed_distinct_blobs() {
        let a = LightLeak::new("leak-a", 0.0, 30);
        let b = LightLeak::new("leak-b", 0.0, 30);
        assert_ne!(a.render(&ctx(15)), b.render(&ctx(15)));
    }
}
