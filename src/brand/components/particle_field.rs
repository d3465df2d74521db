//! Ambient particle field: a fixed set of seeded dots drifting on
//! per-particle sine phases.

use crate::animation::interp::ramp;
use crate::foundation::core::Color;
use crate::foundation::rand::seeded_unit;
use crate::render::tree::{EllipseNode, Node};
use crate::scene::SceneCtx;

/// One particle's immutable placement and motion parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Resting position as a fraction of the canvas.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    pub delay: f64,
}

/// A pre-seeded particle set. Construct once per scene; rendering any frame
/// reads the same particles, so the field is stable across frames and
/// evaluation order.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    color: Color,
    fade_in_secs: f64,
}

impl ParticleField {
    pub fn new(key: &str, count: usize, color: Color) -> Self {
        let particles = (0..count as u64)
            .map(|i| Particle {
                x: seeded_unit(&format!("{key}-x"), i),
                y: seeded_unit(&format!("{key}-y"), i),
                size: seeded_unit(&format!("{key}-size"), i) * 3.0 + 1.0,
                speed: seeded_unit(&format!("{key}-speed"), i) * 0.5 + 0.2,
                opacity: seeded_unit(&format!("{key}-opacity"), i) * 0.4 + 0.1,
                delay: seeded_unit(&format!("{key}-delay"), i) * 60.0,
            })
            .collect();
        Self {
            particles,
            color,
            fade_in_secs: 1.0,
        }
    }

    pub fn fade_in_secs(mut self, secs: f64) -> Self {
        self.fade_in_secs = secs;
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn render(&self, ctx: &SceneCtx) -> Node {
        let fade_frames = self.fade_in_secs * ctx.fps.as_f64();
        let field_opacity = ramp(ctx.f(), &[0.0, fade_frames.max(1.0)], &[0.0, 1.0]);

        let children = self
            .particles
            .iter()
            .map(|p| {
                let t = ctx.f() + p.delay;
                let drift_x = (t * 0.02 * p.speed).sin() * 30.0;
                let float_y = (t * 0.015 * p.speed).cos() * 20.0;
                let pulse = 0.5 + 0.5 * (t * 0.05).sin();
                Node::Ellipse(EllipseNode::circle(
                    p.x * ctx.width + drift_x,
                    p.y * ctx.height + float_y,
                    p.size,
                    self.color,
                ))
                .with_opacity(p.opacity * pulse)
            })
            .collect();

        Node::group(children).with_opacity(field_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{colors, video_canvas, video_fps};

    fn ctx(frame: u64) -> SceneCtx {
        SceneCtx::new(frame, video_fps(), video_canvas())
    }

    #[test]
    fn field_is_stable_across_constructions() {
        let a = ParticleField::new("intro", 60, colors::TEXT);
        let b = ParticleField::new("intro", 60, colors::TEXT);
        assert_eq!(a.particles()[7], b.particles()[7]);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn distinct_keys_give_distinct_fields() {
        let a = ParticleField::new("intro", 60, colors::TEXT);
        let b = ParticleField::new("outro", 60, colors::TEXT);
        assert_ne!(a.particles()[0], b.particles()[0]);
    }

    #[test]
    fn parameters_stay_in_documented_ranges() {
        let field = ParticleField::new("bounds", 200, colors::TEXT);
        for p in field.particles() {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.size));
            assert!((0.2..0.7).contains(&p.speed));
            assert!((0.1..0.5).contains(&p.opacity));
            assert!((0.0..60.0).contains(&p.delay));
        }
    }

    #[test]
    fn renders_one_dot_per_particle() {
        let field = ParticleField::new("intro", 60, colors::TEXT);
        let Node::Group(g) = field.render(&ctx(30)) else { panic!() };
        assert_eq!(g.children.len(), 60);
    }

    #[test]
    fn fades_in_over_configured_window() {
        let field = ParticleField::new("intro", 10, colors::TEXT).fade_in_secs(1.0);
        let Node::Group(at_zero) = field.render(&ctx(0)) else { panic!() };
        let Node::Group(at_end) = field.render(&ctx(30)) else { panic!() };
        assert_eq!(at_zero.opacity, 0.0);
        assert_eq!(at_end.opacity, 1.0);
    }
}
