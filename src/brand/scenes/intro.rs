//! Opening scene: the mark assembles, then the headline stack lands.

use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::glow::glow_orb;
use crate::brand::components::logo::{LogoMode, logo};
use crate::brand::components::particle_field::ParticleField;
use crate::brand::components::text_fx::{KineticWord, fade_in, kinetic_type};
use crate::brand::constants::colors;
use crate::render::tree::{Node, TextAlign, TextNode};
use crate::scene::{Scene, SceneCtx};

pub struct Intro {
    particles: ParticleField,
}

impl Intro {
    pub fn new() -> Self {
        Self {
            particles: ParticleField::new("intro", 60, colors::TEXT).fade_in_secs(1.5),
        }
    }
}

impl Default for Intro {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Intro {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let cx = ctx.width / 2.0;
        let cy = ctx.height / 2.0;

        let words = [
            KineticWord::new("VISUAL", 190.0, cx, cy + 120.0)
                .color(colors::TEXT)
                .rotation(-1.5),
            KineticWord::new("AI", 190.0, cx + 10.0, cy + 300.0)
                .color(colors::PRIMARY)
                .rotation(1.0),
        ];

        Node::group(vec![
            grid_background(ctx),
            glow_orb(ctx, cx, cy - 150.0, 360.0, colors::PRIMARY.with_alpha(0.12), 0.0, 0.04),
            self.particles.render(ctx),
            logo(ctx, cx, cy - 220.0, 170.0, colors::TEXT, LogoMode::Assemble { delay: 5 }),
            kinetic_type(ctx, &words, 20, 6, 3.0),
            Node::Text(
                TextNode::new(
                    cx,
                    cy + 430.0,
                    "The Generative Playground",
                    34.0,
                    colors::TEXT_MUTED,
                )
                .align(TextAlign::Center)
                .letter_spacing(6.0),
            )
            .with_opacity(fade_in(ctx, 45.0, 65.0)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{video_canvas, video_fps};

    #[test]
    fn subtitle_appears_after_headline() {
        let scene = Intro::new();
        let early = scene.render(&SceneCtx::new(10, video_fps(), video_canvas()));
        let late = scene.render(&SceneCtx::new(70, video_fps(), video_canvas()));
        assert_ne!(early, late);
    }
}
