//! Text generation: glyph rain behind a screenplay assistant panel.

use crate::brand::components::matrix_rain::MatrixRain;
use crate::brand::components::text_fx::{CharacterReveal, fade_in};
use crate::brand::components::typewriter::Typewriter;
use crate::brand::constants::colors;
use crate::render::tree::{Node, RectNode, TextNode};
use crate::scene::{Scene, SceneCtx};

pub struct TextGeneration {
    rain: MatrixRain,
    kicker: CharacterReveal,
    headline: CharacterReveal,
    sample: Typewriter,
}

impl TextGeneration {
    pub fn new() -> Self {
        Self {
            rain: MatrixRain::new("textgen", 50, colors::SUCCESS),
            kicker: CharacterReveal::new("TEXT", 28.0, colors::SUCCESS)
                .spacing(8.0)
                .delay(5),
            headline: CharacterReveal::new("GENERATION", 120.0, colors::TEXT)
                .stagger(2)
                .delay(12)
                .blurred(),
            sample: Typewriter::new(
                "INT. STUDIO - NIGHT. The editor leans in as the cut assembles itself.",
                20.0,
                colors::TEXT_MUTED,
            )
            .speed(1.2)
            .delay(40),
        }
    }
}

impl Default for TextGeneration {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for TextGeneration {
    fn name(&self) -> &'static str {
        "text-generation"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let cx = ctx.width / 2.0;
        Node::group(vec![
            Node::Rect(RectNode::filled(0.0, 0.0, ctx.width, ctx.height, colors::BG)),
            self.rain.render(ctx).with_opacity(0.35),
            // Scrim so the type reads over the rain.
            Node::Rect(RectNode::filled(
                0.0,
                ctx.height * 0.3,
                ctx.width,
                ctx.height * 0.45,
                colors::BG.with_alpha(0.75),
            )),
            self.kicker.render(ctx, cx, ctx.height * 0.38),
            self.headline.render(ctx, cx, ctx.height * 0.52),
            Node::Text(
                TextNode::new(
                    cx,
                    ctx.height * 0.6,
                    "LLM Screenplay Assistant",
                    26.0,
                    colors::TEXT_MUTED,
                )
                .align(crate::render::tree::TextAlign::Center)
                .letter_spacing(3.0),
            )
            .with_opacity(fade_in(ctx, 30.0, 45.0)),
            self.sample.render(ctx, cx - 380.0, ctx.height * 0.68),
        ])
    }
}
