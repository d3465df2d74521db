//! Batch generation: a wall of variations popping in across the grid.

use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::text_fx::{CharacterReveal, fade_in};
use crate::brand::constants::colors;
use crate::foundation::core::Color;
use crate::foundation::rand::seeded_unit;
use crate::render::tree::{Gradient, Node, RectNode, TextNode, Transform};
use crate::scene::{Scene, SceneCtx};

const COLS: usize = 8;
const ROWS: usize = 4;

pub struct BatchGeneration {
    title: CharacterReveal,
    /// Pop-in order for the thumbnail wall, seeded once.
    delays: Vec<u64>,
    hues: Vec<f64>,
}

impl BatchGeneration {
    pub fn new() -> Self {
        let cells = (COLS * ROWS) as u64;
        Self {
            title: CharacterReveal::new("BATCH GENERATION", 76.0, colors::TEXT).stagger(1),
            delays: (0..cells)
                .map(|i| 15 + (seeded_unit("batch-delay", i) * 45.0) as u64)
                .collect(),
            hues: (0..cells).map(|i| seeded_unit("batch-hue", i)).collect(),
        }
    }
}

impl Default for BatchGeneration {
    fn default() -> Self {
        Self::new()
    }
}

const PALETTE: [Color; 5] = [
    colors::PRIMARY,
    colors::SECONDARY,
    colors::BRAND_CYAN,
    colors::ACCENT,
    colors::SUCCESS,
];

impl Scene for BatchGeneration {
    fn name(&self) -> &'static str {
        "batch-generation"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let mut children = vec![
            grid_background(ctx),
            self.title.render(ctx, ctx.width / 2.0, 160.0),
            Node::Text(
                TextNode::new(
                    ctx.width / 2.0,
                    210.0,
                    "32 variations, one prompt",
                    22.0,
                    colors::TEXT_MUTED,
                )
                .align(crate::render::tree::TextAlign::Center),
            )
            .with_opacity(fade_in(ctx, 12.0, 26.0)),
        ];

        let cfg = SpringConfig {
            mass: 0.4,
            stiffness: 170.0,
            damping: 14.0,
            duration_frames: None,
        };
        let cell_w = 196.0;
        let cell_h = 160.0;
        let gap = 16.0;
        let x0 = (ctx.width - (COLS as f64 * cell_w + (COLS - 1) as f64 * gap)) / 2.0;
        let y0 = 280.0;

        for i in 0..COLS * ROWS {
            let col = i % COLS;
            let row = i / COLS;
            let x = x0 + col as f64 * (cell_w + gap);
            let y = y0 + row as f64 * (cell_h + gap);
            let spr = spring_delayed(ctx.frame as i64, self.delays[i] as i64, ctx.fps, &cfg);

            let accent = PALETTE[(self.hues[i] * PALETTE.len() as f64) as usize % PALETTE.len()];
            children.push(
                Node::Rect(RectNode {
                    corner_radius: 10.0,
                    gradient: Some(Gradient {
                        angle_deg: 135.0,
                        stops: vec![
                            (0.0, accent.with_alpha(0.45)),
                            (1.0, accent.with_alpha(0.1)),
                        ],
                    }),
                    stroke: Some(colors::BORDER),
                    stroke_width: 1.0,
                    ..RectNode::filled(x, y, cell_w, cell_h, colors::BG_SURFACE)
                })
                .with_transform(Transform {
                    translate_x: (x + cell_w / 2.0) * (1.0 - (0.6 + 0.4 * spr)),
                    translate_y: (y + cell_h / 2.0) * (1.0 - (0.6 + 0.4 * spr)),
                    scale: 0.6 + 0.4 * spr,
                    ..Transform::default()
                })
                .with_opacity(spr),
            );
        }

        Node::group(children)
    }
}
