//! Falling-glyph rain used behind the text generation scene.

use crate::foundation::core::Color;
use crate::foundation::rand::{seeded_unit, stable_hash64};
use crate::render::tree::{Node, TextNode};
use crate::scene::SceneCtx;

const GLYPHS: &[char] = &[
    '0', '1', 'A', 'K', 'Z', 'X', '7', '3', '#', '$', '%', '&', '+', '=', '?', '>', '<', '/',
];

#[derive(Clone, Copy, Debug)]
struct Column {
    speed: f64,
    length: usize,
    offset: f64,
}

/// Pre-seeded glyph columns raining down the canvas. Head glyph is bright,
/// the tail fades out, and glyphs cycle as they fall.
#[derive(Clone, Debug)]
pub struct MatrixRain {
    key: String,
    columns: Vec<Column>,
    color: Color,
    glyph_px: f64,
}

impl MatrixRain {
    pub fn new(key: &str, columns: usize, color: Color) -> Self {
        let columns = (0..columns as u64)
            .map(|i| Column {
                speed: seeded_unit(&format!("{key}-speed"), i) * 2.0 + 1.0,
                length: (seeded_unit(&format!("{key}-length"), i) * 15.0) as usize + 8,
                offset: seeded_unit(&format!("{key}-offset"), i) * 200.0,
            })
            .collect();
        Self {
            key: key.to_string(),
            columns,
            color,
            glyph_px: 18.0,
        }
    }

    fn glyph(&self, column: usize, row: usize, frame: f64) -> char {
        let cycle = (frame * 0.1 + row as f64 * 0.5).floor() as u64;
        let h = stable_hash64(&format!("{}-glyph-{column}-{row}", self.key)) ^ cycle;
        GLYPHS[(h % GLYPHS.len() as u64) as usize]
    }

    pub fn render(&self, ctx: &SceneCtx) -> Node {
        let col_width = ctx.width / self.columns.len() as f64;
        let row_height = self.glyph_px * 1.2;

        let mut children = Vec::new();
        for (c, col) in self.columns.iter().enumerate() {
            let x = c as f64 * col_width + col_width / 2.0;
            let wrap = ctx.height + col.length as f64 * row_height;
            let head_y = ((ctx.f() * col.speed * 4.0 + col.offset) % wrap) - col.length as f64 * row_height;

            for j in 0..col.length {
                let y = head_y - j as f64 * row_height;
                if y < -row_height || y > ctx.height + row_height {
                    continue;
                }
                let (color, opacity) = if j == 0 {
                    (Color::rgb(255, 255, 255), 1.0)
                } else {
                    (self.color, 0.8 * (1.0 - j as f64 / col.length as f64))
                };
                let mut node = TextNode::new(
                    x,
                    y,
                    self.glyph(c, j, ctx.f()).to_string(),
                    self.glyph_px,
                    color,
                )
                .font("JetBrains Mono");
                if j == 0 {
                    node.blur_px = Some(0.5);
                }
                children.push(Node::Text(node).with_opacity(opacity));
            }
        }
        Node::group(children)
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
    fn rain_is_deterministic() {
        let a = MatrixRain::new("textgen", 50, colors::SUCCESS);
        let b = MatrixRain::new("textgen", 50, colors::SUCCESS);
        assert_eq!(a.render(&ctx(90)), b.render(&ctx(90)));
    }

    #[test]
    fn glyphs_cycle_over_time() {
        let rain = MatrixRain::new("textgen", 50, colors::SUCCESS);
        let first = rain.glyph(3, 2, 0.0);
        let changed = (1..300).any(|f| rain.glyph(3, 2, f as f64) != first);
        assert!(changed);
    }

    #[test]
    fn columns_move_between_frames() {
        let rain = MatrixRain::new("textgen", 50, colors::SUCCESS);
        assert_ne!(rain.render(&ctx(10)), rain.render(&ctx(11)));
    }
}
