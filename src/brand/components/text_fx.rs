//! Animated typography: per-character reveals, word splits, highlight
//! sweeps and kinetic word stacks.

use crate::animation::interp::ramp;
use crate::animation::noise::noise2;
use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::brand::components::{char_advance, text_width};
use crate::brand::constants::colors;
use crate::foundation::core::Color;
use crate::render::tree::{Node, RectNode, TextNode, Transform};
use crate::scene::SceneCtx;

/// Per-character entrance: each glyph springs up from `offset_y` with a
/// stagger, optionally de-blurring on the way in.
#[derive(Clone, Debug)]
pub struct CharacterReveal {
    pub text: String,
    pub size_px: f64,
    pub color: Color,
    pub weight: u16,
    pub delay: u64,
    pub stagger: u64,
    pub spring: SpringConfig,
    pub offset_y: f64,
    pub blur: bool,
    pub letter_spacing_px: f64,
}

impl CharacterReveal {
    pub fn new(text: impl Into<String>, size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            size_px,
            color,
            weight: 700,
            delay: 0,
            stagger: 1,
            spring: SpringConfig {
                mass: 0.4,
                stiffness: 100.0,
                damping: 12.0,
                duration_frames: None,
            },
            offset_y: 30.0,
            blur: false,
            letter_spacing_px: 0.0,
        }
    }

    pub fn delay(mut self, frames: u64) -> Self {
        self.delay = frames;
        self
    }

    pub fn stagger(mut self, frames: u64) -> Self {
        self.stagger = frames;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn offset_y(mut self, px: f64) -> Self {
        self.offset_y = px;
        self
    }

    pub fn blurred(mut self) -> Self {
        self.blur = true;
        self
    }

    pub fn spacing(mut self, px: f64) -> Self {
        self.letter_spacing_px = px;
        self
    }

    /// Render centered at `(cx, baseline_y)`.
    pub fn render(&self, ctx: &SceneCtx, cx: f64, baseline_y: f64) -> Node {
        let total = text_width(&self.text, self.size_px, self.letter_spacing_px);
        let mut x = cx - total / 2.0;
        let mut children = Vec::new();

        for (i, ch) in self.text.chars().enumerate() {
            let char_delay = self.delay + i as u64 * self.stagger;
            let spr = spring_delayed(ctx.frame as i64, char_delay as i64, ctx.fps, &self.spring);

            let y = baseline_y + self.offset_y * (1.0 - spr);
            let mut node = TextNode::new(x, y, ch.to_string(), self.size_px, self.color)
                .weight(self.weight);
            if self.blur {
                let b = 8.0 * (1.0 - spr);
                if b > 0.1 {
                    node.blur_px = Some(b);
                }
            }
            children.push(Node::Text(node).with_opacity(spr));

            x += char_advance(ch, self.size_px) + self.letter_spacing_px;
        }

        Node::group(children)
    }
}

/// Word-level entrance: words rise (or drop) into place with a stagger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitDirection {
    Up,
    Down,
    Random,
}

pub struct SplitText {
    pub text: String,
    pub size_px: f64,
    pub color: Color,
    pub weight: u16,
    pub delay: u64,
    pub stagger: u64,
    pub direction: SplitDirection,
    pub spring: SpringConfig,
}

impl SplitText {
    pub fn new(text: impl Into<String>, size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            size_px,
            color,
            weight: 700,
            delay: 0,
            stagger: 3,
            direction: SplitDirection::Up,
            spring: SpringConfig {
                mass: 0.6,
                stiffness: 120.0,
                damping: 14.0,
                duration_frames: None,
            },
        }
    }

    pub fn delay(mut self, frames: u64) -> Self {
        self.delay = frames;
        self
    }

    pub fn direction(mut self, direction: SplitDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn render(&self, ctx: &SceneCtx, cx: f64, baseline_y: f64) -> Node {
        let gap = self.size_px * 0.3;
        let words: Vec<&str> = self.text.split(' ').collect();
        let total: f64 = words
            .iter()
            .map(|w| text_width(w, self.size_px, 0.0))
            .sum::<f64>()
            + gap * words.len().saturating_sub(1) as f64;

        let mut x = cx - total / 2.0;
        let mut children = Vec::new();
        for (i, word) in words.iter().enumerate() {
            let spr = spring_delayed(
                ctx.frame as i64,
                (self.delay + i as u64 * self.stagger) as i64,
                ctx.fps,
                &self.spring,
            );
            let dir = match self.direction {
                SplitDirection::Up => 1.0,
                SplitDirection::Down => -1.0,
                SplitDirection::Random => {
                    if crate::foundation::rand::seeded_unit("split-dir", i as u64) > 0.5 {
                        1.0
                    } else {
                        -1.0
                    }
                }
            };
            let y = baseline_y + 60.0 * dir * (1.0 - spr);
            children.push(
                Node::Text(
                    TextNode::new(x, y, *word, self.size_px, self.color).weight(self.weight),
                )
                .with_opacity(spr),
            );
            x += text_width(word, self.size_px, 0.0) + gap;
        }
        Node::group(children)
    }
}

/// Marker-style highlight sweeping in behind a run of text.
pub fn word_highlight(
    ctx: &SceneCtx,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: Color,
    delay: u64,
) -> Node {
    let cfg = SpringConfig {
        mass: 0.5,
        stiffness: 180.0,
        damping: 12.0,
        duration_frames: Some(20),
    };
    let progress = spring_delayed(ctx.frame as i64, delay as i64, ctx.fps, &cfg);

    // Sweep from the left edge; the skew sells the marker stroke.
    Node::Rect(RectNode {
        corner_radius: 4.0,
        ..RectNode::filled(x, y, width * progress, height, color)
    })
    .with_transform(Transform {
        rotate_deg: -2.0,
        ..Transform::default()
    })
    .with_opacity(0.9)
}

/// One word in a kinetic stack. Offsets are absolute canvas coordinates of
/// the word's anchor (centered horizontally).
#[derive(Clone, Debug)]
pub struct KineticWord {
    pub text: String,
    pub size_px: f64,
    pub weight: u16,
    pub color: Color,
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation: f64,
    pub outline: bool,
}

impl KineticWord {
    pub fn new(text: impl Into<String>, size_px: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            text: text.into(),
            size_px,
            weight: 900,
            color: colors::TEXT_BLACK,
            offset_x,
            offset_y,
            rotation: 0.0,
            outline: false,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn rotation(mut self, deg: f64) -> Self {
        self.rotation = deg;
        self
    }

    pub fn outlined(mut self) -> Self {
        self.outline = true;
        self
    }
}

/// Oversized editorial word stack: each word springs in scaled-down, blurred
/// and slightly rotated, with per-word coherent-noise micro drift.
pub fn kinetic_type(
    ctx: &SceneCtx,
    words: &[KineticWord],
    base_delay: u64,
    stagger: u64,
    noise_intensity: f64,
) -> Node {
    let cfg = SpringConfig {
        mass: 0.5,
        stiffness: 100.0,
        damping: 14.0,
        duration_frames: None,
    };

    let children = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let delay = base_delay + i as u64 * stagger;
            let spr = spring_delayed(ctx.frame as i64, delay as i64, ctx.fps, &cfg);

            let scale = ramp(spr, &[0.0, 1.0], &[0.3, 1.0]);
            let blur = ramp(spr, &[0.0, 1.0], &[12.0, 0.0]);
            let y_rise = ramp(spr, &[0.0, 1.0], &[40.0, 0.0]);
            let rotation = ramp(spr, &[0.0, 1.0], &[word.rotation + 8.0, word.rotation]);

            let nx = noise2(&format!("kt-x-{i}"), ctx.f() * 0.01, i as f64 * 5.0)
                * noise_intensity;
            let ny = noise2(&format!("kt-y-{i}"), i as f64 * 5.0, ctx.f() * 0.01)
                * noise_intensity;

            let mut text = TextNode::new(0.0, 0.0, word.text.clone(), word.size_px, word.color)
                .weight(word.weight)
                .align(crate::render::tree::TextAlign::Center)
                .letter_spacing(word.size_px * -0.04);
            if word.outline {
                // Outline style: the host strokes text with transparent fill.
                text.color = word.color.with_alpha(0.0);
            }
            if blur > 0.5 {
                text.blur_px = Some(blur);
            }

            Node::Text(text)
                .with_transform(Transform {
                    translate_x: word.offset_x + nx,
                    translate_y: word.offset_y + y_rise + ny,
                    scale,
                    rotate_deg: rotation,
                    ..Transform::default()
                })
                .with_opacity(spr)
        })
        .collect();

    Node::group(children)
}

/// Simple eased fade-in helper used all over the scenes.
pub fn fade_in(ctx: &SceneCtx, start: f64, end: f64) -> f64 {
    ramp(ctx.f(), &[start, end], &[0.0, 1.0])
}

/// Fade in, hold, fade out.
pub fn fade_in_out(ctx: &SceneCtx, t_in: (f64, f64), t_out: (f64, f64)) -> f64 {
    ramp(
        ctx.f(),
        &[t_in.0, t_in.1, t_out.0, t_out.1],
        &[0.0, 1.0, 1.0, 0.0],
    )
}
