//! Monospace typewriter reveal with an optional mid-text pause and a
//! blinking block cursor.

use crate::foundation::core::Color;
use crate::render::tree::{Node, RectNode, TextNode};
use crate::scene::SceneCtx;

#[derive(Clone, Debug)]
pub struct Typewriter {
    pub text: String,
    pub size_px: f64,
    pub color: Color,
    /// Characters revealed per frame.
    pub speed: f64,
    pub delay: u64,
    /// Pause after this many characters, e.g. at a comma in a prompt.
    pub pause_after: Option<usize>,
    pub pause_frames: u64,
    pub cursor: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            size_px,
            color,
            speed: 0.8,
            delay: 0,
            pause_after: None,
            pause_frames: 15,
            cursor: true,
        }
    }

    pub fn speed(mut self, chars_per_frame: f64) -> Self {
        self.speed = chars_per_frame;
        self
    }

    pub fn delay(mut self, frames: u64) -> Self {
        self.delay = frames;
        self
    }

    pub fn pause_after(mut self, chars: usize) -> Self {
        self.pause_after = Some(chars);
        self
    }

    pub fn no_cursor(mut self) -> Self {
        self.cursor = false;
        self
    }

    /// Number of characters visible at `frame` (scene-local).
    pub fn visible_chars(&self, frame: u64) -> usize {
        let mut local = frame.saturating_sub(self.delay) as f64;
        let total = self.text.chars().count();

        if let Some(pause_at) = self.pause_after {
            let frames_to_pause = pause_at as f64 / self.speed;
            if local > frames_to_pause {
                local = frames_to_pause + (local - frames_to_pause - self.pause_frames as f64).max(0.0);
            }
        }

        ((local * self.speed).floor() as usize).min(total)
    }

    pub fn render(&self, ctx: &SceneCtx, x: f64, y: f64) -> Node {
        let visible = self.visible_chars(ctx.frame);
        let shown: String = self.text.chars().take(visible).collect();

        let mut children = vec![Node::Text(
            TextNode::new(x, y, shown.clone(), self.size_px, self.color).font("JetBrains Mono"),
        )];

        if self.cursor {
            let fps = ctx.fps.as_f64();
            let blink_on = (ctx.f() % fps) < fps / 2.0;
            let done = visible == self.text.chars().count();
            if !done || blink_on {
                let cursor_x = x + shown.chars().count() as f64 * self.size_px * 0.6;
                children.push(Node::Rect(RectNode::filled(
                    cursor_x,
                    y - self.size_px * 0.85,
                    self.size_px * 0.55,
                    self.size_px,
                    self.color,
                )));
            }
        }

        Node::group(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::colors;

    #[test]
    fn reveals_at_configured_speed() {
        let tw = Typewriter::new("hello world", 24.0, colors::TEXT).speed(1.0);
        assert_eq!(tw.visible_chars(0), 0);
        assert_eq!(tw.visible_chars(5), 5);
        assert_eq!(tw.visible_chars(100), 11);
    }

    #[test]
    fn delay_holds_the_text_back() {
        let tw = Typewriter::new("abc", 24.0, colors::TEXT).speed(1.0).delay(10);
        assert_eq!(tw.visible_chars(9), 0);
        assert_eq!(tw.visible_chars(12), 2);
    }

    #[test]
    fn pause_freezes_then_resumes() {
        let tw = Typewriter::new("abcdefghij", 24.0, colors::TEXT)
            .speed(1.0)
            .pause_after(4);
        assert_eq!(tw.visible_chars(4), 4);
        // Pause window: still 4 characters.
        assert_eq!(tw.visible_chars(10), 4);
        assert_eq!(tw.visible_chars(4 + 15), 4);
        // Resumes one char per frame after the pause.
        assert_eq!(tw.visible_chars(4 + 15 + 3), 7);
    }

    #[test]
    fn never_exceeds_text_length() {
        let tw = Typewriter::new("ab", 24.0, colors::TEXT).speed(3.0);
        assert_eq!(tw.visible_chars(1000), 2);
    }
}
