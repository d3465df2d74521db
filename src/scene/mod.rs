//! Scene boundary.
//!
//! A scene is a pure function from its local frame to a style tree. It is
//! handed a [`SceneCtx`] and must never consult global frame numbers, wall
//! clock, or mutable state; decorative randomness is pre-seeded at
//! construction (see [`crate::foundation::rand`]).

use crate::foundation::core::{Canvas, Fps};
use crate::render::tree::Node;

#[derive(Clone, Copy, Debug)]
pub struct SceneCtx {
    /// Frame offset from the start of this scene's segment.
    pub frame: u64,
    pub fps: Fps,
    pub width: f64,
    pub height: f64,
}

impl SceneCtx {
    pub fn new(frame: u64, fps: Fps, canvas: Canvas) -> Self {
        Self {
            frame,
            fps,
            width: f64::from(canvas.width),
            height: f64::from(canvas.height),
        }
    }

    /// Local frame as f64, the shape interpolation call sites want.
    pub fn f(&self) -> f64 {
        self.frame as f64
    }

    /// Local frame shifted back by a delay, clamped at zero.
    pub fn delayed(&self, delay: u64) -> u64 {
        self.frame.saturating_sub(delay)
    }
}

pub trait Scene: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, ctx: &SceneCtx) -> Node;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delayed_clamps_at_zero() {
        let ctx = SceneCtx::new(
            5,
            Fps::new(30, 1).unwrap(),
            Canvas {
                width: 1920,
                height: 1080,
            },
        );
        assert_eq!(ctx.delayed(3), 2);
        assert_eq!(ctx.delayed(10), 0);
        assert_eq!(ctx.f(), 5.0);
    }
}
