//! Shared visual constants: canvas, palette, per-scene durations and the
//! named easing curves the scenes were tuned with.

use crate::animation::ease::{CubicBezier, Ease};
use crate::foundation::core::{Canvas, Color, Fps};

pub const VIDEO_WIDTH: u32 = 1920;
pub const VIDEO_HEIGHT: u32 = 1080;
pub const VIDEO_FPS: u32 = 30;

pub fn video_fps() -> Fps {
    Fps {
        num: VIDEO_FPS,
        den: 1,
    }
}

pub fn video_canvas() -> Canvas {
    Canvas {
        width: VIDEO_WIDTH,
        height: VIDEO_HEIGHT,
    }
}

pub mod colors {
    use super::Color;

    pub const BG: Color = Color::rgb(0x05, 0x05, 0x05);
    pub const BG_WHITE: Color = Color::rgb(0xFA, 0xFA, 0xFA);
    pub const BG_GRID: Color = Color::rgb(0x22, 0x22, 0x22);
    pub const BG_SURFACE: Color = Color::rgb(0x11, 0x11, 0x11);
    pub const BG_SURFACE_LIGHT: Color = Color::rgb(0xF0, 0xF0, 0xF0);
    pub const BG_GITHUB: Color = Color::rgb(0x0D, 0x11, 0x17);
    pub const BORDER: Color = Color::rgba(255, 255, 255, 0.1);
    pub const BORDER_DARK: Color = Color::rgba(0, 0, 0, 0.1);
    pub const BORDER_BRIGHT: Color = Color::rgba(255, 255, 255, 0.25);
    pub const TEXT: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const TEXT_BLACK: Color = Color::rgb(0x0A, 0x0A, 0x0A);
    pub const TEXT_MUTED: Color = Color::rgb(0xA1, 0xA1, 0xAA);
    pub const TEXT_MUTED_DARK: Color = Color::rgb(0x6B, 0x72, 0x80);
    pub const TEXT_DIM: Color = Color::rgb(0x52, 0x52, 0x52);
    pub const PRIMARY: Color = Color::rgb(0x3B, 0x82, 0xF6);
    pub const SECONDARY: Color = Color::rgb(0x8B, 0x5C, 0xF6);
    pub const ACCENT: Color = Color::rgb(0xF4, 0x3F, 0x5E);
    pub const SUCCESS: Color = Color::rgb(0x10, 0xB9, 0x81);
    pub const WARNING: Color = Color::rgb(0xF5, 0x9E, 0x0B);
    pub const BRAND: Color = Color::rgb(0x3B, 0x82, 0xF6);
    pub const BRAND_LIGHT: Color = Color::rgb(0x67, 0xE8, 0xF9);
    pub const BRAND_DARK: Color = Color::rgb(0x25, 0x63, 0xEB);
    pub const BRAND_CYAN: Color = Color::rgb(0x06, 0xB6, 0xD4);
    pub const GLASS: Color = Color::rgba(20, 20, 23, 0.6);
}

/// Per-scene durations in seconds, rounded to frames at build time.
pub mod durations {
    pub const INTRO: f64 = 3.5;
    pub const FLOW_DEMO: f64 = 5.5;
    pub const TEMPLATES: f64 = 3.0;
    pub const FOCUSED_DEMO: f64 = 4.0;
    pub const COLLABORATION: f64 = 3.0;
    pub const MODELS: f64 = 3.5;
    pub const TEXT_GEN: f64 = 3.5;
    pub const STYLE_PRESETS: f64 = 4.0;
    pub const AUDIO_GEN: f64 = 3.5;
    pub const RECORDER: f64 = 3.0;
    pub const EDITOR: f64 = 3.5;
    pub const INPAINTING: f64 = 4.0;
    pub const UPSCALING: f64 = 3.5;
    pub const BATCH_GEN: f64 = 3.5;
    pub const PERFORMANCE: f64 = 2.5;
    pub const OPEN_SOURCE: f64 = 3.5;
    pub const OUTRO: f64 = 4.0;
}

pub const TRANSITION_FRAMES: u64 = 20;

pub mod easing {
    use super::{CubicBezier, Ease};

    pub const ELASTIC: Ease = Ease::Bezier(CubicBezier::new(0.1, 0.9, 0.2, 1.0));
    pub const CINEMATIC: Ease = Ease::Bezier(CubicBezier::new(0.22, 1.0, 0.36, 1.0));
    pub const EXP: Ease = Ease::Bezier(CubicBezier::new(0.19, 1.0, 0.22, 1.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_roundtrips_as_css() {
        assert_eq!(colors::PRIMARY.to_css(), "#3b82f6");
        assert_eq!(colors::BORDER.to_css(), "rgba(255, 255, 255, 0.1)");
    }

    #[test]
    fn durations_round_to_expected_frames() {
        let fps = video_fps();
        assert_eq!(fps.frames(durations::INTRO), 105);
        assert_eq!(fps.frames(durations::FLOW_DEMO), 165);
        assert_eq!(fps.frames(durations::PERFORMANCE), 75);
    }
}
