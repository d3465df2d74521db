use crate::animation::spring::{self, SpringConfig};
use crate::foundation::core::Fps;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SlideDir {
    FromLeft,
    FromRight,
    FromTop,
    FromBottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WipeDir {
    FromLeft,
    FromRight,
    FromTop,
    FromBottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlipDir {
    FromLeft,
    FromRight,
}

/// Visual presentation of an ordinary (duration-consuming) transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TransitionKind {
    CrossFade,
    Slide { dir: SlideDir },
    Wipe { dir: WipeDir },
    ClockWipe,
    Flip { dir: FlipDir },
}

/// Pacing of a transition window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Timing {
    Linear {
        frames: u64,
    },
    /// Spring-paced; duration is the spring's settle time unless the config
    /// carries an explicit duration override.
    Spring {
        config: SpringConfig,
    },
}

impl Timing {
    pub fn linear(frames: u64) -> Self {
        Self::Linear { frames }
    }

    pub fn spring(config: SpringConfig) -> Self {
        Self::Spring { config }
    }

    pub fn duration_frames(&self, fps: Fps) -> u64 {
        match self {
            Self::Linear { frames } => *frames,
            Self::Spring { config } => config
                .duration_frames
                .unwrap_or_else(|| spring::settle_duration_frames(config, fps)),
        }
    }

    /// Progress in [0, 1] at `local` frames into the window. Linear pacing
    /// maps the last frame of an N-frame window to exactly 1; spring pacing
    /// ends at the spring's settle threshold, a hair below 1, and the cut
    /// after the window closes the remaining gap.
    pub fn progress(&self, local: u64, fps: Fps) -> f64 {
        let dur = self.duration_frames(fps);
        if dur <= 1 {
            return 1.0;
        }
        let local = local.min(dur - 1);
        match self {
            Self::Linear { .. } => local as f64 / (dur - 1) as f64,
            Self::Spring { config } => spring::spring(local, fps, config).clamp(0.0, 1.0),
        }
    }
}
