//! Timeline placement arithmetic.
//!
//! Segments are authored independently with fixed durations; ordinary
//! transitions overlap the tail of one segment with the head of the next,
//! so each transition's length is subtracted exactly once from the naive
//! duration sum. Overlays ride on top of the composited result and consume
//! no duration at all.

use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::{EngineError, EngineResult};
use crate::timeline::model::{Timing, TransitionKind};

/// A segment placed on the global frame axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacedSegment {
    pub name: String,
    pub start: u64,
    pub duration: u64,
}

impl PlacedSegment {
    pub fn end(&self) -> u64 {
        self.start + self.duration
    }

    pub fn contains(&self, frame: u64) -> bool {
        self.start <= frame && frame < self.end()
    }

    pub fn local(&self, frame: u64) -> u64 {
        frame - self.start
    }
}

/// An ordinary transition placed between segments `from_index` and
/// `from_index + 1`, active on `[start, start + duration)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacedTransition {
    pub kind: TransitionKind,
    pub timing: Timing,
    pub from_index: usize,
    pub start: u64,
    pub duration: u64,
}

/// An overlay placed across a cut, active on `[start, start + duration)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacedOverlay {
    pub name: String,
    pub start: u64,
    pub duration: u64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    fps: Fps,
    segments: Vec<PlacedSegment>,
    transitions: Vec<PlacedTransition>,
    overlays: Vec<PlacedOverlay>,
    total: u64,
}

/// What a single global frame resolves to. Exactly one of these holds for
/// every in-range frame; active overlays are reported separately.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameState<'a> {
    /// One segment active.
    Single {
        segment: &'a PlacedSegment,
        local: u64,
    },
    /// Two adjacent segments blending inside a transition window.
    Blend {
        from: &'a PlacedSegment,
        from_local: u64,
        to: &'a PlacedSegment,
        to_local: u64,
        transition: &'a PlacedTransition,
        progress: f64,
    },
}

impl Timeline {
    pub fn builder(fps: Fps) -> TimelineBuilder {
        TimelineBuilder {
            fps,
            entries: Vec::new(),
        }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Total output duration in frames: segment sum minus transition
    /// overlaps, overlays excluded.
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    pub fn segments(&self) -> &[PlacedSegment] {
        &self.segments
    }

    pub fn transitions(&self) -> &[PlacedTransition] {
        &self.transitions
    }

    pub fn overlays(&self) -> &[PlacedOverlay] {
        &self.overlays
    }

    /// Resolve which segment(s) a global frame belongs to.
    pub fn state_at(&self, frame: FrameIndex) -> EngineResult<FrameState<'_>> {
        let f = frame.0;
        if f >= self.total {
            return Err(EngineError::evaluation(format!(
                "frame {f} is out of range (total {} frames)",
                self.total
            )));
        }

        for tr in &self.transitions {
            if tr.start <= f && f < tr.start + tr.duration {
                let from = &self.segments[tr.from_index];
                let to = &self.segments[tr.from_index + 1];
                return Ok(FrameState::Blend {
                    from,
                    from_local: from.local(f),
                    to,
                    to_local: to.local(f),
                    transition: tr,
                    progress: tr.timing.progress(f - tr.start, self.fps),
                });
            }
        }

        // Segments are contiguous by construction; outside every transition
        // window exactly one contains the frame.
        let segment = self
            .segments
            .iter()
            .find(|s| s.contains(f))
            .ok_or_else(|| EngineError::evaluation(format!("no segment covers frame {f}")))?;
        Ok(FrameState::Single {
            segment,
            local: segment.local(f),
        })
    }

    /// Overlays active at a global frame, with their local frame offsets.
    pub fn overlays_at(&self, frame: FrameIndex) -> Vec<(&PlacedOverlay, u64)> {
        let f = frame.0;
        self.overlays
            .iter()
            .filter(|o| o.start <= f && f < o.start + o.duration)
            .map(|o| (o, f - o.start))
            .collect()
    }
}

enum Entry {
    Segment { name: String, duration: u64 },
    Transition { kind: TransitionKind, timing: Timing },
    Overlay { name: String, duration: u64 },
}

pub struct TimelineBuilder {
    fps: Fps,
    entries: Vec<Entry>,
}

impl TimelineBuilder {
    pub fn segment(mut self, name: impl Into<String>, duration: u64) -> Self {
        self.entries.push(Entry::Segment {
            name: name.into(),
            duration,
        });
        self
    }

    pub fn transition(mut self, kind: TransitionKind, timing: Timing) -> Self {
        self.entries.push(Entry::Transition { kind, timing });
        self
    }

    pub fn overlay(mut self, name: impl Into<String>, duration: u64) -> Self {
        self.entries.push(Entry::Overlay {
            name: name.into(),
            duration,
        });
        self
    }

    pub fn build(self) -> EngineResult<Timeline> {
        let mut segments: Vec<PlacedSegment> = Vec::new();
        let mut transitions: Vec<PlacedTransition> = Vec::new();
        let mut overlays: Vec<(String, u64, u64)> = Vec::new(); // (name, cut, duration)
        let mut pending: Option<(TransitionKind, Timing)> = None;
        let mut cursor: u64 = 0;

        for entry in self.entries {
            match entry {
                Entry::Segment { name, duration } => {
                    if duration == 0 {
                        return Err(EngineError::timeline(format!(
                            "segment '{name}' must have a nonzero duration"
                        )));
                    }
                    if name.trim().is_empty() {
                        return Err(EngineError::timeline("segment name must be non-empty"));
                    }

                    let start = if let Some((kind, timing)) = pending.take() {
                        let dur = timing.duration_frames(self.fps);
                        let prev = segments
                            .last()
                            .expect("pending transition implies a previous segment");
                        if dur >= prev.duration {
                            return Err(EngineError::timeline(format!(
                                "transition into '{name}' ({dur} frames) must be shorter than \
                                 segment '{}' ({} frames)",
                                prev.name, prev.duration
                            )));
                        }
                        if dur >= duration {
                            return Err(EngineError::timeline(format!(
                                "transition into '{name}' ({dur} frames) must be shorter than \
                                 that segment ({duration} frames)"
                            )));
                        }
                        let start = cursor - dur;
                        transitions.push(PlacedTransition {
                            kind,
                            timing,
                            from_index: segments.len() - 1,
                            start,
                            duration: dur,
                        });
                        start
                    } else {
                        cursor
                    };

                    segments.push(PlacedSegment {
                        name,
                        start,
                        duration,
                    });
                    cursor = start + duration;
                }
                Entry::Transition { kind, timing } => {
                    if segments.is_empty() {
                        return Err(EngineError::timeline(
                            "a transition cannot precede the first segment",
                        ));
                    }
                    if pending.is_some() {
                        return Err(EngineError::timeline(
                            "two transitions in a row; a segment must sit between them",
                        ));
                    }
                    if timing.duration_frames(self.fps) == 0 {
                        return Err(EngineError::timeline(
                            "transition duration must be nonzero",
                        ));
                    }
                    pending = Some((kind, timing));
                }
                Entry::Overlay { name, duration } => {
                    if segments.is_empty() {
                        return Err(EngineError::timeline(
                            "an overlay cannot precede the first segment",
                        ));
                    }
                    if pending.is_some() {
                        return Err(EngineError::timeline(
                            "an overlay cannot share a cut with a pending transition",
                        ));
                    }
                    if duration == 0 {
                        return Err(EngineError::timeline(
                            "overlay duration must be nonzero",
                        ));
                    }
                    overlays.push((name, cursor, duration));
                }
            }
        }

        if pending.is_some() {
            return Err(EngineError::timeline(
                "timeline ends with a dangling transition",
            ));
        }
        if segments.is_empty() {
            return Err(EngineError::timeline("timeline has no segments"));
        }

        let total = cursor;
        let overlays = overlays
            .into_iter()
            .map(|(name, cut, duration)| {
                // Centered on the cut so the overlay masks it, clamped into
                // the timeline.
                let start = cut.saturating_sub(duration / 2).min(total.saturating_sub(duration));
                PlacedOverlay {
                    name,
                    start,
                    duration,
                }
            })
            .collect();

        Ok(Timeline {
            fps: self.fps,
            segments,
            transitions,
            overlays,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::spring::SpringConfig;
    use crate::timeline::model::SlideDir;

    fn fps30() -> Fps {
        Fps::new(30, 1).unwrap()
    }

    fn two_segment() -> Timeline {
        Timeline::builder(fps30())
            .segment("a", 90)
            .transition(TransitionKind::CrossFade, Timing::linear(18))
            .segment("b", 60)
            .build()
            .unwrap()
    }

    #[test]
    fn duration_subtracts_overlap_once() {
        let tl = two_segment();
        assert_eq!(tl.total_frames(), 90 + 60 - 18);
        assert_eq!(tl.segments()[0].start, 0);
        assert_eq!(tl.segments()[1].start, 72);
    }

    #[test]
    fn transition_window_blends_both_segments() {
        let tl = two_segment();
        match tl.state_at(FrameIndex(80)).unwrap() {
            FrameState::Blend {
                from_local,
                to_local,
                ..
            } => {
                assert_eq!(from_local, 80);
                assert_eq!(to_local, 8);
            }
            other => panic!("expected blend, got {other:?}"),
        }
    }

    #[test]
    fn plain_frames_resolve_to_one_segment() {
        let tl = two_segment();
        match tl.state_at(FrameIndex(10)).unwrap() {
            FrameState::Single { segment, local } => {
                assert_eq!(segment.name, "a");
                assert_eq!(local, 10);
            }
            other => panic!("expected single, got {other:?}"),
        }
        match tl.state_at(FrameIndex(100)).unwrap() {
            FrameState::Single { segment, local } => {
                assert_eq!(segment.name, "b");
                assert_eq!(local, 28);
            }
            other => panic!("expected single, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_frame_is_an_error() {
        let tl = two_segment();
        assert!(tl.state_at(FrameIndex(131)).is_ok());
        assert!(tl.state_at(FrameIndex(132)).is_err());
        assert!(tl.state_at(FrameIndex(140)).is_err());
    }

    #[test]
    fn every_frame_has_exactly_one_state() {
        let tl = two_segment();
        let mut blend_frames = 0;
        for f in 0..tl.total_frames() {
            match tl.state_at(FrameIndex(f)).unwrap() {
                FrameState::Blend { .. } => blend_frames += 1,
                FrameState::Single { .. } => {}
            }
        }
        assert_eq!(blend_frames, 18);
    }

    #[test]
    fn overlays_add_zero_duration() {
        let tl = Timeline::builder(fps30())
            .segment("a", 90)
            .overlay("leak", 30)
            .segment("b", 60)
            .build()
            .unwrap();
        assert_eq!(tl.total_frames(), 150);
        assert_eq!(tl.overlays().len(), 1);
        // Centered on the cut at frame 90.
        assert_eq!(tl.overlays()[0].start, 75);
        assert_eq!(tl.overlays_at(FrameIndex(80)).len(), 1);
        assert_eq!(tl.overlays_at(FrameIndex(80))[0].1, 5);
        assert!(tl.overlays_at(FrameIndex(110)).is_empty());
    }

    #[test]
    fn mixed_transitions_and_overlays_compose() {
        let tl = Timeline::builder(fps30())
            .segment("a", 100)
            .transition(
                TransitionKind::Slide {
                    dir: SlideDir::FromBottom,
                },
                Timing::spring(SpringConfig::smooth()),
            )
            .segment("b", 80)
            .overlay("leak", 20)
            .segment("c", 50)
            .build()
            .unwrap();
        // Spring with damping 200 settles in 23 frames at 30 fps.
        assert_eq!(tl.total_frames(), 100 + 80 + 50 - 23);
        assert_eq!(tl.overlays()[0].start, 100 + 80 - 23 - 10);
    }

    #[test]
    fn transition_longer_than_neighbor_is_rejected() {
        let err = Timeline::builder(fps30())
            .segment("a", 10)
            .transition(TransitionKind::CrossFade, Timing::linear(12))
            .segment("b", 60)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("shorter than"));

        let err = Timeline::builder(fps30())
            .segment("a", 60)
            .transition(TransitionKind::CrossFade, Timing::linear(12))
            .segment("b", 10)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("shorter than"));
    }

    #[test]
    fn structural_mistakes_are_rejected() {
        assert!(
            Timeline::builder(fps30())
                .transition(TransitionKind::CrossFade, Timing::linear(5))
                .segment("a", 30)
                .build()
                .is_err()
        );
        assert!(
            Timeline::builder(fps30())
                .segment("a", 30)
                .transition(TransitionKind::CrossFade, Timing::linear(5))
                .build()
                .is_err()
        );
        assert!(
            Timeline::builder(fps30())
                .segment("a", 30)
                .transition(TransitionKind::CrossFade, Timing::linear(5))
                .transition(TransitionKind::CrossFade, Timing::linear(5))
                .segment("b", 30)
                .build()
                .is_err()
        );
        assert!(Timeline::builder(fps30()).build().is_err());
        assert!(
            Timeline::builder(fps30())
                .segment("a", 0)
                .build()
                .is_err()
        );
    }
}
