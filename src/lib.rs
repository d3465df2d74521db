//! motionreel is a deterministic, frame-indexed motion graphics engine.
//!
//! Every animated value is a pure function of an integer frame number:
//! `f(frame, params) -> value`, with no hidden state and no wall-clock
//! dependence. A host renderer asks for any frame, in any order, in
//! parallel, and always receives the same declarative style tree.
//!
//! # Structure
//!
//! 1. **Primitives** ([`animation`], [`path`]): breakpoint interpolation,
//!    closed-form springs, string-keyed coherent noise, color blending and
//!    arc-length path reveal.
//! 2. **Timeline** ([`timeline`]): segments stitched with overlapping
//!    transitions; total duration = segment sum minus transition overlaps,
//!    with zero-duration overlay layers on top.
//! 3. **Evaluation** ([`eval`]): `Timeline + scenes + FrameIndex -> Node`,
//!    a serializable style tree the host paints.
//! 4. **Brand video** ([`brand`]): the seventeen-scene promotional video
//!    authored against the primitives above.
#![forbid(unsafe_code)]

pub mod animation;
pub mod brand;
pub mod eval;
pub mod foundation;
pub mod path;
pub mod render;
pub mod scene;
pub mod timeline;

pub use animation::color::{blend, interpolate_color};
pub use animation::ease::{CubicBezier, Ease};
pub use animation::interp::{Extrapolate, InterpConfig, interpolate, ramp};
pub use animation::noise::{noise2, noise3};
pub use animation::spring::{SpringConfig, settle_duration_frames, spring, spring_delayed};
pub use brand::video::BrandVideo;
pub use eval::evaluator::{Evaluator, VideoConfig};
pub use foundation::core::{Canvas, Color, Fps, FrameIndex};
pub use foundation::error::{EngineError, EngineResult};
pub use foundation::rand::{Rng64, seeded_range, seeded_unit, stable_hash64};
pub use path::evolve::{Connector, PathEvolution, evolve_path, evolve_svg, parse_svg_path};
pub use render::tree::{ClipShape, Node, Transform};
pub use scene::{Scene, SceneCtx};
pub use timeline::composer::{FrameState, PlacedSegment, Timeline, TimelineBuilder};
pub use timeline::model::{FlipDir, SlideDir, Timing, TransitionKind, WipeDir};
