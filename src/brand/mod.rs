//! The Creativly brand video: seventeen scenes of animated typography,
//! particles and mocked product UI, authored purely against the engine
//! primitives. Everything in here is creative parameterization; nothing in
//! here extends the engine.

pub mod components;
pub mod constants;
pub mod scenes;
pub mod video;
