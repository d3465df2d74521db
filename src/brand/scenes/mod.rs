//! The seventeen scenes of the brand video. Each scene owns its pre-seeded
//! decorations (particle fields, rain columns, leak blobs), built once at
//! construction so every frame reads the same data.

pub mod audio_generation;
pub mod batch_generation;
pub mod collaboration;
pub mod editor;
pub mod flow_demo;
pub mod focused_demo;
pub mod inpainting;
pub mod intro;
pub mod models;
pub mod open_source;
pub mod outro;
pub mod performance;
pub mod recorder;
pub mod style_presets;
pub mod templates;
pub mod text_generation;
pub mod upscaling;

use crate::scene::Scene;

/// Every segment scene, in timeline order.
pub fn all_scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(intro::Intro::new()),
        Box::new(flow_demo::FlowDemo::new()),
        Box::new(templates::Templates::new()),
        Box::new(focused_demo::FocusedDemo::new()),
        Box::new(collaboration::Collaboration::new()),
        Box::new(models::Models::new()),
        Box::new(text_generation::TextGeneration::new()),
        Box::new(style_presets::StylePresets::new()),
        Box::new(audio_generation::AudioGeneration::new()),
        Box::new(recorder::Recorder::new()),
        Box::new(editor::Editor::new()),
        Box::new(inpainting::Inpainting::new()),
        Box::new(upscaling::Upscaling::new()),
        Box::new(batch_generation::BatchGeneration::new()),
        Box::new(performance::Performance::new()),
        Box::new(open_source::OpenSource::new()),
        Box::new(outro::Outro::new()),
    ]
}
