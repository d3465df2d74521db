pub mod composer;
pub mod model;
