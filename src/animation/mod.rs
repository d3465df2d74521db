pub mod color;
pub mod ease;
pub mod interp;
pub mod noise;
pub mod spring;
