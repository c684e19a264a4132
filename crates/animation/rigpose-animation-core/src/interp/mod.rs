//! Scalar interpolation helpers shared by the timeline variants.

pub mod functions;

pub use functions::{lerp_color, lerp_f32, wrap_degrees};
