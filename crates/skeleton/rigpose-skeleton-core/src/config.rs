//! Reader configuration shared by the skeleton and animation descriptor readers.

use serde::{Deserialize, Serialize};

/// Configuration applied while turning descriptors into runtime data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Multiplier applied to positional values (bone offsets and lengths,
    /// attachment offsets and sizes, translate keyframes). Rotation and
    /// scale values are never scaled.
    pub scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Config {
    pub fn with_scale(scale: f32) -> Self {
        Self { scale }
    }
}
