//! rigpose-animation-core: keyframe timelines and their evaluation against a
//! [`Skeleton`] pose (engine-agnostic).
//!
//! An [`Animation`] is a list of [`Timeline`]s, each bound by index to one bone
//! or slot. Evaluation is synchronous and allocation-free: a binary search
//! locates the bracketing keyframes, a [`CurveTable`] eases the segment, and the
//! result is written straight into the skeleton, blended by `alpha`.
//!
//! ```ignore
//! let data = Arc::new(read_skeleton_data(skeleton_json, &Config::default())?);
//! let walk = read_animation(walk_json, "walk", &data, &Config::default())?;
//! let mut skeleton = Skeleton::new(data);
//! walk.apply(&mut skeleton, elapsed, true);
//! ```

pub mod animation;
pub mod curve;
pub mod error;
pub mod interp;
pub mod json;
pub mod search;
pub mod timeline;

pub use animation::Animation;
pub use curve::{CurveTable, Easing, CURVE_LINEAR, CURVE_SEGMENTS, CURVE_STEPPED};
pub use error::AnimationError;
pub use json::read_animation;
pub use search::locate;
pub use timeline::{
    AttachmentTimeline, ColorFrame, ColorTimeline, RotateFrame, RotateTimeline, ScaleTimeline,
    Target, Timeline, TranslateTimeline, Vec2Frame,
};

pub use rigpose_skeleton_core::{Config, Skeleton, SkeletonData};
