use rigpose_skeleton_core::SkeletonError;
use thiserror::Error;

/// Errors raised while loading or validating animations. Evaluation itself
/// never fails.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("invalid animation JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bone not found: {0}")]
    BoneNotFound(String),
    #[error("slot not found: {0}")]
    SlotNotFound(String),
    #[error("invalid timeline type for a bone: {0}")]
    InvalidBoneTimeline(String),
    #[error("invalid timeline type for a slot: {0}")]
    InvalidSlotTimeline(String),
    #[error("{kind} timeline for '{target}' has no keyframes")]
    EmptyTimeline { kind: String, target: String },
    #[error("color keyframe {frame} for slot '{slot}' has no color")]
    MissingColor { slot: String, frame: usize },
    #[error(transparent)]
    Skeleton(#[from] SkeletonError),
    #[error("{kind} timeline #{timeline} targets index {index}, skeleton has {len}")]
    IndexOutOfRange {
        timeline: usize,
        kind: &'static str,
        index: usize,
        len: usize,
    },
    #[error("{kind} timeline #{timeline}: keyframe {frame} goes back in time")]
    NonMonotonicTime {
        timeline: usize,
        kind: &'static str,
        frame: usize,
    },
}
