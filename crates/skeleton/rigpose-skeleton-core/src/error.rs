use thiserror::Error;

use crate::attachment::LoaderError;

/// Errors produced while building or querying skeleton data.
#[derive(Debug, Error)]
pub enum SkeletonError {
    #[error("invalid skeleton JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("parent bone not found: {0}")]
    ParentBoneNotFound(String),
    #[error("slot bone not found: {0}")]
    SlotBoneNotFound(String),
    #[error("skin slot not found: {0}")]
    SkinSlotNotFound(String),
    #[error("unknown attachment type: {0}")]
    UnknownAttachmentType(String),
    #[error("attachment loader rejected '{name}'")]
    AttachmentLoader {
        name: String,
        #[source]
        source: LoaderError,
    },
    #[error("invalid color '{0}': expected RRGGBBAA")]
    InvalidColor(String),
    #[error("skin not found: {0}")]
    SkinNotFound(String),
    #[error("slot not found: {0}")]
    SlotNotFound(String),
    #[error("attachment not found: {attachment} (slot {slot})")]
    AttachmentNotFound { slot: String, attachment: String },
}
