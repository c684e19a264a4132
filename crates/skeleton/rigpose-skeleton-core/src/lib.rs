//! rigpose-skeleton-core: skeleton setup data, skins and the mutable pose
//! (engine-agnostic).
//!
//! `SkeletonData` is immutable once built and can be shared between many
//! `Skeleton` instances through an `Arc`. Each `Skeleton` owns its own pose:
//! bone local transforms and slot colors/attachments, indexed exactly like the
//! bone and slot lists of its data.

pub mod attachment;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod json;
pub mod pose;
pub mod skin;

pub use attachment::{
    Attachment, AttachmentKind, AttachmentLoader, LoaderError, RegionAttachment, RegionLoader,
};
pub use color::Color;
pub use config::Config;
pub use data::{BoneData, SkeletonData, SlotData};
pub use error::SkeletonError;
pub use json::{read_skeleton_data, read_skeleton_data_with_loader};
pub use pose::{Bone, Skeleton, Slot};
pub use skin::Skin;
