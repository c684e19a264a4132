//! Attachments and the loader seam used by the skeleton reader.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AttachmentKind {
    Region,
    RegionSequence,
}

impl AttachmentKind {
    /// Map a descriptor `type` string to a kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "region" => Some(AttachmentKind::Region),
            "regionSequence" => Some(AttachmentKind::RegionSequence),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttachmentKind::Region => "region",
            AttachmentKind::RegionSequence => "regionSequence",
        }
    }
}

/// Local placement of a textured quad relative to its slot's bone.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegionAttachment {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for RegionAttachment {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            width: 32.0,
            height: 32.0,
        }
    }
}

/// Something a slot can display. Shared between skins and slots via `Arc`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    pub name: String,
    pub kind: AttachmentKind,
    pub region: RegionAttachment,
}

impl Attachment {
    pub fn new(kind: AttachmentKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            region: RegionAttachment::default(),
        }
    }
}

/// Failure reported by an [`AttachmentLoader`].
pub type LoaderError = Box<dyn std::error::Error + Send + Sync>;

/// Creates attachments for the skeleton reader.
///
/// Hosts that resolve attachments against a texture atlas implement this and
/// pass it to [`crate::read_skeleton_data_with_loader`]. Returning `Ok(None)`
/// skips the attachment; returning `Err` aborts the read.
pub trait AttachmentLoader {
    fn new_attachment(
        &mut self,
        kind: AttachmentKind,
        name: &str,
    ) -> Result<Option<Attachment>, LoaderError>;
}

/// Default loader: every region and region sequence becomes a plain attachment.
#[derive(Debug, Default)]
pub struct RegionLoader;

impl AttachmentLoader for RegionLoader {
    fn new_attachment(
        &mut self,
        kind: AttachmentKind,
        name: &str,
    ) -> Result<Option<Attachment>, LoaderError> {
        Ok(Some(Attachment::new(kind, name)))
    }
}
