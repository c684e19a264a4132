//! Mutable pose state driven by animation timelines.
//!
//! Bones and slots are plain arenas indexed like `SkeletonData::bones` and
//! `SkeletonData::slots`. Timelines write these fields directly by index; the
//! setup values they compose against live on `data`.

use std::sync::Arc;

use crate::attachment::Attachment;
use crate::color::Color;
use crate::data::{BoneData, SkeletonData, SlotData};
use crate::error::SkeletonError;

/// Local transform of a bone.
#[derive(Clone, Debug, PartialEq)]
pub struct Bone {
    pub x: f32,
    pub y: f32,
    /// Degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Bone {
    pub fn new(data: &BoneData) -> Self {
        Self {
            x: data.x,
            y: data.y,
            rotation: data.rotation,
            scale_x: data.scale_x,
            scale_y: data.scale_y,
        }
    }

    pub fn set_to_bind_pose(&mut self, data: &BoneData) {
        *self = Self::new(data);
    }
}

#[derive(Clone, Debug)]
pub struct Slot {
    pub bone: usize,
    pub color: Color,
    attachment: Option<Arc<Attachment>>,
}

impl Slot {
    pub fn new(data: &SlotData) -> Self {
        Self {
            bone: data.bone,
            color: data.color,
            attachment: None,
        }
    }

    pub fn attachment(&self) -> Option<&Arc<Attachment>> {
        self.attachment.as_ref()
    }

    pub fn set_attachment(&mut self, attachment: Option<Arc<Attachment>>) {
        self.attachment = attachment;
    }
}

/// A posable instance of shared `SkeletonData`.
#[derive(Clone, Debug)]
pub struct Skeleton {
    pub data: Arc<SkeletonData>,
    pub bones: Vec<Bone>,
    pub slots: Vec<Slot>,
    skin: Option<usize>,
}

impl Skeleton {
    /// Create a skeleton in its setup pose, with setup attachments resolved
    /// through the default skin.
    pub fn new(data: Arc<SkeletonData>) -> Self {
        let bones = data.bones.iter().map(Bone::new).collect();
        let slots = data.slots.iter().map(Slot::new).collect();
        let mut skeleton = Self {
            data,
            bones,
            slots,
            skin: None,
        };
        skeleton.set_slots_to_bind_pose();
        skeleton
    }

    pub fn set_to_bind_pose(&mut self) {
        self.set_bones_to_bind_pose();
        self.set_slots_to_bind_pose();
    }

    pub fn set_bones_to_bind_pose(&mut self) {
        for (bone, data) in self.bones.iter_mut().zip(self.data.bones.iter()) {
            bone.set_to_bind_pose(data);
        }
    }

    pub fn set_slots_to_bind_pose(&mut self) {
        for i in 0..self.slots.len() {
            let data = &self.data.slots[i];
            let attachment = match data.attachment_name.as_deref() {
                Some(name) => {
                    let found = self.attachment_for_slot(i, name);
                    if found.is_none() {
                        log::warn!(
                            "setup attachment '{}' for slot '{}' not found in any active skin",
                            name,
                            data.name
                        );
                    }
                    found
                }
                None => None,
            };
            let slot = &mut self.slots[i];
            slot.color = data.color;
            slot.set_attachment(attachment);
        }
    }

    /// Name of the active skin, if one was set.
    pub fn skin(&self) -> Option<&str> {
        self.skin.map(|i| self.data.skins[i].name.as_str())
    }

    /// Make `name` the active skin (or clear it with `None`). Slot attachments
    /// are left as they are; call `set_slots_to_bind_pose` to re-resolve them.
    pub fn set_skin(&mut self, name: Option<&str>) -> Result<(), SkeletonError> {
        self.skin = match name {
            Some(name) => Some(
                self.data
                    .find_skin_index(name)
                    .ok_or_else(|| SkeletonError::SkinNotFound(name.to_string()))?,
            ),
            None => None,
        };
        Ok(())
    }

    /// Resolve an attachment by key for a slot: the active skin first, then the
    /// default skin.
    pub fn attachment_for_slot(&self, slot_index: usize, name: &str) -> Option<Arc<Attachment>> {
        if let Some(skin) = self.skin.and_then(|i| self.data.skins.get(i)) {
            if let Some(att) = skin.attachment(slot_index, name) {
                return Some(att.clone());
            }
        }
        self.data
            .default_skin()
            .and_then(|skin| skin.attachment(slot_index, name))
            .cloned()
    }

    /// Set or clear the attachment of a slot by names.
    pub fn set_attachment(
        &mut self,
        slot_name: &str,
        attachment_name: Option<&str>,
    ) -> Result<(), SkeletonError> {
        let slot_index = self
            .data
            .find_slot_index(slot_name)
            .ok_or_else(|| SkeletonError::SlotNotFound(slot_name.to_string()))?;
        let attachment = match attachment_name {
            Some(name) => Some(self.attachment_for_slot(slot_index, name).ok_or_else(|| {
                SkeletonError::AttachmentNotFound {
                    slot: slot_name.to_string(),
                    attachment: name.to_string(),
                }
            })?),
            None => None,
        };
        self.slots[slot_index].set_attachment(attachment);
        Ok(())
    }

    pub fn find_bone(&self, name: &str) -> Option<&Bone> {
        self.data.find_bone_index(name).map(|i| &self.bones[i])
    }

    pub fn find_slot(&self, name: &str) -> Option<&Slot> {
        self.data.find_slot_index(name).map(|i| &self.slots[i])
    }
}
