//! Immutable skeleton setup data: bones, slots and skins.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::skin::Skin;

/// Setup (bind) pose of one bone. `parent` always precedes the bone itself.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoneData {
    pub name: String,
    pub parent: Option<usize>,
    pub length: f32,
    pub x: f32,
    pub y: f32,
    /// Degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl BoneData {
    pub fn new(name: impl Into<String>, parent: Option<usize>) -> Self {
        Self {
            name: name.into(),
            parent,
            length: 0.0,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SlotData {
    pub name: String,
    /// Index of the bone this slot is attached to.
    pub bone: usize,
    pub color: Color,
    /// Attachment shown in the setup pose.
    pub attachment_name: Option<String>,
}

impl SlotData {
    pub fn new(name: impl Into<String>, bone: usize) -> Self {
        Self {
            name: name.into(),
            bone,
            color: Color::WHITE,
            attachment_name: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SkeletonData {
    pub bones: Vec<BoneData>,
    pub slots: Vec<SlotData>,
    pub skins: Vec<Skin>,
    /// Index into `skins` of the skin named `default`, if any.
    pub default_skin: Option<usize>,
}

impl SkeletonData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_bone_index(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|b| b.name == name)
    }

    pub fn find_bone(&self, name: &str) -> Option<&BoneData> {
        self.bones.iter().find(|b| b.name == name)
    }

    pub fn find_slot_index(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.name == name)
    }

    pub fn find_slot(&self, name: &str) -> Option<&SlotData> {
        self.slots.iter().find(|s| s.name == name)
    }

    pub fn find_skin_index(&self, name: &str) -> Option<usize> {
        self.skins.iter().position(|s| s.name == name)
    }

    pub fn find_skin(&self, name: &str) -> Option<&Skin> {
        self.skins.iter().find(|s| s.name == name)
    }

    pub fn default_skin(&self) -> Option<&Skin> {
        self.default_skin.and_then(|i| self.skins.get(i))
    }

    /// Append a skin, marking it as the default skin when it is named `default`.
    pub fn push_skin(&mut self, skin: Skin) {
        if skin.name == "default" {
            self.default_skin = Some(self.skins.len());
        }
        self.skins.push(skin);
    }
}
