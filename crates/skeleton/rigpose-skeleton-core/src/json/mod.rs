//! Skeleton descriptor reader.
//!
//! Reads a JSON document from memory into [`SkeletonData`]. Bone and slot
//! references are resolved to indices here, once, so that nothing downstream
//! looks names up while evaluating animations.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::attachment::{AttachmentKind, AttachmentLoader, RegionLoader};
use crate::color::Color;
use crate::config::Config;
use crate::data::{BoneData, SkeletonData, SlotData};
use crate::error::SkeletonError;
use crate::skin::Skin;

/// Read skeleton data using the default [`RegionLoader`].
pub fn read_skeleton_data(json: &str, cfg: &Config) -> Result<SkeletonData, SkeletonError> {
    read_skeleton_data_with_loader(json, cfg, &mut RegionLoader)
}

/// Read skeleton data, creating attachments through `loader`.
pub fn read_skeleton_data_with_loader(
    json: &str,
    cfg: &Config,
    loader: &mut dyn AttachmentLoader,
) -> Result<SkeletonData, SkeletonError> {
    let raw: RawSkeleton = serde_json::from_str(json)?;
    let scale = cfg.scale;
    let mut data = SkeletonData::new();

    for rb in raw.bones {
        let parent = match rb.parent.as_deref() {
            Some(parent_name) => Some(
                data.find_bone_index(parent_name)
                    .ok_or_else(|| SkeletonError::ParentBoneNotFound(parent_name.to_string()))?,
            ),
            None => None,
        };
        let mut bone = BoneData::new(rb.name, parent);
        bone.length = rb.length * scale;
        bone.x = rb.x * scale;
        bone.y = rb.y * scale;
        bone.rotation = rb.rotation;
        bone.scale_x = rb.scale_x;
        bone.scale_y = rb.scale_y;
        data.bones.push(bone);
    }

    for rs in raw.slots {
        let bone = data
            .find_bone_index(&rs.bone)
            .ok_or_else(|| SkeletonError::SlotBoneNotFound(rs.bone.clone()))?;
        let mut slot = SlotData::new(rs.name, bone);
        if let Some(color) = rs.color.as_deref() {
            slot.color = Color::from_hex(color)?;
        }
        slot.attachment_name = rs.attachment;
        data.slots.push(slot);
    }

    for (skin_name, slot_map) in raw.skins {
        let mut skin = Skin::new(skin_name);
        for (slot_name, attachments) in slot_map {
            let slot_index = data
                .find_slot_index(&slot_name)
                .ok_or_else(|| SkeletonError::SkinSlotNotFound(slot_name.clone()))?;
            for (key, ra) in attachments {
                let kind = AttachmentKind::from_name(&ra.kind)
                    .ok_or_else(|| SkeletonError::UnknownAttachmentType(ra.kind.clone()))?;
                let name = ra.name.as_deref().unwrap_or(&key);
                let created = loader.new_attachment(kind, name).map_err(|source| {
                    SkeletonError::AttachmentLoader {
                        name: name.to_string(),
                        source,
                    }
                })?;
                let Some(mut attachment) = created else {
                    log::debug!("loader skipped attachment '{}' in skin '{}'", name, skin.name);
                    continue;
                };
                let region = &mut attachment.region;
                region.x = ra.x * scale;
                region.y = ra.y * scale;
                region.scale_x = ra.scale_x;
                region.scale_y = ra.scale_y;
                region.rotation = ra.rotation;
                region.width = ra.width * scale;
                region.height = ra.height * scale;
                skin.add_attachment(slot_index, key, attachment);
            }
        }
        data.push_skin(skin);
    }

    log::debug!(
        "read skeleton data: {} bones, {} slots, {} skins",
        data.bones.len(),
        data.slots.len(),
        data.skins.len()
    );
    Ok(data)
}

// ----- JSON schema (serde) -----

fn one() -> f32 {
    1.0
}

fn default_size() -> f32 {
    32.0
}

fn default_kind() -> String {
    "region".to_string()
}

#[derive(Debug, Deserialize)]
struct RawSkeleton {
    #[serde(default)]
    bones: Vec<RawBone>,
    #[serde(default)]
    slots: Vec<RawSlot>,
    /// skin name -> slot name -> attachment key -> attachment
    #[serde(default)]
    skins: IndexMap<String, IndexMap<String, IndexMap<String, RawAttachment>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBone {
    name: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    length: f32,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    rotation: f32,
    #[serde(default = "one")]
    scale_x: f32,
    #[serde(default = "one")]
    scale_y: f32,
}

#[derive(Debug, Deserialize)]
struct RawSlot {
    name: String,
    bone: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    attachment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAttachment {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default = "one")]
    scale_x: f32,
    #[serde(default = "one")]
    scale_y: f32,
    #[serde(default)]
    rotation: f32,
    #[serde(default = "default_size")]
    width: f32,
    #[serde(default = "default_size")]
    height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scale_applies_to_positions_only() {
        let doc = json!({
            "bones": [
                { "name": "root", "x": 2.0, "rotation": 30.0, "scaleX": 2.0, "length": 10.0 }
            ],
            "slots": [ { "name": "s", "bone": "root" } ],
            "skins": { "default": { "s": { "a": { "width": 10.0 } } } }
        })
        .to_string();
        let data = read_skeleton_data(&doc, &Config::with_scale(0.5)).expect("read");
        let root = &data.bones[0];
        assert_eq!(root.x, 1.0);
        assert_eq!(root.length, 5.0);
        assert_eq!(root.rotation, 30.0);
        assert_eq!(root.scale_x, 2.0);
        assert_eq!(root.scale_y, 1.0);

        let att = data.default_skin().and_then(|s| s.attachment(0, "a")).expect("attachment");
        assert_eq!(att.region.width, 5.0);
        assert_eq!(att.region.height, 16.0);
    }

    struct RejectingLoader;

    impl AttachmentLoader for RejectingLoader {
        fn new_attachment(
            &mut self,
            _kind: AttachmentKind,
            name: &str,
        ) -> Result<Option<crate::Attachment>, crate::attachment::LoaderError> {
            if name == "skip" {
                Ok(None)
            } else {
                Err("region not in atlas".into())
            }
        }
    }

    #[test]
    fn loader_can_skip_or_reject() {
        let skip = json!({
            "bones": [ { "name": "root" } ],
            "slots": [ { "name": "s", "bone": "root" } ],
            "skins": { "default": { "s": { "skip": {} } } }
        })
        .to_string();
        let data = read_skeleton_data_with_loader(&skip, &Config::default(), &mut RejectingLoader)
            .expect("skipped attachments are not errors");
        assert!(data.default_skin().map(|s| s.is_empty()).unwrap_or(false));

        let reject = skip.replace("skip", "hat");
        let err = read_skeleton_data_with_loader(&reject, &Config::default(), &mut RejectingLoader)
            .unwrap_err();
        assert!(matches!(err, SkeletonError::AttachmentLoader { ref name, .. } if name == "hat"));
        let source = std::error::Error::source(&err).expect("loader error kept as source");
        assert_eq!(source.to_string(), "region not in atlas");
    }
}
