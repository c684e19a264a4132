//! Animation descriptor reader.
//!
//! Bone and slot names are resolved against a [`SkeletonData`] once, here;
//! the resulting timelines carry indices only. Timelines are created in
//! document order: every bone's timelines first, then every slot's.

use indexmap::IndexMap;
use serde::Deserialize;

use rigpose_skeleton_core::{Color, Config, SkeletonData};

use crate::animation::Animation;
use crate::curve::CurveTable;
use crate::error::AnimationError;
use crate::timeline::{
    AttachmentTimeline, ColorTimeline, RotateTimeline, ScaleTimeline, Timeline, TranslateTimeline,
};

const TIMELINE_ROTATE: &str = "rotate";
const TIMELINE_TRANSLATE: &str = "translate";
const TIMELINE_SCALE: &str = "scale";
const TIMELINE_COLOR: &str = "color";
const TIMELINE_ATTACHMENT: &str = "attachment";

/// Read one animation for `data`. Translate values are multiplied by
/// `cfg.scale`; rotate and scale values are not.
pub fn read_animation(
    json: &str,
    name: &str,
    data: &SkeletonData,
    cfg: &Config,
) -> Result<Animation, AnimationError> {
    let raw: RawAnimation = serde_json::from_str(json)?;
    let mut animation = Animation::new(name);

    for (bone_name, timelines) in &raw.bones {
        let bone_index = data
            .find_bone_index(bone_name)
            .ok_or_else(|| AnimationError::BoneNotFound(bone_name.clone()))?;
        for (kind, frames) in timelines {
            ensure_frames(kind, bone_name, frames)?;
            let timeline: Timeline = match kind.as_str() {
                TIMELINE_ROTATE => {
                    let mut t = RotateTimeline::new(bone_index, frames.len());
                    for (i, f) in frames.iter().enumerate() {
                        t.set_frame(i, f.time, f.angle);
                    }
                    read_curves(t.curves_mut(), frames);
                    t.into()
                }
                TIMELINE_TRANSLATE => {
                    let mut t = TranslateTimeline::new(bone_index, frames.len());
                    for (i, f) in frames.iter().enumerate() {
                        t.set_frame(i, f.time, f.x * cfg.scale, f.y * cfg.scale);
                    }
                    read_curves(t.curves_mut(), frames);
                    t.into()
                }
                TIMELINE_SCALE => {
                    let mut t = ScaleTimeline::new(bone_index, frames.len());
                    for (i, f) in frames.iter().enumerate() {
                        t.set_frame(i, f.time, f.x, f.y);
                    }
                    read_curves(t.curves_mut(), frames);
                    t.into()
                }
                other => return Err(AnimationError::InvalidBoneTimeline(other.to_string())),
            };
            animation.push_timeline(timeline);
        }
    }

    for (slot_name, timelines) in &raw.slots {
        let slot_index = data
            .find_slot_index(slot_name)
            .ok_or_else(|| AnimationError::SlotNotFound(slot_name.clone()))?;
        for (kind, frames) in timelines {
            ensure_frames(kind, slot_name, frames)?;
            let timeline: Timeline = match kind.as_str() {
                TIMELINE_COLOR => {
                    let mut t = ColorTimeline::new(slot_index, frames.len());
                    for (i, f) in frames.iter().enumerate() {
                        let hex = f.color.as_deref().ok_or_else(|| AnimationError::MissingColor {
                            slot: slot_name.clone(),
                            frame: i,
                        })?;
                        let Color { r, g, b, a } = Color::from_hex(hex)?;
                        t.set_frame(i, f.time, r, g, b, a);
                    }
                    read_curves(t.curves_mut(), frames);
                    t.into()
                }
                TIMELINE_ATTACHMENT => {
                    let mut t = AttachmentTimeline::new(slot_index, frames.len());
                    for (i, f) in frames.iter().enumerate() {
                        t.set_frame(i, f.time, f.name.as_deref());
                    }
                    t.into()
                }
                other => return Err(AnimationError::InvalidSlotTimeline(other.to_string())),
            };
            animation.push_timeline(timeline);
        }
    }

    animation.validate(data)?;
    log::debug!(
        "read animation '{}': {} timelines, duration {}",
        name,
        animation.timelines().len(),
        animation.duration()
    );
    Ok(animation)
}

fn ensure_frames(kind: &str, target: &str, frames: &[RawFrame]) -> Result<(), AnimationError> {
    if frames.is_empty() {
        return Err(AnimationError::EmptyTimeline {
            kind: kind.to_string(),
            target: target.to_string(),
        });
    }
    Ok(())
}

/// A frame's curve eases the segment that starts at it, so the last frame has
/// nothing to ease.
fn read_curves(curves: &mut CurveTable, frames: &[RawFrame]) {
    let segments = frames.len().saturating_sub(1);
    for (segment, frame) in frames.iter().enumerate() {
        let Some(curve) = &frame.curve else {
            continue;
        };
        if segment >= segments {
            log::debug!("ignoring curve on last keyframe at time {}", frame.time);
            continue;
        }
        match curve {
            RawCurve::Named(name) if name == "stepped" => curves.set_stepped(segment),
            RawCurve::Named(name) if name == "linear" => curves.set_linear(segment),
            RawCurve::Named(name) => {
                log::warn!("unknown curve '{}' at time {}, using linear", name, frame.time)
            }
            RawCurve::Bezier([cx1, cy1, cx2, cy2]) => {
                curves.set_curve(segment, *cx1, *cy1, *cx2, *cy2)
            }
        }
    }
}

// ----- JSON schema (serde) -----

/// target name -> timeline type -> keyframes
type RawTimelines = IndexMap<String, IndexMap<String, Vec<RawFrame>>>;

#[derive(Debug, Deserialize)]
struct RawAnimation {
    #[serde(default)]
    bones: RawTimelines,
    #[serde(default)]
    slots: RawTimelines,
}

/// Union of every timeline's keyframe fields.
#[derive(Debug, Deserialize)]
struct RawFrame {
    #[serde(default)]
    time: f32,
    #[serde(default)]
    angle: f32,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    curve: Option<RawCurve>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCurve {
    Named(String),
    Bezier([f32; 4]),
}
