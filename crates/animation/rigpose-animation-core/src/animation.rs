//! A named set of timelines with a shared duration.

use rigpose_skeleton_core::{Skeleton, SkeletonData};

use crate::error::AnimationError;
use crate::timeline::{Target, Timeline};

#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    name: String,
    timelines: Vec<Timeline>,
    duration: f32,
}

impl Animation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timelines: Vec::new(),
            duration: 0.0,
        }
    }

    /// Build from timelines; duration is the latest keyframe time.
    pub fn with_timelines(name: impl Into<String>, timelines: Vec<Timeline>) -> Self {
        let mut animation = Self::new(name);
        for timeline in timelines {
            animation.push_timeline(timeline);
        }
        animation
    }

    /// Timelines are applied in the order they were pushed.
    pub fn push_timeline(&mut self, timeline: impl Into<Timeline>) {
        let timeline = timeline.into();
        self.duration = self.duration.max(timeline.last_time());
        self.timelines.push(timeline);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    /// Pose `skeleton` at `time` with full weight.
    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, looped: bool) {
        self.mix(skeleton, time, looped, 1.0);
    }

    /// Pose `skeleton` at `time`, moving it toward the animated values by
    /// `alpha`. With `looped` and a positive duration, `time` wraps into
    /// `[0, duration)`.
    pub fn mix(&self, skeleton: &mut Skeleton, time: f32, looped: bool, alpha: f32) {
        let time = if looped && self.duration > 0.0 {
            time.rem_euclid(self.duration)
        } else {
            time
        };
        for timeline in &self.timelines {
            timeline.apply(skeleton, time, alpha);
        }
    }

    /// Check every timeline against `data`: non-empty, in-range target index
    /// and non-decreasing keyframe times.
    pub fn validate(&self, data: &SkeletonData) -> Result<(), AnimationError> {
        for (i, timeline) in self.timelines.iter().enumerate() {
            let kind = timeline.type_name();
            let (index, len) = match timeline.target() {
                Target::Bone(index) => (index, data.bones.len()),
                Target::Slot(index) => (index, data.slots.len()),
            };
            if index >= len {
                return Err(AnimationError::IndexOutOfRange {
                    timeline: i,
                    kind,
                    index,
                    len,
                });
            }
            let keys = timeline.keyframes();
            if keys.frame_count() == 0 {
                return Err(AnimationError::EmptyTimeline {
                    kind: kind.to_string(),
                    target: target_name(data, timeline.target()).to_string(),
                });
            }
            if let Some(frame) = (1..keys.frame_count()).find(|&f| keys.time(f) < keys.time(f - 1)) {
                return Err(AnimationError::NonMonotonicTime {
                    timeline: i,
                    kind,
                    frame,
                });
            }
        }
        Ok(())
    }
}

fn target_name(data: &SkeletonData, target: Target) -> &str {
    match target {
        Target::Bone(i) => &data.bones[i].name,
        Target::Slot(i) => &data.slots[i].name,
    }
}
