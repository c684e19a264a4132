//! Bone timelines. Keyframe values are offsets from the bone's setup pose.

use rigpose_skeleton_core::Skeleton;

use super::{Keyframes, Position};
use crate::curve::CurveTable;
use crate::interp::{lerp_f32, wrap_degrees};

const ROTATE_STRIDE: usize = 2;
const VEC2_STRIDE: usize = 3;

/// One rotate keyframe. `angle` is in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotateFrame {
    pub time: f32,
    pub angle: f32,
}

/// One translate or scale keyframe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2Frame {
    pub time: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RotateTimeline {
    pub bone_index: usize,
    keys: Keyframes,
    curves: CurveTable,
}

impl RotateTimeline {
    pub fn new(bone_index: usize, frame_count: usize) -> Self {
        Self {
            bone_index,
            keys: Keyframes::new(frame_count, ROTATE_STRIDE),
            curves: CurveTable::new(frame_count),
        }
    }

    pub fn set_frame(&mut self, frame: usize, time: f32, angle: f32) {
        self.keys.record_mut(frame).copy_from_slice(&[time, angle]);
    }

    pub fn frame(&self, frame: usize) -> RotateFrame {
        let r = self.keys.record(frame);
        RotateFrame {
            time: r[0],
            angle: r[1],
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = RotateFrame> + '_ {
        (0..self.frame_count()).map(move |i| self.frame(i))
    }

    pub fn frame_count(&self) -> usize {
        self.keys.frame_count()
    }

    pub fn last_time(&self) -> f32 {
        self.keys.last_time()
    }

    pub fn curves(&self) -> &CurveTable {
        &self.curves
    }

    pub fn curves_mut(&mut self) -> &mut CurveTable {
        &mut self.curves
    }

    pub(crate) fn keyframes(&self) -> &Keyframes {
        &self.keys
    }

    /// Rotation offset from setup at `time`, taking the short way round
    /// between keyframes. `None` before the first keyframe.
    pub fn sample(&self, time: f32) -> Option<f32> {
        match self.keys.position(time) {
            Position::Before => None,
            Position::After(last) => Some(self.keys.record(last)[1]),
            Position::Between {
                prev,
                next,
                percent,
            } => {
                let from = self.keys.record(prev)[1];
                let to = self.keys.record(next)[1];
                let percent = self.curves.percent(prev, percent);
                Some(from + wrap_degrees(to - from) * percent)
            }
        }
    }

    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        let Some(angle) = self.sample(time) else {
            return;
        };
        let bind = &skeleton.data.bones[self.bone_index];
        let bone = &mut skeleton.bones[self.bone_index];
        let amount = wrap_degrees(bind.rotation + angle - bone.rotation);
        bone.rotation += amount * alpha;
    }
}

/// Shared storage of translate and scale timelines.
#[derive(Clone, Debug, PartialEq)]
struct Vec2Track {
    keys: Keyframes,
    curves: CurveTable,
}

impl Vec2Track {
    fn new(frame_count: usize) -> Self {
        Self {
            keys: Keyframes::new(frame_count, VEC2_STRIDE),
            curves: CurveTable::new(frame_count),
        }
    }

    fn set_frame(&mut self, frame: usize, time: f32, x: f32, y: f32) {
        self.keys.record_mut(frame).copy_from_slice(&[time, x, y]);
    }

    fn frame(&self, frame: usize) -> Vec2Frame {
        let r = self.keys.record(frame);
        Vec2Frame {
            time: r[0],
            x: r[1],
            y: r[2],
        }
    }

    fn sample(&self, time: f32) -> Option<(f32, f32)> {
        match self.keys.position(time) {
            Position::Before => None,
            Position::After(last) => {
                let f = self.frame(last);
                Some((f.x, f.y))
            }
            Position::Between {
                prev,
                next,
                percent,
            } => {
                let a = self.frame(prev);
                let b = self.frame(next);
                let t = self.curves.percent(prev, percent);
                Some((lerp_f32(a.x, b.x, t), lerp_f32(a.y, b.y, t)))
            }
        }
    }
}

macro_rules! vec2_timeline {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            pub bone_index: usize,
            track: Vec2Track,
        }

        impl $name {
            pub fn new(bone_index: usize, frame_count: usize) -> Self {
                Self {
                    bone_index,
                    track: Vec2Track::new(frame_count),
                }
            }

            pub fn set_frame(&mut self, frame: usize, time: f32, x: f32, y: f32) {
                self.track.set_frame(frame, time, x, y);
            }

            pub fn frame(&self, frame: usize) -> Vec2Frame {
                self.track.frame(frame)
            }

            pub fn frames(&self) -> impl Iterator<Item = Vec2Frame> + '_ {
                (0..self.frame_count()).map(move |i| self.track.frame(i))
            }

            pub fn frame_count(&self) -> usize {
                self.track.keys.frame_count()
            }

            pub fn last_time(&self) -> f32 {
                self.track.keys.last_time()
            }

            pub fn curves(&self) -> &CurveTable {
                &self.track.curves
            }

            pub fn curves_mut(&mut self) -> &mut CurveTable {
                &mut self.track.curves
            }

            /// Interpolated `(x, y)` at `time`; `None` before the first keyframe.
            pub fn sample(&self, time: f32) -> Option<(f32, f32)> {
                self.track.sample(time)
            }

            pub(crate) fn keyframes(&self) -> &Keyframes {
                &self.track.keys
            }
        }
    };
}

vec2_timeline!(
    /// Moves a bone relative to its setup position.
    TranslateTimeline
);

vec2_timeline!(
    /// Scales a bone. A keyframe value of 1 means the setup scale.
    ScaleTimeline
);

impl TranslateTimeline {
    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        let Some((x, y)) = self.sample(time) else {
            return;
        };
        let bind = &skeleton.data.bones[self.bone_index];
        let bone = &mut skeleton.bones[self.bone_index];
        bone.x += (bind.x + x - bone.x) * alpha;
        bone.y += (bind.y + y - bone.y) * alpha;
    }
}

impl ScaleTimeline {
    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        let Some((x, y)) = self.sample(time) else {
            return;
        };
        let bind = &skeleton.data.bones[self.bone_index];
        let bone = &mut skeleton.bones[self.bone_index];
        bone.scale_x += (bind.scale_x - 1.0 + x - bone.scale_x) * alpha;
        bone.scale_y += (bind.scale_y - 1.0 + y - bone.scale_y) * alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_sample_takes_short_arc() {
        let mut t = RotateTimeline::new(0, 2);
        t.set_frame(0, 0.0, 170.0);
        t.set_frame(1, 1.0, -170.0);
        // 20 degrees through 180, not 340 back through 0.
        let mid = t.sample(0.5).unwrap();
        assert!((wrap_degrees(mid) - 180.0).abs() < 1e-4, "mid={mid}");
        assert_eq!(t.sample(-0.1), None);
        assert_eq!(t.sample(3.0), Some(-170.0));
    }

    #[test]
    fn vec2_frames_read_back() {
        let mut t = ScaleTimeline::new(3, 2);
        t.set_frame(0, 0.0, 1.0, 2.0);
        t.set_frame(1, 0.5, 3.0, 4.0);
        let frames: Vec<_> = t.frames().collect();
        assert_eq!(
            frames,
            vec![
                Vec2Frame { time: 0.0, x: 1.0, y: 2.0 },
                Vec2Frame { time: 0.5, x: 3.0, y: 4.0 },
            ]
        );
        assert_eq!(t.last_time(), 0.5);
        assert_eq!(t.sample(0.25), Some((2.0, 3.0)));
    }

    #[test]
    fn stepped_segment_holds_left_value() {
        let mut t = TranslateTimeline::new(0, 2);
        t.set_frame(0, 0.0, 0.0, 0.0);
        t.set_frame(1, 1.0, 10.0, -10.0);
        t.curves_mut().set_stepped(0);
        assert_eq!(t.sample(0.99), Some((0.0, 0.0)));
        assert_eq!(t.sample(1.0), Some((10.0, -10.0)));
    }
}
