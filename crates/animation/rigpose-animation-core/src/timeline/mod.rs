//! Timelines: per-property keyframe tracks that pose one bone or slot.
//!
//! Every variant shares the same boundary policy:
//! - before the first keyframe the pose is left untouched;
//! - at or after the last keyframe the last value is used as-is;
//! - in between, the bracketing keyframes are found with [`locate`], the
//!   linear fraction across the segment is eased by the segment's curve and
//!   the values are interpolated.
//!
//! `alpha` is the blend weight: 1 overwrites the pose, less than 1 moves the
//! current pose toward the timeline's value by that fraction.
//!
//! Evaluation does not validate indices. A bone or slot index beyond the
//! skeleton panics; use [`crate::Animation::validate`] once after loading.

mod bone;
mod slot;

pub use bone::{RotateFrame, RotateTimeline, ScaleTimeline, TranslateTimeline, Vec2Frame};
pub use slot::{AttachmentTimeline, ColorFrame, ColorTimeline};

use rigpose_skeleton_core::Skeleton;

use crate::search::locate;

/// What a timeline writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Bone(usize),
    Slot(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Timeline {
    Rotate(RotateTimeline),
    Translate(TranslateTimeline),
    Scale(ScaleTimeline),
    Color(ColorTimeline),
    Attachment(AttachmentTimeline),
}

impl Timeline {
    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        match self {
            Timeline::Rotate(t) => t.apply(skeleton, time, alpha),
            Timeline::Translate(t) => t.apply(skeleton, time, alpha),
            Timeline::Scale(t) => t.apply(skeleton, time, alpha),
            Timeline::Color(t) => t.apply(skeleton, time, alpha),
            Timeline::Attachment(t) => t.apply(skeleton, time, alpha),
        }
    }

    /// Descriptor name of the variant (`rotate`, `translate`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Timeline::Rotate(_) => "rotate",
            Timeline::Translate(_) => "translate",
            Timeline::Scale(_) => "scale",
            Timeline::Color(_) => "color",
            Timeline::Attachment(_) => "attachment",
        }
    }

    pub fn target(&self) -> Target {
        match self {
            Timeline::Rotate(t) => Target::Bone(t.bone_index),
            Timeline::Translate(t) => Target::Bone(t.bone_index),
            Timeline::Scale(t) => Target::Bone(t.bone_index),
            Timeline::Color(t) => Target::Slot(t.slot_index),
            Timeline::Attachment(t) => Target::Slot(t.slot_index),
        }
    }

    pub(crate) fn keyframes(&self) -> &Keyframes {
        match self {
            Timeline::Rotate(t) => t.keyframes(),
            Timeline::Translate(t) => t.keyframes(),
            Timeline::Scale(t) => t.keyframes(),
            Timeline::Color(t) => t.keyframes(),
            Timeline::Attachment(t) => t.keyframes(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.keyframes().frame_count()
    }

    /// Time of the last keyframe, or 0 for a timeline without frames.
    pub fn last_time(&self) -> f32 {
        self.keyframes().last_time()
    }
}

impl From<RotateTimeline> for Timeline {
    fn from(t: RotateTimeline) -> Self {
        Timeline::Rotate(t)
    }
}

impl From<TranslateTimeline> for Timeline {
    fn from(t: TranslateTimeline) -> Self {
        Timeline::Translate(t)
    }
}

impl From<ScaleTimeline> for Timeline {
    fn from(t: ScaleTimeline) -> Self {
        Timeline::Scale(t)
    }
}

impl From<ColorTimeline> for Timeline {
    fn from(t: ColorTimeline) -> Self {
        Timeline::Color(t)
    }
}

impl From<AttachmentTimeline> for Timeline {
    fn from(t: AttachmentTimeline) -> Self {
        Timeline::Attachment(t)
    }
}

/// Where a query time falls on a keyframe buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Position {
    Before,
    /// At or after the last keyframe (its index).
    After(usize),
    /// Strictly inside segment `prev`, `percent` being the linear fraction.
    Between { prev: usize, next: usize, percent: f32 },
}

/// Flat keyframe storage: records of `stride` floats, the time first.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Keyframes {
    stride: usize,
    values: Vec<f32>,
}

impl Keyframes {
    pub(crate) fn new(frame_count: usize, stride: usize) -> Self {
        Self {
            stride,
            values: vec![0.0; frame_count * stride],
        }
    }

    pub(crate) fn frame_count(&self) -> usize {
        self.values.len() / self.stride
    }

    #[inline]
    pub(crate) fn time(&self, frame: usize) -> f32 {
        self.values[frame * self.stride]
    }

    pub(crate) fn last_time(&self) -> f32 {
        match self.frame_count() {
            0 => 0.0,
            n => self.time(n - 1),
        }
    }

    /// The `stride` floats of one record (time included).
    #[inline]
    pub(crate) fn record(&self, frame: usize) -> &[f32] {
        let start = frame * self.stride;
        &self.values[start..start + self.stride]
    }

    #[inline]
    pub(crate) fn record_mut(&mut self, frame: usize) -> &mut [f32] {
        let start = frame * self.stride;
        &mut self.values[start..start + self.stride]
    }

    pub(crate) fn position(&self, time: f32) -> Position {
        let count = self.frame_count();
        if count == 0 || time < self.time(0) {
            return Position::Before;
        }
        let last = count - 1;
        if time >= self.time(last) {
            return Position::After(last);
        }
        let next = locate(&self.values, time, self.stride) / self.stride;
        let prev = next - 1;
        let prev_time = self.time(prev);
        let span = self.time(next) - prev_time;
        let percent = if span > 0.0 {
            ((time - prev_time) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Position::Between {
            prev,
            next,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(times: &[f32]) -> Keyframes {
        let mut k = Keyframes::new(times.len(), 2);
        for (i, t) in times.iter().enumerate() {
            k.record_mut(i)[0] = *t;
            k.record_mut(i)[1] = i as f32 * 10.0;
        }
        k
    }

    #[test]
    fn position_boundaries() {
        let k = keys(&[0.5, 1.0, 2.0]);
        assert_eq!(k.position(0.0), Position::Before);
        assert_eq!(k.position(-1.0), Position::Before);
        assert_eq!(k.position(2.0), Position::After(2));
        assert_eq!(k.position(9.0), Position::After(2));
        assert_eq!(
            k.position(0.5),
            Position::Between {
                prev: 0,
                next: 1,
                percent: 0.0
            }
        );
        assert_eq!(
            k.position(1.5),
            Position::Between {
                prev: 1,
                next: 2,
                percent: 0.5
            }
        );
        assert_eq!(k.record(1), &[1.0, 10.0]);
        assert_eq!(k.last_time(), 2.0);
    }

    #[test]
    fn empty_and_single_frame() {
        let empty = Keyframes::new(0, 3);
        assert_eq!(empty.position(1.0), Position::Before);
        assert_eq!(empty.last_time(), 0.0);

        let single = keys(&[1.0]);
        assert_eq!(single.position(0.5), Position::Before);
        assert_eq!(single.position(1.0), Position::After(0));
    }

    #[test]
    fn unordered_times_stay_finite() {
        let k = keys(&[0.0, 4.0, 5.0, 2.0, 6.0]);
        let mut t = 0.0;
        while t < 6.0 {
            if let Position::Between { prev, next, percent } = k.position(t) {
                assert_eq!(next, prev + 1);
                assert!((0.0..=1.0).contains(&percent), "t={t} percent={percent}");
            }
            t += 0.125;
        }
    }
}
