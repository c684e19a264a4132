//! Slot timelines: tint color and visible attachment.

use rigpose_skeleton_core::{Color, Skeleton};

use super::{Keyframes, Position};
use crate::curve::CurveTable;
use crate::interp::lerp_color;

const COLOR_STRIDE: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorFrame {
    pub time: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorTimeline {
    pub slot_index: usize,
    keys: Keyframes,
    curves: CurveTable,
}

impl ColorTimeline {
    pub fn new(slot_index: usize, frame_count: usize) -> Self {
        Self {
            slot_index,
            keys: Keyframes::new(frame_count, COLOR_STRIDE),
            curves: CurveTable::new(frame_count),
        }
    }

    pub fn set_frame(&mut self, frame: usize, time: f32, r: f32, g: f32, b: f32, a: f32) {
        self.keys
            .record_mut(frame)
            .copy_from_slice(&[time, r, g, b, a]);
    }

    pub fn frame(&self, frame: usize) -> ColorFrame {
        let r = self.keys.record(frame);
        ColorFrame {
            time: r[0],
            color: Color::new(r[1], r[2], r[3], r[4]),
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = ColorFrame> + '_ {
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

    pub fn sample(&self, time: f32) -> Option<Color> {
        match self.keys.position(time) {
            Position::Before => None,
            Position::After(last) => Some(self.frame(last).color),
            Position::Between {
                prev,
                next,
                percent,
            } => {
                let t = self.curves.percent(prev, percent);
                Some(lerp_color(self.frame(prev).color, self.frame(next).color, t))
            }
        }
    }

    /// Full weight sets the color, partial weight blends each channel toward it.
    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        let Some(color) = self.sample(time) else {
            return;
        };
        let slot = &mut skeleton.slots[self.slot_index];
        slot.color = if alpha < 1.0 {
            lerp_color(slot.color, color, alpha)
        } else {
            color
        };
    }
}

/// Swaps a slot's attachment at keyframe times. Frame names are resolved
/// through the skeleton's active skin, then its default skin; a `None` name or
/// an unresolved one leaves the slot empty. Not blended: `alpha` is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct AttachmentTimeline {
    pub slot_index: usize,
    keys: Keyframes,
    names: Vec<Option<String>>,
}

impl AttachmentTimeline {
    pub fn new(slot_index: usize, frame_count: usize) -> Self {
        Self {
            slot_index,
            keys: Keyframes::new(frame_count, 1),
            names: vec![None; frame_count],
        }
    }

    pub fn set_frame(&mut self, frame: usize, time: f32, name: Option<&str>) {
        self.keys.record_mut(frame)[0] = time;
        self.names[frame] = name.map(str::to_owned);
    }

    /// `(time, attachment name)` of one keyframe.
    pub fn frame(&self, frame: usize) -> (f32, Option<&str>) {
        (self.keys.time(frame), self.names[frame].as_deref())
    }

    pub fn frames(&self) -> impl Iterator<Item = (f32, Option<&str>)> + '_ {
        (0..self.frame_count()).map(move |i| self.frame(i))
    }

    pub fn frame_count(&self) -> usize {
        self.keys.frame_count()
    }

    pub fn last_time(&self) -> f32 {
        self.keys.last_time()
    }

    pub(crate) fn keyframes(&self) -> &Keyframes {
        &self.keys
    }

    /// Index of the keyframe in effect at `time`.
    pub fn frame_at(&self, time: f32) -> Option<usize> {
        match self.keys.position(time) {
            Position::Before => None,
            Position::After(last) => Some(last),
            Position::Between { prev, .. } => Some(prev),
        }
    }

    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, _alpha: f32) {
        let Some(frame) = self.frame_at(time) else {
            return;
        };
        let attachment = self.names[frame]
            .as_deref()
            .and_then(|name| skeleton.attachment_for_slot(self.slot_index, name));
        skeleton.slots[self.slot_index].set_attachment(attachment);
    }
}
