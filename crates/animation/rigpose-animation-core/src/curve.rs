//! Per-segment easing for keyframe timelines.
//!
//! Each segment (the span between keyframe `i` and `i + 1`) owns six floats.
//! The first float doubles as a tag: `CURVE_LINEAR` and `CURVE_STEPPED` mark
//! the two built-in easings, anything else is the first forward difference of
//! a cubic Bezier from (0,0) to (1,1) sampled at `CURVE_SEGMENTS` intervals.
//! The differences are computed once in [`CurveTable::set_curve`]; evaluation
//! only steps them.

pub const CURVE_LINEAR: f32 = 0.0;
pub const CURVE_STEPPED: f32 = -1.0;
pub const CURVE_SEGMENTS: usize = 10;

const CURVE_STRIDE: usize = 6;

/// Typed view of one segment's easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Stepped,
    /// Forward differences `[dfx, dfy, ddfx, ddfy, dddfx, dddfy]`.
    Bezier([f32; 6]),
}

/// Easing descriptors for the `frame_count - 1` segments of a timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveTable {
    curves: Vec<f32>,
}

impl CurveTable {
    /// All segments start out linear.
    pub fn new(frame_count: usize) -> Self {
        Self {
            curves: vec![CURVE_LINEAR; frame_count.saturating_sub(1) * CURVE_STRIDE],
        }
    }

    pub fn segment_count(&self) -> usize {
        self.curves.len() / CURVE_STRIDE
    }

    /// # Panics
    /// If `segment >= segment_count()`.
    pub fn set_linear(&mut self, segment: usize) {
        self.curves[segment * CURVE_STRIDE] = CURVE_LINEAR;
    }

    /// # Panics
    /// If `segment >= segment_count()`.
    pub fn set_stepped(&mut self, segment: usize) {
        self.curves[segment * CURVE_STRIDE] = CURVE_STEPPED;
    }

    /// Ease the segment with the cubic Bezier whose inner control points are
    /// `(cx1, cy1)` and `(cx2, cy2)`.
    ///
    /// # Panics
    /// If `segment >= segment_count()`.
    pub fn set_curve(&mut self, segment: usize, cx1: f32, cy1: f32, cx2: f32, cy2: f32) {
        let step = 1.0 / CURVE_SEGMENTS as f32;
        let step2 = step * step;
        let step3 = step2 * step;
        let pre1 = 3.0 * step;
        let pre2 = 3.0 * step2;
        let pre4 = 6.0 * step2;
        let pre5 = 6.0 * step3;
        let tmp1x = -cx1 * 2.0 + cx2;
        let tmp1y = -cy1 * 2.0 + cy2;
        let tmp2x = (cx1 - cx2) * 3.0 + 1.0;
        let tmp2y = (cy1 - cy2) * 3.0 + 1.0;

        let i = segment * CURVE_STRIDE;
        let c = &mut self.curves[i..i + CURVE_STRIDE];
        c[0] = cx1 * pre1 + tmp1x * pre2 + tmp2x * step3;
        c[1] = cy1 * pre1 + tmp1y * pre2 + tmp2y * step3;
        c[2] = tmp1x * pre4 + tmp2x * pre5;
        c[3] = tmp1y * pre4 + tmp2y * pre5;
        c[4] = tmp2x * pre5;
        c[5] = tmp2y * pre5;
    }

    pub fn easing(&self, segment: usize) -> Easing {
        let i = segment * CURVE_STRIDE;
        let c = &self.curves[i..i + CURVE_STRIDE];
        if c[0] == CURVE_LINEAR {
            Easing::Linear
        } else if c[0] == CURVE_STEPPED {
            Easing::Stepped
        } else {
            Easing::Bezier([c[0], c[1], c[2], c[3], c[4], c[5]])
        }
    }

    /// Map a linear fraction of `segment` to its eased fraction.
    ///
    /// Stepped segments return 0 so the left keyframe holds until the next
    /// keyframe's time is reached.
    pub fn percent(&self, segment: usize, percent: f32) -> f32 {
        let [mut dfx, mut dfy, mut ddfx, mut ddfy, dddfx, dddfy] = match self.easing(segment) {
            Easing::Linear => return percent,
            Easing::Stepped => return 0.0,
            Easing::Bezier(c) => c,
        };
        let mut x = dfx;
        let mut y = dfy;
        let mut remaining = CURVE_SEGMENTS - 2;
        loop {
            if x >= percent {
                let last_x = x - dfx;
                let last_y = y - dfy;
                return last_y + (y - last_y) * (percent - last_x) / (x - last_x);
            }
            if remaining == 0 {
                break;
            }
            remaining -= 1;
            dfx += ddfx;
            dfy += ddfy;
            ddfx += dddfx;
            ddfy += dddfy;
            x += dfx;
            y += dfy;
        }
        // Last point is (1, 1).
        y + (1.0 - y) * (percent - x) / (1.0 - x)
    }
}
