//! Keyframe location over flat, time-ascending frame buffers.

/// Return the flat index of the first record whose time is greater than
/// `target`.
///
/// `frames` holds records of `stride` floats with the time first. The caller
/// guarantees at least two records and `first_time <= target < last_time`;
/// timelines handle the before-first and at-or-after-last cases themselves.
pub fn locate(frames: &[f32], target: f32, stride: usize) -> usize {
    debug_assert!(stride > 0 && frames.len() >= 2 * stride);
    let mut low = 0;
    let mut high = frames.len() / stride - 2;
    if high == 0 {
        return stride;
    }
    let mut current = high >> 1;
    loop {
        if frames[(current + 1) * stride] <= target {
            low = current + 1;
        } else {
            high = current;
        }
        if low == high {
            return (low + 1) * stride;
        }
        current = (low + high) >> 1;
    }
}

#[cfg(test)]
fn linear_search(frames: &[f32], target: f32, stride: usize) -> Option<usize> {
    (0..frames.len())
        .step_by(stride)
        .find(|&i| frames[i] > target)
}
