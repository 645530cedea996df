use crate::foundation::error::{RewindError, RewindResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Absolute frame position on a timeline.
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Half-open frame interval `[start, end)`.
pub struct FrameRange {
    /// First frame inside the range.
    pub start: FrameIndex,
    /// First frame after the range.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> RewindResult<Self> {
        if start.0 > end.0 {
            return Err(RewindError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered by the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frame.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies in `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Cut the range so it ends no later than `limit`.
    pub fn truncate(self, limit: FrameIndex) -> Self {
        let end = self.end.0.min(limit.0);
        let start = self.start.0.min(end);
        Self {
            start: FrameIndex(start),
            end: FrameIndex(end),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rational frame rate `num / den`.
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Validated constructor.
    pub fn new(num: u32, den: u32) -> RewindResult<Self> {
        if den == 0 {
            return Err(RewindError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RewindError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds covered by `frames` frames.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Whole frames elapsed after `secs`, rounded down.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        to_frame_count((secs * self.as_f64()).floor())
    }

    /// Nearest whole frame count for `secs` (half rounds up).
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        to_frame_count((secs * self.as_f64()).round())
    }

    pub(crate) fn validate(self) -> RewindResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }
}

// Non-finite and negative inputs collapse to zero frames.
fn to_frame_count(frames: f64) -> u64 {
    if frames.is_finite() && frames > 0.0 {
        frames as u64
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
