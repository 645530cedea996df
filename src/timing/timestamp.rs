use std::{fmt, str::FromStr};

use crate::foundation::{
    core::{Fps, FrameIndex},
    error::{RewindError, RewindResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Wall-clock offset into a source clip, written `HH:MM:SS`.
///
/// Fields are not range-checked: `00:75:00` is 75 minutes, matching how the
/// highlight backend does its own arithmetic on these strings.
pub struct Timestamp {
    /// Whole hours.
    pub hours: u64,
    /// Whole minutes.
    pub minutes: u64,
    /// Whole seconds.
    pub seconds: u64,
}

impl Timestamp {
    /// Total offset in seconds.
    pub fn total_secs(self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }

    /// Frame index of this offset at `fps`, rounded down for fractional rates.
    pub fn to_frames(self, fps: Fps) -> FrameIndex {
        FrameIndex(fps.secs_to_frames_floor(self.total_secs() as f64))
    }
}

impl FromStr for Timestamp {
    type Err = RewindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(RewindError::timestamp(format!(
                "expected HH:MM:SS, got '{s}' ({} component(s))",
                parts.len()
            )));
        }

        let field = |idx: usize, name: &str| -> RewindResult<u64> {
            let raw = parts[idx].trim();
            raw.parse::<u64>().map_err(|_| {
                RewindError::timestamp(format!("{name} component '{raw}' of '{s}' is not numeric"))
            })
        };

        Ok(Self {
            hours: field(0, "hours")?,
            minutes: field(1, "minutes")?,
            seconds: field(2, "seconds")?,
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Convert an `HH:MM:SS` string into a frame index at `fps`.
///
/// Fails with [`RewindError::Timestamp`] on anything but three numeric components;
/// callers skip the affected clip rather than the whole composition.
pub fn to_frames(timestamp: &str, fps: Fps) -> RewindResult<FrameIndex> {
    Ok(timestamp.parse::<Timestamp>()?.to_frames(fps))
}

#[cfg(test)]
#[path = "../../tests/unit/timing/timestamp.rs"]
mod tests;
