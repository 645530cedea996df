use crate::{
    description::model::Section,
    foundation::core::{Fps, FrameIndex},
};

/// Nominal frame count of a section: `round(duration_secs * fps)`.
///
/// Non-finite or non-positive durations count as zero frames.
pub fn section_frames(duration_secs: f64, fps: Fps) -> u64 {
    fps.secs_to_frames_round(duration_secs)
}

/// Nominal start frame of `sections[index]`.
///
/// Sums the rounded frame counts of every section before `index`, so
/// `start_frame(s, i) == start_frame(s, i - 1) + section_frames(s[i - 1])`.
/// Indices past the end clamp to the total length.
pub fn start_frame(sections: &[Section], index: usize, fps: Fps) -> FrameIndex {
    let frames = sections
        .iter()
        .take(index)
        .map(|s| section_frames(s.section_duration, fps))
        .fold(0u64, u64::saturating_add);
    FrameIndex(frames)
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Memoised prefix sums of section frame counts.
pub struct SectionOffsets {
    frames: Vec<u64>,
    starts: Vec<u64>,
    total: u64,
}

impl SectionOffsets {
    /// Offsets of `sections` at `fps`.
    pub fn new(sections: &[Section], fps: Fps) -> Self {
        Self::from_frames(sections.iter().map(|s| section_frames(s.section_duration, fps)))
    }

    /// Offsets from already-rounded frame counts.
    pub fn from_frames(frames: impl IntoIterator<Item = u64>) -> Self {
        let frames: Vec<u64> = frames.into_iter().collect();
        let mut starts = Vec::with_capacity(frames.len());
        let mut acc = 0u64;
        for &n in &frames {
            starts.push(acc);
            acc = acc.saturating_add(n);
        }
        Self {
            frames,
            starts,
            total: acc,
        }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when there are no sections.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Start frame of section `index`.
    pub fn start(&self, index: usize) -> Option<FrameIndex> {
        self.starts.get(index).copied().map(FrameIndex)
    }

    /// Nominal frame count of section `index`.
    pub fn frames(&self, index: usize) -> Option<u64> {
        self.frames.get(index).copied()
    }

    /// Sum of all nominal frame counts.
    pub fn total_frames(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/offsets.rs"]
mod tests;
