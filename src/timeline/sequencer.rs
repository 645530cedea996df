//! Overlap arithmetic of section playback.
//!
//! Each section stays active for its nominal length plus a pad. The next section starts
//! `transition_frames` before the previous one ends, and that shared tail is the
//! transition window:
//!
//! ```text
//! section 0  [==========nominal==========|pad]
//! window                          [--T--]
//! section 1                       [==========nominal==========|pad]
//! ```

use crate::foundation::core::{FrameIndex, FrameRange};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Playback state of one section at a given frame.
pub enum SectionPhase {
    /// Not started yet.
    Pending,
    /// On screen, no transition running on its tail.
    Active,
    /// On screen and handing over to the next section.
    Transitioning,
    /// Finished.
    Done,
}

impl SectionPhase {
    /// `true` when the section is drawn.
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Active | Self::Transitioning)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Frame ranges one section occupies on the timeline.
pub struct SectionBlock {
    /// Frames the section is visible, pad included.
    pub active: FrameRange,
    /// Tail shared with the next section; `None` for the last section.
    pub outgoing: Option<FrameRange>,
}

impl SectionBlock {
    /// Phase of this section at `frame`.
    pub fn phase_at(&self, frame: FrameIndex) -> SectionPhase {
        if frame.0 < self.active.start.0 {
            return SectionPhase::Pending;
        }
        if self.outgoing.is_some_and(|w| w.contains(frame)) {
            return SectionPhase::Transitioning;
        }
        if self.active.contains(frame) {
            SectionPhase::Active
        } else {
            SectionPhase::Done
        }
    }

    /// Clip both ranges to `[0, limit)`. An outgoing window that ends up empty is dropped.
    pub fn truncate(self, limit: FrameIndex) -> Self {
        Self {
            active: self.active.truncate(limit),
            outgoing: self
                .outgoing
                .map(|w| w.truncate(limit))
                .filter(|w| !w.is_empty()),
        }
    }
}

/// Lay out sections with the given nominal frame counts.
///
/// Returned blocks are not truncated; the end of the last one is the natural length of
/// the timeline.
pub fn layout(nominal_frames: &[u64], transition_frames: u64, pad_frames: u64) -> Vec<SectionBlock> {
    let mut blocks = Vec::with_capacity(nominal_frames.len());
    let mut start = 0u64;
    for (i, &frames) in nominal_frames.iter().enumerate() {
        let end = start.saturating_add(frames).saturating_add(pad_frames);
        let is_last = i + 1 == nominal_frames.len();
        // Never start the next section before this one.
        let handover = end.saturating_sub(transition_frames).max(start);
        let outgoing = (!is_last && handover < end).then_some(FrameRange {
            start: FrameIndex(handover),
            end: FrameIndex(end),
        });
        blocks.push(SectionBlock {
            active: FrameRange {
                start: FrameIndex(start),
                end: FrameIndex(end),
            },
            outgoing,
        });
        start = handover;
    }
    blocks
}

/// End frame of the last block, or 0 when there are none.
pub fn laid_out_end(blocks: &[SectionBlock]) -> FrameIndex {
    blocks
        .last()
        .map(|b| b.active.end)
        .unwrap_or(FrameIndex(0))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;
