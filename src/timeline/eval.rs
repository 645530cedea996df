use crate::{
    effects::transitions::TransitionKind,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{RewindError, RewindResult},
    render::node::RenderNode,
    timeline::compose::{Timeline, TimelineSection, TimelineStatus},
    timeline::sequencer::SectionPhase,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything visible and audible at one frame.
pub struct FrameGraph {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Background music gain, when there is music.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_volume: Option<f64>,
    /// Visible sections in painter's order (outgoing below incoming).
    pub layers: Vec<EvaluatedSection>,
    /// Placeholder of an empty timeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<RenderNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A visible section at one frame.
pub struct EvaluatedSection {
    /// Index into [`Timeline::sections`].
    pub index: usize,
    /// Canonical section id.
    pub section_id: String,
    /// [`SectionPhase::Active`] or [`SectionPhase::Transitioning`].
    pub phase: SectionPhase,
    /// Frame relative to the section's first active frame.
    pub local_frame: FrameIndex,
    /// Transition this section takes part in at this frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<ResolvedTransition>,
    /// Component nodes in source order.
    pub nodes: Vec<RenderNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Side of a transition a section is on.
pub enum TransitionRole {
    /// Section being replaced.
    Outgoing,
    /// Section coming in.
    Incoming,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Transition state resolved for a specific frame.
pub struct ResolvedTransition {
    /// Transition effect.
    pub kind: TransitionKind,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    /// Side of the transition.
    pub role: TransitionRole,
}

impl Timeline {
    /// Evaluate one frame.
    ///
    /// An empty timeline evaluates frame 0 to its placeholder; any frame at or past
    /// [`Timeline::duration`] is an error otherwise.
    #[tracing::instrument(skip(self))]
    pub fn eval_frame(&self, frame: FrameIndex) -> RewindResult<FrameGraph> {
        if self.status == TimelineStatus::NoData {
            if frame.0 != 0 {
                return Err(RewindError::evaluation(
                    "empty timeline only has a placeholder at frame 0",
                ));
            }
            return Ok(FrameGraph {
                frame,
                music_volume: None,
                layers: Vec::new(),
                placeholder: self.placeholder.clone(),
            });
        }
        if frame.0 >= self.duration.0 {
            return Err(RewindError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, self.duration.0
            )));
        }

        let mut layers = Vec::new();
        for (index, section) in self.sections.iter().enumerate() {
            let phase = section.block.phase_at(frame);
            if !phase.is_visible() {
                continue;
            }
            let incoming = index
                .checked_sub(1)
                .and_then(|prev| self.sections[prev].block.outgoing)
                .filter(|w| w.contains(frame));
            let transition = match (section.block.outgoing, incoming) {
                (Some(w), _) if phase == SectionPhase::Transitioning => {
                    Some(self.resolve_transition(w, frame, TransitionRole::Outgoing))
                }
                (_, Some(w)) => Some(self.resolve_transition(w, frame, TransitionRole::Incoming)),
                _ => None,
            };
            layers.push(evaluate_section(index, section, phase, frame, transition));
        }

        Ok(FrameGraph {
            frame,
            music_volume: self.audio.as_ref().map(|a| a.volume_at(frame)),
            layers,
            placeholder: None,
        })
    }

    fn resolve_transition(
        &self,
        window: FrameRange,
        frame: FrameIndex,
        role: TransitionRole,
    ) -> ResolvedTransition {
        // Truncation may shorten the window; progress keeps the configured pace.
        let denom = self.transition.duration_frames.saturating_sub(1);
        let t = if denom == 0 {
            1.0
        } else {
            ((frame.0 - window.start.0) as f64) / (denom as f64)
        };
        ResolvedTransition {
            kind: self.transition_kind,
            progress: self.transition.ease.apply(t).clamp(0.0, 1.0),
            role,
        }
    }
}

fn evaluate_section(
    index: usize,
    section: &TimelineSection,
    phase: SectionPhase,
    frame: FrameIndex,
    transition: Option<ResolvedTransition>,
) -> EvaluatedSection {
    EvaluatedSection {
        index,
        section_id: section.section_id.clone(),
        phase,
        local_frame: FrameIndex(frame.0 - section.block.active.start.0),
        transition,
        nodes: section.components.iter().map(|c| c.node.clone()).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/eval.rs"]
mod tests;
