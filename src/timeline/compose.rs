use std::collections::HashSet;

use crate::{
    animation::envelope::{Envelope, fade_envelope},
    description::model::{ComponentKind, Section, VideoDescription},
    effects::transitions::{Direction, TransitionKind, TransitionSpec, parse_transition},
    foundation::core::{Fps, FrameIndex},
    foundation::error::RewindResult,
    render::dispatch::{DispatchOutcome, dispatch},
    render::hooks::{ComponentRenderer, DefaultRenderer, RenderCtx},
    render::node::RenderNode,
    timeline::config::ComposeConfig,
    timeline::offsets::section_frames,
    timeline::sequencer::{SectionBlock, laid_out_end, layout},
};

/// Message of the placeholder shown when there is nothing to play.
pub const NO_DATA_MESSAGE: &str = "No Data Found";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Whether a timeline has anything to play.
pub enum TimelineStatus {
    /// No description or no playable section; only the placeholder is shown.
    NoData,
    /// At least one section is laid out.
    Ready,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Looping background music with a per-frame gain.
pub struct AudioLayer {
    /// Music URL.
    pub src: String,
    /// Always `true`: music loops for the whole timeline.
    pub looped: bool,
    /// Gain over timeline frames.
    pub envelope: Envelope,
}

impl AudioLayer {
    /// Gain at `frame`.
    pub fn volume_at(&self, frame: FrameIndex) -> f64 {
        self.envelope.sample(frame)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A rendered component, in source order.
pub struct ComponentSlot {
    /// Index inside the section's component list.
    pub component_index: usize,
    /// Component kind.
    pub kind: ComponentKind,
    /// Node drawn for it; a placeholder when rendering failed.
    pub node: RenderNode,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Something that was skipped or degraded while composing.
pub struct Diagnostic {
    /// Section the issue belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Component the issue belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_index: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    fn timeline(message: impl Into<String>) -> Self {
        Self {
            section_id: None,
            component_index: None,
            message: message.into(),
        }
    }

    fn section(section_id: &str, message: impl Into<String>) -> Self {
        Self {
            section_id: Some(section_id.to_string()),
            component_index: None,
            message: message.into(),
        }
    }

    fn component(section_id: &str, index: usize, message: impl Into<String>) -> Self {
        Self {
            section_id: Some(section_id.to_string()),
            component_index: Some(index),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One laid-out section.
pub struct TimelineSection {
    /// Position in the description's `video` list.
    pub source_index: usize,
    /// Canonical section id.
    pub section_id: String,
    /// `round(section_duration * fps)`.
    pub nominal_frames: u64,
    /// Frame ranges on the timeline, truncated to its duration.
    pub block: SectionBlock,
    /// Rendered components; unknown types are left out.
    pub components: Vec<ComponentSlot>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Frame-accurate playback plan of a video description.
pub struct Timeline {
    /// Whether anything plays.
    pub status: TimelineStatus,
    /// Frame rate of every frame value in this timeline.
    pub fps: Fps,
    /// Length in frames.
    pub duration: FrameIndex,
    /// Transition between adjacent sections, as configured.
    pub transition: TransitionSpec,
    /// Parsed form of `transition`.
    pub transition_kind: TransitionKind,
    /// Sections in playback order.
    pub sections: Vec<TimelineSection>,
    /// Background music, when the description names a track.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioLayer>,
    /// Stand-in shown for [`TimelineStatus::NoData`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<RenderNode>,
    /// Everything skipped or degraded while composing.
    pub diagnostics: Vec<Diagnostic>,
}

impl Timeline {
    /// `true` when there is something to play.
    pub fn is_ready(&self) -> bool {
        self.status == TimelineStatus::Ready
    }

    /// Section with canonical id `id` (first match).
    pub fn section(&self, id: &str) -> Option<&TimelineSection> {
        self.sections.iter().find(|s| s.section_id == id)
    }
}

/// Builds timelines with a fixed config and renderer.
pub struct Composer<R = DefaultRenderer> {
    config: ComposeConfig,
    transition: TransitionKind,
    renderer: R,
}

impl Default for Composer<DefaultRenderer> {
    fn default() -> Self {
        Self {
            config: ComposeConfig::default(),
            transition: TransitionKind::Flip {
                direction: Direction::FromLeft,
            },
            renderer: DefaultRenderer,
        }
    }
}

impl<R: ComponentRenderer> Composer<R> {
    /// Validate `config` and bind it to `renderer`.
    pub fn new(config: ComposeConfig, renderer: R) -> RewindResult<Self> {
        config.validate()?;
        let transition = parse_transition(&config.transition)?;
        Ok(Self {
            config,
            transition,
            renderer,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Compose `desc` into a timeline.
    ///
    /// Never fails: missing data yields a [`TimelineStatus::NoData`] timeline, and bad
    /// sections or components are skipped or replaced by placeholders, each leaving a
    /// [`Diagnostic`]. `desc` is only read, so composing it again gives an equal result.
    #[tracing::instrument(skip(self, desc))]
    pub fn compose(&self, desc: Option<&VideoDescription>) -> Timeline {
        let Some(desc) = desc.filter(|d| !d.video.is_empty()) else {
            tracing::debug!("no sections to play");
            return self.empty(Vec::new());
        };

        let fps = self.config.fps;
        let mut diagnostics = Vec::new();
        let accepted = accept_sections(&desc.video, fps, &mut diagnostics);
        if accepted.is_empty() {
            tracing::warn!("every section was skipped");
            return self.empty(diagnostics);
        }

        let nominal: Vec<u64> = accepted.iter().map(|a| a.frames).collect();
        let blocks = layout(
            &nominal,
            self.config.transition.duration_frames,
            self.config.transition_pad_frames,
        );
        let duration = self.resolve_duration(desc.total_duration, &blocks, &mut diagnostics);

        let sections = accepted
            .iter()
            .zip(blocks)
            .map(|(a, block)| {
                let block = block.truncate(duration);
                if block.active.is_empty() {
                    tracing::warn!(section = %a.id, "section starts after the timeline ends");
                    diagnostics.push(Diagnostic::section(
                        &a.id,
                        "section starts after the timeline ends",
                    ));
                }
                TimelineSection {
                    source_index: a.index,
                    section_id: a.id.clone(),
                    nominal_frames: a.frames,
                    block,
                    components: self.render_components(a.section, &a.id, &mut diagnostics),
                }
            })
            .collect();

        let audio = desc.music_url().map(|src| AudioLayer {
            src: src.to_string(),
            looped: true,
            envelope: fade_envelope(
                duration.0,
                self.config.fade_frames(),
                self.config.music_volume,
            ),
        });

        Timeline {
            status: TimelineStatus::Ready,
            fps,
            duration,
            transition: self.config.transition.clone(),
            transition_kind: self.transition,
            sections,
            audio,
            placeholder: None,
            diagnostics,
        }
    }

    fn empty(&self, diagnostics: Vec<Diagnostic>) -> Timeline {
        Timeline {
            status: TimelineStatus::NoData,
            fps: self.config.fps,
            duration: FrameIndex(0),
            transition: self.config.transition.clone(),
            transition_kind: self.transition,
            sections: Vec::new(),
            audio: None,
            placeholder: Some(RenderNode::placeholder(NO_DATA_MESSAGE)),
            diagnostics,
        }
    }

    fn resolve_duration(
        &self,
        total_duration: f64,
        blocks: &[SectionBlock],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> FrameIndex {
        let requested = if total_duration.is_finite() {
            self.config.fps.secs_to_frames_round(total_duration)
        } else {
            0
        };
        if requested > 0 {
            return FrameIndex(requested);
        }
        let end = laid_out_end(blocks);
        tracing::warn!(
            total_duration,
            fallback_frames = end.0,
            "invalid total_duration; using laid-out length"
        );
        diagnostics.push(Diagnostic::timeline(format!(
            "invalid total_duration {total_duration}; using laid-out length of {} frames",
            end.0
        )));
        end
    }

    fn render_components(
        &self,
        section: &Section,
        section_id: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<ComponentSlot> {
        let ctx = RenderCtx {
            fps: self.config.fps,
            section_id,
            dialogue_volume: self.config.dialogue_volume,
            highlight_volume: self.config.highlight_volume,
        };

        let mut slots = Vec::with_capacity(section.section_components.len());
        for (i, component) in section.section_components.iter().enumerate() {
            let node = match dispatch(component, &self.renderer, &ctx) {
                DispatchOutcome::Rendered(node) => node,
                DispatchOutcome::Degraded { node, error } => {
                    diagnostics.push(Diagnostic::component(section_id, i, error.to_string()));
                    node
                }
                DispatchOutcome::Omitted { error, .. } => {
                    diagnostics.push(Diagnostic::component(section_id, i, error.to_string()));
                    continue;
                }
                DispatchOutcome::Unknown { kind } => {
                    let message = if kind.is_empty() {
                        "component without a type omitted".to_string()
                    } else {
                        format!("unknown component type '{kind}' omitted")
                    };
                    diagnostics.push(Diagnostic::component(section_id, i, message));
                    continue;
                }
            };
            if let Some(kind) = component.kind() {
                slots.push(ComponentSlot {
                    component_index: i,
                    kind,
                    node,
                });
            }
        }
        slots
    }
}

/// Compose `desc` with the default config and [`DefaultRenderer`].
pub fn compose(desc: Option<&VideoDescription>) -> Timeline {
    Composer::<DefaultRenderer>::default().compose(desc)
}

struct AcceptedSection<'a> {
    index: usize,
    id: String,
    frames: u64,
    section: &'a Section,
}

fn accept_sections<'a>(
    sections: &'a [Section],
    fps: Fps,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<AcceptedSection<'a>> {
    let mut seen = HashSet::new();
    let mut accepted = Vec::with_capacity(sections.len());
    for (index, section) in sections.iter().enumerate() {
        let id = section.section_id.canonical();
        if !seen.insert(id.clone()) {
            tracing::warn!(section = %id, "duplicate section id");
            diagnostics.push(Diagnostic::section(&id, "duplicate section id"));
        }

        let d = section.section_duration;
        if !d.is_finite() || d <= 0.0 {
            tracing::warn!(section = %id, duration = d, "section skipped: invalid duration");
            diagnostics.push(Diagnostic::section(
                &id,
                format!("invalid section_duration {d}; section skipped"),
            ));
            continue;
        }

        accepted.push(AcceptedSection {
            index,
            frames: section_frames(d, fps),
            id,
            section,
        });
    }
    accepted
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compose.rs"]
mod tests;
