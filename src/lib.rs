//! Rewind turns generated baseball highlight descriptions into frame-accurate timelines.
//!
//! A highlight backend answers each "Generate" request with a JSON [`VideoDescription`]:
//! timed sections, each holding typed components (narration, scoreboard, player card,
//! game card, highlight clip, team leaders), plus optional background music. Rewind lays
//! those sections out on a frame grid with overlapping transitions and answers "what does
//! frame N look like" for an external rendering engine. It draws no pixels itself.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON -> [`VideoDescription`]
//! 2. **Compose**: [`compose`] / [`Composer::compose`] -> [`Timeline`] (pure; bad sections
//!    and components degrade to placeholders and [`Diagnostic`]s instead of failing)
//! 3. **Evaluate**: [`Timeline::eval_frame`] -> [`FrameGraph`] (visible sections in
//!    painter's order, transition progress, render nodes, music gain)
//!
//! The host boundary lives in [`PlaybackSession`]: a [`DescriptionSource`] fetch with
//! bounded retry ([`fetch_with_retry`]) where the newest request always wins.
//!
//! Hosts plug their own component renderers in through [`ComponentRenderer`];
//! [`DefaultRenderer`] emits plain [`RenderNode`] descriptors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod description;
mod effects;
mod foundation;
mod render;
mod session;
mod timeline;
mod timing;

pub use animation::ease::Ease;
pub use animation::envelope::{Envelope, EnvelopePoint, fade_envelope};
pub use description::model::{Component, ComponentKind, Scalar, Section, VideoDescription};
pub use description::payload::{
    Champs, DialogueData, GameInfoData, HalfInning, HighlightData, InningLine, InningRuns,
    Leader, LeaderCategory, LeaderGroup, LineBoxData, LineScore, LineTotals, Person,
    PlayerCardData, PlayerProfile, Scoreboard, TeamDetails, TeamLeadersData, TeamTotals,
    VidTime, parse_payload,
};
pub use effects::transitions::{
    Direction, TransitionKind, TransitionSpec, parse_transition, parse_transition_kind_params,
};
pub use foundation::core::{Fps, FrameIndex, FrameRange};
pub use foundation::error::{RewindError, RewindResult};
pub use render::dispatch::{DispatchOutcome, dispatch, render};
pub use render::hooks::{ComponentRenderer, DefaultRenderer, RenderCtx};
pub use render::node::{
    AudioNode, GameInfoNode, InningColumn, LeaderColumn, PlaceholderNode, PlayerBioNode,
    RenderNode, ScoreboardNode, TeamLeadersNode, VideoNode,
};
pub use session::playback::{PlaybackSession, RequestTicket, SessionState};
pub use session::request::RewindRequest;
pub use session::retry::{RetryPolicy, fetch_with_retry};
pub use session::source::{DescriptionSource, JsonFileSource};
pub use timeline::compose::{
    AudioLayer, ComponentSlot, Composer, Diagnostic, NO_DATA_MESSAGE, Timeline, TimelineSection,
    TimelineStatus, compose,
};
pub use timeline::config::ComposeConfig;
pub use timeline::eval::{EvaluatedSection, FrameGraph, ResolvedTransition, TransitionRole};
pub use timeline::fingerprint::fingerprint_timeline;
pub use timeline::offsets::{SectionOffsets, section_frames, start_frame};
pub use timeline::sequencer::{SectionBlock, SectionPhase, laid_out_end, layout};
pub use timing::timestamp::{Timestamp, to_frames};
