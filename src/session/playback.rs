use std::time::Duration;

use crate::{
    description::model::VideoDescription,
    foundation::core::FrameIndex,
    foundation::error::{RewindError, RewindResult},
    render::hooks::{ComponentRenderer, DefaultRenderer},
    session::request::RewindRequest,
    session::retry::{RetryPolicy, fetch_with_retry},
    session::source::DescriptionSource,
    timeline::compose::{Composer, Timeline},
    timeline::eval::FrameGraph,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Handle of one outstanding request. Only the newest ticket can complete.
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    /// Monotonic request number within its session.
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What the host should show.
pub enum SessionState {
    /// Nothing requested yet.
    Idle,
    /// A request is outstanding; the trigger should be disabled.
    Loading,
    /// A timeline is available.
    Ready,
    /// The newest request failed.
    Failed {
        /// Error shown to the user.
        message: String,
    },
}

/// One player's view of generated highlight reels.
///
/// Owns the description and timeline of the newest completed request. Results of
/// superseded or cancelled requests are dropped, so the last request always wins
/// regardless of the order answers arrive in. A failed request leaves the previous
/// timeline in place.
pub struct PlaybackSession<R = DefaultRenderer> {
    composer: Composer<R>,
    generation: u64,
    pending: Option<u64>,
    state: SessionState,
    description: Option<VideoDescription>,
    timeline: Option<Timeline>,
}

impl PlaybackSession<DefaultRenderer> {
    /// Session with the default config and renderer.
    pub fn new() -> Self {
        Self::with_composer(Composer::<DefaultRenderer>::default())
    }
}

impl Default for PlaybackSession<DefaultRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ComponentRenderer> PlaybackSession<R> {
    /// Session composing with `composer`.
    pub fn with_composer(composer: Composer<R>) -> Self {
        Self {
            composer,
            generation: 0,
            pending: None,
            state: SessionState::Idle,
            description: None,
            timeline: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// `true` while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Timeline of the newest completed request.
    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    /// Description behind [`PlaybackSession::timeline`]; `None` when the backend sent none.
    pub fn description(&self) -> Option<&VideoDescription> {
        self.description.as_ref()
    }

    /// Start a request, superseding any outstanding one.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        if let Some(old) = self.pending.replace(self.generation) {
            tracing::debug!(superseded = old, generation = self.generation, "request superseded");
        }
        self.state = SessionState::Loading;
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Apply the result of `ticket`'s request. Returns `false` (and changes nothing) when
    /// the ticket was superseded or cancelled.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: RewindResult<Option<VideoDescription>>,
    ) -> bool {
        if self.pending != Some(ticket.generation) {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "dropping stale result"
            );
            return false;
        }
        self.pending = None;

        match result {
            Ok(desc) => {
                self.timeline = Some(self.composer.compose(desc.as_ref()));
                self.description = desc;
                self.state = SessionState::Ready;
            }
            Err(e) => {
                tracing::warn!(generation = ticket.generation, error = %e, "request failed");
                self.state = SessionState::Failed {
                    message: e.to_string(),
                };
            }
        }
        true
    }

    /// Abandon the outstanding request, if any.
    pub fn cancel(&mut self) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        self.state = if self.timeline.is_some() {
            SessionState::Ready
        } else {
            SessionState::Idle
        };
        true
    }

    /// Fetch and compose in one go: `begin`, [`fetch_with_retry`], `complete`.
    pub fn generate<S, F>(
        &mut self,
        source: &mut S,
        request: &RewindRequest,
        policy: &RetryPolicy,
        sleep: F,
    ) -> &SessionState
    where
        S: DescriptionSource + ?Sized,
        F: FnMut(Duration),
    {
        let ticket = self.begin();
        let result = fetch_with_retry(source, request, policy, sleep);
        self.complete(ticket, result);
        &self.state
    }

    /// Evaluate `frame` of the current timeline.
    pub fn eval_frame(&self, frame: FrameIndex) -> RewindResult<FrameGraph> {
        self.timeline
            .as_ref()
            .ok_or_else(|| RewindError::evaluation("no timeline loaded"))?
            .eval_frame(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/playback.rs"]
mod tests;
