use std::time::Duration;

use crate::{
    description::model::VideoDescription,
    foundation::error::{RewindError, RewindResult},
    session::request::RewindRequest,
    session::source::DescriptionSource,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Bounded exponential backoff for description fetches.
pub struct RetryPolicy {
    /// Attempts in total, first one included.
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub initial_backoff: Duration,
    /// Growth factor between delays.
    pub multiplier: f64,
    /// Upper bound of a single delay.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(250),
            multiplier: 2.0,
            max_backoff: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Policy that tries once.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Reject policies that would never attempt a fetch.
    pub fn validate(&self) -> RewindResult<()> {
        if self.max_attempts == 0 {
            return Err(RewindError::validation("max_attempts must be > 0"));
        }
        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err(RewindError::validation("multiplier must be finite and >= 1"));
        }
        Ok(())
    }

    /// Delay after failed attempt number `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = self.multiplier.powi(attempt.saturating_sub(1) as i32);
        let secs = self.initial_backoff.as_secs_f64() * exp;
        if !secs.is_finite() || secs >= self.max_backoff.as_secs_f64() {
            return self.max_backoff;
        }
        Duration::from_secs_f64(secs)
    }
}

/// Fetch through `source`, retrying transient failures.
///
/// Only [`RewindError::Fetch`] is retried; anything else, or the last failure once
/// attempts run out, is returned as is. `sleep` is called between attempts.
#[tracing::instrument(skip(source, policy, sleep), fields(game_id = %request.game_id))]
pub fn fetch_with_retry<S, F>(
    source: &mut S,
    request: &RewindRequest,
    policy: &RetryPolicy,
    mut sleep: F,
) -> RewindResult<Option<VideoDescription>>
where
    S: DescriptionSource + ?Sized,
    F: FnMut(Duration),
{
    policy.validate()?;
    request.validate()?;

    let mut attempt = 1;
    loop {
        match source.fetch(request) {
            Ok(desc) => return Ok(desc),
            Err(e) if e.is_transient() && attempt < policy.max_attempts => {
                let delay = policy.backoff(attempt);
                tracing::debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "fetch failed, retrying"
                );
                sleep(delay);
                attempt += 1;
            }
            Err(e) => {
                tracing::warn!(attempt, error = %e, "fetch failed");
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/retry.rs"]
mod tests;
