use std::path::Path;

use anyhow::Context;

use crate::{
    effects::transitions::TransitionSpec,
    foundation::core::Fps,
    foundation::error::{RewindError, RewindResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunables of a composition.
///
/// Every field has a default matching the stock highlight player, so a partial JSON file
/// only needs the values it changes.
pub struct ComposeConfig {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Transition drawn between adjacent sections.
    pub transition: TransitionSpec,
    /// Frames each section stays active past its nominal duration.
    pub transition_pad_frames: u64,
    /// Background music fade-in and fade-out length in seconds.
    pub fade_secs: f64,
    /// Plateau gain of the background music.
    pub music_volume: f64,
    /// Gain of highlight clips' own audio.
    pub highlight_volume: f64,
    /// Gain of narration audio.
    pub dialogue_volume: f64,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            transition: TransitionSpec::flip_from_left(30),
            transition_pad_frames: 30,
            fade_secs: 2.0,
            music_volume: 0.2,
            highlight_volume: 0.3,
            dialogue_volume: 1.0,
        }
    }
}

impl ComposeConfig {
    /// Load a config from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> RewindResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .map_err(|e| RewindError::serde(format!("config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values no timeline can be built from.
    pub fn validate(&self) -> RewindResult<()> {
        self.fps.validate()?;
        self.transition.validate()?;
        if self.transition.duration_frames > self.transition_pad_frames {
            return Err(RewindError::validation(format!(
                "transition duration ({} frames) must not exceed transition_pad_frames ({})",
                self.transition.duration_frames, self.transition_pad_frames
            )));
        }
        if !self.fade_secs.is_finite() || self.fade_secs < 0.0 {
            return Err(RewindError::validation("fade_secs must be finite and >= 0"));
        }
        for (name, v) in [
            ("music_volume", self.music_volume),
            ("highlight_volume", self.highlight_volume),
            ("dialogue_volume", self.dialogue_volume),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RewindError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn fade_frames(&self) -> u64 {
        self.fps.secs_to_frames_round(self.fade_secs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
