use crate::foundation::error::{RewindError, RewindResult};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Parameters of one "Generate" request to the highlight backend.
pub struct RewindRequest {
    /// Game to summarise.
    pub game_id: String,
    /// Player ids to focus on.
    pub focus_players: Vec<String>,
    /// Storylines to focus on ("Homeruns", "Stolen Bases", ...).
    pub focus_areas: Vec<String>,
    /// Team ids to focus on.
    pub focus_teams: Vec<String>,
    /// Background music track picked by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_url: Option<String>,
    /// Narration language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl RewindRequest {
    /// Request for `game_id` with no focus filters.
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            ..Self::default()
        }
    }

    /// Reject requests the backend cannot answer.
    pub fn validate(&self) -> RewindResult<()> {
        if self.game_id.trim().is_empty() {
            return Err(RewindError::validation("game_id must be non-empty"));
        }
        for (name, list) in [
            ("focus_players", &self.focus_players),
            ("focus_areas", &self.focus_areas),
            ("focus_teams", &self.focus_teams),
        ] {
            if list.iter().any(|v| v.trim().is_empty()) {
                return Err(RewindError::validation(format!(
                    "{name} must not contain blank entries"
                )));
            }
        }
        Ok(())
    }

    /// Query string pairs in backend order. Focus lists are JSON-encoded; absent
    /// optional values are left out.
    pub fn query_pairs(&self) -> RewindResult<Vec<(&'static str, String)>> {
        let mut pairs = vec![
            ("game_id", self.game_id.clone()),
            ("focus_players", serde_json::to_string(&self.focus_players)?),
            ("focus_areas", serde_json::to_string(&self.focus_areas)?),
            ("focus_teams", serde_json::to_string(&self.focus_teams)?),
        ];
        if let Some(url) = self.music_url.as_deref().filter(|u| !u.trim().is_empty()) {
            pairs.push(("music_url", url.to_string()));
        }
        if let Some(lang) = &self.language {
            pairs.push(("language", lang.clone()));
        }
        Ok(pairs)
    }

    /// Key the backend caches this request's description under.
    pub fn cache_key(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            self.game_id,
            self.focus_players.join("_"),
            self.focus_areas.join("_"),
            self.focus_teams.join("_"),
            self.language.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/request.rs"]
mod tests;
