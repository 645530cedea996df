//! Data contracts of the six component renderers.
//!
//! Field names follow the highlight backend's JSON exactly (a mix of camelCase and
//! snake_case). Everything a card can live without is optional so that partially filled
//! payloads still render.

use serde::de::DeserializeOwned;

use crate::{
    description::model::{Component, Scalar},
    foundation::error::{RewindError, RewindResult},
};

/// Parse `component.data` as the payload type `T`.
pub fn parse_payload<T: DeserializeOwned>(component: &Component) -> RewindResult<T> {
    if component.data.is_null() {
        return Err(RewindError::payload(format!(
            "{} component has no data",
            component.kind
        )));
    }
    serde_json::from_value(component.data.clone())
        .map_err(|e| RewindError::payload(format!("{} data: {e}", component.kind)))
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Narration track for one section.
pub struct DialogueData {
    /// Audio URL.
    pub url: String,
    /// Narration length in seconds, when the backend measured it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl DialogueData {
    /// Dialogue components carry `url` at the top level; `data.url` is accepted too.
    pub fn from_component(component: &Component) -> RewindResult<Self> {
        let url = component
            .url
            .clone()
            .or_else(|| {
                component
                    .data
                    .get("url")
                    .and_then(|v| v.as_str())
                    .map(str::to_owned)
            })
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| RewindError::payload("Dialogue component has no url"))?;
        Ok(Self {
            url,
            duration: component.duration,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Payload of a `LineBox` (scoreboard) component.
pub struct LineBoxData {
    /// Game the score belongs to.
    #[serde(rename = "gameId", default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<Scalar>,
    /// Inning the narration refers to.
    #[serde(rename = "currentInning", default, skip_serializing_if = "Option::is_none")]
    pub current_inning: Option<i64>,
    /// Linescore snapshot.
    pub score: LineScore,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Teams and scoreboard of a linescore.
pub struct LineScore {
    /// Home team id.
    pub home_team: Scalar,
    /// Away team id.
    pub away_team: Scalar,
    /// Per-inning lines and totals.
    pub scoreboard: Scoreboard,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-inning lines and game totals.
pub struct Scoreboard {
    /// Innings in play order.
    #[serde(default)]
    pub innings: Vec<InningLine>,
    /// Runs/hits/errors totals.
    pub totals: LineTotals,
    /// Highlighted inning; `-1` means none.
    #[serde(default = "no_inning")]
    pub current_inning: i64,
}

fn no_inning() -> i64 {
    -1
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One inning of the linescore.
pub struct InningLine {
    /// Inning number (1-based).
    pub inning: u32,
    /// Home half.
    pub home: HalfInning,
    /// Away half.
    pub away: HalfInning,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One team's half of an inning.
pub struct HalfInning {
    /// Runs scored.
    pub runs: InningRuns,
    /// Hits.
    #[serde(default)]
    pub hits: u32,
    /// Errors.
    #[serde(default)]
    pub errors: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Runs of a half inning; the stats feed sends either a bare count or a detail object.
pub enum InningRuns {
    /// `{"runs": n, "leftOnBase": m}`.
    Detailed {
        /// Runs scored.
        #[serde(default)]
        runs: u32,
        /// Runners stranded.
        #[serde(rename = "leftOnBase", default)]
        left_on_base: u32,
    },
    /// Bare run count.
    Count(u32),
}

impl InningRuns {
    /// Runs scored.
    pub fn runs(&self) -> u32 {
        match self {
            Self::Detailed { runs, .. } => *runs,
            Self::Count(n) => *n,
        }
    }

    /// Runners left on base, when reported.
    pub fn left_on_base(&self) -> Option<u32> {
        match self {
            Self::Detailed { left_on_base, .. } => Some(*left_on_base),
            Self::Count(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Game totals per team.
pub struct LineTotals {
    /// Home totals.
    pub home: TeamTotals,
    /// Away totals.
    pub away: TeamTotals,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Runs, hits and errors of one team.
pub struct TeamTotals {
    /// Runs.
    #[serde(default)]
    pub runs: u32,
    /// Hits.
    #[serde(default)]
    pub hits: u32,
    /// Errors.
    #[serde(default)]
    pub errors: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Payload of a `PlayerCard` component.
pub struct PlayerCardData {
    /// Player id.
    #[serde(rename = "playerId", default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<Scalar>,
    /// Profile as looked up by the backend.
    pub data: PlayerProfile,
    /// Narrated summary of the player's game.
    #[serde(
        rename = "playerMatchSummary",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub player_match_summary: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Player profile fields shown on the card.
pub struct PlayerProfile {
    /// Full name.
    pub name: Option<String>,
    /// Nickname.
    pub nickname: Option<String>,
    /// Primary position abbreviation.
    pub position: Option<String>,
    /// Current age.
    pub age: Option<Scalar>,
    /// Height as written by the stats feed (`6' 7"`).
    pub height: Option<String>,
    /// Weight in pounds.
    pub weight: Option<Scalar>,
    /// Batting side.
    pub bats: Option<String>,
    /// Throwing hand.
    pub throws: Option<String>,
    /// Seasons since debut.
    pub years_in_mlb: Option<Scalar>,
    /// Headshot image URL.
    pub headshot_url: Option<String>,
    /// Public profile URL.
    pub mlb_profile_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Payload of a `GameInfoCard` component.
pub struct GameInfoData {
    /// Game id.
    #[serde(rename = "gameId", default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<Scalar>,
    /// Venue name.
    #[serde(default)]
    pub location: Option<String>,
    /// Start time as sent by the backend (ISO-8601).
    #[serde(rename = "dateAndTime", default)]
    pub date_and_time: Option<String>,
    /// Home team display name.
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    /// Away team display name.
    #[serde(rename = "awayTeamName")]
    pub away_team_name: String,
    /// Home logo URL.
    #[serde(rename = "homeTeamLogoURL", default)]
    pub home_team_logo_url: Option<String>,
    /// Away logo URL.
    #[serde(rename = "awayTeamLogoURL", default)]
    pub away_team_logo_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Payload of a `HighlightVideo` component.
pub struct HighlightData {
    /// Source clip URL.
    pub url: String,
    /// Trim window inside the source clip.
    pub vid_time: VidTime,
    /// Clip title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Clip description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// `HH:MM:SS` trim window.
pub struct VidTime {
    /// Trim start.
    pub start: String,
    /// Trim end.
    pub end: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Payload of a `TeamLeaders` component.
pub struct TeamLeadersData {
    /// Team id.
    #[serde(rename = "teamId")]
    pub team_id: Option<Scalar>,
    /// Season the leaders were computed for.
    pub season: Option<Scalar>,
    /// Team name and logo.
    #[serde(rename = "teamDetails")]
    pub team_details: TeamDetails,
    /// Leader groups keyed by stat.
    pub champs: Champs,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Team display data.
pub struct TeamDetails {
    /// Team name.
    pub name: Option<String>,
    /// Logo URL.
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// The three stat categories shown on the leaders card.
pub struct Champs {
    /// On-base plus slugging.
    #[serde(rename = "onBasePlusSlugging")]
    pub on_base_plus_slugging: LeaderCategory,
    /// Earned run average.
    #[serde(rename = "earnedRunAverage")]
    pub earned_run_average: LeaderCategory,
    /// Fielding percentage.
    #[serde(rename = "fieldingPercentage")]
    pub fielding_percentage: LeaderCategory,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Stats-feed leader category; only the first group is displayed.
pub struct LeaderCategory {
    /// Leader groups as returned by the stats feed.
    #[serde(rename = "teamLeaders")]
    pub team_leaders: Vec<LeaderGroup>,
}

impl LeaderCategory {
    /// Leaders of the first group, or nothing.
    pub fn leaders(&self) -> &[Leader] {
        self.team_leaders
            .first()
            .map(|g| g.leaders.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// A ranked list of leaders.
pub struct LeaderGroup {
    /// Leaders in rank order.
    pub leaders: Vec<Leader>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One ranked player.
pub struct Leader {
    /// Player identity.
    pub person: Person,
    /// Stat value, as formatted by the feed (`".912"`).
    pub value: Scalar,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Stats-feed person reference.
pub struct Person {
    /// Player id.
    pub id: Scalar,
    /// Display name.
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[cfg(test)]
#[path = "../../tests/unit/description/payload.rs"]
mod tests;
