use crate::foundation::core::FrameIndex;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
/// Draw instruction handed to the external rendering engine.
///
/// Frames inside nodes are section-local: frame 0 is the section's first active frame.
pub enum RenderNode {
    /// Audio track.
    Audio(AudioNode),
    /// Trimmed video clip.
    Video(VideoNode),
    /// Inning-by-inning scoreboard.
    Scoreboard(ScoreboardNode),
    /// Player profile card.
    PlayerBio(PlayerBioNode),
    /// Game summary card.
    GameInfo(GameInfoNode),
    /// Team stat leaders card.
    TeamLeaders(TeamLeadersNode),
    /// Stand-in drawn when a component could not be rendered.
    Placeholder(PlaceholderNode),
}

impl RenderNode {
    /// Placeholder node with `message`.
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self::Placeholder(PlaceholderNode {
            message: message.into(),
        })
    }

    /// `true` for [`RenderNode::Placeholder`].
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Audio playback instruction.
pub struct AudioNode {
    /// Audio URL.
    pub src: String,
    /// Linear gain.
    pub volume: f64,
    /// Source offset to start playback from.
    pub start_from: FrameIndex,
    /// Restart when the source ends.
    pub looped: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Video playback instruction.
pub struct VideoNode {
    /// Video URL.
    pub src: String,
    /// Source frame playback starts at.
    pub start_from: FrameIndex,
    /// Source frame playback stops at.
    pub end_at: FrameIndex,
    /// Linear gain of the clip's own audio.
    pub volume: f64,
    /// Caption drawn over the clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Scoreboard table.
pub struct ScoreboardNode {
    /// Home team label (id until the host resolves a name).
    pub home_team: String,
    /// Away team label.
    pub away_team: String,
    /// One column per inning.
    pub innings: Vec<InningColumn>,
    /// Home R/H/E.
    pub home_totals: [u32; 3],
    /// Away R/H/E.
    pub away_totals: [u32; 3],
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One inning column of a scoreboard.
pub struct InningColumn {
    /// Inning number.
    pub inning: u32,
    /// Home runs in the inning.
    pub home_runs: u32,
    /// Away runs in the inning.
    pub away_runs: u32,
    /// Inning is the one being narrated.
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Player card.
pub struct PlayerBioNode {
    /// Display name, with nickname when present.
    pub title: String,
    /// Headshot URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headshot_url: Option<String>,
    /// Label/value rows in display order.
    pub facts: Vec<(String, String)>,
    /// Match summary paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Link to the public profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Game info card.
pub struct GameInfoNode {
    /// Home team name.
    pub home_team: String,
    /// Home logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_logo_url: Option<String>,
    /// Away team name.
    pub away_team: String,
    /// Away logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_logo_url: Option<String>,
    /// Venue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start time, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Team leaders card.
pub struct TeamLeadersNode {
    /// Heading, e.g. "New York Yankees Leaders".
    pub heading: String,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Stat columns in display order.
    pub columns: Vec<LeaderColumn>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One stat column of the leaders card.
pub struct LeaderColumn {
    /// Column heading.
    pub title: String,
    /// Stat label printed next to each value.
    pub stat: String,
    /// `(player name, value)` rows.
    pub rows: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Placeholder text.
pub struct PlaceholderNode {
    /// Message shown in place of the component.
    pub message: String,
}
