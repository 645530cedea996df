use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::foundation::error::{RewindError, RewindResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Root document returned by the highlight backend for one "Generate" request.
///
/// Held immutably for one playback session; a regenerate replaces it wholesale.
pub struct VideoDescription {
    /// Game identifier echoed by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Scalar>,
    /// Authoritative length of the whole reel in seconds.
    ///
    /// Missing or non-numeric values read as NaN; composition then falls back to the
    /// laid-out length.
    #[serde(default = "missing_secs", deserialize_with = "lenient_secs")]
    pub total_duration: f64,
    /// Looping background track. See [`VideoDescription::music_url`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_music_url: Option<String>,
    /// Sections in playback order. An element that is not a section object becomes
    /// [`Section::malformed`].
    #[serde(default, deserialize_with = "lenient_sections")]
    pub video: Vec<Section>,
}

impl VideoDescription {
    /// Parse a description from JSON text.
    pub fn from_json(s: &str) -> RewindResult<Self> {
        serde_json::from_str(s).map_err(|e| RewindError::serde(format!("video description: {e}")))
    }

    /// Background music URL, treating blank values and the literal `"null"` as absent.
    pub fn music_url(&self) -> Option<&str> {
        let url = self.background_music_url.as_deref()?.trim();
        if url.is_empty() || url.eq_ignore_ascii_case("null") {
            return None;
        }
        Some(url)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A contiguous, named interval of the reel with stacked components.
pub struct Section {
    /// Rendering key; the backend sends either a string or a number.
    #[serde(default = "blank_id", deserialize_with = "lenient_id")]
    pub section_id: Scalar,
    /// Nominal length in seconds; NaN when missing or not a number.
    #[serde(default = "missing_secs", deserialize_with = "lenient_secs")]
    pub section_duration: f64,
    /// Components drawn together for the whole active window.
    #[serde(default, deserialize_with = "lenient_components")]
    pub section_components: Vec<Component>,
}

impl Section {
    /// Stand-in for a `video` element that could not be read; composition skips it.
    pub fn malformed() -> Self {
        Self {
            section_id: blank_id(),
            section_duration: missing_secs(),
            section_components: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// A JSON value that is either a string or a number.
pub enum Scalar {
    /// String form.
    Text(String),
    /// Numeric form.
    Number(serde_json::Number),
}

impl Scalar {
    /// Canonical string form: strings verbatim, numbers in their JSON spelling.
    pub fn canonical(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Closed set of component renderers.
pub enum ComponentKind {
    /// Narration audio.
    Dialogue,
    /// Inning-by-inning scoreboard.
    LineBox,
    /// Player profile with match summary.
    PlayerCard,
    /// Teams, venue and start time.
    GameInfoCard,
    /// Trimmed clip of broadcast footage.
    HighlightVideo,
    /// Team stat leaders.
    TeamLeaders,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Dialogue,
        Self::LineBox,
        Self::PlayerCard,
        Self::GameInfoCard,
        Self::HighlightVideo,
        Self::TeamLeaders,
    ];

    /// Resolve a wire tag. Tags are case-sensitive, as the backend emits them.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Dialogue" => Some(Self::Dialogue),
            "LineBox" => Some(Self::LineBox),
            "PlayerCard" => Some(Self::PlayerCard),
            "GameInfoCard" => Some(Self::GameInfoCard),
            "HighlightVideo" => Some(Self::HighlightVideo),
            "TeamLeaders" => Some(Self::TeamLeaders),
            _ => None,
        }
    }

    /// Wire tag of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Dialogue => "Dialogue",
            Self::LineBox => "LineBox",
            Self::PlayerCard => "PlayerCard",
            Self::GameInfoCard => "GameInfoCard",
            Self::HighlightVideo => "HighlightVideo",
            Self::TeamLeaders => "TeamLeaders",
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One component descriptor as it arrives on the wire.
///
/// The payload stays raw JSON until the matching renderer parses it, so a malformed
/// payload only affects that component.
pub struct Component {
    /// Wire tag, see [`ComponentKind`]. Empty when the tag is missing or not a string.
    #[serde(rename = "type", default, deserialize_with = "lenient_tag")]
    pub kind: String,
    /// Tag-specific payload.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
    /// Top-level media URL (dialogue components carry it here).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Narration length in seconds, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Component {
    /// Resolved kind, or `None` for an unknown tag.
    pub fn kind(&self) -> Option<ComponentKind> {
        ComponentKind::from_tag(&self.kind)
    }

    /// Stand-in for a component element that could not be read; dispatch omits it.
    pub fn malformed() -> Self {
        Self {
            kind: String::new(),
            data: Value::Null,
            url: None,
            duration: None,
        }
    }
}

fn missing_secs() -> f64 {
    f64::NAN
}

fn blank_id() -> Scalar {
    Scalar::Text(String::new())
}

fn lenient_secs<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Scalar, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Scalar::Text(s),
        Value::Number(n) => Scalar::Number(n),
        _ => blank_id(),
    })
}

fn lenient_tag<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

// `null` reads as empty; any other non-array is still a document error.
fn lenient_sections<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Section>, D::Error> {
    let items = Option::<Vec<Value>>::deserialize(d)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_else(|_| Section::malformed()))
        .collect())
}

fn lenient_components<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Component>, D::Error> {
    let Value::Array(items) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_else(|_| Component::malformed()))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/description/model.rs"]
mod tests;
