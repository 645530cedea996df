use crate::{
    animation::ease::Ease,
    foundation::error::{RewindError, RewindResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Transition placed between two adjacent sections.
pub struct TransitionSpec {
    /// Transition kind identifier (`flip`, `fade`, `wipe`, `slide`).
    pub kind: String,
    /// Transition duration in frames.
    pub duration_frames: u64,
    /// Easing applied to transition progress.
    #[serde(default)]
    pub ease: Ease,
    /// Transition parameter object.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

impl TransitionSpec {
    /// The observed default: a 30-frame linear flip entering from the left.
    pub fn flip_from_left(duration_frames: u64) -> Self {
        Self {
            kind: "flip".to_string(),
            duration_frames,
            ease: Ease::Linear,
            params: serde_json::json!({ "direction": "from-left" }),
        }
    }

    /// Validate transition payload invariants.
    pub fn validate(&self) -> RewindResult<()> {
        if self.duration_frames == 0 {
            return Err(RewindError::validation(
                "transition duration_frames must be > 0",
            ));
        }
        if !(self.params.is_null() || self.params.is_object()) {
            return Err(RewindError::validation(
                "transition params must be an object when set",
            ));
        }
        parse_transition(self).map(|_| ())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Edge the incoming section enters from.
pub enum Direction {
    /// Enters from the left edge.
    FromLeft,
    /// Enters from the right edge.
    FromRight,
    /// Enters from the top edge.
    FromTop,
    /// Enters from the bottom edge.
    FromBottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Parsed presentation of a transition.
pub enum TransitionKind {
    /// 3D card flip around the axis implied by `direction`.
    Flip {
        /// Entry edge.
        direction: Direction,
    },
    /// Opacity cross-blend.
    Fade,
    /// Hard-edged reveal.
    Wipe {
        /// Entry edge.
        direction: Direction,
    },
    /// Incoming section pushes the outgoing one away.
    Slide {
        /// Entry edge.
        direction: Direction,
    },
}

/// Parse a kind string plus its params object.
pub fn parse_transition_kind_params(
    kind: &str,
    params: &serde_json::Value,
) -> RewindResult<TransitionKind> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(RewindError::validation("transition kind must be non-empty"));
    }

    let params = if params.is_null() {
        None
    } else {
        Some(
            params
                .as_object()
                .ok_or_else(|| RewindError::validation("transition params must be an object"))?,
        )
    };
    let direction = || -> RewindResult<Direction> {
        match params
            .and_then(|p| p.get("direction"))
            .and_then(|v| v.as_str())
        {
            None => Ok(Direction::FromLeft),
            Some(s) => parse_direction(s),
        }
    };

    match kind.as_str() {
        "flip" => Ok(TransitionKind::Flip {
            direction: direction()?,
        }),
        "fade" | "crossfade" => Ok(TransitionKind::Fade),
        "wipe" => Ok(TransitionKind::Wipe {
            direction: direction()?,
        }),
        "slide" => Ok(TransitionKind::Slide {
            direction: direction()?,
        }),
        _ => Err(RewindError::validation(format!(
            "unknown transition kind '{kind}'"
        ))),
    }
}

fn parse_direction(s: &str) -> RewindResult<Direction> {
    match s.trim().to_ascii_lowercase().as_str() {
        "from-left" | "from_left" | "left" | "ltr" => Ok(Direction::FromLeft),
        "from-right" | "from_right" | "right" | "rtl" => Ok(Direction::FromRight),
        "from-top" | "from_top" | "top" | "ttb" => Ok(Direction::FromTop),
        "from-bottom" | "from_bottom" | "bottom" | "btt" => Ok(Direction::FromBottom),
        other => Err(RewindError::validation(format!(
            "unknown transition direction '{other}'"
        ))),
    }
}

/// Parse a [`TransitionSpec`] into its presentation.
pub fn parse_transition(spec: &TransitionSpec) -> RewindResult<TransitionKind> {
    parse_transition_kind_params(&spec.kind, &spec.params)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
