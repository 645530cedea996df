use crate::{
    description::model::{Component, ComponentKind},
    description::payload::{
        DialogueData, GameInfoData, HighlightData, LineBoxData, PlayerCardData, TeamLeadersData,
        parse_payload,
    },
    foundation::error::RewindError,
    render::hooks::{ComponentRenderer, RenderCtx},
    render::node::RenderNode,
};

#[derive(Debug)]
/// Result of routing one component to its renderer.
pub enum DispatchOutcome {
    /// The renderer produced a node.
    Rendered(RenderNode),
    /// The payload or renderer failed; `node` is the placeholder drawn instead.
    Degraded {
        /// Placeholder node.
        node: RenderNode,
        /// Why the component could not be rendered.
        error: RewindError,
    },
    /// An audio-only component failed; there is nothing to draw in its place.
    Omitted {
        /// Kind of the dropped component.
        kind: ComponentKind,
        /// Why the component could not be rendered.
        error: RewindError,
    },
    /// Tag is not a known component kind; nothing is drawn.
    Unknown {
        /// The unrecognised tag.
        kind: String,
    },
}

impl DispatchOutcome {
    /// Node to draw, if any.
    pub fn into_node(self) -> Option<RenderNode> {
        match self {
            Self::Rendered(node) | Self::Degraded { node, .. } => Some(node),
            Self::Omitted { .. } | Self::Unknown { .. } => None,
        }
    }
}

/// Route `component` to the matching hook on `renderer`.
///
/// Never panics and never propagates an error: a failing visual component degrades to
/// a placeholder, a failing narration track is dropped, and so is an unknown tag.
pub fn dispatch<R>(component: &Component, renderer: &R, ctx: &RenderCtx<'_>) -> DispatchOutcome
where
    R: ComponentRenderer + ?Sized,
{
    let Some(kind) = component.kind() else {
        tracing::debug!(
            section = ctx.section_id,
            kind = %component.kind,
            "skipping unknown component type"
        );
        return DispatchOutcome::Unknown {
            kind: component.kind.clone(),
        };
    };

    let result = match kind {
        ComponentKind::Dialogue => {
            DialogueData::from_component(component).and_then(|d| renderer.dialogue(&d, ctx))
        }
        ComponentKind::LineBox => {
            parse_payload::<LineBoxData>(component).and_then(|d| renderer.line_box(&d, ctx))
        }
        ComponentKind::PlayerCard => parse_payload::<PlayerCardData>(component)
            .and_then(|d| renderer.player_card(&d, ctx)),
        ComponentKind::GameInfoCard => parse_payload::<GameInfoData>(component)
            .and_then(|d| renderer.game_info_card(&d, ctx)),
        ComponentKind::HighlightVideo => parse_payload::<HighlightData>(component)
            .and_then(|d| renderer.highlight_video(&d, ctx)),
        ComponentKind::TeamLeaders => parse_payload::<TeamLeadersData>(component)
            .and_then(|d| renderer.team_leaders(&d, ctx)),
    };

    match result {
        Ok(node) => DispatchOutcome::Rendered(node),
        Err(error) => match fallback_message(kind) {
            Some(message) => {
                tracing::warn!(
                    section = ctx.section_id,
                    kind = kind.tag(),
                    %error,
                    "component degraded to placeholder"
                );
                DispatchOutcome::Degraded {
                    node: RenderNode::placeholder(message),
                    error,
                }
            }
            None => {
                tracing::warn!(
                    section = ctx.section_id,
                    kind = kind.tag(),
                    %error,
                    "component omitted"
                );
                DispatchOutcome::Omitted { kind, error }
            }
        },
    }
}

/// Convenience wrapper over [`dispatch`] returning only the node.
pub fn render<R>(component: &Component, renderer: &R, ctx: &RenderCtx<'_>) -> Option<RenderNode>
where
    R: ComponentRenderer + ?Sized,
{
    dispatch(component, renderer, ctx).into_node()
}

// Audio-only kinds have no placeholder.
fn fallback_message(kind: ComponentKind) -> Option<&'static str> {
    match kind {
        ComponentKind::Dialogue => None,
        ComponentKind::LineBox => Some("Scoreboard unavailable"),
        ComponentKind::PlayerCard => Some("No Player Data Available"),
        ComponentKind::GameInfoCard => Some("Game info unavailable"),
        ComponentKind::HighlightVideo => Some("No video available"),
        ComponentKind::TeamLeaders => Some("Team leaders unavailable"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
