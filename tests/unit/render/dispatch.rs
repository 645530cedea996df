use super::*;
use crate::foundation::core::Fps;
use crate::render::hooks::DefaultRenderer;
use serde_json::json;

fn ctx() -> RenderCtx<'static> {
    RenderCtx {
        fps: Fps::new(30, 1).unwrap(),
        section_id: "s1",
        dialogue_volume: 1.0,
        highlight_volume: 0.3,
    }
}

fn component(kind: &str, data: serde_json::Value) -> Component {
    Component {
        kind: kind.to_string(),
        data,
        url: None,
        duration: None,
    }
}

fn valid_components() -> Vec<Component> {
    let mut dialogue = component("Dialogue", serde_json::Value::Null);
    dialogue.url = Some("https://cdn.example/n.mp3".to_string());
    vec![
        dialogue,
        component(
            "LineBox",
            json!({"score": {"home_team": 1, "away_team": 2, "scoreboard": {
                "innings": [], "totals": {"home": {}, "away": {}}
            }}}),
        ),
        component("PlayerCard", json!({"data": {"name": "Juan Soto"}})),
        component(
            "GameInfoCard",
            json!({"homeTeamName": "Yankees", "awayTeamName": "Red Sox"}),
        ),
        component(
            "HighlightVideo",
            json!({"url": "https://cdn.example/c.mp4", "vid_time": {"start": "00:00:01", "end": "00:00:04"}}),
        ),
        component("TeamLeaders", json!({"teamDetails": {"name": "Yankees"}})),
    ]
}

#[test]
fn every_known_tag_renders_a_node() {
    let components = valid_components();
    assert_eq!(components.len(), ComponentKind::ALL.len());
    for c in &components {
        let outcome = dispatch(c, &DefaultRenderer, &ctx());
        assert!(
            matches!(outcome, DispatchOutcome::Rendered(_)),
            "{}: {outcome:?}",
            c.kind
        );
    }
}

#[test]
fn unknown_tag_is_omitted() {
    let c = component("Chart", json!({"points": [1, 2, 3]}));
    assert!(render(&c, &DefaultRenderer, &ctx()).is_none());
    assert!(matches!(
        dispatch(&c, &DefaultRenderer, &ctx()),
        DispatchOutcome::Unknown { kind } if kind == "Chart"
    ));
}

#[test]
fn malformed_payload_degrades_to_placeholder() {
    for kind in ComponentKind::ALL {
        if kind == ComponentKind::Dialogue {
            continue;
        }
        let c = component(kind.tag(), json!("not an object"));
        let node = render(&c, &DefaultRenderer, &ctx()).unwrap();
        assert!(node.is_placeholder(), "{kind:?}");
    }
}

#[test]
fn dialogue_without_url_is_omitted() {
    let c = component("Dialogue", json!({"text": "no audio yet"}));
    assert!(render(&c, &DefaultRenderer, &ctx()).is_none());
    let outcome = dispatch(&c, &DefaultRenderer, &ctx());
    let DispatchOutcome::Omitted { kind, error } = outcome else {
        panic!("expected omitted outcome, got {outcome:?}");
    };
    assert_eq!(kind, ComponentKind::Dialogue);
    assert!(matches!(error, RewindError::Payload(_)));
}

#[test]
fn bad_timestamp_only_skips_that_clip() {
    let c = component(
        "HighlightVideo",
        json!({"url": "https://cdn.example/c.mp4", "vid_time": {"start": "1:2", "end": "00:00:04"}}),
    );
    let DispatchOutcome::Degraded { node, error } = dispatch(&c, &DefaultRenderer, &ctx()) else {
        panic!("expected degraded outcome");
    };
    assert_eq!(node, RenderNode::placeholder("No video available"));
    assert!(matches!(error, RewindError::Timestamp(_)));
}

struct FailingRenderer;

impl ComponentRenderer for FailingRenderer {
    fn dialogue(
        &self,
        _: &DialogueData,
        _: &RenderCtx<'_>,
    ) -> crate::foundation::error::RewindResult<RenderNode> {
        Err(RewindError::payload("host refused"))
    }
    fn line_box(
        &self,
        d: &LineBoxData,
        c: &RenderCtx<'_>,
    ) -> crate::foundation::error::RewindResult<RenderNode> {
        crate::render::hooks::DefaultRenderer.line_box(d, c)
    }
    fn player_card(
        &self,
        d: &PlayerCardData,
        c: &RenderCtx<'_>,
    ) -> crate::foundation::error::RewindResult<RenderNode> {
        crate::render::hooks::DefaultRenderer.player_card(d, c)
    }
    fn game_info_card(
        &self,
        d: &GameInfoData,
        c: &RenderCtx<'_>,
    ) -> crate::foundation::error::RewindResult<RenderNode> {
        crate::render::hooks::DefaultRenderer.game_info_card(d, c)
    }
    fn highlight_video(
        &self,
        d: &HighlightData,
        c: &RenderCtx<'_>,
    ) -> crate::foundation::error::RewindResult<RenderNode> {
        crate::render::hooks::DefaultRenderer.highlight_video(d, c)
    }
    fn team_leaders(
        &self,
        d: &TeamLeadersData,
        c: &RenderCtx<'_>,
    ) -> crate::foundation::error::RewindResult<RenderNode> {
        crate::render::hooks::DefaultRenderer.team_leaders(d, c)
    }
}

#[test]
fn host_renderer_failure_is_isolated() {
    let components = valid_components();
    let nodes: Vec<RenderNode> = components
        .iter()
        .filter_map(|c| render(c, &FailingRenderer, &ctx()))
        .collect();
    assert_eq!(nodes.len(), components.len() - 1);
    assert!(nodes.iter().all(|n| !n.is_placeholder()));
    assert!(matches!(
        dispatch(&components[0], &FailingRenderer, &ctx()),
        DispatchOutcome::Omitted { kind: ComponentKind::Dialogue, .. }
    ));
}
