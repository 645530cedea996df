use super::*;
use crate::{
    description::model::VideoDescription,
    effects::transitions::Direction,
    timeline::compose::compose,
};
use serde_json::json;

fn timeline(music: Option<&str>) -> Timeline {
    let desc: VideoDescription = serde_json::from_value(json!({
        "total_duration": 10,
        "background_music_url": music,
        "video": [
            {"section_id": "open", "section_duration": 5, "section_components": [
                {"type": "GameInfoCard", "data": {"homeTeamName": "Yankees", "awayTeamName": "Mets"}}
            ]},
            {"section_id": "close", "section_duration": 5}
        ]
    }))
    .unwrap();
    compose(Some(&desc))
}

fn ids(graph: &FrameGraph) -> Vec<&str> {
    graph.layers.iter().map(|l| l.section_id.as_str()).collect()
}

#[test]
fn only_first_section_before_the_window() {
    let tl = timeline(None);
    let g = tl.eval_frame(FrameIndex(149)).unwrap();
    assert_eq!(ids(&g), vec!["open"]);
    assert_eq!(g.layers[0].phase, SectionPhase::Active);
    assert_eq!(g.layers[0].transition, None);
    assert_eq!(g.layers[0].nodes.len(), 1);
    assert_eq!(g.music_volume, None);
}

#[test]
fn window_shows_both_sections_outgoing_first() {
    let tl = timeline(None);
    let g = tl.eval_frame(FrameIndex(150)).unwrap();
    assert_eq!(ids(&g), vec!["open", "close"]);

    let out = &g.layers[0];
    assert_eq!(out.phase, SectionPhase::Transitioning);
    let t = out.transition.as_ref().unwrap();
    assert_eq!(t.role, TransitionRole::Outgoing);
    assert_eq!(t.progress, 0.0);
    assert_eq!(
        t.kind,
        TransitionKind::Flip {
            direction: Direction::FromLeft
        }
    );

    let inc = &g.layers[1];
    assert_eq!(inc.phase, SectionPhase::Active);
    assert_eq!(inc.local_frame, FrameIndex(0));
    assert_eq!(inc.transition.as_ref().unwrap().role, TransitionRole::Incoming);
}

#[test]
fn progress_reaches_one_on_last_window_frame() {
    let tl = timeline(None);
    let last = tl.eval_frame(FrameIndex(179)).unwrap();
    assert_eq!(last.layers[0].transition.as_ref().unwrap().progress, 1.0);
    assert_eq!(last.layers[1].transition.as_ref().unwrap().progress, 1.0);

    let after = tl.eval_frame(FrameIndex(180)).unwrap();
    assert_eq!(ids(&after), vec!["close"]);
    assert_eq!(after.layers[0].transition, None);
    assert_eq!(after.layers[0].local_frame, FrameIndex(30));
}

#[test]
fn out_of_range_frame_is_an_error() {
    let tl = timeline(None);
    tl.eval_frame(FrameIndex(299)).unwrap();
    assert!(matches!(
        tl.eval_frame(FrameIndex(300)),
        Err(RewindError::Evaluation(_))
    ));
}

#[test]
fn music_volume_follows_envelope() {
    let tl = timeline(Some("https://cdn.example/theme.mp3"));
    assert_eq!(tl.eval_frame(FrameIndex(0)).unwrap().music_volume, Some(0.0));
    assert_eq!(tl.eval_frame(FrameIndex(30)).unwrap().music_volume, Some(0.1));
    assert_eq!(tl.eval_frame(FrameIndex(150)).unwrap().music_volume, Some(0.2));
}

#[test]
fn empty_timeline_evaluates_to_placeholder() {
    let tl = compose(None);
    let g = tl.eval_frame(FrameIndex(0)).unwrap();
    assert!(g.layers.is_empty());
    assert!(g.placeholder.unwrap().is_placeholder());
    assert!(tl.eval_frame(FrameIndex(1)).is_err());
}
