use super::*;
use crate::{
    animation::ease::Ease,
    description::model::VideoDescription,
    render::hooks::DefaultRenderer,
    timeline::compose::{Composer, compose},
    timeline::config::ComposeConfig,
};
use serde_json::json;

fn desc(durations: &[f64], music: Option<&str>) -> VideoDescription {
    let video: Vec<_> = durations
        .iter()
        .enumerate()
        .map(|(i, d)| json!({"section_id": i, "section_duration": d}))
        .collect();
    serde_json::from_value(json!({
        "total_duration": durations.iter().sum::<f64>(),
        "background_music_url": music,
        "video": video
    }))
    .unwrap()
}

#[test]
fn equal_descriptions_hash_equal() {
    let a = desc(&[5.0, 5.0], Some("https://cdn.example/a.mp3"));
    let b = desc(&[5.0, 5.0], Some("https://cdn.example/a.mp3"));
    assert_eq!(
        fingerprint_timeline(&compose(Some(&a))),
        fingerprint_timeline(&compose(Some(&b)))
    );
}

#[test]
fn layout_and_audio_changes_hash_differently() {
    let base = fingerprint_timeline(&compose(Some(&desc(&[5.0, 5.0], None))));
    let longer = fingerprint_timeline(&compose(Some(&desc(&[5.0, 6.0], None))));
    let music = fingerprint_timeline(&compose(Some(&desc(
        &[5.0, 5.0],
        Some("https://cdn.example/a.mp3"),
    ))));
    let empty = fingerprint_timeline(&compose(None));
    assert_ne!(base, longer);
    assert_ne!(base, music);
    assert_ne!(base, empty);
}

#[test]
fn transition_direction_and_ease_hash_differently() {
    let d = desc(&[5.0, 5.0], None);
    let with = |edit: &dyn Fn(&mut ComposeConfig)| {
        let mut config = ComposeConfig::default();
        edit(&mut config);
        let composer = Composer::new(config, DefaultRenderer).unwrap();
        fingerprint_timeline(&composer.compose(Some(&d)))
    };

    let base = with(&|_| {});
    let from_right = with(&|c| c.transition.params = json!({"direction": "from-right"}));
    let eased = with(&|c| c.transition.ease = Ease::InOutCubic);
    assert_eq!(base, fingerprint_timeline(&compose(Some(&d))));
    assert_ne!(base, from_right);
    assert_ne!(base, eased);
    assert_ne!(from_right, eased);
}
