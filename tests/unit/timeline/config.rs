use super::*;

#[test]
fn defaults_match_stock_player() {
    let cfg = ComposeConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    assert_eq!(cfg.transition.duration_frames, 30);
    assert_eq!(cfg.transition_pad_frames, 30);
    assert_eq!(cfg.fade_frames(), 60);
    assert_eq!(cfg.music_volume, 0.2);
    assert_eq!(cfg.highlight_volume, 0.3);
}

#[test]
fn transition_longer_than_pad_is_rejected() {
    let mut cfg = ComposeConfig::default();
    cfg.transition.duration_frames = 31;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("transition_pad_frames"));

    cfg.transition_pad_frames = 45;
    cfg.validate().unwrap();
}

#[test]
fn bad_values_are_rejected() {
    let cfg = ComposeConfig {
        fade_secs: f64::NAN,
        ..ComposeConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = ComposeConfig {
        music_volume: -0.1,
        ..ComposeConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = ComposeConfig {
        fps: Fps { num: 30, den: 0 },
        ..ComposeConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg: ComposeConfig =
        serde_json::from_str(r#"{"fps": {"num": 60, "den": 1}, "fade_secs": 1.5}"#).unwrap();
    assert_eq!(cfg.fps.num, 60);
    assert_eq!(cfg.fade_frames(), 90);
    assert_eq!(cfg.transition_pad_frames, 30);
    assert_eq!(cfg.dialogue_volume, 1.0);
}

#[test]
fn from_json_file_validates() {
    let dir = std::env::temp_dir().join(format!("rewind-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{"music_volume": 0.5}"#).unwrap();
    assert_eq!(ComposeConfig::from_json_file(&good).unwrap().music_volume, 0.5);

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{"transition_pad_frames": 10}"#).unwrap();
    assert!(matches!(
        ComposeConfig::from_json_file(&bad),
        Err(RewindError::Validation(_))
    ));

    let missing = dir.join("missing.json");
    assert!(matches!(
        ComposeConfig::from_json_file(&missing),
        Err(RewindError::Other(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
