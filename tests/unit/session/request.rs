use super::*;

fn request() -> RewindRequest {
    RewindRequest {
        game_id: "745283".to_string(),
        focus_players: vec!["592450".to_string(), "665742".to_string()],
        focus_areas: vec!["Homeruns".to_string()],
        focus_teams: Vec::new(),
        music_url: Some("https://cdn.example/theme.mp3".to_string()),
        language: Some("en".to_string()),
    }
}

#[test]
fn query_pairs_json_encode_focus_lists() {
    let pairs = request().query_pairs().unwrap();
    assert_eq!(
        pairs,
        vec![
            ("game_id", "745283".to_string()),
            ("focus_players", r#"["592450","665742"]"#.to_string()),
            ("focus_areas", r#"["Homeruns"]"#.to_string()),
            ("focus_teams", "[]".to_string()),
            ("music_url", "https://cdn.example/theme.mp3".to_string()),
            ("language", "en".to_string()),
        ]
    );
}

#[test]
fn absent_optionals_are_omitted() {
    let pairs = RewindRequest::new("1").query_pairs().unwrap();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["game_id", "focus_players", "focus_areas", "focus_teams"]);
}

#[test]
fn cache_key_joins_every_filter() {
    assert_eq!(request().cache_key(), "745283_592450_665742_Homeruns__en");
    assert_eq!(RewindRequest::new("9").cache_key(), "9____");
}

#[test]
fn validate_requires_game_and_clean_lists() {
    request().validate().unwrap();
    assert!(RewindRequest::new("  ").validate().is_err());

    let mut r = request();
    r.focus_teams.push(String::new());
    assert!(r.validate().is_err());
}
