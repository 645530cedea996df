use super::*;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rewind-source-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn closures_are_sources() {
    let mut calls = 0;
    let mut source = |r: &RewindRequest| -> RewindResult<Option<VideoDescription>> {
        calls += 1;
        assert_eq!(r.game_id, "1");
        Ok(None)
    };
    assert!(source.fetch(&RewindRequest::new("1")).unwrap().is_none());
    assert_eq!(calls, 1);
}

#[test]
fn json_file_source_reads_description_or_null() {
    let path = temp_file(
        "desc.json",
        r#"{"total_duration": 5, "video": [{"section_id": 1, "section_duration": 5}]}"#,
    );
    let mut source = JsonFileSource::new(&path);
    assert_eq!(source.path(), path.as_path());
    let desc = source.fetch(&RewindRequest::new("1")).unwrap().unwrap();
    assert_eq!(desc.video.len(), 1);

    let null = temp_file("null.json", "null");
    assert!(
        JsonFileSource::new(null)
            .fetch(&RewindRequest::new("1"))
            .unwrap()
            .is_none()
    );
}

#[test]
fn json_file_source_errors() {
    let missing = std::env::temp_dir().join("rewind-source-does-not-exist.json");
    let err = JsonFileSource::new(missing)
        .fetch(&RewindRequest::new("1"))
        .unwrap_err();
    assert!(err.is_transient());

    let bad = temp_file("bad.json", "{not json");
    let err = JsonFileSource::new(bad)
        .fetch(&RewindRequest::new("1"))
        .unwrap_err();
    assert!(matches!(err, RewindError::Serde(_)));
}
