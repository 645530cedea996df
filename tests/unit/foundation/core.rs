use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn truncate_clips_both_ends_to_limit() {
    let r = FrameRange::new(FrameIndex(150), FrameIndex(330)).unwrap();
    assert_eq!(
        r.truncate(FrameIndex(300)),
        FrameRange::new(FrameIndex(150), FrameIndex(300)).unwrap()
    );

    let past = FrameRange::new(FrameIndex(310), FrameIndex(400)).unwrap();
    let cut = past.truncate(FrameIndex(300));
    assert!(cut.is_empty());
    assert_eq!(cut.start, FrameIndex(300));
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(30000, 1001).is_ok());
}

#[test]
fn seconds_to_frames_rounding_modes() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(5.0), 150);
    assert_eq!(fps.secs_to_frames_round(2.51), 75);
    assert_eq!(fps.secs_to_frames_floor(2.51), 75);
    assert_eq!(fps.secs_to_frames_round(0.05), 2);
    assert_eq!(fps.secs_to_frames_floor(0.05), 1);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);
    assert_eq!(fps.secs_to_frames_round(f64::NAN), 0);
}

#[test]
fn ntsc_frames_to_secs() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(30000);
    assert!((secs - 1001.0).abs() < 1e-9);
}
