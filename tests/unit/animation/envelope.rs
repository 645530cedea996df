use super::*;

fn p(frame: u64, value: f64) -> EnvelopePoint {
    EnvelopePoint {
        frame: FrameIndex(frame),
        value,
    }
}

#[test]
fn rejects_unsorted_and_empty_points() {
    assert!(Envelope::new(vec![]).is_err());
    assert!(Envelope::new(vec![p(10, 0.0), p(5, 1.0)]).is_err());
    assert!(Envelope::new(vec![p(0, f64::NAN)]).is_err());
    assert!(Envelope::new(vec![p(0, 0.0), p(0, 1.0)]).is_ok());
}

#[test]
fn sample_interpolates_and_clamps() {
    let env = Envelope::new(vec![p(10, 0.0), p(20, 1.0)]).unwrap();
    assert_eq!(env.sample(FrameIndex(0)), 0.0);
    assert_eq!(env.sample(FrameIndex(15)), 0.5);
    assert_eq!(env.sample(FrameIndex(20)), 1.0);
    assert_eq!(env.sample(FrameIndex(99)), 1.0);
}

#[test]
fn fade_matches_observed_two_second_ramps() {
    // 10s at 30fps, 2s fades, 0.2 plateau.
    let env = fade_envelope(300, 60, 0.2);
    assert_eq!(env.sample(FrameIndex(0)), 0.0);
    assert!((env.sample(FrameIndex(30)) - 0.1).abs() < 1e-12);
    assert_eq!(env.sample(FrameIndex(60)), 0.2);
    assert_eq!(env.sample(FrameIndex(150)), 0.2);
    assert_eq!(env.sample(FrameIndex(240)), 0.2);
    assert!((env.sample(FrameIndex(270)) - 0.1).abs() < 1e-12);
    assert_eq!(env.sample(FrameIndex(300)), 0.0);
    assert_eq!(env.sample(FrameIndex(400)), 0.0);
}

#[test]
fn fade_is_continuous_at_inner_points() {
    let env = fade_envelope(300, 60, 0.2);
    for knee in [60u64, 240] {
        let before = env.sample(FrameIndex(knee - 1));
        let at = env.sample(FrameIndex(knee));
        let after = env.sample(FrameIndex(knee + 1));
        assert!((at - before).abs() <= 0.2 / 60.0 + 1e-12);
        assert!((after - at).abs() <= 0.2 / 60.0 + 1e-12);
    }
}

#[test]
fn short_timeline_becomes_triangle() {
    // 3s at 30fps cannot hold two 2s fades.
    let env = fade_envelope(90, 60, 0.2);
    let frames: Vec<u64> = env.points().iter().map(|p| p.frame.0).collect();
    assert_eq!(frames, vec![0, 45, 45, 90]);
    assert_eq!(env.sample(FrameIndex(0)), 0.0);
    assert_eq!(env.sample(FrameIndex(45)), 0.2);
    assert_eq!(env.sample(FrameIndex(90)), 0.0);
    for f in 1..90u64 {
        let v = env.sample(FrameIndex(f));
        assert!((0.0..=0.2).contains(&v));
    }
}

#[test]
fn degenerate_lengths_are_silent() {
    for total in [0u64, 1] {
        let env = fade_envelope(total, 60, 0.2);
        assert_eq!(env.sample(FrameIndex(0)), 0.0);
        assert_eq!(env.sample(FrameIndex(total)), 0.0);
    }
}
