use super::*;
use crate::description::model::Scalar;

fn sections(durations: &[f64]) -> Vec<Section> {
    durations
        .iter()
        .enumerate()
        .map(|(i, &d)| Section {
            section_id: Scalar::from(i as u64),
            section_duration: d,
            section_components: Vec::new(),
        })
        .collect()
}

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn first_section_starts_at_zero() {
    assert_eq!(start_frame(&[], 0, fps30()), FrameIndex(0));
    assert_eq!(start_frame(&sections(&[4.0]), 0, fps30()), FrameIndex(0));
}

#[test]
fn starts_sum_rounded_section_frames() {
    let s = sections(&[5.0, 2.51, 1.0]);
    assert_eq!(section_frames(2.51, fps30()), 75);
    assert_eq!(start_frame(&s, 1, fps30()), FrameIndex(150));
    assert_eq!(start_frame(&s, 2, fps30()), FrameIndex(225));
    assert_eq!(start_frame(&s, 3, fps30()), FrameIndex(255));
    assert_eq!(start_frame(&s, 99, fps30()), FrameIndex(255));
}

#[test]
fn invalid_durations_count_as_zero() {
    assert_eq!(section_frames(f64::NAN, fps30()), 0);
    assert_eq!(section_frames(-3.0, fps30()), 0);
    let s = sections(&[f64::INFINITY, 1.0]);
    assert_eq!(start_frame(&s, 1, fps30()), FrameIndex(0));
}

#[test]
fn memoised_offsets_agree_with_start_frame() {
    let s = sections(&[1.2, 3.3, 0.05, 7.0]);
    let offsets = SectionOffsets::new(&s, fps30());
    assert_eq!(offsets.len(), 4);
    for i in 0..s.len() {
        assert_eq!(offsets.start(i), Some(start_frame(&s, i, fps30())));
    }
    assert_eq!(offsets.start(4), None);
    assert_eq!(offsets.frames(2), Some(2));
    assert_eq!(
        FrameIndex(offsets.total_frames()),
        start_frame(&s, s.len(), fps30())
    );
    assert!(SectionOffsets::from_frames([]).is_empty());
}
