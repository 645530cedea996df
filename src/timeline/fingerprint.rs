use crate::{
    animation::ease::Ease,
    effects::transitions::{Direction, TransitionKind},
    foundation::core::FrameRange,
    foundation::math::Fnv1a64,
    timeline::compose::{Timeline, TimelineStatus},
};

/// Stable 64-bit hash of a timeline's layout.
///
/// Covers section ids, frame ranges, component kinds, the music envelope and the
/// transition (kind, direction, duration and ease). Equal descriptions composed with
/// equal configs hash equal.
pub fn fingerprint_timeline(timeline: &Timeline) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u8(match timeline.status {
        TimelineStatus::NoData => 0,
        TimelineStatus::Ready => 1,
    });
    h.write_u64(u64::from(timeline.fps.num));
    h.write_u64(u64::from(timeline.fps.den));
    h.write_u64(timeline.duration.0);
    write_transition(&mut h, timeline.transition_kind);
    h.write_u64(timeline.transition.duration_frames);
    h.write_u8(match timeline.transition.ease {
        Ease::Linear => 0,
        Ease::InQuad => 1,
        Ease::OutQuad => 2,
        Ease::InOutQuad => 3,
        Ease::InOutCubic => 4,
    });

    h.write_u64(timeline.sections.len() as u64);
    for s in &timeline.sections {
        h.write_str(&s.section_id);
        h.write_u64(s.nominal_frames);
        write_range(&mut h, s.block.active);
        match s.block.outgoing {
            Some(w) => {
                h.write_u8(1);
                write_range(&mut h, w);
            }
            None => h.write_u8(0),
        }
        h.write_u64(s.components.len() as u64);
        for c in &s.components {
            h.write_str(c.kind.tag());
            h.write_u8(u8::from(c.node.is_placeholder()));
        }
    }

    match &timeline.audio {
        Some(audio) => {
            h.write_u8(1);
            h.write_str(&audio.src);
            for p in audio.envelope.points() {
                h.write_u64(p.frame.0);
                h.write_f64(p.value);
            }
        }
        None => h.write_u8(0),
    }
    h.finish()
}

fn write_transition(h: &mut Fnv1a64, kind: TransitionKind) {
    let (tag, direction) = match kind {
        TransitionKind::Flip { direction } => (0, Some(direction)),
        TransitionKind::Fade => (1, None),
        TransitionKind::Wipe { direction } => (2, Some(direction)),
        TransitionKind::Slide { direction } => (3, Some(direction)),
    };
    h.write_u8(tag);
    h.write_u8(match direction {
        None => 0,
        Some(Direction::FromLeft) => 1,
        Some(Direction::FromRight) => 2,
        Some(Direction::FromTop) => 3,
        Some(Direction::FromBottom) => 4,
    });
}

fn write_range(h: &mut Fnv1a64, r: FrameRange) {
    h.write_u64(r.start.0);
    h.write_u64(r.end.0);
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/fingerprint.rs"]
mod tests;
