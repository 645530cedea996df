use crate::{
    foundation::core::FrameIndex,
    foundation::error::{RewindError, RewindResult},
    foundation::math::lerp,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One control point of an [`Envelope`].
pub struct EnvelopePoint {
    /// Timeline frame of the point.
    pub frame: FrameIndex,
    /// Value at `frame`.
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Piecewise-linear curve over timeline frames.
///
/// Sampling clamps outside the covered domain; there is no extrapolation past the first
/// or last point.
pub struct Envelope {
    points: Vec<EnvelopePoint>, // sorted by frame
}

impl Envelope {
    /// Build an envelope from points sorted by frame (ties allowed).
    pub fn new(points: Vec<EnvelopePoint>) -> RewindResult<Self> {
        if points.is_empty() {
            return Err(RewindError::validation(
                "envelope must have at least one point",
            ));
        }
        if !points.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(RewindError::validation(
                "envelope points must be sorted by frame",
            ));
        }
        if points.iter().any(|p| !p.value.is_finite()) {
            return Err(RewindError::validation("envelope values must be finite"));
        }
        Ok(Self { points })
    }

    /// Envelope that is `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![EnvelopePoint {
                frame: FrameIndex(0),
                value,
            }],
        }
    }

    /// Control points in frame order.
    pub fn points(&self) -> &[EnvelopePoint] {
        &self.points
    }

    /// Value at `frame`.
    pub fn sample(&self, frame: FrameIndex) -> f64 {
        let f = frame.0;
        let idx = self.points.partition_point(|p| p.frame.0 <= f);

        if idx == 0 {
            return self.points[0].value;
        }
        if idx >= self.points.len() {
            return self.points[self.points.len() - 1].value;
        }

        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        let denom = b.frame.0 - a.frame.0;
        if denom == 0 {
            return a.value;
        }
        let t = ((f - a.frame.0) as f64) / (denom as f64);
        lerp(a.value, b.value, t)
    }
}

/// Fade-in / plateau / fade-out curve ending at `total_frames`.
///
/// Control points are `[0, fade, total - fade, total]` mapped to `[0, plateau, plateau, 0]`.
/// When the timeline is shorter than two fades, `fade` shrinks to `total / 2` and the curve
/// becomes a triangle that peaks at the midpoint. A fade that shrinks to zero frames yields
/// silence.
pub fn fade_envelope(total_frames: u64, fade_frames: u64, plateau: f64) -> Envelope {
    let fade = fade_frames.min(total_frames / 2);
    if fade == 0 || !plateau.is_finite() {
        return Envelope::constant(0.0);
    }

    let point = |frame: u64, value: f64| EnvelopePoint {
        frame: FrameIndex(frame),
        value,
    };
    Envelope {
        points: vec![
            point(0, 0.0),
            point(fade, plateau),
            point(total_frames - fade, plateau),
            point(total_frames, 0.0),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/envelope.rs"]
mod tests;
