//! Pointer-to-gesture conversion and per-sample direction classification.
//!
//! The tracker keeps state only for the gesture that is currently open.
//! Once a gesture ends (or is cancelled) everything is forgotten.

use std::time::Instant;

/// Horizontal travel in logical pixels a press must exceed before it turns
/// into a drag. Shorter travels are treated as taps and never emit samples.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Two-component vector in logical pixels (or pixels per second).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Lifecycle phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    /// Cancelled, failed or otherwise uninteresting updates.
    Other,
}

/// Horizontal drag direction derived from the sample velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    LeftToRight,
    RightToLeft,
}

/// A single drag update as delivered by a gesture source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Translation since the previous sample. Consumed by the receiver.
    pub translation_delta: Vector,
    pub position_velocity: Vector,
}

impl GestureSample {
    pub fn new(
        phase: GesturePhase,
        translation_delta: Vector,
        position_velocity: Vector,
    ) -> Self {
        Self {
            phase,
            translation_delta,
            position_velocity,
        }
    }

    /// Shorthand for a purely horizontal sample.
    pub fn horizontal(phase: GesturePhase, dx: f32, vx: f32) -> Self {
        Self::new(phase, Vector::new(dx, 0.0), Vector::new(vx, 0.0))
    }
}

/// Classified view of a sample: phase plus directional signal, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureIntent {
    pub direction: Option<DragDirection>,
    pub phase: GesturePhase,
}

/// Classify a sample by the sign of its horizontal velocity.
///
/// Zero (and NaN) velocity carries no directional signal.
pub fn classify(sample: &GestureSample) -> GestureIntent {
    let vx = sample.position_velocity.x;
    let direction = if vx > 0.0 {
        Some(DragDirection::LeftToRight)
    } else if vx < 0.0 {
        Some(DragDirection::RightToLeft)
    } else {
        None
    };

    GestureIntent {
        direction,
        phase: sample.phase,
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenGesture {
    origin: Vector,
    consumed: Vector,
    last_at: Instant,
    dragging: bool,
}

/// Turns raw pointer press/move/release input into [`GestureSample`]s.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    threshold: f32,
    open: Option<OpenGesture>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl GestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            open: None,
        }
    }

    /// Whether a press is currently held, dragging or not.
    pub fn is_tracking(&self) -> bool {
        self.open.is_some()
    }

    /// Start tracking a press. Replaces any gesture left open.
    pub fn press(&mut self, position: Vector, at: Instant) {
        self.open = Some(OpenGesture {
            origin: position,
            consumed: position,
            last_at: at,
            dragging: false,
        });
    }

    /// Feed a pointer move. Returns `Began` on the first move past the
    /// threshold and `Changed` for every move after it.
    ///
    /// `Began` only announces the drag: its delta is not consumed, so the
    /// first `Changed` carries the travel made since the press.
    pub fn moved(
        &mut self,
        position: Vector,
        at: Instant,
    ) -> Option<GestureSample> {
        let gesture = self.open.as_mut()?;

        let phase = if gesture.dragging {
            GesturePhase::Changed
        } else if (position.x - gesture.origin.x).abs() > self.threshold {
            gesture.dragging = true;
            GesturePhase::Began
        } else {
            return None;
        };

        let delta = Vector::new(
            position.x - gesture.consumed.x,
            position.y - gesture.consumed.y,
        );
        let velocity = velocity(delta, gesture.last_at, at);
        if phase == GesturePhase::Changed {
            gesture.consumed = position;
            gesture.last_at = at;
        }

        Some(GestureSample::new(phase, delta, velocity))
    }

    /// Finish the open gesture. A press that never became a drag yields
    /// nothing.
    pub fn release(
        &mut self,
        position: Vector,
        at: Instant,
    ) -> Option<GestureSample> {
        let gesture = self.open.take()?;
        if !gesture.dragging {
            return None;
        }

        let delta = Vector::new(
            position.x - gesture.consumed.x,
            position.y - gesture.consumed.y,
        );
        let velocity = velocity(delta, gesture.last_at, at);

        Some(GestureSample::new(GesturePhase::Ended, delta, velocity))
    }

    /// Abandon the open gesture.
    pub fn cancel(&mut self) -> Option<GestureSample> {
        let gesture = self.open.take()?;
        gesture.dragging.then(|| {
            GestureSample::new(GesturePhase::Other, Vector::ZERO, Vector::ZERO)
        })
    }
}

fn velocity(delta: Vector, from: Instant, to: Instant) -> Vector {
    let seconds = to.saturating_duration_since(from).as_secs_f32();
    if seconds <= f32::EPSILON {
        return Vector::ZERO;
    }
    Vector::new(delta.x / seconds, delta.y / seconds)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn given_positive_velocity_when_classified_then_left_to_right() {
        let sample = GestureSample::horizontal(GesturePhase::Changed, 4.0, 120.0);
        let intent = classify(&sample);
        assert_eq!(intent.direction, Some(DragDirection::LeftToRight));
        assert_eq!(intent.phase, GesturePhase::Changed);
    }

    #[test]
    fn given_negative_velocity_when_classified_then_right_to_left() {
        let sample = GestureSample::horizontal(GesturePhase::Began, -4.0, -1.0);
        assert_eq!(classify(&sample).direction, Some(DragDirection::RightToLeft));
    }

    #[test]
    fn given_zero_velocity_when_classified_then_no_direction() {
        let sample = GestureSample::new(
            GesturePhase::Changed,
            Vector::new(3.0, 0.0),
            Vector::new(0.0, 250.0),
        );
        assert_eq!(classify(&sample).direction, None);
    }

    #[test]
    fn given_nan_velocity_when_classified_then_no_direction() {
        let sample =
            GestureSample::horizontal(GesturePhase::Changed, 0.0, f32::NAN);
        assert_eq!(classify(&sample).direction, None);
    }

    #[test]
    fn given_press_without_travel_when_released_then_no_sample() {
        let mut tracker = GestureTracker::default();
        let start = Instant::now();
        tracker.press(Vector::new(10.0, 10.0), start);
        assert!(tracker.moved(Vector::new(14.0, 40.0), start).is_none());
        assert!(
            tracker
                .release(Vector::new(14.0, 40.0), start + Duration::from_millis(50))
                .is_none()
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn given_drag_past_threshold_when_moved_then_began_then_changed_with_consumed_deltas()
     {
        let mut tracker = GestureTracker::default();
        let start = Instant::now();
        tracker.press(Vector::new(0.0, 0.0), start);

        let began = tracker
            .moved(Vector::new(20.0, 0.0), start + Duration::from_millis(100))
            .expect("began sample");
        assert_eq!(began.phase, GesturePhase::Began);
        assert_eq!(began.translation_delta.x, 20.0);
        assert!((began.position_velocity.x - 200.0).abs() < 0.5);

        let changed = tracker
            .moved(Vector::new(25.0, 0.0), start + Duration::from_millis(150))
            .expect("changed sample");
        assert_eq!(changed.phase, GesturePhase::Changed);
        assert_eq!(changed.translation_delta.x, 25.0);

        let changed = tracker
            .moved(Vector::new(30.0, 0.0), start + Duration::from_millis(175))
            .expect("changed sample");
        assert_eq!(changed.translation_delta.x, 5.0);

        let ended = tracker
            .release(Vector::new(22.0, 0.0), start + Duration::from_millis(225))
            .expect("ended sample");
        assert_eq!(ended.phase, GesturePhase::Ended);
        assert_eq!(ended.translation_delta.x, -8.0);
        assert!(ended.position_velocity.x < 0.0);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn given_same_instant_when_moved_then_velocity_is_zero() {
        let mut tracker = GestureTracker::new(0.0);
        let start = Instant::now();
        tracker.press(Vector::ZERO, start);
        let sample = tracker.moved(Vector::new(5.0, 0.0), start).expect("sample");
        assert_eq!(sample.position_velocity, Vector::ZERO);
        assert_eq!(classify(&sample).direction, None);
    }

    #[test]
    fn given_dragging_when_cancelled_then_other_phase_is_emitted() {
        let mut tracker = GestureTracker::new(0.0);
        let start = Instant::now();
        tracker.press(Vector::ZERO, start);
        let _ = tracker.moved(Vector::new(5.0, 0.0), start + Duration::from_millis(16));
        let sample = tracker.cancel().expect("cancel sample");
        assert_eq!(sample.phase, GesturePhase::Other);
        assert!(tracker.cancel().is_none());
    }
}
