use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::geometry::SurfaceOrigins;

/// Default settle animation length.
pub const SETTLE_DURATION: Duration = Duration::from_millis(500);

/// Timing curve applied by the animation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            },
        }
    }
}

/// Which resting state a settle animation drives toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleDirection {
    Expand,
    Collapse,
}

/// Identifies one settle request so its completion can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(u64);

impl AnimationId {
    pub(crate) fn first() -> Self {
        Self(1)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A fire-and-forget request to move both surfaces to `targets`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRequest {
    pub id: AnimationId,
    pub direction: SettleDirection,
    pub targets: SurfaceOrigins,
    pub duration: Duration,
    pub easing: Easing,
}

/// Interpolates an [`AnimationRequest`] from a starting layout.
///
/// Used by animation drivers; the controller never interpolates itself.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    request: AnimationRequest,
    from: SurfaceOrigins,
    started_at: Instant,
}

impl Tween {
    pub fn new(
        request: AnimationRequest,
        from: SurfaceOrigins,
        started_at: Instant,
    ) -> Self {
        Self {
            request,
            from,
            started_at,
        }
    }

    pub fn request(&self) -> &AnimationRequest {
        &self.request
    }

    /// Origins at `now`, and whether the tween has reached its targets.
    pub fn sample(&self, now: Instant) -> (SurfaceOrigins, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        let duration = self.request.duration;
        if duration.is_zero() || elapsed >= duration {
            return (self.request.targets, true);
        }

        let t = elapsed.as_secs_f32() / duration.as_secs_f32();
        let eased = self.request.easing.apply(t);
        let to = self.request.targets;
        let origins = SurfaceOrigins::new(
            lerp(self.from.content_origin_x, to.content_origin_x, eased),
            lerp(self.from.panel_origin_x, to.panel_origin_x, eased),
        );

        (origins, false)
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(duration: Duration) -> AnimationRequest {
        AnimationRequest {
            id: AnimationId::first(),
            direction: SettleDirection::Expand,
            targets: SurfaceOrigins::new(240.0, -60.0),
            duration,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn given_ease_in_out_when_applied_then_endpoints_and_midpoint_hold() {
        let easing = Easing::EaseInOut;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(easing.apply(0.25) < 0.25);
        assert!(easing.apply(0.75) > 0.75);
    }

    #[test]
    fn given_out_of_range_progress_when_applied_then_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(3.0), 1.0);
    }

    #[test]
    fn given_linear_tween_when_sampled_halfway_then_origins_are_interpolated() {
        let start = Instant::now();
        let tween = Tween::new(
            request(Duration::from_millis(400)),
            SurfaceOrigins::new(0.0, -60.0),
            start,
        );

        let (origins, finished) = tween.sample(start + Duration::from_millis(200));
        assert!(!finished);
        assert!((origins.content_origin_x - 120.0).abs() < 0.01);
        assert_eq!(origins.panel_origin_x, -60.0);
    }

    #[test]
    fn given_elapsed_duration_when_sampled_then_targets_and_finished() {
        let start = Instant::now();
        let tween = Tween::new(
            request(Duration::from_millis(400)),
            SurfaceOrigins::new(0.0, -60.0),
            start,
        );

        let (origins, finished) = tween.sample(start + Duration::from_secs(1));
        assert!(finished);
        assert_eq!(origins, SurfaceOrigins::new(240.0, -60.0));
    }

    #[test]
    fn given_zero_duration_when_sampled_then_finishes_immediately() {
        let start = Instant::now();
        let tween =
            Tween::new(request(Duration::ZERO), SurfaceOrigins::default(), start);
        assert!(tween.sample(start).1);
    }

    #[test]
    fn given_animation_ids_when_advanced_then_monotonic() {
        let first = AnimationId::first();
        assert!(first.next() > first);
        assert_eq!(first.next().get(), 2);
    }
}
