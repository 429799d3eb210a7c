//! Constant-speed glide toward a page's resting position.
//!
//! ## Usage
//!
//! Start a glide with the signed distance to cover, then advance it once per
//! frame with the elapsed time.

use glam::Vec2;

use crate::orientation::{Orientation, ScrollDirection};

/// Default time, in seconds, a glide takes regardless of distance.
pub const DEFAULT_GLIDE_DURATION: f32 = 0.2;

/// Auto-scroll state.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum AutoScroll {
    /// No glide in flight.
    #[default]
    Idle,
    /// Gliding toward a target.
    Scrolling {
        /// Direction of travel.
        direction: ScrollDirection,
        /// Distance still to cover, always non-negative.
        remaining: f32,
        /// Units per second.
        speed: f32,
    },
}

/// Offset produced by one animation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlideStep {
    /// Single-axis offset to apply to the pages.
    pub delta: Vec2,
    /// Whether this step completed the glide.
    pub finished: bool,
}

/// Drives [`AutoScroll`] one frame at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoScroller {
    state: AutoScroll,
    orientation: Orientation,
    duration: f32,
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self::new(DEFAULT_GLIDE_DURATION)
    }
}

impl AutoScroller {
    /// Creates an idle animator whose glides take `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            state: AutoScroll::Idle,
            orientation: Orientation::default(),
            duration,
        }
    }

    /// Current state.
    pub fn state(&self) -> AutoScroll {
        self.state
    }

    /// Whether a glide is in flight.
    pub fn is_scrolling(&self) -> bool {
        matches!(self.state, AutoScroll::Scrolling { .. })
    }

    /// Glide duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Starts a glide covering the signed `distance` on `orientation`'s axis,
    /// replacing any glide already in flight.
    pub fn start(&mut self, orientation: Orientation, distance: f32) {
        self.orientation = orientation;
        self.state = AutoScroll::Scrolling {
            direction: orientation.glide_direction(distance),
            remaining: distance.abs(),
            speed: distance.abs() / self.duration,
        };
    }

    /// Abandons the glide in flight, if any.
    pub fn cancel(&mut self) {
        self.state = AutoScroll::Idle;
    }

    /// Advances the glide by `dt` seconds.
    ///
    /// Returns `None` while idle. The final step is clamped so the glide never
    /// overshoots its target.
    pub fn step(&mut self, dt: f32) -> Option<GlideStep> {
        let AutoScroll::Scrolling {
            direction,
            remaining,
            speed,
        } = self.state
        else {
            return None;
        };

        let step = speed * dt.max(0.0);
        let (travel, finished) = if step >= remaining {
            self.state = AutoScroll::Idle;
            (remaining, true)
        } else {
            self.state = AutoScroll::Scrolling {
                direction,
                remaining: remaining - step,
                speed,
            };
            (step, false)
        };

        Some(GlideStep {
            delta: self.orientation.offset(travel * direction.glide_sign()),
            finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default_speed_covers_distance_in_fixed_time() {
        let mut scroller = AutoScroller::default();
        scroller.start(Orientation::Horizontal, -300.0);
        let AutoScroll::Scrolling {
            direction,
            remaining,
            speed,
        } = scroller.state()
        else {
            panic!("glide should be in flight");
        };
        assert_eq!(direction, ScrollDirection::Left);
        assert_eq!(remaining, 300.0);
        assert_close(speed, 1500.0);
    }

    #[test]
    fn final_step_is_clamped_to_remaining() {
        let mut scroller = AutoScroller::new(0.5);
        scroller.start(Orientation::Horizontal, -300.0);

        let first = scroller.step(0.25).expect("glide in flight");
        assert_eq!(first.delta, Vec2::new(-150.0, 0.0));
        assert!(!first.finished);

        let last = scroller.step(1.0).expect("glide in flight");
        assert_eq!(last.delta, Vec2::new(-150.0, 0.0));
        assert!(last.finished);
        assert!(!scroller.is_scrolling());
        assert_eq!(scroller.step(0.1), None);
    }

    #[test]
    fn vertical_glide_moves_on_y() {
        let mut scroller = AutoScroller::new(1.0);
        scroller.start(Orientation::Vertical, 40.0);
        let step = scroller.step(0.25).expect("glide in flight");
        assert_eq!(step.delta, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn zero_distance_finishes_on_first_step() {
        let mut scroller = AutoScroller::default();
        scroller.start(Orientation::Horizontal, 0.0);
        assert!(scroller.is_scrolling());
        let step = scroller.step(0.0).expect("glide in flight");
        assert!(step.finished);
        assert_eq!(step.delta, Vec2::ZERO);
    }

    #[test]
    fn restart_overwrites_target() {
        let mut scroller = AutoScroller::default();
        scroller.start(Orientation::Horizontal, 100.0);
        scroller.step(0.05);
        scroller.start(Orientation::Horizontal, -20.0);
        let AutoScroll::Scrolling {
            direction,
            remaining,
            ..
        } = scroller.state()
        else {
            panic!("glide should be in flight");
        };
        assert_eq!(direction, ScrollDirection::Left);
        assert_eq!(remaining, 20.0);
        scroller.cancel();
        assert_eq!(scroller.state(), AutoScroll::Idle);
    }

    #[test]
    fn negative_dt_makes_no_progress() {
        let mut scroller = AutoScroller::default();
        scroller.start(Orientation::Horizontal, 10.0);
        let step = scroller.step(-1.0).expect("glide in flight");
        assert_eq!(step.delta, Vec2::ZERO);
        assert!(!step.finished);
    }
}
