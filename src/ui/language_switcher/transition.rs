// SPDX-License-Identifier: MPL-2.0
//! Presentation-only interpolation for the language sheet.
//!
//! Entrance: the overlay fades in over a fixed duration while the content
//! springs from its hidden offset to rest. Exit: both values run back on a
//! fixed duration, without a spring. Nothing here affects which language is
//! active or whether the sheet counts as open.

use crate::config::{
    OVERLAY_FADE_IN_MS, SHEET_EXIT_MS, SHEET_HIDDEN_OFFSET, SPRING_DAMPING, SPRING_MASS,
    SPRING_REST_THRESHOLD, SPRING_STIFFNESS,
};
use std::time::{Duration, Instant};

/// Integration step for the spring, in seconds.
const SPRING_SUBSTEP: f32 = 0.001;

/// Interpolated values for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Backdrop opacity factor, 0 (invisible) to 1 (fully dimmed).
    pub overlay_opacity: f32,
    /// Downward offset of the sheet content in logical pixels; 0 at rest.
    pub content_offset: f32,
}

impl Frame {
    pub const HIDDEN: Frame = Frame {
        overlay_opacity: 0.0,
        content_offset: SHEET_HIDDEN_OFFSET,
    };

    pub const SHOWN: Frame = Frame {
        overlay_opacity: 1.0,
        content_offset: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Entering,
    Exiting,
}

/// One in-flight transition.
#[derive(Debug, Clone)]
pub struct Transition {
    direction: Direction,
    started_at: Instant,
    last_sample: Instant,
    from: Frame,
    /// Drives the content offset while entering.
    spring: Option<Spring>,
}

impl Transition {
    /// Starts the entrance from `from` (normally [`Frame::HIDDEN`]).
    #[must_use]
    pub fn enter(from: Frame, now: Instant) -> Self {
        Self {
            direction: Direction::Entering,
            started_at: now,
            last_sample: now,
            from,
            spring: Some(Spring::new(from.content_offset, 0.0)),
        }
    }

    /// Starts the exit from `from`, which may be a partially entered frame.
    #[must_use]
    pub fn exit(from: Frame, now: Instant) -> Self {
        Self {
            direction: Direction::Exiting,
            started_at: now,
            last_sample: now,
            from,
            spring: None,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advances to `now` and returns the frame to render.
    ///
    /// Instants earlier than the previous sample are treated as no progress.
    pub fn advance(&mut self, now: Instant) -> Frame {
        let dt = now.saturating_duration_since(self.last_sample);
        self.last_sample = self.last_sample.max(now);
        let elapsed = self.last_sample.duration_since(self.started_at);

        match self.direction {
            Direction::Entering => {
                let content_offset = match self.spring.as_mut() {
                    Some(spring) => {
                        spring.step(dt.as_secs_f32());
                        spring.position
                    }
                    None => 0.0,
                };
                let t = progress(elapsed, Duration::from_millis(OVERLAY_FADE_IN_MS));
                Frame {
                    overlay_opacity: lerp(self.from.overlay_opacity, 1.0, ease_in_out(t)),
                    content_offset,
                }
            }
            Direction::Exiting => {
                let t = ease_in_out(progress(elapsed, Duration::from_millis(SHEET_EXIT_MS)));
                Frame {
                    overlay_opacity: lerp(self.from.overlay_opacity, 0.0, t),
                    content_offset: lerp(self.from.content_offset, SHEET_HIDDEN_OFFSET, t),
                }
            }
        }
    }

    /// Whether the last [`advance`](Self::advance) reached the end state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        let elapsed = self.last_sample.duration_since(self.started_at);
        match self.direction {
            Direction::Entering => {
                elapsed >= Duration::from_millis(OVERLAY_FADE_IN_MS)
                    && self.spring.as_ref().map_or(true, Spring::is_at_rest)
            }
            Direction::Exiting => elapsed >= Duration::from_millis(SHEET_EXIT_MS),
        }
    }
}

/// Damped spring integrated with semi-implicit Euler steps.
#[derive(Debug, Clone, Copy)]
struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    fn new(position: f32, target: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
        }
    }

    fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < SPRING_REST_THRESHOLD
            && self.velocity.abs() < SPRING_REST_THRESHOLD
    }

    fn step(&mut self, seconds: f32) {
        let mut remaining = seconds;
        while remaining > 0.0 && !self.is_at_rest() {
            let h = remaining.min(SPRING_SUBSTEP);
            let displacement = self.position - self.target;
            let acceleration =
                (-SPRING_STIFFNESS * displacement - SPRING_DAMPING * self.velocity) / SPRING_MASS;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Cubic ease-in-out on `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn entrance_starts_hidden() {
        let start = Instant::now();
        let mut transition = Transition::enter(Frame::HIDDEN, start);
        let frame = transition.advance(start);
        assert_eq!(frame, Frame::HIDDEN);
        assert!(!transition.is_finished());
    }

    #[test]
    fn entrance_fade_completes_at_fixed_duration() {
        let start = Instant::now();
        let mut transition = Transition::enter(Frame::HIDDEN, start);
        let frame = transition.advance(start + ms(OVERLAY_FADE_IN_MS));
        assert_eq!(frame.overlay_opacity, 1.0);
    }

    #[test]
    fn spring_moves_content_toward_rest_monotonically() {
        let start = Instant::now();
        let mut transition = Transition::enter(Frame::HIDDEN, start);
        let mut previous = SHEET_HIDDEN_OFFSET;
        for step in 1..=40 {
            let frame = transition.advance(start + ms(step * 16));
            assert!(frame.content_offset <= previous);
            assert!(frame.content_offset >= 0.0);
            previous = frame.content_offset;
        }
        assert!(previous < SHEET_HIDDEN_OFFSET / 2.0);
    }

    #[test]
    fn spring_settles_and_finishes() {
        let start = Instant::now();
        let mut transition = Transition::enter(Frame::HIDDEN, start);
        let frame = transition.advance(start + Duration::from_secs(3));
        assert_eq!(frame, Frame::SHOWN);
        assert!(transition.is_finished());
    }

    #[test]
    fn entrance_is_not_finished_while_spring_moves() {
        let start = Instant::now();
        let mut transition = Transition::enter(Frame::HIDDEN, start);
        transition.advance(start + ms(OVERLAY_FADE_IN_MS));
        assert!(!transition.is_finished());
    }

    #[test]
    fn exit_reaches_hidden_exactly_at_duration() {
        let start = Instant::now();
        let mut transition = Transition::exit(Frame::SHOWN, start);

        transition.advance(start + ms(SHEET_EXIT_MS - 1));
        assert!(!transition.is_finished());

        let frame = transition.advance(start + ms(SHEET_EXIT_MS));
        assert_eq!(frame, Frame::HIDDEN);
        assert!(transition.is_finished());
    }

    #[test]
    fn exit_from_partial_frame_interpolates_from_there() {
        let start = Instant::now();
        let partial = Frame {
            overlay_opacity: 0.4,
            content_offset: 120.0,
        };
        let mut transition = Transition::exit(partial, start);
        let midway = transition.advance(start + ms(SHEET_EXIT_MS / 2));

        assert!(midway.overlay_opacity < 0.4 && midway.overlay_opacity > 0.0);
        assert!(midway.content_offset > 120.0 && midway.content_offset < SHEET_HIDDEN_OFFSET);
    }

    #[test]
    fn earlier_instants_do_not_rewind() {
        let start = Instant::now();
        let mut transition = Transition::exit(Frame::SHOWN, start + ms(10));
        let frame = transition.advance(start);
        assert_eq!(frame, Frame::SHOWN);
    }

    #[test]
    fn easing_is_anchored_at_ends() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < f32::EPSILON);
    }
}
