//! Screen-transition sequencer
//!
//! Produces the full-screen circular reveal/conceal effect that visually
//! connects an activated control to the destination screen, masking the
//! navigation cut. A circle expands from the control's position until it
//! covers the terminal, the route switches underneath, then the circle
//! shrinks into the destination's title position.
//!
//! The sequence is a three-state machine with a single authoritative phase
//! variable. Re-triggering while a sequence is in flight is ignored; there
//! is no cancellation. Time is passed in explicitly so the machine stays
//! deterministic under test.

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::app::Route;

/// Duration of the expanding phase
pub const EXPAND_DURATION: Duration = Duration::from_millis(400);

/// Duration of the shrinking phase
pub const SHRINK_DURATION: Duration = Duration::from_millis(400);

/// Full-coverage radius as a multiple of the larger screen dimension.
/// 2.5x covers all four corners from any in-screen origin, even with the
/// 2:1 cell-aspect correction applied to vertical distances.
const COVER_FACTOR: f64 = 2.5;

/// Cell position the circle shrinks into: the destination screen's title
/// area (top-left). Tuned to the dashboard layout, not measured.
pub const SHRINK_ANCHOR: (u16, u16) = (10, 2);

/// Phase of the transition sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No overlay rendered
    #[default]
    Idle,
    /// Circle growing from the trigger origin
    Expanding,
    /// Circle collapsing into the destination anchor
    Shrinking,
}

/// Radius that covers the whole screen from any in-bounds origin
pub fn cover_radius(width: u16, height: u16) -> f64 {
    f64::from(width.max(height)) * COVER_FACTOR
}

/// A circle to paint over the frame, in cell coordinates
#[derive(Debug, Clone, Copy)]
pub struct CircleOverlay {
    pub center: (u16, u16),
    pub radius: f64,
    pub color: Color,
}

/// The transition state machine
pub struct TransitionSequencer {
    phase: Phase,
    phase_started: Option<Instant>,
    origin: (u16, u16),
    color: Color,
    target: Option<Route>,
}

impl TransitionSequencer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            phase_started: None,
            origin: (0, 0),
            color: Color::Reset,
            target: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a sequence is in flight (overlay should render, new triggers
    /// are ignored)
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start a new sequence from the given cell position toward `target`.
    ///
    /// Returns false without touching any state when a sequence is already
    /// in flight.
    pub fn trigger(&mut self, x: u16, y: u16, color: Color, target: Route, now: Instant) -> bool {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = ?self.phase, "Transition trigger ignored, sequence in flight");
            return false;
        }

        tracing::debug!(x, y, ?target, "Transition started");
        self.phase = Phase::Expanding;
        self.phase_started = Some(now);
        self.origin = (x, y);
        self.color = color;
        self.target = Some(target);
        true
    }

    /// Advance the machine. Returns the target route exactly once, at the
    /// moment the expand phase completes and the navigation must happen.
    pub fn tick(&mut self, now: Instant) -> Option<Route> {
        let Some(started) = self.phase_started else {
            return None;
        };

        match self.phase {
            Phase::Idle => None,
            Phase::Expanding => {
                if now.duration_since(started) >= EXPAND_DURATION {
                    self.phase = Phase::Shrinking;
                    self.phase_started = Some(now);
                    self.target.take()
                } else {
                    None
                }
            }
            Phase::Shrinking => {
                if now.duration_since(started) >= SHRINK_DURATION {
                    tracing::debug!("Transition finished");
                    self.phase = Phase::Idle;
                    self.phase_started = None;
                }
                None
            }
        }
    }

    /// The circle to paint for the current instant, or None when idle
    pub fn overlay(&self, width: u16, height: u16, now: Instant) -> Option<CircleOverlay> {
        let started = self.phase_started?;
        let full = cover_radius(width, height);

        let (center, radius) = match self.phase {
            Phase::Idle => return None,
            Phase::Expanding => {
                let t = progress(started, now, EXPAND_DURATION);
                (self.origin, ease_in_out(t) * full)
            }
            Phase::Shrinking => {
                let t = progress(started, now, SHRINK_DURATION);
                (SHRINK_ANCHOR, (1.0 - ease_in_out(t)) * full)
            }
        };

        Some(CircleOverlay {
            center,
            radius,
            color: self.color,
        })
    }
}

impl Default for TransitionSequencer {
    fn default() -> Self {
        Self::new()
    }
}

fn progress(started: Instant, now: Instant, duration: Duration) -> f64 {
    let elapsed = now.duration_since(started).as_secs_f64();
    (elapsed / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Smoothstep easing
fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_trigger_from_idle_starts_expanding() {
        let mut seq = TransitionSequencer::new();
        let t0 = start();

        assert!(seq.trigger(40, 12, Color::Magenta, Route::Dashboard, t0));
        assert_eq!(seq.phase(), Phase::Expanding);
        assert!(seq.is_active());

        // Navigation happens exactly once, at expand completion
        assert_eq!(seq.tick(t0 + Duration::from_millis(100)), None);
        assert_eq!(
            seq.tick(t0 + EXPAND_DURATION),
            Some(Route::Dashboard),
            "expand completion schedules the navigation"
        );
        assert_eq!(seq.phase(), Phase::Shrinking);
        assert_eq!(seq.tick(t0 + EXPAND_DURATION + Duration::from_millis(10)), None);
    }

    #[test]
    fn test_retrigger_while_active_is_noop() {
        let mut seq = TransitionSequencer::new();
        let t0 = start();

        assert!(seq.trigger(10, 5, Color::Magenta, Route::Dashboard, t0));
        assert!(!seq.trigger(60, 20, Color::Blue, Route::About, t0 + Duration::from_millis(50)));
        assert_eq!(seq.phase(), Phase::Expanding);

        // The first target wins, and only one navigation is scheduled
        assert_eq!(seq.tick(t0 + EXPAND_DURATION), Some(Route::Dashboard));
        assert_eq!(seq.tick(t0 + EXPAND_DURATION + SHRINK_DURATION), None);

        // Also guarded during the shrink phase
        let mut seq = TransitionSequencer::new();
        assert!(seq.trigger(10, 5, Color::Magenta, Route::Dashboard, t0));
        seq.tick(t0 + EXPAND_DURATION);
        assert_eq!(seq.phase(), Phase::Shrinking);
        assert!(!seq.trigger(0, 0, Color::Red, Route::About, t0 + EXPAND_DURATION));
    }

    #[test]
    fn test_cover_radius_reaches_every_corner() {
        // Aspect-corrected distance from origin to the farthest corner must
        // never exceed the cover radius, for any in-bounds origin.
        let sizes = [(80u16, 24u16), (200, 50), (20, 60), (120, 120)];
        for (w, h) in sizes {
            let full = cover_radius(w, h);
            for ox in [0, w / 3, w / 2, w.saturating_sub(1)] {
                for oy in [0, h / 3, h / 2, h.saturating_sub(1)] {
                    for (cx, cy) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                        let dx = f64::from(cx) - f64::from(ox);
                        let dy = (f64::from(cy) - f64::from(oy)) * 2.0;
                        let dist = (dx * dx + dy * dy).sqrt();
                        assert!(
                            dist <= full,
                            "corner ({cx},{cy}) at {dist:.1} beyond radius {full:.1} for {w}x{h} origin ({ox},{oy})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_full_sequence_ends_idle_with_no_overlay() {
        let mut seq = TransitionSequencer::new();
        let t0 = start();

        seq.trigger(79, 23, Color::Magenta, Route::Dashboard, t0);
        assert_eq!(seq.tick(t0 + EXPAND_DURATION), Some(Route::Dashboard));
        assert_eq!(seq.tick(t0 + EXPAND_DURATION + SHRINK_DURATION), None);

        assert_eq!(seq.phase(), Phase::Idle);
        assert!(!seq.is_active());
        assert!(seq.overlay(80, 24, t0 + EXPAND_DURATION + SHRINK_DURATION).is_none());

        // And the machine accepts a fresh trigger again
        let t1 = t0 + Duration::from_secs(2);
        assert!(seq.trigger(0, 0, Color::Blue, Route::About, t1));
    }

    #[test]
    fn test_overlay_grows_then_shrinks_around_anchors() {
        let mut seq = TransitionSequencer::new();
        let t0 = start();
        seq.trigger(40, 12, Color::Magenta, Route::Dashboard, t0);

        let early = seq.overlay(80, 24, t0 + Duration::from_millis(100)).unwrap();
        let late = seq.overlay(80, 24, t0 + Duration::from_millis(300)).unwrap();
        assert_eq!(early.center, (40, 12));
        assert!(early.radius < late.radius);

        // At expand completion the circle covers the screen
        let covered = seq.overlay(80, 24, t0 + EXPAND_DURATION).unwrap();
        assert_eq!(covered.radius, cover_radius(80, 24));

        // After navigation the anchor switches to the destination title
        seq.tick(t0 + EXPAND_DURATION);
        let shrinking = seq
            .overlay(80, 24, t0 + EXPAND_DURATION + Duration::from_millis(200))
            .unwrap();
        assert_eq!(shrinking.center, SHRINK_ANCHOR);
        assert!(shrinking.radius < cover_radius(80, 24));
    }
}
