//! Fade-in of the slide that just became active

use std::time::{Duration, Instant};
use parking_lot::Mutex;
use pf_core::{NavigationContext, NavigationSubscriber};

/// Length of the fade after a slide change
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Tracks when the active slide last changed
///
/// Registered with the navigator as a subscriber; the slide view reads the
/// opacity back while drawing.
pub struct TransitionTracker {
    last_change: Mutex<Option<(Option<usize>, Instant)>>,
    repaint: Option<egui::Context>,
}

impl TransitionTracker {
    pub fn new() -> Self {
        Self {
            last_change: Mutex::new(None),
            repaint: None,
        }
    }

    /// Wake the UI whenever a navigation change arrives
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Record a change of the active slide at `now`
    pub fn record(&self, active_slide: Option<usize>, now: Instant) {
        *self.last_change.lock() = Some((active_slide, now));
    }

    /// Opacity of `slide` at `now`, ramping from 0 to 1 after it became active
    pub fn opacity(&self, slide: usize, now: Instant) -> f32 {
        match *self.last_change.lock() {
            Some((Some(active), changed_at)) if active == slide => {
                let elapsed = now.saturating_duration_since(changed_at);
                (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }

    /// Whether a fade is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.last_change
            .lock()
            .is_some_and(|(_, changed_at)| now.saturating_duration_since(changed_at) < FADE_DURATION)
    }
}

impl Default for TransitionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationSubscriber for TransitionTracker {
    fn on_navigation_change(&self, context: &NavigationContext) {
        self.record(context.active_slide, Instant::now());
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}
