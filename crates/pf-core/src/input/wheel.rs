//! Wheel gesture coalescing
//!
//! Wheel devices emit many small deltas per physical gesture. The coalescer
//! sums them until the magnitude reaches a threshold, emits one navigation
//! command, then ignores wheel navigation for a cooldown window. Wheel input
//! over a nested area that can still scroll in that direction is left alone.

use std::time::{Duration, Instant};
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::navigation::NavCommand;

/// Accumulated delta needed to trigger one navigation
pub const WHEEL_THRESHOLD: f32 = 60.0;

/// Lock window after a wheel-triggered navigation
pub const WHEEL_COOLDOWN: Duration = Duration::from_millis(650);

/// Tuning for the coalescer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSettings {
    pub threshold: f32,
    pub cooldown: Duration,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            threshold: WHEEL_THRESHOLD,
            cooldown: WHEEL_COOLDOWN,
        }
    }
}

/// Scroll geometry of the nested content area under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top
    pub offset: f32,
    /// Full height of the scrolled content
    pub content_height: f32,
    /// Visible height of the area
    pub viewport_height: f32,
}

impl ScrollMetrics {
    /// Largest reachable offset
    pub fn max_offset(&self) -> f32 {
        self.content_height - self.viewport_height
    }

    /// Whether the area still has room to scroll in the direction of `delta_y`
    pub fn can_scroll(&self, delta_y: f32) -> bool {
        let max = self.max_offset();
        if max <= 0.0 {
            return false;
        }

        if delta_y > 0.0 {
            self.offset < max
        } else {
            self.offset > 0.0
        }
    }
}

/// One raw wheel event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelInput {
    /// Vertical delta, positive towards the next slide
    pub delta_y: f32,
    /// The scrollable area the pointer is over, if any
    pub container: Option<ScrollMetrics>,
}

/// What the caller should do with a wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// Zero delta, nothing to do
    Ignored,
    /// Let the nested area scroll normally
    PassThrough,
    /// Block the default scroll, no navigation
    Suppressed,
    /// Block the default scroll and apply this command
    Navigate(NavCommand),
}

impl WheelOutcome {
    /// Whether the event's default scrolling must be prevented
    pub fn suppresses_default(&self) -> bool {
        matches!(self, WheelOutcome::Suppressed | WheelOutcome::Navigate(_))
    }

    pub fn command(&self) -> Option<NavCommand> {
        match self {
            WheelOutcome::Navigate(command) => Some(*command),
            _ => None,
        }
    }
}

/// Turns a stream of wheel events into at most one command per gesture
#[derive(Debug, Clone)]
pub struct WheelCoalescer {
    settings: WheelSettings,
    accumulator: f32,
    locked_until: Option<Instant>,
}

impl WheelCoalescer {
    pub fn new(settings: WheelSettings) -> Self {
        Self {
            settings,
            accumulator: 0.0,
            locked_until: None,
        }
    }

    /// Feed one wheel event observed at `now`
    pub fn on_wheel(&mut self, input: WheelInput, now: Instant) -> WheelOutcome {
        let delta_y = input.delta_y;
        if delta_y == 0.0 {
            return WheelOutcome::Ignored;
        }

        if input.container.is_some_and(|c| c.can_scroll(delta_y)) {
            return WheelOutcome::PassThrough;
        }

        if self.is_locked(now) {
            return WheelOutcome::Suppressed;
        }

        self.accumulator += delta_y;
        if self.accumulator.abs() < self.settings.threshold {
            return WheelOutcome::Suppressed;
        }

        let command = if self.accumulator > 0.0 {
            NavCommand::Next
        } else {
            NavCommand::Previous
        };

        debug!("Wheel gesture of {} crossed threshold, {:?}", self.accumulator, command);

        self.accumulator = 0.0;
        self.locked_until = Some(now + self.settings.cooldown);

        WheelOutcome::Navigate(command)
    }

    /// Whether wheel navigation is in its cooldown window at `now`
    pub fn is_locked(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Unconsumed delta carried over to the next event
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn settings(&self) -> &WheelSettings {
        &self.settings
    }
}

impl Default for WheelCoalescer {
    fn default() -> Self {
        Self::new(WheelSettings::default())
    }
}
