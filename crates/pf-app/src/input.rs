//! Per-frame input routing
//!
//! Collects the navigation keys and wheel events of one frame and turns them
//! into navigator commands, deciding on the way whether the slide content may
//! scroll this frame.

use std::time::Instant;
use pf_core::input::key_commands;
use pf_core::{NavCommand, ScrollMetrics, WheelCoalescer, WheelInput};

/// Raw navigation input gathered from egui for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub keys: Vec<NavCommand>,
    /// Wheel deltas, positive towards the next slide
    pub wheel_deltas: Vec<f32>,
    pub pointer: Option<egui::Pos2>,
}

impl FrameInput {
    pub fn gather(input: &egui::InputState) -> Self {
        let wheel_deltas = input
            .events
            .iter()
            .filter_map(|event| match event {
                // egui reports scrolling down as a negative y delta
                egui::Event::Scroll(delta) if !input.modifiers.command => Some(-delta.y),
                _ => None,
            })
            .collect();

        Self {
            keys: key_commands(input),
            wheel_deltas,
            pointer: input.pointer.hover_pos(),
        }
    }
}

/// What the frame's input resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct Routed {
    pub commands: Vec<NavCommand>,
    /// False when a wheel event was claimed for navigation
    pub allow_scroll: bool,
}

/// Route key commands and wheel deltas, keys first
pub fn route(
    coalescer: &mut WheelCoalescer,
    keys: &[NavCommand],
    wheel_deltas: &[f32],
    container: Option<ScrollMetrics>,
    now: Instant,
) -> Routed {
    let mut commands = keys.to_vec();
    let mut allow_scroll = true;

    for &delta_y in wheel_deltas {
        let outcome = coalescer.on_wheel(WheelInput { delta_y, container }, now);
        if outcome.suppresses_default() {
            allow_scroll = false;
        }
        commands.extend(outcome.command());
    }

    Routed {
        commands,
        allow_scroll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::WheelSettings;
    use std::time::Duration;

    #[test]
    fn test_keys_pass_straight_through() {
        let mut coalescer = WheelCoalescer::default();
        let routed = route(
            &mut coalescer,
            &[NavCommand::Next, NavCommand::Previous],
            &[],
            None,
            Instant::now(),
        );
        assert_eq!(routed.commands, vec![NavCommand::Next, NavCommand::Previous]);
        assert!(routed.allow_scroll);
    }

    #[test]
    fn test_wheel_burst_fires_once() {
        let mut coalescer = WheelCoalescer::default();
        let routed = route(&mut coalescer, &[], &[30.0, 30.0, 30.0, 30.0], None, Instant::now());
        assert_eq!(routed.commands, vec![NavCommand::Next]);
        assert!(!routed.allow_scroll);
    }

    #[test]
    fn test_scrollable_content_keeps_wheel() {
        let mut coalescer = WheelCoalescer::default();
        let container = ScrollMetrics {
            offset: 100.0,
            content_height: 1000.0,
            viewport_height: 400.0,
        };
        let routed = route(&mut coalescer, &[], &[80.0, -80.0], Some(container), Instant::now());
        assert!(routed.commands.is_empty());
        assert!(routed.allow_scroll);
        assert_eq!(coalescer.accumulator(), 0.0);
    }

    #[test]
    fn test_small_delta_still_blocks_scroll() {
        let mut coalescer = WheelCoalescer::new(WheelSettings {
            threshold: 60.0,
            cooldown: Duration::from_millis(650),
        });
        let routed = route(&mut coalescer, &[], &[-10.0], None, Instant::now());
        assert!(routed.commands.is_empty());
        assert!(!routed.allow_scroll);
    }
}
