//! Input sources translated into navigation commands

mod wheel;

pub use wheel::{
    ScrollMetrics, WheelCoalescer, WheelInput, WheelOutcome, WheelSettings, WHEEL_COOLDOWN,
    WHEEL_THRESHOLD,
};

use crate::navigation::NavCommand;

/// Map a directional key press to a command
pub fn command_for_key(key: egui::Key) -> Option<NavCommand> {
    match key {
        egui::Key::ArrowRight | egui::Key::ArrowDown => Some(NavCommand::Next),
        egui::Key::ArrowLeft | egui::Key::ArrowUp => Some(NavCommand::Previous),
        _ => None,
    }
}

/// Commands for every navigation key pressed this frame, in event order
pub fn key_commands(input: &egui::InputState) -> Vec<NavCommand> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key { key, pressed: true, .. } => command_for_key(*key),
            _ => None,
        })
        .collect()
}
