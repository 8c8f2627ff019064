//! Core functionality for the portfolio viewer
//!
//! This crate owns the slide navigation state and the input handling that
//! turns keys and wheel gestures into navigation commands. Nothing in here
//! talks to the network or draws anything.

pub mod input;
pub mod navigation;
pub mod state;

// Re-export commonly used types
pub use input::{
    command_for_key, ScrollMetrics, WheelCoalescer, WheelInput, WheelOutcome, WheelSettings,
};
pub use navigation::{
    parse_jump_index, NavCommand, NavigationContext, NavigationSubscriber, SlideDeck,
    SlideNavigator, SlideState,
};
pub use state::{NavigationSettings, ViewerContext};
