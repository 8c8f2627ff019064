use serde::{Serialize, Deserialize};

mod deck;
mod engine;
mod subscriber;

pub use deck::{parse_jump_index, SlideDeck};
pub use engine::SlideNavigator;
pub use subscriber::NavigationSubscriber;

/// Display state of a single slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlideState {
    /// The slide currently presented
    Active,
    /// Already passed (index below the current one)
    Prev,
    /// Neither active nor passed
    #[default]
    Default,
}

/// The closed set of commands every input source is translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    Next,
    Previous,
    /// Jump to an explicit index (may be out of range)
    JumpTo(i64),
}

/// Context passed to subscribers after every navigation change
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationContext {
    /// The stored navigation index
    pub current: i64,
    /// Index of the slide carrying the active state, if any
    pub active_slide: Option<usize>,
    pub slide_count: usize,
    pub indicator_count: usize,
}
