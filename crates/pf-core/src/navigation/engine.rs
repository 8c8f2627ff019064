//! Slide navigator implementation

use super::{parse_jump_index, NavCommand, NavigationContext, NavigationSubscriber, SlideDeck, SlideState};
use std::sync::{Arc, Weak};
use parking_lot::RwLock;
use tracing::debug;

/// The slide navigator
///
/// Owns the single navigation index and its projection onto slides and
/// indicators. Every mutation goes through [`SlideNavigator::show_slide`].
pub struct SlideNavigator {
    state: Arc<RwLock<SlideDeck>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
}

impl SlideNavigator {
    /// Create a navigator over a fixed number of slides and indicators
    ///
    /// The first slide is shown right away when there is at least one.
    pub fn new(slide_count: usize, indicator_count: usize) -> Self {
        let navigator = Self {
            state: Arc::new(RwLock::new(SlideDeck::new(slide_count, indicator_count))),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        };

        if slide_count > 0 {
            navigator.show_slide(0);
        }

        navigator
    }

    /// Show the slide at `index`
    ///
    /// Total over all integers. An index without a slide still becomes the
    /// stored index and moves the indicator highlight.
    pub fn show_slide(&self, index: i64) {
        let mut state = self.state.write();
        state.show(index);
        drop(state);

        debug!("Showing slide {}", index);
        self.notify_subscribers();
    }

    /// Advance one slide, wrapping to the first
    pub fn next(&self) {
        let target = self.state.read().next_index();
        if let Some(index) = target {
            self.show_slide(index);
        }
    }

    /// Go back one slide, wrapping to the last
    pub fn previous(&self) {
        let target = self.state.read().previous_index();
        if let Some(index) = target {
            self.show_slide(index);
        }
    }

    /// Jump to a raw target such as a link's target attribute
    ///
    /// Input that does not start with an integer is ignored.
    pub fn jump_to(&self, raw: &str) {
        match parse_jump_index(raw) {
            Some(index) => self.show_slide(index),
            None => debug!("Ignoring jump to non-numeric target {:?}", raw),
        }
    }

    /// Apply a navigation command
    pub fn dispatch(&self, command: NavCommand) {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::JumpTo(index) => self.show_slide(index),
        }
    }

    /// The stored navigation index
    pub fn current(&self) -> i64 {
        self.state.read().current()
    }

    pub fn slide_count(&self) -> usize {
        self.state.read().slide_count()
    }

    pub fn indicator_count(&self) -> usize {
        self.state.read().indicator_count()
    }

    /// Display state of one slide, `None` past the end
    pub fn slide_state(&self, index: usize) -> Option<SlideState> {
        self.state.read().slide_state(index)
    }

    /// Whether indicator `index` is highlighted
    pub fn indicator_active(&self, index: usize) -> bool {
        self.state.read().indicator_active(index)
    }

    /// Get current navigation context
    pub fn context(&self) -> NavigationContext {
        let state = self.state.read();
        NavigationContext {
            current: state.current(),
            active_slide: state.active_slide(),
            slide_count: state.slide_count(),
            indicator_count: state.indicator_count(),
        }
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of navigation change
    fn notify_subscribers(&self) {
        let context = self.context();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_navigation_change(&context);
            }
        }
    }
}
