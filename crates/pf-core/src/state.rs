//! Application state shared between the shell and the slides

use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use serde::{Serialize, Deserialize};

use crate::input::{WheelCoalescer, WheelSettings, WHEEL_COOLDOWN, WHEEL_THRESHOLD};
use crate::navigation::SlideNavigator;

/// Navigation settings as they appear in the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Accumulated wheel delta that triggers one slide change
    pub wheel_threshold: f32,

    /// Cooldown after a wheel-triggered slide change, in milliseconds
    pub wheel_cooldown_ms: u64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            wheel_threshold: WHEEL_THRESHOLD,
            wheel_cooldown_ms: WHEEL_COOLDOWN.as_millis() as u64,
        }
    }
}

impl NavigationSettings {
    pub fn wheel_settings(&self) -> WheelSettings {
        WheelSettings {
            threshold: self.wheel_threshold,
            cooldown: Duration::from_millis(self.wheel_cooldown_ms),
        }
    }
}

/// Context passed to slides during rendering
#[derive(Clone)]
pub struct ViewerContext {
    /// Slide navigator, the only owner of the navigation index
    pub navigator: Arc<SlideNavigator>,

    /// Wheel coalescer for page-level wheel input
    pub wheel: Arc<Mutex<WheelCoalescer>>,

    /// Tokio runtime handle for network work
    pub runtime_handle: tokio::runtime::Handle,
}

impl ViewerContext {
    pub fn new(
        slide_count: usize,
        settings: &NavigationSettings,
        runtime_handle: tokio::runtime::Handle,
    ) -> Self {
        Self {
            navigator: Arc::new(SlideNavigator::new(slide_count, slide_count)),
            wheel: Arc::new(Mutex::new(WheelCoalescer::new(settings.wheel_settings()))),
            runtime_handle,
        }
    }
}
