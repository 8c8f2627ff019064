//! User interface components for the portfolio viewer
//!
//! This crate provides the egui-based pieces: theme, slide chrome, slide
//! contents and the contact form. It never talks to the network; user
//! requests leave as [`SlideAction`]s.

pub mod contact_form;
pub mod navigation_panel;
pub mod sections;
pub mod shell;
pub mod slide_view;
pub mod theme;
pub mod transition;
pub mod widget_utils;

/// Re-export commonly used types
pub use contact_form::ContactFormState;
pub use navigation_panel::{NavigationPanel, NavigationPanelConfig};
pub use sections::{Slide, SlideAction};
pub use shell::{alert_window, status_bar, top_bar, ShellConfig};
pub use slide_view::SlideView;
pub use theme::{apply_theme, Theme};
pub use transition::TransitionTracker;
pub use widget_utils::{GridExt, ScrollAreaExt, WidgetId};
