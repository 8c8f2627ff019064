//! Slide chrome: indicator dots and previous/next controls

use egui::{Color32, Sense, Stroke, Vec2};
use pf_core::{NavCommand, NavigationContext, SlideNavigator};
use std::sync::Arc;

use crate::theme;

/// Navigation panel widget
///
/// Every control only issues navigator calls; the highlight comes back from
/// the navigator on the next frame.
pub struct NavigationPanel {
    navigator: Arc<SlideNavigator>,
    config: NavigationPanelConfig,
}

#[derive(Debug, Clone)]
pub struct NavigationPanelConfig {
    pub height: f32,
    pub dot_radius: f32,
    pub dot_spacing: f32,
    pub active_color: Color32,
    pub inactive_color: Color32,
    pub show_position: bool,
}

impl Default for NavigationPanelConfig {
    fn default() -> Self {
        Self {
            height: 44.0,
            dot_radius: 5.0,
            dot_spacing: 22.0,
            active_color: theme::accent_color(),
            inactive_color: Color32::from_rgb(236, 190, 206),
            show_position: true,
        }
    }
}

impl NavigationPanel {
    pub fn new(navigator: Arc<SlideNavigator>) -> Self {
        Self {
            navigator,
            config: NavigationPanelConfig::default(),
        }
    }

    pub fn with_config(mut self, config: NavigationPanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Show the panel
    ///
    /// `titles` labels the indicator tooltips; missing titles fall back to
    /// the slide number.
    pub fn ui(&mut self, ui: &mut egui::Ui, titles: &[&str]) {
        let context = self.navigator.context();

        ui.horizontal_centered(|ui| {
            ui.set_min_height(self.config.height);

            let prev = ui.add_sized([36.0, 28.0], egui::Button::new("◀"));
            if prev.on_hover_text("Previous slide").clicked() {
                self.navigator.dispatch(NavCommand::Previous);
            }

            self.draw_indicators(ui, &context, titles);

            let next = ui.add_sized([36.0, 28.0], egui::Button::new("▶"));
            if next.on_hover_text("Next slide").clicked() {
                self.navigator.dispatch(NavCommand::Next);
            }

            if self.config.show_position {
                ui.separator();
                ui.label(
                    egui::RichText::new(position_label(&context))
                        .color(theme::muted_text_color()),
                );
            }
        });
    }

    fn draw_indicators(&self, ui: &mut egui::Ui, context: &NavigationContext, titles: &[&str]) {
        let count = context.indicator_count;
        let size = Vec2::new(self.config.dot_spacing * count as f32, self.config.height);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);

        for index in 0..count {
            let center = egui::pos2(
                rect.left() + self.config.dot_spacing * (index as f32 + 0.5),
                rect.center().y,
            );
            let hit = egui::Rect::from_center_size(center, Vec2::splat(self.config.dot_spacing));
            let response = ui.interact(hit, ui.id().with(("indicator", index)), Sense::click());

            let active = self.navigator.indicator_active(index);
            let radius = if active || response.hovered() {
                self.config.dot_radius * 1.4
            } else {
                self.config.dot_radius
            };
            let fill = if active {
                self.config.active_color
            } else {
                self.config.inactive_color
            };

            painter.circle(center, radius, fill, Stroke::new(1.0, self.config.active_color));

            let title = titles
                .get(index)
                .map(|t| t.to_string())
                .unwrap_or_else(|| format!("Slide {}", index + 1));
            if response.on_hover_text(title).clicked() {
                self.navigator.dispatch(NavCommand::JumpTo(index as i64));
            }
        }
    }
}

/// "current / total" text for the panel, one-based
pub fn position_label(context: &NavigationContext) -> String {
    match context.active_slide {
        Some(active) => format!("{} / {}", active + 1, context.slide_count),
        None => format!("– / {}", context.slide_count),
    }
}
