use egui::{Context, TopBottomPanel, RichText};

use crate::theme;

/// Shell configuration
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    /// Title shown at the left of the top bar
    pub title: String,
    /// Admin login link, hidden when unset
    pub admin_login_url: Option<String>,
}

/// Render the top bar
pub fn top_bar(ctx: &Context, config: &ShellConfig) {
    TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let title = if config.title.is_empty() { "Portfolio" } else { config.title.as_str() };
            ui.label(RichText::new(title).strong().size(18.0).color(theme::accent_color()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(url) = &config.admin_login_url {
                    ui.hyperlink_to("Admin", url);
                }
            });
        });
    });
}

/// Show a modal-style alert; clears `message` once dismissed
pub fn alert_window(ctx: &Context, message: &mut Option<String>) {
    let Some(text) = message.as_deref() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(text);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        *message = None;
    }
}

/// Show a short-lived status line at the bottom of the window
pub fn status_bar(ctx: &Context, status: Option<&str>) {
    let Some(status) = status else {
        return;
    };
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.label(RichText::new(status).small().color(theme::muted_text_color()));
    });
}
