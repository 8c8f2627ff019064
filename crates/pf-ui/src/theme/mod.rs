use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Rose Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Apply the portfolio theme (light, pink accent)
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let page_bg = Color32::from_rgb(255, 247, 250);         // #fff7fa
    let card_bg = card_fill();
    let hover_color = Color32::from_rgb(252, 228, 236);
    let active_color = Color32::from_rgb(248, 207, 221);
    let accent = accent_color();
    let text = text_color();

    // Window and panel styling
    visuals.window_fill = card_bg;
    visuals.panel_fill = page_bg;
    visuals.extreme_bg_color = card_bg;
    visuals.faint_bg_color = alt_fill();
    visuals.override_text_color = Some(text);

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = card_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(240, 214, 224));
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text);
    visuals.widgets.noninteractive.rounding = Rounding::same(8.0);

    visuals.widgets.inactive.bg_fill = card_bg;
    visuals.widgets.inactive.weak_bg_fill = card_bg;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(236, 200, 214));
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text);
    visuals.widgets.inactive.rounding = Rounding::same(8.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.weak_bg_fill = hover_color;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text);
    visuals.widgets.hovered.rounding = Rounding::same(8.0);

    visuals.widgets.active.bg_fill = active_color;
    visuals.widgets.active.weak_bg_fill = active_color;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text);
    visuals.widgets.active.rounding = Rounding::same(8.0);

    // Selection and links
    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    // Cards float a little
    visuals.window_shadow.extrusion = 12.0;
    visuals.popup_shadow.extrusion = 6.0;

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 6.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(30.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Primary accent (#E75480)
pub fn accent_color() -> Color32 {
    Color32::from_rgb(231, 84, 128)
}

/// Body text (#4A4A4A)
pub fn text_color() -> Color32 {
    Color32::from_rgb(74, 74, 74)
}

/// Secondary text for subtitles and dates
pub fn muted_text_color() -> Color32 {
    Color32::from_rgb(130, 120, 125)
}

/// Card background
pub fn card_fill() -> Color32 {
    Color32::WHITE
}

/// Alternate slide background (#fff7fa)
pub fn alt_fill() -> Color32 {
    Color32::from_rgb(255, 247, 250)
}

/// Fill of a chip or disabled control
pub fn chip_fill() -> Color32 {
    Color32::from_rgb(252, 228, 236)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(200, 60, 70)
}

pub fn success_color() -> Color32 {
    Color32::from_rgb(60, 150, 90)
}
