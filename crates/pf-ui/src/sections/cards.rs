use egui::{Frame, RichText, Stroke};
use pf_data::view::{SkillCard, TaggedCard, TimelineCard};
use std::hash::Hash;

use crate::theme;
use crate::widget_utils::{GridExt, WidgetId};

fn card_frame() -> Frame {
    Frame::none()
        .fill(theme::card_fill())
        .stroke(Stroke::new(1.0, theme::chip_fill()))
        .rounding(12.0)
        .inner_margin(14.0)
}

/// Skills laid out two per row
pub(super) fn skill_grid(ui: &mut egui::Ui, skills: &[SkillCard]) {
    egui::Grid::new_with_id(&WidgetId::new("skills").with("grid"))
        .num_columns(2)
        .spacing([16.0, 16.0])
        .show(ui, |ui| {
            for (i, skill) in skills.iter().enumerate() {
                skill_card(ui, skill);
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

pub fn skill_card(ui: &mut egui::Ui, skill: &SkillCard) {
    card_frame().show(ui, |ui| {
        ui.set_width(260.0);
        ui.label(RichText::new(&skill.name).strong());
        if !skill.category.is_empty() {
            ui.label(RichText::new(&skill.category).color(theme::muted_text_color()).small());
        }
        ui.add(
            egui::ProgressBar::new(skill.fill)
                .desired_width(232.0)
                .fill(theme::accent_color()),
        );
    });
}

pub fn tagged_card(ui: &mut egui::Ui, card: &TaggedCard, id_source: impl Hash) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&card.title).strong().size(18.0));
        if !card.body.is_empty() {
            ui.label(&card.body);
        }
        ui.push_id(id_source, |ui| chip_row(ui, &card.tags));
    });
    ui.add_space(10.0);
}

pub fn timeline_card(ui: &mut egui::Ui, card: &TimelineCard) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&card.title).strong().size(18.0));
        if !card.subtitle.is_empty() {
            ui.label(RichText::new(&card.subtitle).color(theme::muted_text_color()));
        }
        if !card.detail.is_empty() {
            ui.label(&card.detail);
        }
    });
    ui.add_space(10.0);
}

/// A wrapped row of small rounded labels
pub fn chip_row(ui: &mut egui::Ui, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            Frame::none()
                .fill(theme::chip_fill())
                .rounding(10.0)
                .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(tag).small().color(theme::accent_color()));
                });
        }
    });
}
