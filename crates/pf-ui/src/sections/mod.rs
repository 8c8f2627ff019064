//! Slide contents
//!
//! Renderers only read the [`PortfolioView`] and push [`SlideAction`]s; the
//! app decides what each action does.

mod cards;

use pf_data::sources::{RESUME_UNAVAILABLE, RESUME_UNAVAILABLE_LONG};
use pf_data::PortfolioView;

use crate::contact_form::ContactFormState;
use crate::theme;

pub use cards::{chip_row, skill_card, tagged_card, timeline_card};

/// The fixed slide sequence, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Blog,
    Education,
    Contact,
}

impl Slide {
    pub const ALL: [Slide; 8] = [
        Slide::Home,
        Slide::About,
        Slide::Skills,
        Slide::Projects,
        Slide::Experience,
        Slide::Blog,
        Slide::Education,
        Slide::Contact,
    ];

    pub fn from_index(index: usize) -> Option<Slide> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Slide::Home => "Home",
            Slide::About => "About",
            Slide::Skills => "Skills",
            Slide::Projects => "Projects",
            Slide::Experience => "Experience",
            Slide::Blog => "Blog",
            Slide::Education => "Education",
            Slide::Contact => "Contact",
        }
    }

    /// Raw jump target for links pointing at this slide
    pub fn jump_target(self) -> String {
        self.index().to_string()
    }

    pub fn titles() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.title()).collect()
    }
}

/// Something the user asked for while a slide was drawn
#[derive(Debug, Clone, PartialEq)]
pub enum SlideAction {
    /// A jump link with its raw target
    Jump(String),
    DownloadResume,
    /// A disabled resume button was clicked; carries the alert text
    ResumeUnavailable(String),
    SubmitContact,
}

/// Draw one slide
pub fn slide_ui(
    ui: &mut egui::Ui,
    slide: Slide,
    view: &PortfolioView,
    contact: &mut ContactFormState,
    actions: &mut Vec<SlideAction>,
) {
    match slide {
        Slide::Home => home(ui, view, actions),
        Slide::About => about(ui, view),
        Slide::Skills => section(ui, "Skills", |ui| cards::skill_grid(ui, &view.skills)),
        Slide::Projects => section(ui, "Projects", |ui| {
            for (i, card) in view.projects.iter().enumerate() {
                tagged_card(ui, card, ("project", i));
            }
        }),
        Slide::Experience => section(ui, "Experience", |ui| {
            for card in &view.experience {
                timeline_card(ui, card);
            }
        }),
        Slide::Blog => section(ui, "Blog", |ui| {
            for (i, card) in view.blogs.iter().enumerate() {
                tagged_card(ui, card, ("blog", i));
            }
        }),
        Slide::Education => section(ui, "Education", |ui| {
            for card in &view.education {
                timeline_card(ui, card);
            }
            ui.add_space(8.0);
            resume_button(ui, view.profile.resume_available, actions);
        }),
        Slide::Contact => contact_slide(ui, view, contact, actions),
    }
}

fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.heading(egui::RichText::new(title).color(theme::accent_color()));
    ui.add_space(12.0);
    add_contents(ui);
}

fn profile_image(ui: &mut egui::Ui, view: &PortfolioView, size: f32) {
    if let Some(url) = &view.profile.image_url {
        ui.add(
            egui::Image::new(url.as_str())
                .max_width(size)
                .max_height(size)
                .rounding(size / 2.0),
        );
    }
}

fn home(ui: &mut egui::Ui, view: &PortfolioView, actions: &mut Vec<SlideAction>) {
    let profile = &view.profile;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        profile_image(ui, view, 160.0);
        ui.add_space(12.0);

        let name = if profile.name.is_empty() { "Portfolio" } else { profile.name.as_str() };
        ui.heading(egui::RichText::new(name).size(40.0).color(theme::accent_color()));
        if !profile.role.is_empty() {
            ui.label(egui::RichText::new(&profile.role).size(20.0));
        }

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for link in &profile.social_links {
                ui.hyperlink_to(&link.label, &link.href);
            }
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.link("View projects").clicked() {
                actions.push(SlideAction::Jump(Slide::Projects.jump_target()));
            }
            if ui.link("Get in touch").clicked() {
                actions.push(SlideAction::Jump(Slide::Contact.jump_target()));
            }
            resume_button(ui, profile.resume_available, actions);
        });
    });
}

fn about(ui: &mut egui::Ui, view: &PortfolioView) {
    section(ui, "About", |ui| {
        ui.horizontal_top(|ui| {
            profile_image(ui, view, 200.0);
            ui.vertical(|ui| {
                if !view.profile.name.is_empty() {
                    ui.label(egui::RichText::new(&view.profile.name).strong().size(20.0));
                }
                ui.label(&view.profile.bio);
            });
        });
    });
}

fn contact_slide(
    ui: &mut egui::Ui,
    view: &PortfolioView,
    contact: &mut ContactFormState,
    actions: &mut Vec<SlideAction>,
) {
    section(ui, "Contact", |ui| {
        for method in &view.contact_methods {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&method.label).strong());
                ui.label(&method.value);
            });
        }
        ui.add_space(12.0);

        if contact.ui(ui) {
            actions.push(SlideAction::SubmitContact);
        }
    });
}

/// Resume button; stays clickable when disabled so it can explain why
fn resume_button(ui: &mut egui::Ui, available: bool, actions: &mut Vec<SlideAction>) {
    if available {
        let button = egui::Button::new(egui::RichText::new("Download resume").color(egui::Color32::WHITE))
            .fill(theme::accent_color());
        if ui.add(button).clicked() {
            actions.push(SlideAction::DownloadResume);
        }
    } else {
        let button = egui::Button::new(
            egui::RichText::new("Download resume").color(theme::muted_text_color()),
        )
        .fill(theme::chip_fill());
        if ui.add(button).on_hover_text(RESUME_UNAVAILABLE).clicked() {
            actions.push(SlideAction::ResumeUnavailable(unavailable_message(RESUME_UNAVAILABLE)));
        }
    }
}

/// Alert text for a disabled resume button with the given tooltip
pub fn unavailable_message(tooltip: &str) -> String {
    if tooltip.is_empty() {
        RESUME_UNAVAILABLE_LONG.to_string()
    } else {
        tooltip.to_string()
    }
}
