//! Contact form widget

use pf_data::sources::CONTACT_SENDING;
use pf_data::{ContactForm, ContactOutcome};

use crate::theme;
use crate::widget_utils::field_id;

/// Form values plus the status line under the form
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    status: Option<(String, StatusTone)>,
    sending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StatusTone {
    Neutral,
    Success,
    Error,
}

impl ContactFormState {
    /// Start a submission, returning the values to post
    ///
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.sending {
            return None;
        }
        self.sending = true;
        self.status = Some((CONTACT_SENDING.to_string(), StatusTone::Neutral));
        Some(self.form.clone())
    }

    /// Apply the outcome of a submission
    pub fn finish_submit(&mut self, outcome: &ContactOutcome) {
        self.sending = false;
        let tone = if outcome.is_sent() {
            self.form.reset();
            StatusTone::Success
        } else {
            StatusTone::Error
        };
        self.status = Some((outcome.status_message().to_string(), tone));
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Draw the form; returns true when the user asked to send it
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let mut submitted = false;

        let names: Vec<String> = self.form.fields().map(|(name, _)| name.to_string()).collect();
        for name in &names {
            ui.label(egui::RichText::new(field_label(name)).strong());
            let value = self.form.field_mut(name);
            let edit = if name == "message" {
                egui::TextEdit::multiline(value).desired_rows(5)
            } else {
                egui::TextEdit::singleline(value)
            };
            ui.add(
                edit.id_source(field_id("contact_form", name))
                    .hint_text(field_label(name))
                    .desired_width(f32::INFINITY),
            );
        }

        ui.add_space(6.0);
        let send = egui::Button::new(egui::RichText::new("Send message").color(egui::Color32::WHITE))
            .fill(theme::accent_color());
        if ui.add_enabled(!self.sending, send).clicked() {
            submitted = true;
        }

        if let Some((text, tone)) = &self.status {
            let color = match tone {
                StatusTone::Neutral => theme::muted_text_color(),
                StatusTone::Success => theme::success_color(),
                StatusTone::Error => theme::error_color(),
            };
            ui.label(egui::RichText::new(text.as_str()).color(color));
        }

        submitted
    }
}

/// "subject" becomes "Subject"
fn field_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
