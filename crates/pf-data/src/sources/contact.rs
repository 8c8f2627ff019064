//! Contact form submission

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::PortfolioClient;
use crate::models::lenient;

/// Path the contact form posts to
pub const CONTACT_PATH: &str = "/api/contact";

pub const CONTACT_SENDING: &str = "Sending your message…";
pub const CONTACT_SENT: &str = "Thanks! Your message has been sent.";
pub const CONTACT_REJECTED: &str = "Sorry—your message couldn’t be sent. Please try again.";
pub const CONTACT_NETWORK_FAILURE: &str =
    "Network issue—please check your connection and try again.";

/// Fields shown by the contact slide, in display order
pub const CONTACT_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Contact form values, kept in field order
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    fields: IndexMap<String, String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::with_fields(CONTACT_FIELDS)
    }
}

impl ContactForm {
    /// Create an empty form with the given field names
    pub fn with_fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: names
                .into_iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        }
    }

    /// Mutable value of a field, adding the field if needed
    pub fn field_mut(&mut self, name: &str) -> &mut String {
        self.fields.entry(name.to_string()).or_default()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Clear every value, keeping the fields
    pub fn reset(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }

    /// Values sent as the JSON body, in field order
    pub fn values(&self) -> &IndexMap<String, String> {
        &self.fields
    }
}

/// Result of a contact submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    /// The API refused the message, with the text to show
    Rejected(String),
    /// The request failed or the reply could not be read
    NetworkFailure,
}

impl ContactOutcome {
    /// Status line shown under the form
    pub fn status_message(&self) -> &str {
        match self {
            ContactOutcome::Sent => CONTACT_SENT,
            ContactOutcome::Rejected(message) => message,
            ContactOutcome::NetworkFailure => CONTACT_NETWORK_FAILURE,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, ContactOutcome::Sent)
    }
}

#[derive(Debug, Deserialize)]
struct ContactReply {
    #[serde(default)]
    success: Value,
    #[serde(default, deserialize_with = "lenient::string")]
    error: String,
}

/// Interpret a contact reply body
pub fn contact_outcome(ok: bool, body: &[u8]) -> ContactOutcome {
    let reply: ContactReply = match serde_json::from_slice(body) {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Unreadable contact reply: {}", e);
            return ContactOutcome::NetworkFailure;
        }
    };

    if ok && lenient::truthy(&reply.success) {
        ContactOutcome::Sent
    } else if reply.error.is_empty() {
        ContactOutcome::Rejected(CONTACT_REJECTED.to_string())
    } else {
        ContactOutcome::Rejected(reply.error)
    }
}

impl PortfolioClient {
    /// Post the contact form
    ///
    /// Never fails; every error becomes an outcome with a status message.
    pub async fn submit_contact(&self, form: &ContactForm) -> ContactOutcome {
        let url = match self.url(CONTACT_PATH) {
            Ok(url) => url,
            Err(e) => {
                error!("Cannot submit contact form: {}", e);
                return ContactOutcome::NetworkFailure;
            }
        };
        debug!("Posting contact form to {}", url);

        let response = match self.http.post(url).json(form.values()).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Contact request failed: {}", e);
                return ContactOutcome::NetworkFailure;
            }
        };

        let ok = response.status().is_success();
        let outcome = match response.bytes().await {
            Ok(body) => contact_outcome(ok, &body),
            Err(e) => {
                error!("Contact reply failed: {}", e);
                ContactOutcome::NetworkFailure
            }
        };

        info!("Contact submission finished: {:?}", outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_keeps_field_order() {
        let mut form = ContactForm::default();
        form.field_mut("message").push_str("Hi");
        form.field_mut("name").push_str("Ada");

        let names: Vec<_> = form.fields().map(|(k, _)| k).collect();
        assert_eq!(names, CONTACT_FIELDS.to_vec());
        assert_eq!(form.field("name"), Some("Ada"));
        assert_eq!(
            serde_json::to_string(form.values()).unwrap(),
            r#"{"name":"Ada","email":"","subject":"","message":"Hi"}"#
        );
    }

    #[test]
    fn test_form_reset() {
        let mut form = ContactForm::default();
        form.field_mut("email").push_str("ada@example.com");
        form.reset();
        assert!(form.fields().all(|(_, v)| v.is_empty()));
        assert_eq!(form.fields().count(), 4);
    }

    #[test]
    fn test_outcome_success() {
        assert_eq!(contact_outcome(true, br#"{"success":true}"#), ContactOutcome::Sent);
    }

    #[test]
    fn test_outcome_rejections() {
        assert_eq!(
            contact_outcome(true, br#"{"success":false,"error":"Message too short"}"#),
            ContactOutcome::Rejected("Message too short".to_string())
        );
        assert_eq!(
            contact_outcome(false, br#"{"success":true}"#),
            ContactOutcome::Rejected(CONTACT_REJECTED.to_string())
        );
        assert_eq!(
            contact_outcome(true, br#"{}"#).status_message(),
            CONTACT_REJECTED
        );
    }

    #[test]
    fn test_outcome_unreadable_body() {
        assert_eq!(contact_outcome(true, b"<html>"), ContactOutcome::NetworkFailure);
        assert_eq!(
            ContactOutcome::NetworkFailure.status_message(),
            CONTACT_NETWORK_FAILURE
        );
    }
}
