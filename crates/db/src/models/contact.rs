//! Contact form submission model and DTO.

use apexverse_core::error::CoreError;
use apexverse_core::schema::{
    normalize_optional, require_email, require_min_chars, Schema,
};
use apexverse_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for submitting the contact form.
///
/// Required fields default to empty so a missing field is reported by the
/// schema check rather than as a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl CreateContactSubmission {
    /// Treat a blank subject as absent.
    pub fn normalized(mut self) -> Self {
        self.subject = normalize_optional(self.subject);
        self
    }
}

impl Schema for CreateContactSubmission {
    fn check(&self) -> Result<(), CoreError> {
        require_min_chars("name", &self.name, 2, "Name must be at least 2 characters")?;
        require_email("email", &self.email, "Please enter a valid email address")?;
        require_min_chars(
            "message",
            &self.message,
            10,
            "Message must be at least 10 characters",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateContactSubmission {
        CreateContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: Some("Commission".into()),
            message: "I would like a portrait.".into(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(valid().check().is_ok());
    }

    #[test]
    fn first_failing_field_is_reported() {
        let input = CreateContactSubmission {
            name: "A".into(),
            email: "nope".into(),
            ..valid()
        };
        let msg = input.check().unwrap_err().to_string();
        assert!(msg.contains("\"name\""), "got: {msg}");
    }

    #[test]
    fn short_message_is_rejected() {
        let input = CreateContactSubmission {
            message: "hi".into(),
            ..valid()
        };
        assert!(input.check().unwrap_err().to_string().contains("message"));
    }

    #[test]
    fn blank_subject_normalizes_to_none() {
        let input = CreateContactSubmission {
            subject: Some("   ".into()),
            ..valid()
        };
        assert_eq!(input.normalized().subject, None);
    }
}
