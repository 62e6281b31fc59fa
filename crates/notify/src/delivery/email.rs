//! Contact notification delivery via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport to send a
//! plain-text email for each contact form submission. Configuration is
//! loaded from environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no mailer should be built.

use apexverse_db::models::contact::ContactSubmission;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@apexverse.com";

/// Default inbox for contact notifications when `CONTACT_NOTIFY_TO` is not set.
const DEFAULT_NOTIFY_ADDRESS: &str = "contact@apexverse.com";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Inbox that receives contact notifications.
    pub notify_address: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and notifications are log-only.
    ///
    /// | Variable            | Required | Default                   |
    /// |---------------------|----------|---------------------------|
    /// | `SMTP_HOST`         | yes      | -                         |
    /// | `SMTP_PORT`         | no       | `587`                     |
    /// | `SMTP_FROM`         | no       | `noreply@apexverse.com`   |
    /// | `CONTACT_NOTIFY_TO` | no       | `contact@apexverse.com`   |
    /// | `SMTP_USER`         | no       | -                         |
    /// | `SMTP_PASSWORD`     | no       | -                         |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            notify_address: std::env::var("CONTACT_NOTIFY_TO")
                .unwrap_or_else(|_| DEFAULT_NOTIFY_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends contact form notifications via SMTP.
pub struct EmailDelivery {
    config: EmailConfig,
}

impl EmailDelivery {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Assemble the notification email for a submission.
    ///
    /// `Reply-To` is the submitter, so answering the notification goes
    /// straight back to them.
    pub fn build_message(&self, submission: &ContactSubmission) -> Result<Message, EmailError> {
        let subject_line = submission.subject.as_deref().unwrap_or("No subject");
        let body = format!(
            "New contact form submission\n\n\
             From: {} <{}>\n\
             Subject: {}\n\
             Received: {}\n\n\
             {}\n",
            submission.name,
            submission.email,
            subject_line,
            submission.created_at.to_rfc3339(),
            submission.message,
        );

        Message::builder()
            .from(self.config.from_address.parse()?)
            .reply_to(submission.email.parse()?)
            .to(self.config.notify_address.parse()?)
            .subject(format!("New Contact Form: {subject_line}"))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))
    }

    /// Send the notification email for `submission`.
    pub async fn deliver(&self, submission: &ContactSubmission) -> Result<(), EmailError> {
        let email = self.build_message(submission)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(
            submission_id = %submission.id,
            to = %self.config.notify_address,
            "Contact notification email sent",
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
