//! Contact form notifications.
//!
//! [`ContactNotifier`] is handed each stored submission and dispatches an
//! email on a detached task. Callers never wait on it and never see its
//! failures; the submission is already persisted by the time it runs.

use std::sync::Arc;

use apexverse_db::models::contact::ContactSubmission;
use tokio::task::JoinHandle;

pub mod delivery;

pub use delivery::email::{EmailConfig, EmailDelivery, EmailError};

/// Fire-and-forget dispatcher for contact notifications.
///
/// Without SMTP configuration the notifier only logs the submission.
#[derive(Clone, Default)]
pub struct ContactNotifier {
    email: Option<Arc<EmailDelivery>>,
}

impl ContactNotifier {
    pub fn new(config: Option<EmailConfig>) -> Self {
        Self {
            email: config.map(|c| Arc::new(EmailDelivery::new(c))),
        }
    }

    /// Build from `SMTP_*` environment variables. See [`EmailConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(EmailConfig::from_env())
    }

    /// A notifier that never sends email.
    pub fn log_only() -> Self {
        Self::default()
    }

    pub fn email_enabled(&self) -> bool {
        self.email.is_some()
    }

    /// Spawn delivery for `submission` and return immediately.
    ///
    /// The returned handle is only useful to tests; request handlers drop it.
    pub fn notify(&self, submission: ContactSubmission) -> JoinHandle<()> {
        let email = self.email.clone();
        tokio::spawn(async move {
            match email {
                Some(delivery) => {
                    if let Err(e) = delivery.deliver(&submission).await {
                        tracing::error!(
                            submission_id = %submission.id,
                            error = %e,
                            "Failed to send contact notification email",
                        );
                    }
                }
                None => {
                    tracing::info!(
                        submission_id = %submission.id,
                        name = %submission.name,
                        email = %submission.email,
                        "New contact form submission (email delivery not configured)",
                    );
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            id: "0190a1b2-0000-7000-8000-000000000001".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: Some("Commission".to_string()),
            message: "I would like a commission.".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn log_only_notifier_completes() {
        let notifier = ContactNotifier::log_only();
        assert!(!notifier.email_enabled());
        notifier.notify(submission()).await.unwrap();
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        // Nothing listens on port 1, so the SMTP connection fails.
        let notifier = ContactNotifier::new(Some(EmailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 1,
            from_address: "noreply@apexverse.com".to_string(),
            notify_address: "contact@apexverse.com".to_string(),
            smtp_user: None,
            smtp_password: None,
        }));
        assert!(notifier.email_enabled());

        // The task logs the error and finishes without panicking.
        notifier.notify(submission()).await.unwrap();
    }
}
