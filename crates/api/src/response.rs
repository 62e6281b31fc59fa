//! Small response payloads shared by handlers.

use serde::Serialize;

/// `{ "message": ... }` confirmation body, returned by deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
