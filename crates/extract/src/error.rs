use apexverse_core::platform::Platform;

/// Why an extraction attempt produced nothing usable.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Network, DNS, TLS or timeout failure talking to the endpoint.
    #[error("oEmbed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("oEmbed endpoint returned HTTP {status}")]
    Upstream { status: u16 },

    /// The endpoint answered with an HTML page instead of JSON, which is
    /// what Instagram does when it wants an access token.
    #[error("oEmbed endpoint requires authentication")]
    AuthRequired,

    /// The body was not the JSON document we expected.
    #[error("Malformed oEmbed payload: {0}")]
    Malformed(String),
}

impl ExtractError {
    /// User-facing guidance for the admin form. Always points at manual
    /// entry, since nothing here is worth retrying automatically.
    pub fn manual_entry_message(&self, platform: Platform) -> String {
        match (platform, self) {
            (Platform::Instagram, ExtractError::AuthRequired) => {
                "Instagram API requires authentication. Please enter the testimonial details manually."
                    .to_string()
            }
            (Platform::Instagram, _) => {
                "Failed to extract content from Instagram post. The post may be private; please enter the testimonial details manually."
                    .to_string()
            }
            (Platform::X, _) => {
                "Failed to extract content from X post. Please verify the URL is valid or enter the testimonial details manually."
                    .to_string()
            }
        }
    }
}
