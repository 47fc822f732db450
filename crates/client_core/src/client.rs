use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{HumanizeRequest, HumanizeResponse, HUMANIZE_ROUTE};
use tracing::{debug, warn};
use url::Url;

use crate::error::{HumanizeError, FALLBACK_ERROR_MESSAGE};

/// Anything able to turn text into its humanized form.
#[async_trait]
pub trait HumanizeTransport: Send + Sync {
    async fn humanize(&self, text: &str) -> Result<String, HumanizeError>;
}

pub struct HumanizeClient {
    http: Client,
    endpoint: Url,
}

impl HumanizeClient {
    pub fn new(server_url: &str) -> Result<Self, HumanizeError> {
        Self::with_timeout(server_url, None)
    }

    /// Without a timeout the request waits as long as the transport allows.
    pub fn with_timeout(server_url: &str, timeout: Option<Duration>) -> Result<Self, HumanizeError> {
        let endpoint = Url::parse(server_url)?.join(HUMANIZE_ROUTE)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl HumanizeTransport for HumanizeClient {
    async fn humanize(&self, text: &str) -> Result<String, HumanizeError> {
        debug!(endpoint = %self.endpoint, chars = text.chars().count(), "sending humanize request");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&HumanizeRequest {
                text: text.to_string(),
            })
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        interpret_response(status, &body)
    }
}

/// Maps an HTTP status and body onto the humanized text or a failure.
///
/// A well-formed `success: false` envelope carries its error message through
/// regardless of status. Any other non-2xx answer, and any 2xx body that does
/// not decode into a usable envelope, is a generic failure.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<String, HumanizeError> {
    let ok_status = (200..300).contains(&status);
    let envelope = match serde_json::from_slice::<HumanizeResponse>(body) {
        Ok(envelope) => envelope,
        Err(err) if ok_status => {
            warn!(%err, "humanize response was not valid JSON");
            return Err(HumanizeError::MalformedResponse(err.to_string()));
        }
        Err(_) => return Err(HumanizeError::Status { status }),
    };

    match envelope {
        HumanizeResponse {
            success: true,
            humanized: Some(humanized),
            ..
        } if ok_status => Ok(humanized),
        HumanizeResponse { success: true, .. } if ok_status => Err(
            HumanizeError::MalformedResponse("success response without humanized text".into()),
        ),
        HumanizeResponse {
            success: false,
            error: Some(error),
            ..
        } => Err(HumanizeError::Rejected(error)),
        HumanizeResponse { success: false, .. } if ok_status => {
            Err(HumanizeError::Rejected(FALLBACK_ERROR_MESSAGE.to_string()))
        }
        _ => Err(HumanizeError::Status { status }),
    }
}
