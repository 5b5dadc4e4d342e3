//! Outbound client for the contact intake endpoint.

use reqwest::StatusCode;
use vitrine_common::{IntakeReply, SubmissionOutcome, SubmissionPayload, VitrineError};

/// HTTP client for the remote intake service.
///
/// No request timeout is configured; an attempt runs until the endpoint
/// answers or the transport gives up on its own.
#[derive(Clone)]
pub struct IntakeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IntakeClient {
    pub fn new(endpoint: &str) -> Result<Self, VitrineError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vitrine-marquee/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| VitrineError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one submission and fold the result into a terminal outcome.
    ///
    /// Transport detail is logged here; callers only see the outcome.
    pub async fn dispatch(&self, payload: SubmissionPayload) -> SubmissionOutcome {
        match self.send(&payload).await {
            Ok((StatusCode::OK, _)) => {
                tracing::info!("Intake endpoint acknowledged submission");
                SubmissionOutcome::Delivered
            }
            Ok((status, reply)) => {
                tracing::warn!(status = %status, "Intake endpoint refused submission");
                SubmissionOutcome::Refused {
                    message: reply.message,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Intake request failed");
                SubmissionOutcome::TransportFailed
            }
        }
    }

    async fn send(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<(StatusCode, IntakeReply), VitrineError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| VitrineError::Transport(e.to_string()))?;

        let status = response.status();
        // A refusal with a malformed body just loses its message
        let reply = response.json::<IntakeReply>().await.unwrap_or_default();
        Ok((status, reply))
    }
}
