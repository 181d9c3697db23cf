use async_trait::async_trait;
use serde::Deserialize;

use crate::host_form::EventDraft;
use crate::host_form::SubmitError;
use crate::host_form::SubmitEvents;

/// Submits finished drafts to the platform's event-creation endpoint on
/// behalf of the signed-in user.
pub struct HttpSubmitter {
    client: reqwest::Client,
    base_url: String,
    session_token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpSubmitter {
    pub fn new(base_url: impl Into<String>, session_token: impl Into<String>) -> Self {
        HttpSubmitter {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            session_token: session_token.into(),
        }
    }
}

#[async_trait(?Send)]
impl SubmitEvents for HttpSubmitter {
    async fn submit(&self, draft: &EventDraft) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(format!("{}/api/events", self.base_url))
            .bearer_auth(&self.session_token)
            .json(draft)
            .send()
            .await
            .map_err(|err| SubmitError(err.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        // surface the server's message when it sent one
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => Err(SubmitError(body.error)),
            Err(_) => Err(SubmitError(format!(
                "event submission failed with status {status}"
            ))),
        }
    }
}
