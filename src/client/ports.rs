use async_trait::async_trait;

use super::error::ClientError;
use super::form::AnswerRequest;
use super::state::ViewState;

pub const ANSWER_PATH: &str = "/api/answer";

/// Reports a message to the user (an alert, a toast, a line on stderr).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Observes view state transitions and renders them.
pub trait AnswerView: Send + Sync {
    fn render(&self, state: &ViewState);
}

/// An HTTP response as seen by the handler, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one answer request as a JSON POST to [`ANSWER_PATH`].
#[async_trait]
pub trait AnswerTransport: Send + Sync {
    async fn post_answer(&self, request: &AnswerRequest) -> Result<RawResponse, ClientError>;
}
