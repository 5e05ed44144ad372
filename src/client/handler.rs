use log::{error, info, warn};
use std::sync::Arc;

use super::error::ClientError;
use super::form::{error_message, AnswerRequest, AnswerResponse, FormInput};
use super::ports::{AnswerTransport, AnswerView, Notifier};
use super::state::ViewState;

pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";
pub const FAILURE_PREFIX: &str = "Something went wrong: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected,
    Answered(AnswerResponse),
    Failed(String),
}

/// Handles one form submission at a time per call.
///
/// Calls are not serialized: overlapping submissions each issue their own
/// request and whichever resolves last leaves its state on the view.
pub struct SubmissionHandler {
    transport: Arc<dyn AnswerTransport>,
    view: Arc<dyn AnswerView>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionHandler {
    pub fn new(
        transport: Arc<dyn AnswerTransport>,
        view: Arc<dyn AnswerView>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            view,
            notifier,
        }
    }

    pub async fn submit(&self, form: FormInput) -> SubmitOutcome {
        let Some(request) = form.into_request() else {
            warn!("Submission rejected: empty question");
            self.notifier.notify(EMPTY_QUESTION_MESSAGE);
            return SubmitOutcome::Rejected;
        };

        info!(
            "Submitting question ({} chars, mode: {})",
            request.question.len(),
            request.mode
        );
        self.view.render(&ViewState::Loading);

        match self.exchange(&request).await {
            Ok(response) => {
                self.view.render(&ViewState::ShowingResult {
                    answer: response.answer.clone(),
                    disclaimer: response.disclaimer.clone(),
                });
                SubmitOutcome::Answered(response)
            }
            Err(e) => {
                let message = e.to_string();
                error!("Submission failed: {}", message);
                self.view.render(&ViewState::ShowingError(message.clone()));
                self.notifier.notify(&format!("{}{}", FAILURE_PREFIX, message));
                SubmitOutcome::Failed(message)
            }
        }
    }

    async fn exchange(&self, request: &AnswerRequest) -> Result<AnswerResponse, ClientError> {
        let raw = self.transport.post_answer(request).await?;
        if !raw.is_success() {
            return Err(ClientError::Status(error_message(&raw.body, &raw.status_text)));
        }
        AnswerResponse::from_body(&raw.body)
    }
}
