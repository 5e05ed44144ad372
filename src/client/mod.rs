//! Submission handler for the question form, decoupled from any particular page.
//!
//! The handler gathers a [`FormInput`], validates it, posts it through an
//! [`AnswerTransport`] and drives an [`AnswerView`] through [`ViewState`]
//! transitions. User-facing failures go through a single [`Notifier`].

pub mod console;
pub mod error;
pub mod form;
pub mod handler;
pub mod http;
pub mod ports;
pub mod state;

pub use error::ClientError;
pub use form::{AnswerRequest, AnswerResponse, FormInput};
pub use handler::{SubmissionHandler, SubmitOutcome};
pub use ports::{AnswerTransport, AnswerView, Notifier, RawResponse};
pub use state::ViewState;
