use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ClientError;

pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Raw values of the four form controls.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub question: String,
    pub jurisdiction: String,
    pub topic: String,
    pub mode: String,
}

/// Body of `POST /api/answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub question: String,
    pub jurisdiction: String,
    pub topic: String,
    pub mode: String,
}

impl FormInput {
    /// Trims every field. Returns `None` when the question is blank.
    pub fn into_request(self) -> Option<AnswerRequest> {
        let question = self.question.trim();
        if question.is_empty() {
            return None;
        }
        Some(AnswerRequest {
            question: question.to_string(),
            jurisdiction: self.jurisdiction.trim().to_string(),
            topic: self.topic.trim().to_string(),
            mode: self.mode.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerResponse {
    pub answer: String,
    pub disclaimer: String,
}

impl AnswerResponse {
    /// Parses a success body. Only a body that is not JSON at all is an error;
    /// missing or falsy fields become empty strings.
    pub fn from_body(body: &str) -> Result<Self, ClientError> {
        let parsed: Value = serde_json::from_str(body)?;
        Ok(Self {
            answer: display_text(parsed.get("answer")),
            disclaimer: display_text(parsed.get("disclaimer")),
        })
    }
}

/// Text shown for a JSON field: `null`, `false`, `0` and `""` show nothing,
/// strings show as-is, anything else as its JSON text.
fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Message for a non-2xx response: the body's `detail`, else the status text when the
/// body is not JSON, else a generic fallback.
pub fn error_message(body: &str, status_text: &str) -> String {
    let detail = match serde_json::from_str::<Value>(body) {
        Ok(value) => display_text(value.get("detail")),
        Err(_) => status_text.to_string(),
    };
    if detail.is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(question: &str) -> FormInput {
        FormInput {
            question: question.to_string(),
            jurisdiction: "  NY ".to_string(),
            topic: " tenancy".to_string(),
            mode: "detailed ".to_string(),
        }
    }

    #[test]
    fn blank_question_is_rejected() {
        assert!(form("").into_request().is_none());
        assert!(form(" \n\t ").into_request().is_none());
    }

    #[test]
    fn request_carries_trimmed_fields() {
        let request = form("  Can my landlord keep the deposit? ").into_request().unwrap();
        assert_eq!(
            request,
            AnswerRequest {
                question: "Can my landlord keep the deposit?".to_string(),
                jurisdiction: "NY".to_string(),
                topic: "tenancy".to_string(),
                mode: "detailed".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let response = AnswerResponse::from_body(r#"{"answer":"A"}"#).unwrap();
        assert_eq!(response.answer, "A");
        assert_eq!(response.disclaimer, "");

        let response = AnswerResponse::from_body(r#"{"answer":null,"safe":true}"#).unwrap();
        assert_eq!(response, AnswerResponse::default());
    }

    #[test]
    fn non_string_fields_are_rendered_as_text() {
        let response = AnswerResponse::from_body(r#"{"answer":["x"],"disclaimer":5}"#).unwrap();
        assert_eq!(response.answer, r#"["x"]"#);
        assert_eq!(response.disclaimer, "5");

        let response = AnswerResponse::from_body(r#"{"answer":true,"disclaimer":0}"#).unwrap();
        assert_eq!(response.answer, "true");
        assert_eq!(response.disclaimer, "");

        let response = AnswerResponse::from_body(r#""just text""#).unwrap();
        assert_eq!(response, AnswerResponse::default());
    }

    #[test]
    fn malformed_success_body_is_an_error() {
        assert!(matches!(
            AnswerResponse::from_body("<html>"),
            Err(ClientError::Decode(_))
        ));
    }

    #[test]
    fn error_message_prefers_detail() {
        assert_eq!(
            error_message(r#"{"detail":"rate limited"}"#, "Too Many Requests"),
            "rate limited"
        );
        assert_eq!(
            error_message("Bad Gateway from proxy", "Bad Gateway"),
            "Bad Gateway"
        );
        assert_eq!(error_message(r#"{"error":"x"}"#, "Bad Request"), "Request failed");
        assert_eq!(error_message("", ""), "Request failed");
        assert_eq!(error_message(r#"{"detail":""}"#, "Bad Request"), "Request failed");
    }

    #[test]
    fn structured_detail_is_shown_as_json() {
        assert_eq!(
            error_message(r#"{"detail":[{"msg":"field required"}]}"#, "Unprocessable Entity"),
            r#"[{"msg":"field required"}]"#
        );
    }
}
