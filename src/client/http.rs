use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::error::ClientError;
use super::form::AnswerRequest;
use super::ports::{AnswerTransport, RawResponse, ANSWER_PATH};

// Posts answer requests to a running advisor server
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    /// `timeout` of `None` lets a request wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ANSWER_PATH),
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerTransport for HttpTransport {
    async fn post_answer(&self, request: &AnswerRequest) -> Result<RawResponse, ClientError> {
        debug!("POST {}", self.endpoint);

        // `json` also sets `Content-Type: application/json`
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await?;
        debug!("{} {} ({} bytes)", status.as_u16(), status_text, body.len());

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() {
        let transport = HttpTransport::new("http://localhost:8080/", None).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:8080/api/answer");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let transport =
            HttpTransport::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        let request = AnswerRequest {
            question: "q".into(),
            jurisdiction: String::new(),
            topic: String::new(),
            mode: String::new(),
        };
        let result = transport.post_answer(&request).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
