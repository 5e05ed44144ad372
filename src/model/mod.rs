pub mod openai;
pub mod prompt;

use anyhow::Result;
use log::{error, info, warn};
use std::fmt;

use crate::config::OpenAiConfig;
use crate::web::models::{QueryRequest, QueryResponse};
use openai::OpenAiModel;
use prompt::Inquiry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Mock,
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Mock => "mock",
            ProviderKind::OpenAi => "openai",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Produces educational answers, either offline (mock) or through a chat model
pub struct LegalAdvisor {
    model: Option<OpenAiModel>,
}

impl LegalAdvisor {
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let model = match &config.api_key {
            Some(key) => Some(OpenAiModel::new(config, key.clone())?),
            None => {
                info!("No OPENAI_API_KEY set, answering with the mock provider");
                None
            }
        };
        Ok(Self { model })
    }

    pub fn mock() -> Self {
        Self { model: None }
    }

    pub fn provider(&self) -> ProviderKind {
        if self.model.is_some() {
            ProviderKind::OpenAi
        } else {
            ProviderKind::Mock
        }
    }

    pub async fn generate_answer(&self, req: &QueryRequest) -> Result<QueryResponse> {
        let inquiry = Inquiry::new(
            &req.question,
            req.jurisdiction.as_deref().unwrap_or_default(),
            req.topic.as_deref().unwrap_or_default(),
            req.mode.as_deref().unwrap_or_default(),
        );

        if inquiry.question.is_empty() {
            return Ok(self.respond(prompt::EMPTY_QUESTION_ANSWER.to_string()));
        }
        if inquiry.sensitive {
            warn!("Question matched a sensitive phrase, restricting to general information");
        }

        let answer = match &self.model {
            None => prompt::mock_answer(&prompt::content_summary(&inquiry)),
            Some(model) => {
                let user_message = prompt::compose_user_message(&inquiry);
                match model.complete(prompt::SAFE_SYSTEM_PROMPT, &user_message).await {
                    Ok(Some(content)) => content,
                    Ok(None) => prompt::NO_CONTENT_ANSWER.to_string(),
                    Err(e) => {
                        error!("Model error, falling back to summary: {}", e);
                        format!(
                            "{}{}",
                            prompt::PROVIDER_FAILURE_PREFACE,
                            prompt::content_summary(&inquiry)
                        )
                    }
                }
            }
        };

        Ok(self.respond(answer))
    }

    fn respond(&self, answer: String) -> QueryResponse {
        QueryResponse {
            answer,
            disclaimer: prompt::DISCLAIMER.to_string(),
            safe: true,
            provider: self.provider().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request(question: &str) -> QueryRequest {
        QueryRequest {
            question: question.to_string(),
            jurisdiction: Some(" Ontario ".to_string()),
            topic: None,
            mode: Some("concise".to_string()),
        }
    }

    #[tokio::test]
    async fn mock_provider_answers_with_template() {
        let advisor = LegalAdvisor::mock();
        let response = advisor.generate_answer(&request("What is a lease?")).await.unwrap();

        assert_eq!(response.provider, "mock");
        assert!(response.safe);
        assert_eq!(response.disclaimer, prompt::DISCLAIMER);
        assert!(response.answer.contains("Question: What is a lease?"));
        assert!(response.answer.contains("Jurisdiction (provided): Ontario"));
    }

    #[tokio::test]
    async fn blank_question_asks_for_clarity() {
        let advisor = LegalAdvisor::mock();
        let response = advisor.generate_answer(&request("   ")).await.unwrap();
        assert_eq!(response.answer, prompt::EMPTY_QUESTION_ANSWER);
    }

    #[tokio::test]
    async fn unreachable_model_falls_back_to_summary() {
        let config = OpenAiConfig {
            api_key: Some("test-key".to_string()),
            api_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            ..OpenAiConfig::default()
        };
        let advisor = LegalAdvisor::new(&config).unwrap();
        assert_eq!(advisor.provider(), ProviderKind::OpenAi);

        let response = advisor.generate_answer(&request("What is a lease?")).await.unwrap();
        assert!(response.answer.starts_with(prompt::PROVIDER_FAILURE_PREFACE));
        assert!(response.answer.contains("Question: What is a lease?"));
        assert_eq!(response.provider, "openai");
    }
}
