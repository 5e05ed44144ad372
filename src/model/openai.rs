use anyhow::Result;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::OpenAiConfig;
use crate::web::models::{Message, Role};

pub const TEMPERATURE: f32 = 0.2;
pub const MAX_TOKENS: usize = 800;

// A wrapper for an OpenAI-compatible chat completions API
pub struct OpenAiModel {
    api_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAiModel {
    pub fn new(config: &OpenAiConfig, api_key: String) -> Result<Self> {
        info!(
            "Using chat completions API at: {} (model {})",
            config.api_url, config.model
        );

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            client,
        })
    }

    /// Returns `Ok(None)` when the call succeeded but the reply carried no message content.
    pub async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<Option<String>> {
        let url = format!("{}/chat/completions", self.api_url);

        let messages = vec![
            Message {
                role: Role::System,
                content: system_prompt.to_string(),
            },
            Message {
                role: Role::User,
                content: user_message.to_string(),
            },
        ];

        let payload = json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS
        });

        info!("Sending request to {} with max_tokens: {}", url, MAX_TOKENS);
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "API request failed ({}): {}",
                status,
                error_text
            ));
        }

        let response_json: Value = response.json().await?;
        debug!("Response JSON: {}", response_json);

        let content = extract_content(&response_json)?;
        if let Some(text) = &content {
            info!("Response length: {} characters", text.len());
        }
        Ok(content)
    }
}

// An empty `choices` list is an error; a missing list or a choice without content is `None`
fn extract_content(response: &Value) -> Result<Option<String>> {
    let Some(choices) = response.get("choices") else {
        return Ok(None);
    };
    let choice = choices
        .get(0)
        .ok_or_else(|| anyhow::anyhow!("Response contained no choices"))?;

    Ok(choice
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(str::to_string))
}
