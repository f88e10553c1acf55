use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Persona for the shop's chat assistant.
const SYSTEM_PROMPT: &str = "คุณคือ \"น้องแซน\" พนักงานต้อนรับของ SSRC บริการรถตู้ VIP พร้อมคนขับ \
ตอบคำถามเรื่องรถ เส้นทาง ราคา และการจองอย่างสุภาพและกระชับ \
ตอบเป็นภาษาเดียวกับลูกค้า หากลูกค้าต้องการจองให้แนะนำหน้า /booking หรือ LINE ของร้าน \
อย่าแต่งราคาขึ้นเอง หากไม่ทราบให้แนะนำให้ติดต่อทีมงาน";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatTurn>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChatTurn,
}

#[derive(Debug)]
pub enum AiServiceError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for AiServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiServiceError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            AiServiceError::HttpError(err) => write!(f, "HTTP error: {}", err),
            AiServiceError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for AiServiceError {}

impl From<reqwest::Error> for AiServiceError {
    fn from(err: reqwest::Error) -> Self {
        AiServiceError::HttpError(err)
    }
}

/// Client for the OpenAI-compatible completion endpoint backing the chat
/// widget.
#[derive(Clone)]
pub struct AiService {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl AiService {
    pub fn new() -> Result<Self, AiServiceError> {
        let api_key = env::var("AI_API_KEY")
            .map_err(|_| AiServiceError::EnvironmentError("AI_API_KEY not set".to_string()))?;
        let api_url = env::var("AI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            client: Client::new(),
            api_url,
            api_key,
            model,
        })
    }

    /// Generate a reply to the customer's latest message given the rolling
    /// history (oldest first, latest message excluded).
    pub async fn generate_response(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, AiServiceError> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatTurn {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        });
        messages.extend_from_slice(history);
        messages.push(ChatTurn {
            role: "user".to_string(),
            content: message.to_string(),
        });

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: 0.7,
            max_tokens: 500,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiServiceError::ResponseError(format!(
                "Completion API returned {}: {}",
                status, body
            )));
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| AiServiceError::ResponseError("Empty choices in response".to_string()))
    }
}
