use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config;
use crate::error::InsightError;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub contents: Vec<ChatMessage>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

pub fn build_prompt(industry: &str) -> String {
    format!(
        "Explain how precision manufacturing (like CNC machining, VMC) impacts the {} industry. \
         Focus on the benefits and applications. Keep the response concise, professional, \
         and around 150-200 words.",
        industry
    )
}

impl GenerateRequest {
    /// A single user message asking about `industry`.
    pub fn for_industry(industry: &str) -> Self {
        Self {
            contents: vec![ChatMessage {
                role: "user".to_string(),
                parts: vec![Part {
                    text: build_prompt(industry),
                }],
            }],
        }
    }

    #[cfg(test)]
    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|message| message.parts.first())
            .map(|part| part.text.as_str())
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body.
pub fn extract_text(body: &Value) -> Option<String> {
    let response: GenerateResponse = serde_json::from_value(body.clone()).ok()?;
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
}

/// Sends a generation request and hands back the decoded JSON body.
pub trait InsightsTransport {
    async fn generate(&self, body: &GenerateRequest) -> Result<Value, InsightError>;
}

/// Talks to the hosted model over `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiTransport {
    url: String,
}

impl GeminiTransport {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    pub fn from_config() -> Self {
        Self::new(config::insights_url(config::api_key()))
    }
}

impl InsightsTransport for GeminiTransport {
    async fn generate(&self, body: &GenerateRequest) -> Result<Value, InsightError> {
        let response = Request::post(&self.url).json(body)?.send().await?;
        if !response.ok() {
            log::warn!("Insights API answered with status {}", response.status());
        }
        Ok(response.json::<Value>().await?)
    }
}

/// One full request attempt for `industry`. Errors are logged here and
/// returned for display; nothing is retried.
pub async fn fetch_insight<T: InsightsTransport>(
    transport: &T,
    industry: &str,
) -> Result<String, InsightError> {
    let body = GenerateRequest::for_industry(industry);
    log::info!("Requesting insights for industry '{}'", industry);

    let raw = match transport.generate(&body).await {
        Ok(raw) => raw,
        Err(err) => {
            log::error!("Error calling insights API: {:?}", err);
            return Err(err);
        }
    };

    extract_text(&raw).ok_or_else(|| {
        log::error!("Insights API response structure unexpected: {}", raw);
        InsightError::UnexpectedShape
    })
}
