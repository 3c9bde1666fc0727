use crate::domain::ports::LlmService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 500;
const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

pub struct GeminiService {
    client: Client,
}

impl GeminiService {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    async fn send_with_retry(
        &self,
        api_key: &str,
        payload: &Value,
    ) -> Result<String, AppError> {
        let mut retries = 0;
        let mut backoff = INITIAL_BACKOFF_MS;

        loop {
            let res = self
                .client
                .post(GENERATE_URL)
                .header("x-goog-api-key", api_key)
                .header("Content-Type", "application/json")
                .json(payload)
                .send()
                .await;

            match res {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body: Value = response.json().await.map_err(|e| {
                            AppError::ExternalService(format!("invalid Gemini response JSON: {e}"))
                        })?;
                        return extract_content(body);
                    } else if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                        if retries >= MAX_RETRIES {
                            let text = response.text().await.unwrap_or_default();
                            return Err(AppError::ExternalService(format!(
                                "Gemini error after {retries} retries: {status} - {text}"
                            )));
                        }
                        warn!("Gemini transient error {}. Retrying in {}ms...", status, backoff);
                    } else {
                        let text = response.text().await.unwrap_or_default();
                        error!("Gemini terminal error {}: {}", status, text);
                        return Err(AppError::ExternalService(format!(
                            "Gemini request rejected: {status} - {text}"
                        )));
                    }
                }
                Err(e) => {
                    if retries >= MAX_RETRIES {
                        return Err(AppError::ExternalService(format!(
                            "Gemini network error after {retries} retries: {e}"
                        )));
                    }
                    warn!("Gemini network error. Retrying in {}ms... {:?}", backoff, e);
                }
            }

            sleep(Duration::from_millis(backoff)).await;
            retries += 1;
            backoff *= 2;
        }
    }
}

fn extract_content(body: Value) -> Result<String, AppError> {
    let text = body
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|first| first.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(|t| t.as_str());

    match text {
        Some(text) => {
            // Strip markdown fences the model sometimes wraps replies in.
            let cleaned = text
                .trim()
                .trim_start_matches("```")
                .trim_end_matches("```")
                .trim();
            Ok(cleaned.to_string())
        }
        None => {
            error!("Unexpected response structure from Gemini: {:?}", body);
            Err(AppError::ExternalService("Gemini response missing content".into()))
        }
    }
}

#[async_trait]
impl LlmService for GeminiService {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, AppError> {
        let payload = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "systemInstruction": {
                "parts": [{"text": system_instruction}]
            },
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 1000
            }
        });

        info!("Sending chat prompt to Gemini ({} chars)", prompt.len());
        self.send_with_retry(api_key, &payload).await
    }
}
