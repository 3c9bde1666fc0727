use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Absent means the chat assistant always answers with the
    /// offline fallback reply.
    pub gemini_api_key: Option<String>,
    pub ai_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("PORT must be a number"),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            ai_timeout_secs: env::var("AI_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("AI_TIMEOUT_SECS must be a number"),
        }
    }
}
