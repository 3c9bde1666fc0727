use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleTaskRequest {
    pub is_completed: bool,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub content: String,
}

#[derive(Deserialize)]
pub struct TrendQuery {
    pub search: Option<String>,
}
