use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTrend {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
}

impl Trend {
    /// Case-insensitive substring match over title and description,
    /// mirroring the `LIKE %term%` search of the trends endpoint.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
