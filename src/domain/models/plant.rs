use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub species: String,
    /// Free-text category shown on the dashboard, e.g. "Good", "Needs Water".
    pub health_status: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPlant {
    pub name: String,
    pub species: String,
    pub health_status: String,
    pub image_url: Option<String>,
}
