use serde::{
    Deserialize,
    Serialize,
};

use crate::core::SortOrder;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub server_url: String,
    pub sort_order: SortOrder,
    pub show_chart: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000".to_string(),
            sort_order: SortOrder::Descending,
            show_chart: false,
        }
    }
}
