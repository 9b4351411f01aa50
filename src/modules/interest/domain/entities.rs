use serde::{Deserialize, Serialize};

fn default_icon() -> String {
    "🔍".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestData {
    pub name: String,
    pub description: String,

    /// Free-text emoji or symbol; absent on the wire means "🔍".
    #[serde(default = "default_icon")]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,

    #[serde(flatten)]
    pub data: InterestData,
}
