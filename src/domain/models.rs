use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered player record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub position_detail: Option<String>,
    pub affiliation_type: Option<String>,
    pub affiliation_name: Option<String>,
    pub draft_year: Option<i32>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub user_id: String,
}

impl Player {
    /// Whether the notes field carries actual content
    pub fn has_notes(&self) -> bool {
        self.notes
            .as_ref()
            .map(|n| !n.trim().is_empty())
            .unwrap_or(false)
    }

    /// Whether at least one of height/weight carries actual content
    pub fn has_physical_data(&self) -> bool {
        let filled =
            |v: &Option<String>| v.as_ref().map(|s| !s.trim().is_empty()).unwrap_or(false);
        filled(&self.height) || filled(&self.weight)
    }
}
