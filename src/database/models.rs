use serde::Deserialize;

/// Payload for inserting a player; id and timestamps are database-assigned
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub position_detail: Option<String>,
    #[serde(default)]
    pub affiliation_type: Option<String>,
    #[serde(default)]
    pub affiliation_name: Option<String>,
    #[serde(default)]
    pub draft_year: Option<i32>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewPlayer {
    /// Form fields arrive as empty strings when left blank; store NULL instead
    pub fn normalized(mut self) -> Self {
        self.position = blank_to_null(self.position);
        self.position_detail = blank_to_null(self.position_detail);
        self.affiliation_type = blank_to_null(self.affiliation_type);
        self.affiliation_name = blank_to_null(self.affiliation_name);
        self.height = blank_to_null(self.height);
        self.weight = blank_to_null(self.weight);
        self.notes = blank_to_null(self.notes);
        self
    }
}

/// Replacement values for an existing player's editable fields
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatch {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub position_detail: Option<String>,
    #[serde(default)]
    pub affiliation_type: Option<String>,
    #[serde(default)]
    pub affiliation_name: Option<String>,
    #[serde(default)]
    pub draft_year: Option<i32>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PlayerPatch {
    pub fn normalized(mut self) -> Self {
        self.position = blank_to_null(self.position);
        self.position_detail = blank_to_null(self.position_detail);
        self.affiliation_type = blank_to_null(self.affiliation_type);
        self.affiliation_name = blank_to_null(self.affiliation_name);
        self.height = blank_to_null(self.height);
        self.weight = blank_to_null(self.weight);
        self.notes = blank_to_null(self.notes);
        self
    }
}

fn blank_to_null(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_drops_blank_strings() {
        let new_player = NewPlayer {
            name: "田中太郎".to_string(),
            position: Some("".to_string()),
            position_detail: Some("   ".to_string()),
            affiliation_type: Some("大学".to_string()),
            affiliation_name: None,
            draft_year: Some(2021),
            height: Some("182cm".to_string()),
            weight: Some("".to_string()),
            notes: None,
        }
        .normalized();

        assert_eq!(new_player.position, None);
        assert_eq!(new_player.position_detail, None);
        assert_eq!(new_player.affiliation_type.as_deref(), Some("大学"));
        assert_eq!(new_player.height.as_deref(), Some("182cm"));
        assert_eq!(new_player.weight, None);
        assert_eq!(new_player.draft_year, Some(2021));
    }
}
