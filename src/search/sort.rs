use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::domain::Player;

/// Column the player listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    DraftYear,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A single sort key plus direction; ties keep snapshot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOptions {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOptions {
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Position => a
                .position
                .as_deref()
                .unwrap_or("")
                .cmp(b.position.as_deref().unwrap_or("")),
            SortField::DraftYear => a.draft_year.unwrap_or(0).cmp(&b.draft_year.unwrap_or(0)),
            SortField::CreatedAt => {
                timestamp_or_epoch(&a.created_at).cmp(&timestamp_or_epoch(&b.created_at))
            }
            SortField::UpdatedAt => {
                timestamp_or_epoch(&a.updated_at).cmp(&timestamp_or_epoch(&b.updated_at))
            }
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Stable sort, so records with equal keys keep their snapshot order
pub fn sort_players(players: &mut [&Player], sort: &SortOptions) {
    players.sort_by(|a, b| sort.compare(a, b));
}

fn timestamp_or_epoch(value: &Option<NaiveDateTime>) -> i64 {
    value.map(|t| t.and_utc().timestamp()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: i64, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            position: None,
            position_detail: None,
            affiliation_type: None,
            affiliation_name: None,
            draft_year: None,
            height: None,
            weight: None,
            notes: None,
            created_at: None,
            updated_at: None,
            user_id: "user-1".to_string(),
        }
    }

    fn sorted_names(players: &[Player], sort: SortOptions) -> Vec<String> {
        let mut refs: Vec<&Player> = players.iter().collect();
        sort_players(&mut refs, &sort);
        refs.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let players = vec![
            player(1, "Tanaka"),
            player(2, "Sato"),
            player(3, "Suzuki"),
        ];
        assert_eq!(
            sorted_names(&players, SortOptions::default()),
            vec!["Sato", "Suzuki", "Tanaka"]
        );
    }

    #[test]
    fn test_descending_reverses_order() {
        let players = vec![
            player(1, "Tanaka"),
            player(2, "Sato"),
            player(3, "Suzuki"),
        ];
        let sort = SortOptions {
            field: SortField::Name,
            direction: SortDirection::Desc,
        };
        assert_eq!(
            sorted_names(&players, sort),
            vec!["Tanaka", "Suzuki", "Sato"]
        );
    }

    #[test]
    fn test_sort_by_draft_year_treats_null_as_zero() {
        let mut a = player(1, "Tanaka");
        a.draft_year = Some(2021);
        let b = player(2, "Sato");
        let mut c = player(3, "Suzuki");
        c.draft_year = Some(2019);

        let sort = SortOptions {
            field: SortField::DraftYear,
            direction: SortDirection::Asc,
        };
        assert_eq!(
            sorted_names(&[a, b, c], sort),
            vec!["Sato", "Suzuki", "Tanaka"]
        );
    }

    #[test]
    fn test_sort_by_position_treats_null_as_empty() {
        let mut a = player(1, "Tanaka");
        a.position = Some("投手".to_string());
        let b = player(2, "Sato");

        let sort = SortOptions {
            field: SortField::Position,
            direction: SortDirection::Asc,
        };
        // Null position sorts like the empty string, ahead of any named position
        assert_eq!(sorted_names(&[a, b], sort), vec!["Sato", "Tanaka"]);
    }

    #[test]
    fn test_sort_by_created_at_treats_null_as_epoch() {
        let mut a = player(1, "Tanaka");
        a.created_at = "2024-05-01T10:00:00".parse().ok();
        let b = player(2, "Sato");
        let mut c = player(3, "Suzuki");
        c.created_at = "2023-01-15T08:30:00".parse().ok();

        let sort = SortOptions {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        };
        assert_eq!(
            sorted_names(&[a, b, c], sort),
            vec!["Tanaka", "Suzuki", "Sato"]
        );
    }

    #[test]
    fn test_equal_keys_keep_snapshot_order() {
        let first = player(1, "Tanaka");
        let second = player(2, "Tanaka");
        let players = vec![first, second];

        let mut refs: Vec<&Player> = players.iter().collect();
        sort_players(&mut refs, &SortOptions::default());
        let ids: Vec<i64> = refs.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
