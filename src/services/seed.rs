use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use crate::database::{self, NewPlayer};
use crate::errors::with_parse_context;

const DEFAULT_SEED_USER: &str = "seed";

/// One entry of the seed file: a player plus an optional owning user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedPlayer {
    #[serde(flatten)]
    player: NewPlayer,
    #[serde(default)]
    user_id: Option<String>,
}

pub struct SeedService {
    file: PathBuf,
    db_path: String,
}

impl SeedService {
    pub fn new(file: PathBuf, db_path: String) -> Self {
        Self { file, db_path }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Starting Roster Seed ===\n");

        let entries = self.load_entries()?;
        info!(
            "  → Loaded {} entries from {}\n",
            entries.len(),
            self.file.display()
        );

        let inserted = self.insert_entries(entries)?;
        info!("  → Inserted {} players\n", inserted);

        info!("=== Seed Complete ===");
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<SeedPlayer>> {
        let json = fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read seed file {:?}", self.file))?;
        with_parse_context(serde_json::from_str(&json), "seed player list")
    }

    fn insert_entries(&self, entries: Vec<SeedPlayer>) -> Result<usize> {
        let pool = database::create_pool(&self.db_path)?;
        let mut conn = database::get_connection(&pool)?;

        let mut inserted = 0;
        for entry in entries {
            if entry.player.name.trim().is_empty() {
                warn!("Skipping seed entry without a player name");
                continue;
            }

            let user_id = entry
                .user_id
                .unwrap_or_else(|| DEFAULT_SEED_USER.to_string());
            database::players::insert_player(&mut conn, &entry.player.normalized(), &user_id)?;
            inserted += 1;
        }

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::reset_database;
    use tempfile::TempDir;

    #[test]
    fn test_seed_inserts_named_players_and_skips_blank_names() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("seed_test.db");
        let db_path = db_path.to_str().unwrap().to_string();

        let pool = database::create_pool(&db_path).unwrap();
        let mut conn = pool.get().unwrap();
        reset_database(&mut conn).unwrap();

        let seed_file = dir.path().join("players.json");
        fs::write(
            &seed_file,
            r#"[
                {"name": "田中太郎", "position": "投手", "height": "182cm", "userId": "scout-1"},
                {"name": "", "position": "捕手"},
                {"name": "佐藤次郎", "affiliationType": "大学", "affiliationName": ""}
            ]"#,
        )
        .unwrap();

        let service = SeedService::new(seed_file, db_path);
        service.run().unwrap();

        let players = database::players::list_all(&mut conn).unwrap();
        assert_eq!(players.len(), 2);

        let tanaka = players.iter().find(|p| p.name == "田中太郎").unwrap();
        assert_eq!(tanaka.user_id, "scout-1");
        assert_eq!(tanaka.height.as_deref(), Some("182cm"));

        let sato = players.iter().find(|p| p.name == "佐藤次郎").unwrap();
        assert_eq!(sato.user_id, DEFAULT_SEED_USER);
        // Blank strings in the seed file are stored as NULL
        assert_eq!(sato.affiliation_name, None);
    }

    #[test]
    fn test_seed_fails_on_malformed_file() {
        let dir = TempDir::new().unwrap();
        let seed_file = dir.path().join("broken.json");
        fs::write(&seed_file, "not json").unwrap();

        let db_path = dir.path().join("seed_test.db");
        let service = SeedService::new(seed_file, db_path.to_str().unwrap().to_string());
        assert!(service.run().is_err());
    }
}
