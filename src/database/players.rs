use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::domain::Player;
use crate::errors::query_context;

use super::connection::DbConn;
use super::models::{NewPlayer, PlayerPatch};

const PLAYER_COLUMNS: &str = "id, name, position, position_detail, affiliation_type, \
     affiliation_name, draft_year, height, weight, notes, created_at, updated_at, user_id";

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = format!("SELECT {} FROM players", PLAYER_COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context(query_context("player list"))?;

    Ok(rows)
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Player>> {
    let sql = format!("SELECT {} FROM players WHERE id = ?1", PLAYER_COLUMNS);

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context(query_context("player by id"))
}

pub fn insert_player(conn: &mut DbConn, new_player: &NewPlayer, user_id: &str) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players (name, position, position_detail, affiliation_type, \
         affiliation_name, draft_year, height, weight, notes, user_id) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) RETURNING {}",
        PLAYER_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            new_player.name,
            new_player.position,
            new_player.position_detail,
            new_player.affiliation_type,
            new_player.affiliation_name,
            new_player.draft_year,
            new_player.height,
            new_player.weight,
            new_player.notes,
            user_id,
        ],
        parse_player_row,
    )
    .context("Failed to insert new player")
}

/// Replace a player's editable fields and stamp updated_at.
/// Returns None when no player has the given id.
pub fn update_player(conn: &mut DbConn, id: i64, patch: &PlayerPatch) -> Result<Option<Player>> {
    let sql = format!(
        "UPDATE players SET name = ?1, position = ?2, position_detail = ?3, \
         affiliation_type = ?4, affiliation_name = ?5, draft_year = ?6, height = ?7, \
         weight = ?8, notes = ?9, updated_at = ?10 WHERE id = ?11 RETURNING {}",
        PLAYER_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            patch.name,
            patch.position,
            patch.position_detail,
            patch.affiliation_type,
            patch.affiliation_name,
            patch.draft_year,
            patch.height,
            patch.weight,
            patch.notes,
            Utc::now().naive_utc(),
            id,
        ],
        parse_player_row,
    )
    .optional()
    .context("Failed to update player")
}

/// Returns true when a row was actually removed
pub fn delete_player(conn: &mut DbConn, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM players WHERE id = ?1", params![id])
        .context("Failed to delete player")?;

    Ok(deleted > 0)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        position_detail: row.get(3)?,
        affiliation_type: row.get(4)?,
        affiliation_name: row.get(5)?,
        draft_year: row.get(6)?,
        height: row.get(7)?,
        weight: row.get(8)?,
        notes: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
        user_id: row.get(12)?,
    })
}
