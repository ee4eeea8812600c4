use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Deserialize;

use crate::config::AppConfig;

pub mod players;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

/// Query parameters accepted by the player listing endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerParams {
    pub search: Option<String>,
    pub search_mode: Option<String>,
    /// Comma-separated field names
    pub search_fields: Option<String>,
    /// Comma-separated position values
    pub positions: Option<String>,
    /// Comma-separated affiliation types
    pub affiliation_types: Option<String>,
    pub draft_year_min: Option<i32>,
    pub draft_year_max: Option<i32>,
    pub height_min: Option<f64>,
    pub height_max: Option<f64>,
    pub weight_min: Option<f64>,
    pub weight_max: Option<f64>,
    pub has_notes: Option<bool>,
    pub has_physical_data: Option<bool>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}
