use serde::Serialize;

use crate::domain::Player;
use crate::search::SearchStats;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListResponse {
    pub items: Vec<Player>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub stats: SearchSummary,
    pub available_positions: Vec<String>,
    pub available_affiliation_types: Vec<String>,
}

/// Listing statistics shown alongside the results
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary {
    pub total_players: usize,
    pub filtered_count: usize,
    pub active_filter_count: usize,
    pub is_filter_active: bool,
    pub current_page_start: usize,
    pub current_page_end: usize,
}

impl From<SearchStats> for SearchSummary {
    fn from(stats: SearchStats) -> Self {
        Self {
            total_players: stats.total_players,
            filtered_count: stats.filtered_count,
            active_filter_count: stats.active_filter_count,
            is_filter_active: stats.is_filter_active,
            current_page_start: stats.current_page_start,
            current_page_end: stats.current_page_end,
        }
    }
}
