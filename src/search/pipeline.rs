use crate::domain::Player;

use super::pagination::paginate;
use super::sort::sort_players;
use super::state::{reduce, SearchAction, SearchState};

/// Output of one filter → sort → paginate pass over the full snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Records on the current page, in display order
    pub page_items: Vec<Player>,
    /// Survivor count before slicing
    pub filtered_count: usize,
}

/// Run the pipeline over the full record snapshot
pub fn execute(players: &[Player], state: &SearchState) -> QueryResult {
    let mut survivors: Vec<&Player> = players
        .iter()
        .filter(|player| state.filters.matches(player))
        .collect();

    sort_players(&mut survivors, &state.sort);

    let page_items = paginate(&survivors, state.pagination.page, state.pagination.limit)
        .iter()
        .map(|player| (*player).clone())
        .collect();

    QueryResult {
        page_items,
        filtered_count: survivors.len(),
    }
}

/// Feed the filtered count back into pagination. A no-op when the count is
/// unchanged, so repeated recomputation cannot cycle.
pub fn reconcile_total_count(state: SearchState, filtered_count: usize) -> SearchState {
    if state.pagination.total_count == filtered_count {
        state
    } else {
        reduce(&state, SearchAction::SetTotalCount(filtered_count))
    }
}

/// Derived statistics for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub total_players: usize,
    pub filtered_count: usize,
    pub active_filter_count: usize,
    pub is_filter_active: bool,
    /// 1-indexed number of the first record on the current page; 0 when empty
    pub current_page_start: usize,
    /// 1-indexed number of the last record on the current page; 0 when empty
    pub current_page_end: usize,
}

pub fn collect_stats(
    state: &SearchState,
    total_players: usize,
    filtered_count: usize,
) -> SearchStats {
    let page = state.pagination.page;
    let limit = state.pagination.limit;

    let (current_page_start, current_page_end) = if filtered_count == 0 {
        (0, 0)
    } else {
        (
            page.saturating_sub(1).saturating_mul(limit) + 1,
            page.saturating_mul(limit).min(filtered_count),
        )
    };

    SearchStats {
        total_players,
        filtered_count,
        active_filter_count: state.filters.active_count(),
        is_filter_active: state.filters.is_active(),
        current_page_start,
        current_page_end,
    }
}
