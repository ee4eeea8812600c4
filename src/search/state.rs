use super::filters::{NumericRange, SearchField, SearchFilters, SearchMode, YearRange};
use super::pagination::{calculate_total_pages, Pagination};
use super::sort::SortOptions;

/// The whole search configuration for one listing view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub filters: SearchFilters,
    pub sort: SortOptions,
    pub pagination: Pagination,
    pub is_advanced_mode: bool,
}

/// Closed set of state transitions
#[derive(Debug, Clone)]
pub enum SearchAction {
    SetTextSearch(String),
    SetSearchMode(SearchMode),
    SetSearchFields(Vec<SearchField>),
    SetPositions(Vec<String>),
    SetAffiliationTypes(Vec<String>),
    SetDraftYearRange(YearRange),
    SetHeightRange(NumericRange),
    SetWeightRange(NumericRange),
    SetHasNotes(Option<bool>),
    SetHasPhysicalData(Option<bool>),
    SetSort(SortOptions),
    SetPage(usize),
    SetLimit(usize),
    SetTotalCount(usize),
    ToggleAdvancedMode,
    ClearFilters,
}

/// Apply one transition and return the next state. Transitions are total;
/// every filter or sort change resets the listing to page 1.
pub fn reduce(state: &SearchState, action: SearchAction) -> SearchState {
    let mut next = state.clone();

    match action {
        SearchAction::SetTextSearch(text) => {
            next.filters.text_search = text;
            next.pagination.page = 1;
        }
        SearchAction::SetSearchMode(mode) => {
            next.filters.search_mode = mode;
            next.pagination.page = 1;
        }
        SearchAction::SetSearchFields(fields) => {
            next.filters.search_fields = fields;
            next.pagination.page = 1;
        }
        SearchAction::SetPositions(positions) => {
            next.filters.positions = positions;
            next.pagination.page = 1;
        }
        SearchAction::SetAffiliationTypes(types) => {
            next.filters.affiliation_types = types;
            next.pagination.page = 1;
        }
        SearchAction::SetDraftYearRange(range) => {
            next.filters.draft_year_range = range;
            next.pagination.page = 1;
        }
        SearchAction::SetHeightRange(range) => {
            next.filters.height_range = range;
            next.pagination.page = 1;
        }
        SearchAction::SetWeightRange(range) => {
            next.filters.weight_range = range;
            next.pagination.page = 1;
        }
        SearchAction::SetHasNotes(flag) => {
            next.filters.has_notes = flag;
            next.pagination.page = 1;
        }
        SearchAction::SetHasPhysicalData(flag) => {
            next.filters.has_physical_data = flag;
            next.pagination.page = 1;
        }
        SearchAction::SetSort(sort) => {
            next.sort = sort;
            next.pagination.page = 1;
        }
        SearchAction::SetPage(page) => {
            // No bounds clamping here; the pagination calculator clamps at render time
            next.pagination.page = page;
        }
        SearchAction::SetLimit(limit) => {
            next.pagination.limit = limit;
            next.pagination.page = 1;
            next.pagination.total_pages =
                calculate_total_pages(next.pagination.total_count, limit);
        }
        SearchAction::SetTotalCount(count) => {
            next.pagination.total_count = count;
            next.pagination.total_pages = calculate_total_pages(count, next.pagination.limit);
        }
        SearchAction::ToggleAdvancedMode => {
            next.is_advanced_mode = !next.is_advanced_mode;
        }
        SearchAction::ClearFilters => {
            next = SearchState {
                is_advanced_mode: state.is_advanced_mode,
                ..SearchState::default()
            };
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::sort::{SortDirection, SortField};

    fn state_on_page(page: usize) -> SearchState {
        let state = SearchState::default();
        reduce(&state, SearchAction::SetPage(page))
    }

    #[test]
    fn test_filter_changes_reset_page_to_first() {
        let actions = vec![
            SearchAction::SetTextSearch("Tanaka".to_string()),
            SearchAction::SetSearchMode(SearchMode::Exact),
            SearchAction::SetSearchFields(vec![SearchField::Notes]),
            SearchAction::SetPositions(vec!["投手".to_string()]),
            SearchAction::SetAffiliationTypes(vec!["大学".to_string()]),
            SearchAction::SetDraftYearRange(YearRange {
                min: Some(2020),
                max: None,
            }),
            SearchAction::SetHeightRange(NumericRange {
                min: Some(170.0),
                max: None,
            }),
            SearchAction::SetWeightRange(NumericRange {
                min: None,
                max: Some(90.0),
            }),
            SearchAction::SetHasNotes(Some(true)),
            SearchAction::SetHasPhysicalData(Some(false)),
        ];

        for action in actions {
            let next = reduce(&state_on_page(4), action.clone());
            assert_eq!(next.pagination.page, 1, "action {:?} must reset page", action);
        }
    }

    #[test]
    fn test_set_sort_resets_page() {
        let sort = SortOptions {
            field: SortField::DraftYear,
            direction: SortDirection::Desc,
        };
        let next = reduce(&state_on_page(3), SearchAction::SetSort(sort));
        assert_eq!(next.sort, sort);
        assert_eq!(next.pagination.page, 1);
    }

    #[test]
    fn test_set_page_touches_nothing_else() {
        let state = reduce(
            &SearchState::default(),
            SearchAction::SetTextSearch("Tanaka".to_string()),
        );
        let next = reduce(&state, SearchAction::SetPage(7));

        assert_eq!(next.pagination.page, 7);
        assert_eq!(next.filters, state.filters);
        assert_eq!(next.sort, state.sort);
        assert_eq!(next.pagination.limit, state.pagination.limit);
    }

    #[test]
    fn test_set_limit_resets_page_and_recomputes_pages() {
        let state = reduce(&state_on_page(3), SearchAction::SetTotalCount(45));
        let next = reduce(&state, SearchAction::SetLimit(10));

        assert_eq!(next.pagination.limit, 10);
        assert_eq!(next.pagination.page, 1);
        assert_eq!(next.pagination.total_pages, 5);
    }

    #[test]
    fn test_set_total_count_recomputes_pages_only() {
        let next = reduce(&state_on_page(2), SearchAction::SetTotalCount(45));
        assert_eq!(next.pagination.total_count, 45);
        assert_eq!(next.pagination.total_pages, 3);
        // Page selection survives a count refresh
        assert_eq!(next.pagination.page, 2);
    }

    #[test]
    fn test_toggle_advanced_mode_preserves_everything_else() {
        let state = reduce(
            &SearchState::default(),
            SearchAction::SetTextSearch("Tanaka".to_string()),
        );
        let next = reduce(&state, SearchAction::ToggleAdvancedMode);

        assert!(next.is_advanced_mode);
        assert_eq!(next.filters, state.filters);
        assert_eq!(next.pagination, state.pagination);

        let back = reduce(&next, SearchAction::ToggleAdvancedMode);
        assert!(!back.is_advanced_mode);
    }

    #[test]
    fn test_clear_filters_restores_defaults_but_keeps_advanced_mode() {
        let mut state = SearchState::default();
        for action in [
            SearchAction::ToggleAdvancedMode,
            SearchAction::SetTextSearch("Tanaka".to_string()),
            SearchAction::SetPositions(vec!["投手".to_string()]),
            SearchAction::SetSort(SortOptions {
                field: SortField::DraftYear,
                direction: SortDirection::Desc,
            }),
            SearchAction::SetLimit(50),
            SearchAction::SetPage(3),
        ] {
            state = reduce(&state, action);
        }

        let cleared = reduce(&state, SearchAction::ClearFilters);
        assert_eq!(cleared.filters, SearchFilters::default());
        assert_eq!(cleared.sort, SortOptions::default());
        assert_eq!(cleared.pagination, Pagination::default());
        assert!(cleared.is_advanced_mode);
    }

    #[test]
    fn test_reduce_never_mutates_the_previous_state() {
        let state = SearchState::default();
        let snapshot = state.clone();
        let _ = reduce(&state, SearchAction::SetTextSearch("Tanaka".to_string()));
        let _ = reduce(&state, SearchAction::ClearFilters);
        assert_eq!(state, snapshot);
    }
}
