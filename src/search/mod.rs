pub mod filters;
pub mod pagination;
pub mod pipeline;
pub mod sort;
pub mod state;

pub use filters::{extract_numeric, NumericRange, SearchField, SearchFilters, SearchMode, YearRange};
pub use pagination::{calculate_total_pages, paginate, Pagination, DEFAULT_LIMIT};
pub use pipeline::{collect_stats, execute, reconcile_total_count, QueryResult, SearchStats};
pub use sort::{sort_players, SortDirection, SortField, SortOptions};
pub use state::{reduce, SearchAction, SearchState};
