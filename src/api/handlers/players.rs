use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::PlayerListResponse;
use crate::config::AppConfig;
use crate::database::{self, NewPlayer, PlayerPatch};
use crate::domain::Player;
use crate::search::{
    self, NumericRange, SearchAction, SearchField, SearchMode, SearchState, SortDirection,
    SortField, SortOptions, YearRange,
};

use super::{AppState, PlayerParams};

pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerParams>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    let players = match database::players::list_all(&mut conn) {
        Ok(players) => players,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    let search_state = build_search_state(&params, &state.config);
    let result = search::execute(&players, &search_state);
    let search_state = search::reconcile_total_count(search_state, result.filtered_count);
    let stats = search::collect_stats(&search_state, players.len(), result.filtered_count);

    Json(PlayerListResponse {
        items: result.page_items,
        total: result.filtered_count,
        page: search_state.pagination.page,
        page_size: search_state.pagination.limit,
        total_pages: search_state.pagination.display_total_pages(),
        stats: stats.into(),
        available_positions: distinct_values(&players, position_of),
        available_affiliation_types: distinct_values(&players, affiliation_type_of),
    })
    .into_response()
}

pub async fn get_player_detail(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    match database::players::find_by_id(&mut conn, player_id) {
        Ok(Some(player)) => Json(player).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
        }
    }
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<NewPlayer>,
) -> impl IntoResponse {
    let user_id = match user_id_from_headers(&headers) {
        Some(user_id) => user_id,
        None => return StatusCode::UNAUTHORIZED.into_response(),
    };

    if payload.name.trim().is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "Player name is required").into_response();
    }

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    match database::players::insert_player(&mut conn, &payload.normalized(), &user_id) {
        Ok(player) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Insert Error: {}", e)).into_response()
        }
    }
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
    headers: HeaderMap,
    Json(payload): Json<PlayerPatch>,
) -> impl IntoResponse {
    let user_id = match user_id_from_headers(&headers) {
        Some(user_id) => user_id,
        None => return StatusCode::UNAUTHORIZED.into_response(),
    };

    if payload.name.trim().is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "Player name is required").into_response();
    }

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    let existing = match database::players::find_by_id(&mut conn, player_id) {
        Ok(Some(player)) => player,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    // Only the registering user may edit a record
    if existing.user_id != user_id {
        return (StatusCode::FORBIDDEN, "Not the owner of this player").into_response();
    }

    match database::players::update_player(&mut conn, player_id, &payload.normalized()) {
        Ok(Some(player)) => Json(player).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Update Error: {}", e)).into_response()
        }
    }
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let user_id = match user_id_from_headers(&headers) {
        Some(user_id) => user_id,
        None => return StatusCode::UNAUTHORIZED.into_response(),
    };

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    let existing = match database::players::find_by_id(&mut conn, player_id) {
        Ok(Some(player)) => player,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    if existing.user_id != user_id {
        return (StatusCode::FORBIDDEN, "Not the owner of this player").into_response();
    }

    match database::players::delete_player(&mut conn, player_id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Delete Error: {}", e)).into_response()
        }
    }
}

/// Identity is delegated to the fronting auth layer, which forwards the
/// authenticated user id in this header
fn user_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get("X-User-Id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Fold the request's query parameters through the search reducer.
/// Page is applied last so the filter-driven page resets cannot clobber it.
fn build_search_state(params: &PlayerParams, config: &AppConfig) -> SearchState {
    let mut state = SearchState::default();

    if let Some(search) = &params.search {
        state = search::reduce(&state, SearchAction::SetTextSearch(search.clone()));
    }

    let mode = match params.search_mode.as_deref() {
        Some("exact") => SearchMode::Exact,
        Some("pattern") | Some("regex") => SearchMode::Pattern,
        _ => SearchMode::Partial,
    };
    state = search::reduce(&state, SearchAction::SetSearchMode(mode));

    if let Some(fields) = parse_search_fields(params.search_fields.as_deref()) {
        state = search::reduce(&state, SearchAction::SetSearchFields(fields));
    }

    let positions = parse_csv(params.positions.as_deref());
    if !positions.is_empty() {
        state = search::reduce(&state, SearchAction::SetPositions(positions));
    }

    let affiliation_types = parse_csv(params.affiliation_types.as_deref());
    if !affiliation_types.is_empty() {
        state = search::reduce(&state, SearchAction::SetAffiliationTypes(affiliation_types));
    }

    if params.draft_year_min.is_some() || params.draft_year_max.is_some() {
        state = search::reduce(
            &state,
            SearchAction::SetDraftYearRange(YearRange {
                min: params.draft_year_min,
                max: params.draft_year_max,
            }),
        );
    }

    if params.height_min.is_some() || params.height_max.is_some() {
        state = search::reduce(
            &state,
            SearchAction::SetHeightRange(NumericRange {
                min: params.height_min,
                max: params.height_max,
            }),
        );
    }

    if params.weight_min.is_some() || params.weight_max.is_some() {
        state = search::reduce(
            &state,
            SearchAction::SetWeightRange(NumericRange {
                min: params.weight_min,
                max: params.weight_max,
            }),
        );
    }

    if params.has_notes.is_some() {
        state = search::reduce(&state, SearchAction::SetHasNotes(params.has_notes));
    }

    if params.has_physical_data.is_some() {
        state = search::reduce(
            &state,
            SearchAction::SetHasPhysicalData(params.has_physical_data),
        );
    }

    let field = match params.sort_by.as_deref() {
        Some("draft_year") => SortField::DraftYear,
        Some("position") => SortField::Position,
        Some("created_at") => SortField::CreatedAt,
        Some("updated_at") => SortField::UpdatedAt,
        _ => SortField::Name,
    };
    let direction = match params.order.as_deref() {
        Some("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    };
    state = search::reduce(&state, SearchAction::SetSort(SortOptions { field, direction }));

    let limit = params
        .limit
        .unwrap_or(config.search.default_limit)
        .clamp(1, config.search.max_limit);
    state = search::reduce(&state, SearchAction::SetLimit(limit));

    let page = params.page.unwrap_or(1).max(1);
    search::reduce(&state, SearchAction::SetPage(page))
}

fn parse_csv(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_search_fields(raw: Option<&str>) -> Option<Vec<SearchField>> {
    let raw = raw?;
    let fields: Vec<SearchField> = raw
        .split(',')
        .filter_map(|part| match part.trim() {
            "name" => Some(SearchField::Name),
            "affiliation_name" => Some(SearchField::AffiliationName),
            "notes" => Some(SearchField::Notes),
            "position_detail" => Some(SearchField::PositionDetail),
            _ => None,
        })
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

fn position_of(player: &Player) -> Option<&str> {
    player.position.as_deref()
}

fn affiliation_type_of(player: &Player) -> Option<&str> {
    player.affiliation_type.as_deref()
}

fn distinct_values<F>(players: &[Player], field: F) -> Vec<String>
where
    F: Fn(&Player) -> Option<&str>,
{
    let mut values: Vec<String> = players
        .iter()
        .filter_map(|player| field(player))
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}
