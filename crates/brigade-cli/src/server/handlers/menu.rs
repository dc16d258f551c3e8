//! Menu and strategy handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use brigade::{DatasetOrigin, MenuItem, MenuMetrics, StrategyReport};
use serde::Serialize;

use super::FilterQuery;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for the menu endpoint.
#[derive(Serialize)]
pub struct MenuResponse {
    /// Items passing the filters.
    pub items: Vec<MenuItem>,
    pub metrics: MenuMetrics,
    /// Every category in the full menu, sorted, for building filter controls.
    pub categories: Vec<String>,
    pub origin: DatasetOrigin,
}

pub async fn get_menu(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<MenuResponse>, ApiError> {
    let selection = filter.select(&state)?;

    Ok(Json(MenuResponse {
        metrics: MenuMetrics::compute(&selection),
        categories: state
            .menu
            .sorted_categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
        origin: state.menu.origin().clone(),
        items: selection.items().to_vec(),
    }))
}

pub async fn get_strategy(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<StrategyReport>, ApiError> {
    let selection = filter.select(&state)?;
    Ok(Json(StrategyReport::build(&selection)))
}
