//! Quick-action and prep-guide handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use brigade::suggestion::ServiceSummary;
use brigade::{CategoryPrepGuide, QuickActionAdvice, Severity, Situation, SuggestionEngine};
use serde::{Deserialize, Serialize};

use super::{clamp_param, FilterQuery};
use crate::server::error::ApiError;
use crate::server::state::AppState;

const LAST_HOUR: u32 = 23;

#[derive(Debug, Default, Deserialize)]
pub struct SituationQuery {
    pub situation: Option<String>,
    pub severity: Option<String>,
}

#[derive(Serialize)]
pub struct QuickSolutionResponse {
    pub situation: Situation,
    pub severity: Severity,
    pub solution: &'static str,
}

pub async fn get_quick_solution(
    Query(query): Query<SituationQuery>,
) -> Result<Json<QuickSolutionResponse>, ApiError> {
    let situation = query
        .situation
        .as_deref()
        .map(Situation::parse_lenient)
        .ok_or_else(|| ApiError::BadRequest("Missing 'situation' parameter".to_string()))?;
    let severity = query
        .severity
        .as_deref()
        .map(Severity::parse_lenient)
        .unwrap_or_default();

    Ok(Json(QuickSolutionResponse {
        solution: SuggestionEngine::quick_situation_solution(&situation, severity),
        situation,
        severity,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct HourQuery {
    pub hour: Option<i64>,
}

pub async fn get_quick_actions(
    query: Result<Query<HourQuery>, QueryRejection>,
) -> Result<Json<QuickActionAdvice>, ApiError> {
    let Query(query) = query?;
    let advice = match query.hour {
        Some(hour) => SuggestionEngine::quick_action_advice(clamp_param(hour, 0, LAST_HOUR)),
        None => SuggestionEngine::quick_action_advice_now(),
    };
    Ok(Json(advice))
}

#[derive(Serialize)]
pub struct ItemGuidesResponse {
    pub categories: Vec<CategoryPrepGuide>,
    pub service_summary: ServiceSummary,
}

pub async fn get_item_guides(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<ItemGuidesResponse>, ApiError> {
    let selection = filter.select(&state)?;
    Ok(Json(ItemGuidesResponse {
        categories: SuggestionEngine::item_prep_guides(&selection),
        service_summary: SuggestionEngine::service_summary(),
    }))
}
