//! Suggestion and planning handlers.
//!
//! Numeric parameters are clamped to the same ranges the CLI enforces.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use brigade::rules::parse_weekday_lenient;
use brigade::suggestion::ServiceSummary;
use brigade::{
    DailyPlan, EventQuantityGuide, EventType, Season, SeasonalPlan, SuggestionEngine,
    SuggestionRecord,
};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use super::{clamp_param, FilterQuery};
use crate::cli::{
    MAX_CUSTOMERS, MAX_DURATION_WEEKS, MAX_GUESTS, MIN_CUSTOMERS, MIN_DURATION_WEEKS, MIN_GUESTS,
};
use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub event: Option<String>,
    pub guests: Option<i64>,
    pub season: Option<String>,
}

impl EventQuery {
    fn event(&self, state: &AppState) -> EventType {
        self.event
            .as_deref()
            .map(EventType::parse_lenient)
            .unwrap_or_else(|| state.defaults.event.clone())
    }

    fn guests(&self, state: &AppState) -> u32 {
        self.guests.map_or(state.defaults.guests, |guests| {
            clamp_param(guests, MIN_GUESTS, MAX_GUESTS)
        })
    }
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub event: EventType,
    pub guest_count: u32,
    pub season: Season,
    pub suggestions: Vec<SuggestionRecord>,
    pub service_summary: ServiceSummary,
}

pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
    query: Result<Query<EventQuery>, QueryRejection>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let Query(query) = query?;
    let selection = filter.select(&state)?;
    let event = query.event(&state);
    let guest_count = query.guests(&state);
    let season = season_or_default(query.season.as_deref(), &state);

    let suggestions =
        SuggestionEngine::generate_future_suggestions(&selection, &event, guest_count, season);

    Ok(Json(SuggestionsResponse {
        event,
        guest_count,
        season,
        suggestions,
        service_summary: SuggestionEngine::service_summary(),
    }))
}

pub async fn get_event_plan(
    State(state): State<AppState>,
    query: Result<Query<EventQuery>, QueryRejection>,
) -> Result<Json<EventQuantityGuide>, ApiError> {
    let Query(query) = query?;
    let event = query.event(&state);
    Ok(Json(SuggestionEngine::event_quantity_guide(
        query.guests(&state),
        &event,
    )))
}

#[derive(Debug, Default, Deserialize)]
pub struct DailyQuery {
    pub day: Option<String>,
    pub customers: Option<i64>,
}

pub async fn get_daily_plan(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
    query: Result<Query<DailyQuery>, QueryRejection>,
) -> Result<Json<DailyPlan>, ApiError> {
    let Query(query) = query?;
    let selection = filter.select(&state)?;
    let day = query
        .day
        .as_deref()
        .map(parse_weekday_lenient)
        .unwrap_or_else(|| Local::now().weekday());
    let customers = query
        .customers
        .map_or(state.defaults.expected_customers, |customers| {
            clamp_param(customers, MIN_CUSTOMERS, MAX_CUSTOMERS)
        });

    Ok(Json(SuggestionEngine::generate_daily_plan(
        &selection, day, customers,
    )))
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonQuery {
    pub season: Option<String>,
    pub weeks: Option<i64>,
}

pub async fn get_seasonal_plan(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
    query: Result<Query<SeasonQuery>, QueryRejection>,
) -> Result<Json<SeasonalPlan>, ApiError> {
    let Query(query) = query?;
    let selection = filter.select(&state)?;
    let season = season_or_default(query.season.as_deref(), &state);
    let weeks = query.weeks.map_or(state.defaults.duration_weeks, |weeks| {
        clamp_param(weeks, MIN_DURATION_WEEKS, MAX_DURATION_WEEKS)
    });

    Ok(Json(SuggestionEngine::generate_seasonal_plan(
        &selection, season, weeks,
    )))
}

fn season_or_default(text: Option<&str>, state: &AppState) -> Season {
    text.map(Season::parse_lenient)
        .unwrap_or(state.defaults.season)
}
