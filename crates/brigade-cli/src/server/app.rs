//! Axum application setup.

use axum::{http::Uri, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/menu", get(handlers::get_menu))
        .route("/strategy", get(handlers::get_strategy))
        // Planning
        .route("/suggestions", get(handlers::get_suggestions))
        .route("/daily-plan", get(handlers::get_daily_plan))
        .route("/event-plan", get(handlers::get_event_plan))
        .route("/seasonal-plan", get(handlers::get_seasonal_plan))
        // During service
        .route("/quick-solution", get(handlers::get_quick_solution))
        .route("/quick-actions", get(handlers::get_quick_actions))
        .route("/item-guides", get(handlers::get_item_guides));

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Start the web server.
pub async fn run_server(
    state: AppState,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;

    tracing::info!(addr = %listener.local_addr()?, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultsConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use brigade::MenuDataset;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(MenuDataset::sample(), DefaultsConfig::default()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_menu_with_filters() {
        let (status, body) = get_json("/api/menu?category=Starter,Pasta&type=Veg").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 6);
        assert_eq!(body["metrics"]["veg_items"], 6);
        assert_eq!(body["categories"].as_array().unwrap().len(), 5);
        assert_eq!(body["origin"]["kind"], "sample");
    }

    #[tokio::test]
    async fn test_bad_filter_value() {
        let (status, body) = get_json("/api/menu?buffet=sometimes").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_suggestions_default_parameters() {
        let (status, body) = get_json("/api/suggestions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["event"], "Normal Day");
        assert_eq!(body["guest_count"], 150);
        assert_eq!(body["suggestions"][0]["kind"], "event");
        assert_eq!(body["service_summary"]["immediate_actions"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_suggestions_without_buffet_warns() {
        let (_, body) = get_json("/api/suggestions?buffet=Absent&event=Wedding").await;

        let suggestions = body["suggestions"].as_array().unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0]["kind"], "warning");
    }

    #[tokio::test]
    async fn test_event_plan_clamps_guests() {
        let (_, body) = get_json("/api/event-plan?event=Wedding&guests=5000").await;

        assert_eq!(body["guest_count"], 1000);
        assert_eq!(body["batches"], 60);
        assert_eq!(body["backup_guest_percentage"], 20);
    }

    #[tokio::test]
    async fn test_negative_numbers_clamp_to_minimum() {
        let (status, body) = get_json("/api/event-plan?event=Wedding&guests=-5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["guest_count"], 20);

        let (_, body) = get_json("/api/daily-plan?day=Monday&customers=-40").await;
        assert_eq!(body["expected_customers"], 20);

        let (_, body) = get_json("/api/quick-actions?hour=-3").await;
        assert_eq!(body["hour"], 0);
        assert_eq!(body["period"], "off_peak");
    }

    #[tokio::test]
    async fn test_malformed_numbers_are_json_bad_request() {
        for uri in [
            "/api/daily-plan?customers=abc",
            "/api/event-plan?guests=lots",
            "/api/seasonal-plan?weeks=1.5",
            "/api/quick-actions?hour=noon",
            "/api/suggestions?guests=x",
        ] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = app().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let content_type = response.headers()["content-type"].to_str().unwrap();
            assert!(content_type.starts_with("application/json"), "{uri}");

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"], "bad_request");
            assert!(!body["message"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_daily_plan() {
        let (_, body) = get_json("/api/daily-plan?day=Saturday&customers=10").await;

        assert_eq!(body["day"], "Saturday");
        assert_eq!(body["expected_customers"], 20);
        assert_eq!(body["extra_percentage"], 50);
        assert_eq!(body["schedule"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_seasonal_plan() {
        let (_, body) = get_json("/api/seasonal-plan?season=winter&weeks=2").await;

        assert_eq!(body["season"], "Winter");
        assert_eq!(body["duration_weeks"], 4);
        assert_eq!(body["promotion_ideas"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_quick_solution() {
        let (status, body) =
            get_json("/api/quick-solution?situation=Equipment%20issue&severity=Critical").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["solution"], "Emergency equipment rental, partial service");

        let (status, _) = get_json("/api/quick-solution").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_quick_actions_for_hour() {
        let (_, body) = get_json("/api/quick-actions?hour=12").await;

        assert_eq!(body["period"], "lunch_rush");
        assert_eq!(body["actions"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_strategy_and_item_guides() {
        let (_, strategy) = get_json("/api/strategy?type=Non-Veg").await;
        assert_eq!(strategy["recommendations"][0]["priority"], "high");

        let (_, guides) = get_json("/api/item-guides").await;
        assert_eq!(guides["categories"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json("/api/nothing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}
