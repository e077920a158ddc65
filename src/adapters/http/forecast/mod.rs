//! Forecast HTTP adapter - dashboard read of the wave feed.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::application::handlers::forecast::GetForecastOverviewHandler;
use crate::ports::{ForecastError, ForecastOverview, ForecastPeriod};

/// Shared handler state for the forecast router.
#[derive(Clone)]
pub struct ForecastHandlers {
    overview_handler: Arc<GetForecastOverviewHandler>,
}

impl ForecastHandlers {
    pub fn new(overview_handler: Arc<GetForecastOverviewHandler>) -> Self {
        Self { overview_handler }
    }
}

/// Response body for the overview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastOverviewResponse {
    pub name: String,
    pub issued: String,
    pub periods: Vec<ForecastPeriodDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPeriodDto {
    pub wave_desc: String,
    pub wind_from: String,
    pub wind_to: String,
    pub wind_speed_min: f64,
    pub wind_speed_max: f64,
}

impl From<ForecastPeriod> for ForecastPeriodDto {
    fn from(p: ForecastPeriod) -> Self {
        Self {
            wave_desc: p.wave_desc,
            wind_from: p.wind_from,
            wind_to: p.wind_to,
            wind_speed_min: p.wind_speed_min,
            wind_speed_max: p.wind_speed_max,
        }
    }
}

impl From<ForecastOverview> for ForecastOverviewResponse {
    fn from(o: ForecastOverview) -> Self {
        Self {
            name: o.name,
            issued: o.issued,
            periods: o.periods.into_iter().map(ForecastPeriodDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ForecastErrorResponse {
    code: String,
    message: String,
}

/// GET /api/forecast/overview - Current wave forecast for the sea area
pub async fn get_overview(State(handlers): State<ForecastHandlers>) -> Response {
    match handlers.overview_handler.handle().await {
        Ok(overview) => (
            StatusCode::OK,
            Json(ForecastOverviewResponse::from(overview)),
        )
            .into_response(),
        Err(e) => {
            let code = match &e {
                ForecastError::RequestFailed(_) => "FORECAST_UNAVAILABLE",
                ForecastError::InvalidPayload(_) => "FORECAST_INVALID",
            };
            (
                StatusCode::BAD_GATEWAY,
                Json(ForecastErrorResponse {
                    code: code.to_string(),
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Creates the forecast router.
pub fn forecast_routes(handlers: ForecastHandlers) -> Router {
    Router::new()
        .route("/overview", get(get_overview))
        .with_state(handlers)
}
