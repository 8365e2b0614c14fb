use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use anyhow::{Result, anyhow};
use log::{info, warn};
use tokio::net::TcpListener;
use uuid::Uuid;

use crate::config::Config;
use crate::event::{CalendarEvent, schedule_from_transcript};
use crate::parser::{REPROMPT_MESSAGE, ScheduleError, korea_now, parse_reference_time};

// API state that will be shared across handlers
pub struct ApiState {
    pub config: Config,
}

#[derive(Debug, Deserialize)]
pub struct ParseScheduleRequest {
    pub transcript: String,
    /// Reference time, Seoul civil time or RFC 3339. Defaults to the live clock.
    pub now: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub success: bool,
    pub message: String,
    pub event: Option<CalendarEvent>,
}

impl ScheduleResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), event: None }
    }
}

type HandlerError = (StatusCode, Json<ScheduleResponse>);

async fn parse_schedule_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ParseScheduleRequest>,
) -> Result<Json<ScheduleResponse>, HandlerError> {
    let request_id = Uuid::new_v4();
    info!("Parse[{}]: transcript '{}'", request_id, request.transcript);

    let now = match request.now.as_deref() {
        Some(raw) => parse_reference_time(raw).map_err(|e| {
            warn!("Parse[{}]: {}", request_id, e);
            (StatusCode::BAD_REQUEST, Json(ScheduleResponse::failure(e.to_string())))
        })?,
        None => korea_now(),
    };

    match schedule_from_transcript(&request.transcript, now, &state.config.calendar) {
        Ok(event) => {
            info!("Parse[{}]: scheduled at {}", request_id, event.start.date_time);
            Ok(Json(ScheduleResponse {
                success: true,
                message: "Schedule parsed successfully".to_string(),
                event: Some(event),
            }))
        }
        Err(ScheduleError::NotFound) => {
            info!("Parse[{}]: no date/time found, asking to retry", request_id);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ScheduleResponse::failure(REPROMPT_MESSAGE)),
            ))
        }
        Err(e) => {
            warn!("Parse[{}]: {}", request_id, e);
            Err((StatusCode::UNPROCESSABLE_ENTITY, Json(ScheduleResponse::failure(e.to_string()))))
        }
    }
}

// Health check endpoint
async fn health_check() -> &'static str {
    "voicecal API is running"
}

pub fn router(state: Arc<ApiState>) -> Router {
    // The browser front end is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/schedule/parse", post(parse_schedule_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_api_server(config: Config, addr: Option<String>) -> Result<()> {
    let addr = addr.unwrap_or_else(|| config.api.listen_addr.clone());
    let state = Arc::new(ApiState { config });
    let app = router(state);

    info!("API server starting on http://{}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Failed to bind to address {}: {}", addr, e))?;

    info!("API server successfully bound to {}. Waiting for connections...", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow!("Failed to start API server: {}", e))?;

    Ok(())
}
