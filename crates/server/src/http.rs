//! HTTP Endpoints
//!
//! REST API for payment analysis and the payment history.

use axum::{
    body::Bytes,
    extract::{Json, Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use pondok_config::constants::server::DEFAULT_CORS_ORIGIN;
use pondok_core::PaymentRecord;
use pondok_persistence::{
    export_file_name, read_csv, to_csv_bytes, RecordEdit, EXPORT_CONTENT_TYPE,
};

use crate::state::AppState;
use crate::ServerError;

/// Shown when the message or the month label is missing
pub const MISSING_INPUT_MESSAGE: &str = "Isi teks dan bulan terlebih dahulu.";
/// Shown when a message contains no payment
pub const NO_PAYMENT_MESSAGE: &str = "Tidak ada pembayaran terdeteksi.";
/// Shown after the history is cleared
pub const HISTORY_CLEARED_MESSAGE: &str = "Riwayat dihapus!";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.read();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    drop(config); // Release lock before building router

    Router::new()
        // Analysis
        .route("/api/analyze", post(analyze))
        // History
        .route("/api/history", get(list_history).delete(clear_history))
        .route(
            "/api/history/:index",
            put(update_history_record).delete(delete_history_record),
        )
        .route("/api/history/export", get(export_history))
        .route("/api/history/import", post(import_history))
        // Health check
        .route("/health", get(health_check))
        // Admin endpoints
        .route("/admin/reload-config", post(reload_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins");
        return CorsLayer::permissive();
    }

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No usable CORS origins configured, defaulting to {}", DEFAULT_CORS_ORIGIN);
        return CorsLayer::new()
            .allow_origin(HeaderValue::from_static(DEFAULT_CORS_ORIGIN))
            .allow_methods(methods)
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods(methods)
        .allow_headers(Any)
}

/// Analyze request
#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    message: String,
    /// Month label written into descriptions, e.g. "Januari"
    #[serde(default)]
    month: String,
}

/// Analyze response
#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    added: usize,
    records: Vec<PaymentRecord>,
    message: String,
}

/// Detect payments in a message and add them to the history
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    if request.message.trim().is_empty() || request.month.trim().is_empty() {
        return Err(ServerError::InvalidRequest(MISSING_INPUT_MESSAGE.to_string()));
    }

    let records = state.analyzer().analyze(&request.message, &request.month);
    let added = state.history.lock().append(records.clone());

    let message = if added > 0 {
        format!("{} pembayaran baru ditambahkan ke riwayat!", added)
    } else {
        NO_PAYMENT_MESSAGE.to_string()
    };

    Ok(Json(AnalyzeResponse {
        added,
        records,
        message,
    }))
}

/// List the whole history
async fn list_history(State(state): State<AppState>) -> Json<serde_json::Value> {
    let history = state.history.lock();
    Json(serde_json::json!({
        "records": history.records(),
        "count": history.len(),
    }))
}

/// Manually correct one record
async fn update_history_record(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(edit): Json<RecordEdit>,
) -> Result<Json<PaymentRecord>, ServerError> {
    let mut history = state.history.lock();
    let record = history.update(index, edit)?;
    Ok(Json(record.clone()))
}

/// Remove one record
async fn delete_history_record(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<PaymentRecord>, ServerError> {
    let removed = state.history.lock().remove(index)?;
    Ok(Json(removed))
}

/// Clear the history
async fn clear_history(State(state): State<AppState>) -> Json<serde_json::Value> {
    let removed = state.history.lock().clear();
    Json(serde_json::json!({
        "removed": removed,
        "message": HISTORY_CLEARED_MESSAGE,
    }))
}

/// Download the history as a spreadsheet
async fn export_history(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let bytes = to_csv_bytes(state.history.lock().records())?;
    let file_name = export_file_name(Local::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    ))
}

/// Append records from a previously exported file
async fn import_history(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ServerError> {
    let records =
        read_csv(body.as_ref()).map_err(|e| ServerError::InvalidRequest(e.to_string()))?;

    let mut history = state.history.lock();
    let added = history.append(records);

    Ok(Json(serde_json::json!({
        "added": added,
        "count": history.len(),
    })))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "history_len": state.history_len(),
    }))
}

/// Reload configuration and rebuild the analyzer
async fn reload_config(State(state): State<AppState>) -> impl IntoResponse {
    match state.reload_config() {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "success",
                "message": "Configuration reloaded successfully"
            })),
        ),
        Err(e) => {
            tracing::error!("Config reload failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "status": "error",
                    "message": e.to_string()
                })),
            )
        }
    }
}
