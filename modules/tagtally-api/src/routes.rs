use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use extractor_client::TagExtractor;
use tagtally_common::{Config, TallyError};

use crate::aggregate::{aggregate, Aggregation, AggregationMode, RankedEntry};
use crate::dispatch::dispatch;
use crate::partition::partition;
use crate::validate::validate;

pub struct AppState {
    pub config: Config,
    pub extractor: Arc<dyn TagExtractor>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        .route("/tally", post(tally))
        .with_state(state)
        // Logging layer: method + path only, never request bodies
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn tally(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    // Auth first: a wrong key is rejected regardless of payload validity.
    let key = body.get("api_key").and_then(Value::as_str).unwrap_or("");
    if key != state.config.api_key {
        return error_response(TallyError::Auth);
    }

    let urls = match validate(&body) {
        Ok(urls) => urls,
        Err(e) => return error_response(e),
    };

    let mode = match parse_mode(&body, &state.config) {
        Ok(mode) => mode,
        Err(e) => return error_response(e),
    };

    let batches = partition(&urls, state.config.fanout);
    info!(urls = urls.len(), batches = batches.len(), "Dispatching tally request");

    let results = match dispatch(state.extractor.as_ref(), &batches).await {
        Ok(results) => results,
        Err(e) => return error_response(TallyError::Extractor(e)),
    };

    let aggregation = aggregate(&results, mode, state.config.track_creators);
    (StatusCode::OK, Json(render(aggregation))).into_response()
}

/// Resolve the aggregation mode from the optional `mode` field.
/// Absent means ranked with the configured top-N.
fn parse_mode(body: &Value, config: &Config) -> Result<AggregationMode, TallyError> {
    match body.get("mode").and_then(Value::as_str) {
        None | Some("ranked") => Ok(AggregationMode::Ranked {
            limit: Some(config.top_n),
        }),
        Some("ranked-full") => Ok(AggregationMode::Ranked { limit: None }),
        Some("counts") => Ok(AggregationMode::Counts),
        Some(other) => Err(TallyError::Format(format!("unknown mode: {other}"))),
    }
}

fn render(aggregation: Aggregation) -> Value {
    match aggregation {
        Aggregation::Ranked { hashtags, creators } => {
            let mut body = json!({
                "mode": "ranked",
                "top_hashtags": ranked_json(&hashtags, "hashtag"),
            });
            if let Some(creators) = creators {
                body["top_creators"] = ranked_json(&creators, "creator");
            }
            body
        }
        Aggregation::Counts { hashtags } => json!({
            "mode": "counts",
            "hashtags": hashtags,
        }),
    }
}

fn ranked_json(entries: &[RankedEntry], key: &str) -> Value {
    entries
        .iter()
        .map(|e| json!({key: e.entity, "count": e.count}))
        .collect()
}

fn error_response(err: TallyError) -> Response {
    match err {
        TallyError::Auth => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid api key"})),
        )
            .into_response(),
        TallyError::Format(reason) => {
            warn!(reason = %reason, "Rejected malformed tally request");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "request must include a urls field containing a list of strings"
                })),
            )
                .into_response()
        }
        TallyError::Content(url) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": format!("url is not a tiktok share link: {url}")})),
        )
            .into_response(),
        TallyError::Extractor(e) => {
            error!(error = %e, "Tag extraction failed, aborting request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal error"})),
            )
                .into_response()
        }
    }
}
