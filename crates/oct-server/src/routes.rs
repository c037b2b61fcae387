use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use oct_compactor::{normalize, Policy, RingPipeline, RingResult, Selection};
use oct_core::{CanonicalDigits, OctaviaError, RingCounts};
use oct_render::{caption, file_name, render_svg, ring_rows, RingRow};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/api/v1/health", get(health))
}

pub fn policy_routes() -> Router<AppState> {
    Router::new().route("/api/v1/policies", get(list_policies))
}

pub fn ring_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/rings", get(rings))
        .route("/api/v1/rings/svg", get(rings_svg))
}

/// Either a decimal number or raw digit text (where `8`/`9` carry).
#[derive(Debug, Deserialize)]
pub struct RingQuery {
    pub decimal: Option<u64>,
    pub digits: Option<String>,
    pub policy: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RingsResponse {
    pub canonical: String,
    pub decimal: u128,
    pub views: Vec<RingView>,
}

#[derive(Debug, Serialize)]
pub struct RingView {
    pub policy: Policy,
    pub label: &'static str,
    pub counts: RingCounts,
    pub rewrites: usize,
    pub rings: Vec<RingRow>,
    pub caption: String,
    pub file_name: String,
}

struct Resolved {
    digits: CanonicalDigits,
    value: u128,
    selection: Selection,
}

fn resolve(state: &AppState, query: &RingQuery) -> Result<Resolved, OctaviaError> {
    let digits = match (query.decimal, query.digits.as_deref()) {
        (Some(n), None) => CanonicalDigits::from_u64(n),
        (None, Some(raw)) => normalize(raw),
        (None, None) => return Err(OctaviaError::MissingInput),
        (Some(_), Some(_)) => return Err(OctaviaError::AmbiguousInput),
    };
    let value = digits.value()?;
    let selection = match query.policy.as_deref() {
        Some(p) => p.parse()?,
        None => state.default_selection,
    };
    Ok(Resolved { digits, value, selection })
}

fn view(result: RingResult, value: u128) -> RingView {
    let octal = result.canonical.to_octal_string();
    RingView {
        policy: result.policy,
        label: result.policy.label(),
        rings: ring_rows(&result.counts),
        caption: caption(&octal, value),
        file_name: file_name(&octal, value, Some(result.policy.as_str()), "svg"),
        rewrites: result.rewrites,
        counts: result.counts,
    }
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn list_policies(State(state): State<AppState>) -> Json<Value> {
    let policies: Vec<Value> = Policy::ALL
        .iter()
        .map(|p| json!({ "name": p.as_str(), "label": p.label() }))
        .collect();
    Json(json!({
        "policies": policies,
        "default": state.config.default_policy,
    }))
}

async fn rings(
    State(state): State<AppState>,
    query: Result<Query<RingQuery>, QueryRejection>,
) -> Result<Json<RingsResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let resolved = resolve(&state, &query)?;
    let views = RingPipeline::new(resolved.selection)
        .run(&resolved.digits)
        .into_iter()
        .map(|r| view(r, resolved.value))
        .collect();
    Ok(Json(RingsResponse {
        canonical: resolved.digits.to_octal_string(),
        decimal: resolved.value,
        views,
    }))
}

async fn rings_svg(
    State(state): State<AppState>,
    query: Result<Query<RingQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let resolved = resolve(&state, &query)?;
    let Selection::Single(policy) = resolved.selection else {
        return Err(ApiError::bad_request("svg export needs a single policy"));
    };

    let result = RingPipeline::new(policy).run(&resolved.digits).remove(0);
    let octal = result.canonical.to_octal_string();
    let text = caption(&octal, resolved.value);
    let svg = render_svg(&result.counts, &state.config.render, Some(&text));
    let name = file_name(&octal, resolved.value, Some(policy.as_str()), "svg");

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{name}\"")),
        ],
        svg,
    ))
}
