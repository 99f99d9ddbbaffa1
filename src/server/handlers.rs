use std::sync::Arc;
use std::time::Duration;

use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use serde::Deserialize;
use tracing::error;
use tracing::info;

use crate::api::LedgerDataSource;
use crate::config::ApiConfig;
use crate::config::TracerConfig;
use crate::constants;
use crate::error::HandlerError;
use crate::tracer::LineageTracer;
use crate::tracer::TraceLimits;

/// Shared state for the front door. The data source is shared across
/// requests; every trace still gets its own tracer, so caches and visited
/// sets never leak between requests.
pub struct AppState {
    pub source: Arc<dyn LedgerDataSource>,
    pub tracer: TracerConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize)]
pub struct TraceParams {
    pub address: Option<String>,
    /// Kept as a raw string so an unparsable value reverts to the default
    /// depth instead of failing extraction
    pub depth: Option<String>,
}

/// GET /api/trace?address=<bitcoin_address>&depth=<optional_depth>
pub async fn trace_lineage(
    data: web::Data<AppState>,
    params: web::Query<TraceParams>,
) -> impl Responder {
    let Some(address) = params.address.as_deref().filter(|address| !address.is_empty()) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": HandlerError::MissingParameter("address").to_string(),
            "usage": constants::TRACE_USAGE_HINT,
        }));
    };

    let requested = params.depth.as_deref().and_then(|raw| raw.parse::<i64>().ok());
    let max_depth = data.tracer.clamp_depth(requested);

    info!("trace_requested::address::{}::depth::{}", address, max_depth);

    let tracer = LineageTracer::new(
        data.source.clone(),
        TraceLimits {
            max_depth,
            max_addresses: data.tracer.max_addresses,
        },
        Duration::from_millis(data.api.fetch_delay_ms),
    );

    match tracer.trace(address).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            error!("trace_failed::address::{}::error::{}", address, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string(),
                "message": HandlerError::TraceFailed.to_string(),
            }))
        },
    }
}
