use actix_web::Scope;
use actix_web::web;

use super::handlers::trace_lineage;

pub fn trace_routes() -> Scope {
    web::scope("/api").route("/trace", web::get().to(trace_lineage))
}
