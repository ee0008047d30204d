//! HTTP boundary: maps a request line onto the dispatch engine and renders
//! the outcome.

mod docs;
mod query;
mod response;
pub mod server;

pub use docs::SAMPLE_INPUT;
pub use query::parse_query;
pub use response::Response;
pub use server::{serve, ServerConfig};

use tracing::error;

use crate::codec::Registry;

/// Handles one request given its method and request target
/// (`/path?query`).
pub fn handle(method: &str, target: &str) -> Response {
    handle_with(Registry::global(), method, target)
}

pub fn handle_with(registry: &Registry, method: &str, target: &str) -> Response {
    if method != "GET" && method != "HEAD" {
        let mut response = Response::text(405, "method not allowed");
        response.headers.push(("Allow", "GET, HEAD".to_string()));
        return response;
    }

    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target, ""),
    };

    if path == "/schemes" {
        return match serde_json::to_string_pretty(&registry.list()) {
            Ok(body) => Response::json(body),
            Err(e) => {
                error!(error = %e, "failed to serialize scheme list");
                Response::text(500, "internal error")
            }
        };
    }

    if path == "/" && query.is_empty() {
        return Response::html(docs::render(registry));
    }

    match parse_query(query, registry).dispatch_with(registry) {
        Ok(outcome) => outcome.into(),
        Err(e) => e.into(),
    }
}
