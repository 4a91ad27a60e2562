//! The HTTP layer: routing, handlers, middleware.

mod error;
mod middleware;
mod profile;

#[cfg(test)]
mod tests;

use axum::{Router, http::StatusCode, routing};

use crate::steam;

pub(crate) use self::error::{HandlerError, HandlerResult};

/// State shared between request handlers.
#[derive(Debug, Clone)]
pub(crate) struct AppState
{
	/// [`None`] if no API key was configured at startup. Profile requests
	/// answer with an error in that case; the service itself still runs.
	pub steam: Option<steam::api::Client>,
}

pub(crate) fn router(state: AppState) -> Router
{
	Router::new()
		.route("/health", routing::get(health))
		.merge(profile::router(state))
		.layer(middleware::trace::layer())
		.layer(middleware::request_id::layer())
		.layer(middleware::cors::permissive())
}

async fn health() -> StatusCode
{
	StatusCode::NO_CONTENT
}
