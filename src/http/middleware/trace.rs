use std::convert::Infallible;
use std::error::Error;
use std::time::Duration;

use axum::body::Body;
use axum::response::IntoResponse;
use axum::routing::Route;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;
use tower_http::trace::TraceLayer;

type Request = axum::http::Request<Body>;
type Response = axum::http::Response<Body>;

pub(crate) fn layer() -> impl tower::Layer<
	Route,
	Service: tower::Service<
		Request,
		Response: IntoResponse + 'static,
		Error: Into<Infallible> + 'static,
		Future: Send + 'static,
	> + Clone
	             + Send
	             + Sync
	             + 'static,
> + Clone
       + Send
       + 'static
{
	TraceLayer::new_for_http()
		.make_span_with(make_span)
		.on_response(on_response)
		.on_failure(on_failure)
}

fn make_span(request: &Request) -> tracing::Span
{
	let request_id = request
		.extensions()
		.get::<RequestId>()
		.and_then(|request_id| request_id.header_value().to_str().ok());

	info_span! {
		target: "steam_profile_api::http",
		"request",
		request.id = request_id,
		request.method = %request.method(),
		request.uri = %request.uri(),
		response.status = tracing::field::Empty,
		latency = tracing::field::Empty,
	}
}

fn on_response(response: &Response, latency: Duration, span: &tracing::Span)
{
	span.record("response.status", format_args!("{}", response.status()))
		.record("latency", format_args!("{latency:?}"));
}

fn on_failure(failure: ServerErrorsFailureClass, _latency: Duration, _span: &tracing::Span)
{
	match failure {
		ServerErrorsFailureClass::Error(error) => {
			error!(target: "steam_profile_api::http", %error, "error occurred during request");
		},
		ServerErrorsFailureClass::StatusCode(status) if status.is_server_error() => {
			error!(target: "steam_profile_api::http", %status, "error occurred during request");
		},
		ServerErrorsFailureClass::StatusCode(status) => {
			debug!(target: "steam_profile_api::http", %status, "request failed");
		},
	}
}
