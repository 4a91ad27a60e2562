use std::error::Error;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use steam_id::ParseSteamIdError;

use crate::steam::api::ApiError;

pub(crate) type HandlerResult<T> = Result<T, HandlerError>;

/// Everything that can go wrong while serving a profile request.
///
/// Each variant maps onto exactly one response; no error is retried
/// internally.
#[derive(Debug, Display, Error, From)]
pub(crate) enum HandlerError
{
	#[display("method not allowed")]
	MethodNotAllowed,

	#[display("missing `steamid` query parameter")]
	MissingSteamId,

	#[display("no Steam API key configured")]
	ApiKeyNotConfigured,

	#[display("invalid SteamID: {_0}")]
	InvalidSteamId(ParseSteamIdError),

	#[display("Steam does not know this ID")]
	PlayerNotFound,

	#[display("{_0}")]
	Steam(ApiError),
}

/// The JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorResponse
{
	error: String,
}

impl IntoResponse for HandlerError
{
	fn into_response(self) -> Response
	{
		let (status, message) = match self {
			Self::MethodNotAllowed => {
				(StatusCode::METHOD_NOT_ALLOWED, String::from("Method not allowed"))
			},
			Self::MissingSteamId => {
				(StatusCode::BAD_REQUEST, String::from("steamid parameter is required"))
			},
			Self::ApiKeyNotConfigured => {
				error!("rejecting profile request; `STEAM_API_KEY` is not configured");
				(StatusCode::INTERNAL_SERVER_ERROR, String::from("Steam API key not configured"))
			},
			Self::InvalidSteamId(ref error) => {
				debug!(error = error as &dyn Error, "rejecting unparseable steamid");
				(StatusCode::BAD_REQUEST, String::from("Invalid Steam ID format"))
			},
			Self::PlayerNotFound => {
				(StatusCode::NOT_FOUND, String::from("Steam user not found"))
			},
			Self::Steam(error) => upstream_error(error),
		};

		(status, Json(ErrorResponse { error: message })).into_response()
	}
}

/// Maps a failed upstream call onto a response.
///
/// HTTP-level errors from Steam propagate their status code; everything
/// else (connect errors, timeouts, bad payloads) becomes a 500.
fn upstream_error(error: ApiError) -> (StatusCode, String)
{
	match error {
		ApiError::Http(error) => match error.status() {
			Some(status) => {
				warn!(%status, "Steam API returned an error");

				let reason = status.canonical_reason().unwrap_or("unknown");
				(status, format!("Steam API error: {reason}"))
			},
			None => {
				// reqwest includes the full request URL (and with it the
				// `key` query parameter) in its Display output; strip it
				// before anything client-facing is formatted.
				let error = error.without_url();

				error!(error = &error as &dyn Error, "request to Steam failed");
				(StatusCode::INTERNAL_SERVER_ERROR, format!("Server error: {error}"))
			},
		},
		error @ (ApiError::BufferResponseBody { .. } | ApiError::DeserializeResponse { .. }) => {
			error!(error = &error as &dyn Error, "bad response from Steam");
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Server error: {error}"))
		},
	}
}
