//! HTTP handlers for the `/profile` endpoint.

use {
	super::{AppState, HandlerError, HandlerResult},
	crate::steam,
	axum::{
		Json,
		Router,
		extract::{Query, State},
		http::StatusCode,
		routing,
	},
	serde::Deserialize,
	steam_id::SteamId64,
};

pub(super) fn router(state: AppState) -> Router
{
	Router::new()
		.route(
			"/profile",
			routing::get(get_profile)
				.options(preflight)
				.fallback(method_not_allowed),
		)
		.with_state(state)
}

#[derive(Debug, Deserialize)]
struct GetProfileQuery
{
	steamid: Option<String>,
}

/// Resolves a user-supplied Steam identifier into a normalized profile.
///
/// Accepts raw SteamID64s as well as the legacy `STEAM_X:Y:Z` and
/// `[U:1:N]` formats.
#[instrument(skip(state), err(Debug, level = "debug"))]
async fn get_profile(
	State(state): State<AppState>,
	Query(query): Query<GetProfileQuery>,
) -> HandlerResult<Json<steam::profile::Profile>>
{
	let raw = query
		.steamid
		.filter(|steamid| !steamid.is_empty())
		.ok_or(HandlerError::MissingSteamId)?;

	let api_client = state
		.steam
		.as_ref()
		.ok_or(HandlerError::ApiKeyNotConfigured)?;

	let steam_id = raw.parse::<SteamId64>()?;

	let summary = steam::profile::get(api_client, steam_id)
		.await?
		.ok_or(HandlerError::PlayerNotFound)?;

	Ok(Json(steam::profile::Profile::new(raw, steam_id, summary)))
}

/// Bare `OPTIONS` requests get an empty 200.
///
/// Actual CORS preflights never reach this handler; the CORS middleware
/// answers them first.
async fn preflight() -> StatusCode
{
	StatusCode::OK
}

async fn method_not_allowed() -> HandlerError
{
	HandlerError::MethodNotAllowed
}
