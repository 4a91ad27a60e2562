#![allow(clippy::unwrap_used)]

use {
	super::{AppState, router},
	crate::steam,
	axum::{
		Json,
		Router,
		body::Body,
		http::{Method, Request, StatusCode, header},
	},
	http_body_util::BodyExt,
	serde_json::{Value as JsonValue, json},
	tower::ServiceExt,
};

fn service(steam: Option<steam::api::Client>) -> Router
{
	router(AppState { steam })
}

/// Spawns a local stand-in for the Steam API that answers every
/// player-summary request with `status` and `body`, and returns a client
/// pointed at it.
async fn steam_stub(status: StatusCode, body: JsonValue) -> steam::api::Client
{
	let app = Router::new().route(
		"/ISteamUser/GetPlayerSummaries/v0002/",
		axum::routing::get(move || {
			let body = body.clone();
			async move { (status, Json(body)) }
		}),
	);

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();

	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});

	steam::api::Client::with_base_url("test-api-key", format!("http://{addr}"))
}

/// A stub whose player-summary response contains exactly `players`.
async fn steam_stub_with_players(players: JsonValue) -> steam::api::Client
{
	steam_stub(StatusCode::OK, json!({ "response": { "players": players } })).await
}

async fn send(service: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, bytes::Bytes)
{
	let response = service.oneshot(request).await.unwrap();
	let (parts, body) = response.into_parts();
	let body = body.collect().await.unwrap().to_bytes();

	(parts.status, parts.headers, body)
}

fn get(uri: &str) -> Request<Body>
{
	Request::builder()
		.method(Method::GET)
		.uri(uri)
		.header(header::ORIGIN, "https://example.com")
		.body(Body::empty())
		.unwrap()
}

fn json_body(body: &[u8]) -> JsonValue
{
	serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn preflight_is_answered_without_touching_the_handler()
{
	// no API key configured; a preflight must still succeed
	let request = Request::builder()
		.method(Method::OPTIONS)
		.uri("/profile")
		.header(header::ORIGIN, "https://example.com")
		.header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
		.body(Body::empty())
		.unwrap();

	let (status, headers, body) = send(service(None), request).await;

	assert_eq!(status, StatusCode::OK);
	assert!(body.is_empty());
	assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
	assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn bare_options_gets_an_empty_200()
{
	let request = Request::builder()
		.method(Method::OPTIONS)
		.uri("/profile")
		.header(header::ORIGIN, "https://example.com")
		.body(Body::empty())
		.unwrap();

	let (status, headers, body) = send(service(None), request).await;

	assert_eq!(status, StatusCode::OK);
	assert!(body.is_empty());
	assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn other_methods_are_rejected()
{
	let request = Request::builder()
		.method(Method::POST)
		.uri("/profile")
		.header(header::ORIGIN, "https://example.com")
		.body(Body::empty())
		.unwrap();

	let (status, headers, body) = send(service(None), request).await;

	assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
	assert_eq!(headers[header::CONTENT_TYPE], "application/json");
	assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
	assert_eq!(json_body(&body), json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn missing_steamid_is_rejected_before_anything_else()
{
	let (status, headers, body) = send(service(None), get("/profile")).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(headers[header::CONTENT_TYPE], "application/json");
	assert_eq!(json_body(&body), json!({ "error": "steamid parameter is required" }));
}

#[tokio::test]
async fn empty_steamid_is_rejected()
{
	let (status, _, body) = send(service(None), get("/profile?steamid=")).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json_body(&body), json!({ "error": "steamid parameter is required" }));
}

#[tokio::test]
async fn missing_api_key_is_a_server_error()
{
	let (status, _, body) =
		send(service(None), get("/profile?steamid=76561198282622073")).await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json_body(&body), json!({ "error": "Steam API key not configured" }));
}

#[tokio::test]
async fn unparseable_steamid_is_rejected()
{
	let api_client = steam_stub_with_players(json!([])).await;

	for steamid in ["abc", "STEAM_1:2", "%5BU:1:%5D"] {
		let uri = format!("/profile?steamid={steamid}");
		let (status, _, body) = send(service(Some(api_client.clone())), get(&uri)).await;

		assert_eq!(status, StatusCode::BAD_REQUEST, "{steamid:?}");
		assert_eq!(json_body(&body), json!({ "error": "Invalid Steam ID format" }));
	}
}

#[tokio::test]
async fn unknown_player_is_a_404()
{
	let api_client = steam_stub_with_players(json!([])).await;

	let (status, _, body) =
		send(service(Some(api_client)), get("/profile?steamid=76561198282622073")).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(json_body(&body), json!({ "error": "Steam user not found" }));
}

#[tokio::test]
async fn profile_is_shaped_from_the_first_player()
{
	let api_client = steam_stub_with_players(json!([{
		"personaname": "AlphaKeks",
		"avatarfull": "https://avatars.example.com/full.jpg",
		"avatarmedium": "https://avatars.example.com/medium.jpg",
		"avatar": "https://avatars.example.com/basic.jpg",
		"profileurl": "https://steamcommunity.com/id/AlphaKeks/",
		"realname": "n/a",
	}]))
	.await;

	let (status, headers, body) =
		send(service(Some(api_client)), get("/profile?steamid=STEAM_1:1:161178172")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(headers[header::CONTENT_TYPE], "application/json");
	assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
	assert_eq!(json_body(&body), json!({
		"steamId": "STEAM_1:1:161178172",
		"steamId64": "76561198282622073",
		"username": "AlphaKeks",
		"avatar": "https://avatars.example.com/full.jpg",
		"profileUrl": "https://steamcommunity.com/id/AlphaKeks/",
		"realName": "n/a",
	}));
}

#[tokio::test]
async fn avatar_falls_back_to_the_basic_size()
{
	let api_client = steam_stub_with_players(json!([{
		"avatar": "https://avatars.example.com/basic.jpg",
	}]))
	.await;

	let (status, _, body) =
		send(service(Some(api_client)), get("/profile?steamid=%5BU:1:322356345%5D")).await;

	assert_eq!(status, StatusCode::OK);

	let profile = json_body(&body);

	assert_eq!(profile["steamId"], "[U:1:322356345]");
	assert_eq!(profile["steamId64"], "76561198282622073");
	assert_eq!(profile["username"], "Unknown");
	assert_eq!(profile["avatar"], "https://avatars.example.com/basic.jpg");
	assert_eq!(profile["profileUrl"], "");
	assert_eq!(profile["realName"], "");
}

#[tokio::test]
async fn upstream_http_errors_propagate_their_status()
{
	let api_client = steam_stub(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;

	let (status, _, body) =
		send(service(Some(api_client)), get("/profile?steamid=76561198282622073")).await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json_body(&body), json!({ "error": "Steam API error: Internal Server Error" }));
}

#[tokio::test]
async fn upstream_garbage_is_a_server_error()
{
	let api_client = steam_stub(StatusCode::OK, json!({ "unexpected": true })).await;

	let (status, _, body) =
		send(service(Some(api_client)), get("/profile?steamid=76561198282622073")).await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

	let error = json_body(&body);

	assert!(
		error["error"].as_str().unwrap().starts_with("Server error: "),
		"{error}",
	);
}

#[tokio::test]
async fn unreachable_upstream_does_not_leak_the_api_key()
{
	// Connection errors from reqwest carry the full request URL, key
	// included; the response body must not.
	let api_client =
		steam::api::Client::with_base_url("SUPER-SECRET-KEY", "http://127.0.0.1:9");

	let (status, _, body) =
		send(service(Some(api_client)), get("/profile?steamid=76561198282622073")).await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

	let error = json_body(&body);
	let message = error["error"].as_str().unwrap();

	assert!(message.starts_with("Server error: "), "{error}");
	assert!(!message.contains("SUPER-SECRET-KEY"), "{error}");
	assert!(!message.contains("key="), "{error}");
}

#[test]
fn router_is_thread_safe()
{
	fn assert_send_sync<T: Send + Sync>(_: &T) {}

	assert_send_sync(&service(None));
}

#[tokio::test]
async fn health_check()
{
	let (status, _, body) = send(service(None), get("/health")).await;

	assert_eq!(status, StatusCode::NO_CONTENT);
	assert!(body.is_empty());
}
