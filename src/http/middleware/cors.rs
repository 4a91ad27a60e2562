use {
	axum::http::{HeaderName, Method, header},
	std::time::Duration,
	tower_http::cors::{AllowOrigin, CorsLayer},
};

/// CORS policy for the profile endpoint: any origin may read it.
///
/// Preflight responses are cacheable for a day.
pub(crate) fn permissive() -> CorsLayer
{
	CorsLayer::new()
		.allow_origin(AllowOrigin::any())
		.allow_methods([Method::GET, Method::OPTIONS])
		.allow_headers([
			header::CONTENT_TYPE,
			HeaderName::from_static("x-user-id"),
			HeaderName::from_static("x-auth-token"),
		])
		.max_age(Duration::from_secs(86_400))
}
