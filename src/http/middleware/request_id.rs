use {
	axum::http::HeaderValue,
	tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer},
	ulid::Ulid,
};

/// Attaches a fresh `x-request-id` header to every request.
///
/// The id is informational only; no handler logic depends on it.
pub(crate) fn layer() -> SetRequestIdLayer<MakeUlid>
{
	SetRequestIdLayer::x_request_id(MakeUlid)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MakeUlid;

impl MakeRequestId for MakeUlid
{
	fn make_request_id<B>(&mut self, _: &axum::http::Request<B>) -> Option<RequestId>
	{
		Ulid::new()
			.to_string()
			.parse::<HeaderValue>()
			.map(RequestId::new)
			.ok()
	}
}
