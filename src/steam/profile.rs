use {
	crate::steam::api,
	serde::{Deserialize, Serialize},
	steam_id::SteamId64,
};

/// Path of the player-summary endpoint, relative to the API host.
const PATH: &str = "/ISteamUser/GetPlayerSummaries/v0002/";

/// The normalized profile record returned to API consumers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile
{
	/// The `steamid` query parameter, echoed back verbatim.
	pub steam_id: String,

	/// The canonical SteamID64, as a decimal string.
	pub steam_id_64: SteamId64,

	pub username: String,
	pub avatar: String,
	pub profile_url: String,
	pub real_name: String,
}

impl Profile
{
	/// Shapes a [`Profile`] out of a raw player summary.
	///
	/// `username` defaults to `"Unknown"`; the avatar falls back from the
	/// full-size image down to the basic one; everything else defaults to
	/// an empty string.
	pub fn new(steam_id: String, steam_id_64: SteamId64, summary: PlayerSummary) -> Self
	{
		let avatar = summary
			.avatarfull
			.or(summary.avatarmedium)
			.or(summary.avatar)
			.unwrap_or_default();

		Self {
			steam_id,
			steam_id_64,
			username: summary.personaname.unwrap_or_else(|| String::from("Unknown")),
			avatar,
			profile_url: summary.profileurl.unwrap_or_default(),
			real_name: summary.realname.unwrap_or_default(),
		}
	}
}

/// A single entry in the `players` list of Steam's `GetPlayerSummaries`
/// response.
///
/// Steam omits fields for private or incomplete profiles, so everything is
/// optional.
#[derive(Debug, Default, Deserialize)]
pub struct PlayerSummary
{
	pub personaname: Option<String>,
	pub avatarfull: Option<String>,
	pub avatarmedium: Option<String>,
	pub avatar: Option<String>,
	pub profileurl: Option<String>,
	pub realname: Option<String>,
}

/// Fetches the player summary for `user_id`.
///
/// Returns [`None`] if Steam does not know the ID.
#[instrument(skip(api_client), err(Debug, level = "debug"))]
pub async fn get(api_client: &api::Client, user_id: SteamId64) -> api::Result<Option<PlayerSummary>>
{
	#[derive(serde::Serialize)]
	struct Query<'a>
	{
		#[serde(rename = "key")]
		api_key: &'a str,

		#[serde(rename = "steamids")]
		user_id: SteamId64,
	}

	let request = api_client
		.as_ref()
		.get(api_client.url(PATH))
		.query(&Query { api_key: api_client.api_key(), user_id });

	let Response { mut players } = api::send_request(request).await?;

	if players.is_empty() {
		return Ok(None);
	}

	Ok(Some(players.remove(0)))
}

#[derive(Debug, Deserialize)]
struct Response
{
	players: Vec<PlayerSummary>,
}
