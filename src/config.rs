//! Runtime configuration for the API.
//!
//! This module contains the [`Config`] struct - a set of configuration
//! options that will be read from the environment on startup. See the
//! `.env.example` file in the root of the repository for examples.

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::{env, fmt};

/// The default address the API will listen on if `STEAM_PROFILE_API_ADDR`
/// is not set.
const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED), 7070);

/// The API's runtime configuration.
#[derive(Clone)]
pub struct Config
{
	listen_addr: SocketAddr,
	steam_api_key: Option<Arc<str>>,
}

/// Error that can occur while initializing the API's [`Config`].
#[derive(Debug, Display, Error)]
#[display("failed to initialize config: {_variant}")]
pub enum InitializeConfigError
{
	/// An environment variable was not valid UTF-8.
	#[display("failed to read `{var}`: {error}")]
	Env
	{
		var: &'static str,

		#[error(source)]
		error: env::VarError,
	},

	/// An environment variable could not be parsed into the required type.
	#[display("failed to parse `{var}`: {error}")]
	Parse
	{
		var: &'static str,

		#[error(source)]
		error: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

impl Config
{
	/// Initializes a [`Config`] by reading and parsing environment
	/// variables.
	///
	/// A missing `STEAM_API_KEY` is not a startup error; profile lookups
	/// will answer with an error until the key is configured.
	pub fn new() -> Result<Self, InitializeConfigError>
	{
		let listen_addr = parse_from_env_opt::<SocketAddr>("STEAM_PROFILE_API_ADDR")?
			.unwrap_or(DEFAULT_LISTEN_ADDR);

		let steam_api_key = match env::var("STEAM_API_KEY") {
			Ok(value) if value.is_empty() => None,
			Ok(value) => Some(Arc::<str>::from(value)),
			Err(env::VarError::NotPresent) => None,
			Err(error) => {
				return Err(InitializeConfigError::Env { var: "STEAM_API_KEY", error });
			},
		};

		if steam_api_key.is_none() {
			warn!("`STEAM_API_KEY` is not set; profile lookups will fail until it is configured");
		}

		Ok(Self { listen_addr, steam_api_key })
	}

	/// Returns the address the API should listen on.
	pub fn listen_addr(&self) -> SocketAddr
	{
		self.listen_addr
	}

	/// Returns the Steam WebAPI key, if one is configured.
	///
	/// Get yours here: <https://steamcommunity.com/dev/apikey>
	pub fn steam_api_key(&self) -> Option<&str>
	{
		self.steam_api_key.as_deref()
	}
}

impl fmt::Debug for Config
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.debug_struct("Config")
			.field("listen_addr", &self.listen_addr)
			.field("steam_api_key", &self.steam_api_key.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

/// Reads and parses an environment variable.
///
/// Returns [`None`] if the variable does not exist or is empty.
fn parse_from_env_opt<T>(var: &'static str) -> Result<Option<T>, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	let Ok(value) = env::var(var) else {
		return Ok(None);
	};

	if value.is_empty() {
		return Ok(None);
	}

	value
		.parse::<T>()
		.map(Some)
		.map_err(|error| InitializeConfigError::Parse { var, error: Box::new(error) })
}
