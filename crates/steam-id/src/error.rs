use std::num::ParseIntError;

/// Error type for normalizing strings into [`SteamId64`]s
///
/// [`SteamId64`]: crate::SteamId64
#[derive(Debug, Display, Error, From, PartialEq, Eq)]
#[display("failed to parse SteamID: {_variant}")]
pub enum ParseSteamIdError
{
	/// The format could not be detected.
	#[display("unknown format")]
	UnknownFormat,

	/// The format was determined to be the legacy triplet format, but it
	/// was invalid.
	Steam2(ParseSteam2IdError),

	/// The format was determined to be the bracketed account-ID format,
	/// but it was invalid.
	Steam3(ParseSteam3IdError),
}

/// Error type for parsing legacy `STEAM_X:Y:Z` strings
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("failed to parse Steam2ID: {_variant}")]
pub enum ParseSteam2IdError
{
	#[display("expected exactly 3 `:`-separated segments")]
	WrongSegmentCount,

	#[display("invalid `universe` segment: {_0}")]
	InvalidUniverse(ParseIntError),

	#[display("invalid `Y` segment: {_0}")]
	InvalidY(ParseIntError),

	#[display("invalid `Z` segment: {_0}")]
	InvalidZ(ParseIntError),

	#[display("computed SteamID64 does not fit into 64 bits")]
	OutOfRange,
}

/// Error type for parsing bracketed `[U:1:N]` strings
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("failed to parse Steam3ID: {_variant}")]
pub enum ParseSteam3IdError
{
	#[display("invalid account ID: {_0}")]
	InvalidAccountId(ParseIntError),

	#[display("computed SteamID64 does not fit into 64 bits")]
	OutOfRange,
}
