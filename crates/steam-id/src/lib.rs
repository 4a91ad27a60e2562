#![doc = include_str!("../README.md")]

#[macro_use(Debug, Display, Error, From)]
extern crate derive_more as _;

pub use self::error::{ParseSteam2IdError, ParseSteam3IdError, ParseSteamIdError};
use std::{borrow::Borrow, fmt, str::FromStr};

mod error;

#[cfg(feature = "serde")]
mod serde_impls;

/// A [SteamID] in its canonical 64-bit form.
///
/// [SteamID]: https://developer.valvesoftware.com/wiki/SteamID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId64(u64);

impl SteamId64
{
	/// The SteamID64 base offset. Individual account IDs are offsets from
	/// this value.
	pub const BASE: u64 = 76_561_197_960_265_728_u64;

	/// Returns the raw 64-bit representation of this ID.
	pub const fn as_u64(&self) -> u64
	{
		self.0
	}

	/// Creates a [`SteamId64`] from its raw 64-bit representation.
	///
	/// The value is taken at face value. Callers that normalize untrusted
	/// input should go through [`FromStr`] instead.
	pub const fn from_u64(value: u64) -> Self
	{
		Self(value)
	}

	/// Parses the legacy triplet format, `STEAM_<universe>:<Y>:<Z>`.
	///
	/// `input` is everything after the `STEAM_` prefix. The universe
	/// segment must be an integer but is otherwise ignored; `Y` and `Z`
	/// combine into `BASE + Z * 2 + Y`.
	fn parse_steam2(input: &str) -> Result<Self, ParseSteam2IdError>
	{
		let mut segments = input.split(':');

		let (Some(universe), Some(y_bit), Some(account_half), None) =
			(segments.next(), segments.next(), segments.next(), segments.next())
		else {
			return Err(ParseSteam2IdError::WrongSegmentCount);
		};

		let _ = universe
			.parse::<i64>()
			.map_err(ParseSteam2IdError::InvalidUniverse)?;

		let y_bit = y_bit.parse::<u64>().map_err(ParseSteam2IdError::InvalidY)?;
		let account_half = account_half
			.parse::<u64>()
			.map_err(ParseSteam2IdError::InvalidZ)?;

		account_half
			.checked_mul(2)
			.and_then(|account_id| account_id.checked_add(y_bit))
			.and_then(|account_id| account_id.checked_add(Self::BASE))
			.map(Self)
			.ok_or(ParseSteam2IdError::OutOfRange)
	}

	/// Parses the bracketed account-ID format, `[U:1:<accountId>]`.
	///
	/// `input` is the part between `[U:1:` and `]`.
	fn parse_steam3(input: &str) -> Result<Self, ParseSteam3IdError>
	{
		input
			.parse::<u64>()
			.map_err(ParseSteam3IdError::InvalidAccountId)?
			.checked_add(Self::BASE)
			.map(Self)
			.ok_or(ParseSteam3IdError::OutOfRange)
	}
}

impl fmt::Display for SteamId64
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, fmt)
	}
}

impl Borrow<u64> for SteamId64
{
	fn borrow(&self) -> &u64
	{
		&self.0
	}
}

impl AsRef<u64> for SteamId64
{
	fn as_ref(&self) -> &u64
	{
		self.borrow()
	}
}

impl From<SteamId64> for u64
{
	fn from(id: SteamId64) -> Self
	{
		id.0
	}
}

impl FromStr for SteamId64
{
	type Err = ParseSteamIdError;

	/// Normalizes a user-supplied SteamID string.
	///
	/// The input is trimmed, then matched against the recognized formats in
	/// order: raw 17-digit SteamID64, legacy triplet, bracketed account ID.
	/// Interior whitespace is not stripped; `STEAM_0: 1:2` fails integer
	/// parsing.
	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		let value = value.trim();

		if value.len() == 17 && value.bytes().all(|byte| byte.is_ascii_digit()) {
			return value
				.parse::<u64>()
				.map(Self)
				.map_err(|_| ParseSteamIdError::UnknownFormat);
		}

		if let Some(rest) = value.strip_prefix("STEAM_") {
			return Self::parse_steam2(rest).map_err(Into::into);
		}

		if let Some(account_id) = value
			.strip_prefix("[U:1:")
			.and_then(|rest| rest.strip_suffix(']'))
		{
			return Self::parse_steam3(account_id).map_err(Into::into);
		}

		Err(ParseSteamIdError::UnknownFormat)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	fn parse(input: &str) -> Result<u64, ParseSteamIdError>
	{
		input.parse::<SteamId64>().map(|id| id.as_u64())
	}

	#[test]
	fn raw_steam_id64_passes_through()
	{
		assert_eq!(parse("76561198282622073"), Ok(76561198282622073));
		assert_eq!("76561198282622073".parse::<SteamId64>().map(|id| id.to_string()).as_deref(), Ok("76561198282622073"));
	}

	#[test]
	fn legacy_triplet()
	{
		assert_eq!(parse("STEAM_1:1:2"), Ok(76561197960265733));
		assert_eq!(parse("STEAM_0:0:5"), Ok(76561197960265738));
	}

	#[test]
	fn bracketed_account_id()
	{
		assert_eq!(parse("[U:1:12345]"), Ok(76561197960278073));
	}

	#[test]
	fn surrounding_whitespace_is_trimmed()
	{
		assert_eq!(parse("  [U:1:1]  "), Ok(SteamId64::BASE + 1));
		assert_eq!(parse("\t76561198282622073\n"), Ok(76561198282622073));
	}

	#[test]
	fn interior_whitespace_is_not_stripped()
	{
		assert!(parse("STEAM_0: 1:2").is_err());
		assert!(parse("[U:1: 5]").is_err());
	}

	#[test]
	fn universe_is_parsed_but_not_validated()
	{
		assert_eq!(parse("STEAM_5:1:2"), Ok(76561197960265733));
		assert!(parse("STEAM_X:1:2").is_err());
	}

	#[test]
	fn y_bit_is_not_restricted_to_zero_or_one()
	{
		assert_eq!(parse("STEAM_0:2:5"), Ok(SteamId64::BASE + 12));
	}

	#[test]
	fn unknown_formats_are_rejected()
	{
		for input in ["", "abc", "123", "7656119828262207", "765611982826220733", "U:1:12345", "[U:2:12345]"] {
			assert!(matches!(parse(input), Err(ParseSteamIdError::UnknownFormat)), "{input:?}");
		}
	}

	#[test]
	fn malformed_segments_are_rejected()
	{
		assert!(parse("STEAM_1:2").is_err());
		assert!(parse("STEAM_1:1:2:3").is_err());
		assert!(parse("STEAM_1:x:2").is_err());
		assert!(parse("STEAM_1:-1:2").is_err());
		assert!(parse("[U:1:]").is_err());
		assert!(parse("[U:1:-5]").is_err());
	}

	#[test]
	fn offset_overflow_is_a_parse_failure()
	{
		assert!(matches!(
			parse("[U:1:18446744073709551615]"),
			Err(ParseSteamIdError::Steam3(ParseSteam3IdError::OutOfRange)),
		));
		assert!(matches!(
			parse("STEAM_1:0:18446744073709551615"),
			Err(ParseSteamIdError::Steam2(ParseSteam2IdError::OutOfRange)),
		));
	}
}
