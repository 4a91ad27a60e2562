use {
	crate::SteamId64,
	serde::{
		de::{self, Deserialize, Deserializer},
		ser::{Serialize, Serializer},
	},
};

impl Serialize for SteamId64
{
	/// Serializes as the canonical decimal string, the form expected by
	/// Steam's Web API.
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{self}").serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for SteamId64
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct CatchallVisitor;

		impl de::Visitor<'_> for CatchallVisitor
		{
			type Value = SteamId64;

			fn expecting(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
			{
				fmt.write_str("a SteamID64")
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				value.parse::<SteamId64>().map_err(E::custom)
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				Ok(SteamId64::from_u64(value))
			}
		}

		deserializer.deserialize_any(CatchallVisitor)
	}
}
