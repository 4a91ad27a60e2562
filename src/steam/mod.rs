//! Steam Web API integration.
//!
//! [`api`] contains the low-level HTTP client, [`profile`] the
//! player-summary lookup and the [`Profile`] record this API returns.
//!
//! [`Profile`]: profile::Profile

pub mod api;
pub mod profile;
