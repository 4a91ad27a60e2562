//! Steam Profile API - resolve Steam identifiers into normalized profiles.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, WrapErr};

#[tokio::main]
async fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	let cli = Cli::parse();

	if let Some(path) = cli.env_file.as_deref() {
		dotenvy::from_filename(path).wrap_err("load custom `.env` file")?;
	} else if dotenvy::dotenv().is_err() {
		// `.env` files missing is not necessarily an issue (e.g. when
		// running in a container with injected environment variables), but
		// we log it to stderr just in case.
		eprintln!("WARNING: no `.env` file found");
	}

	steam_profile_api::telemetry::init().wrap_err("initialize tracing")?;

	let config = steam_profile_api::Config::new().wrap_err("load config")?;

	steam_profile_api::run(config).await.wrap_err("run API")?;

	Ok(())
}

/// Steam Profile API
#[derive(Debug, Parser)]
struct Cli
{
	/// Use a custom `.env` file.
	#[arg(long, name = "FILE")]
	env_file: Option<PathBuf>,
}
