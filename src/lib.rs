#![doc = include_str!("../README.md")]

/*
 * Steam Profile API - resolve Steam identifiers into normalized profiles.
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

#[macro_use]
extern crate tracing;

#[macro_use(Debug, Display, Error, From)]
extern crate derive_more as _;

pub use self::config::Config;

pub mod config;
pub mod telemetry;
pub mod steam;

mod http;

/// Error that can occur while running the API.
#[derive(Debug, Display, Error, From)]
#[display("failed to run the API: {_0}")]
pub struct RunError(std::io::Error);

/// Builds the API's router.
pub fn router(config: &Config) -> axum::Router
{
	let steam_client = config
		.steam_api_key()
		.map(|api_key| steam::api::Client::new(api_key));

	http::router(http::AppState { steam: steam_client })
}

/// Runs the API until it is shut down via ctrl-c.
pub async fn run(config: Config) -> Result<(), RunError>
{
	let router = self::router(&config);
	let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
	let local_addr = listener.local_addr()?;

	info!("listening on {local_addr}");

	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	Ok(())
}

async fn shutdown_signal()
{
	match tokio::signal::ctrl_c().await {
		Ok(()) => info!("received ctrl-c, shutting down"),
		Err(error) => error!(%error, "failed to listen for ctrl-c"),
	}
}
