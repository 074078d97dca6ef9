// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use landing_page::config::parse_config;
	use landing_page::web::server::run_server;
	use std::sync::Arc;

	tracing_subscriber::fmt::init();

	let config = parse_config("config.kdl").await?;
	tracing::info!(bind_addr = %config.web.bind_addr, "Configuration loaded");

	run_server(Arc::new(config)).await
}

// The binary only makes sense server-side; cargo-leptos builds the lib target for hydration.
#[cfg(not(feature = "ssr"))]
fn main() {}
