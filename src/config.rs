// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knus::Decode;
use miette::{IntoDiagnostic, Result};
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	let config = knus::parse(config_path, &config_file_contents)?;
	Ok(config)
}

#[derive(Debug, Decode)]
pub struct ConfigData {
	#[knus(child)]
	pub web: WebConfig,
}

#[derive(Debug, Decode)]
pub struct WebConfig {
	#[knus(child, unwrap(argument))]
	pub bind_addr: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_web_bind_addr() {
		let document = "web {\n\tbind-addr \"127.0.0.1:3000\"\n}\n";
		let config: ConfigData = knus::parse("test.kdl", document).unwrap();
		assert_eq!(config.web.bind_addr, "127.0.0.1:3000");
	}

	#[test]
	fn rejects_missing_web_section() {
		let result: Result<ConfigData, _> = knus::parse("test.kdl", "\n");
		assert!(result.is_err());
	}
}
