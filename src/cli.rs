//! Command line arguments.

use std::time::Duration;

use clap::Parser;

use crate::config::Config;

/// Prints the latest exchange rates of a base currency.
///
/// The provider access key is read from `EXCHANGE_API_KEY` (or a `.env` file).
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Cli {
	/// Base currency code; prompted for when omitted.
	pub code: Option<String>,
	/// Request timeout in seconds.
	#[arg(long, value_name = "SECS")]
	pub timeout: Option<u64>,
	/// API root URL.
	#[arg(long, value_name = "URL")]
	pub base_url: Option<String>,
}

impl Cli {
	/// Applies the command line overrides to `config`.
	pub fn apply(&self, config: &mut Config) {
		if let Some(secs) = self.timeout {
			config.timeout = Duration::from_secs(secs);
		}
		if let Some(base_url) = &self.base_url {
			config.base_url.clone_from(base_url);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::ApiKey;

	#[test]
	fn test_no_args() {
		let cli = Cli::parse_from(["exrates"]);
		assert_eq!(cli, Cli { code: None, timeout: None, base_url: None });
	}

	#[test]
	fn test_all_args() {
		let cli = Cli::parse_from(["exrates", "eur", "--timeout", "3", "--base-url", "http://localhost/v6"]);
		assert_eq!(cli.code.as_deref(), Some("eur"));

		let mut config = Config::new(ApiKey::try_from("k3y").unwrap());
		cli.apply(&mut config);
		assert_eq!(config.timeout, Duration::from_secs(3));
		assert_eq!(config.base_url, "http://localhost/v6");
	}

	#[test]
	fn test_bad_timeout() {
		assert!(Cli::try_parse_from(["exrates", "--timeout", "soon"]).is_err());
	}
}
