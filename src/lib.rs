//! [ExchangeRate-API](https://www.exchangerate-api.com/) latest rates, fetched and printed.
//!
//! The library half of the `exrates` binary: one blocking request per base currency, parsed into
//! a [`RateDocument`] and rendered as `CODE: RATE` lines.

#![deny(missing_docs)]

use std::fmt::{self, Debug, Formatter};

pub mod cli;
pub mod client;
pub mod config;
pub mod currency;
pub mod driver;
pub mod error;
pub mod fetch;
pub mod format;
pub mod latest;
pub mod rates;
pub mod url;

pub use client::ExchangeRateClient;
pub use config::Config;
pub use currency::CurrencyCode;
pub use error::{Error, Result};
pub use latest::RateDocument;
pub use rates::Rates;

#[derive(Hash, Clone, PartialEq, Eq)]
/// Provider [API key](https://www.exchangerate-api.com/docs/authentication).
///
/// Its [`Debug`] output is redacted.
pub struct ApiKey {
	/// The key string, never empty.
	key: String,
}

impl<'a> TryFrom<&'a str> for ApiKey {
	type Error = Error;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		let key = value.trim();
		if key.is_empty() {
			return Err(Error::ConfigError("the API key is empty".into()));
		}
		Ok(Self { key: key.to_owned() })
	}
}

impl AsRef<str> for ApiKey {
	fn as_ref(&self) -> &str {
		&self.key
	}
}

impl Debug for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_tuple("ApiKey").field(&url::REDACTED).finish()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_api_key_redacted() {
		let key = ApiKey::try_from(" c31d6b38 ").unwrap();
		assert_eq!(key.as_ref(), "c31d6b38");
		assert_eq!(format!("{key:?}"), "ApiKey(\"***\")");
		assert!(ApiKey::try_from("").is_err());
	}
}
