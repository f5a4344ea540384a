//! [`ExchangeRateClient`]

use crate::{
	config::Config,
	currency::CurrencyCode,
	error::Result,
	fetch::{HttpClient, HttpFetcher, Transport},
	latest::{self, RateDocument},
	url, ApiKey,
};

/// Client for the latest rates of one base currency at a time.
#[derive(Debug)]
pub struct ExchangeRateClient<T = HttpClient> {
	fetcher: HttpFetcher<T>,
	api_key: ApiKey,
	base_url: String,
	currency_code: CurrencyCode,
}

impl ExchangeRateClient<HttpClient> {
	/// Creates a client over the network, configured by `config`.
	pub fn from_config(config: &Config) -> Result<Self> {
		Ok(Self::with_transport(HttpClient::new()?, config))
	}
}

impl<T: Transport> ExchangeRateClient<T> {
	/// Creates a client over the given transport, configured by `config`.
	///
	/// The currency code starts as the [default](CurrencyCode::default).
	pub fn with_transport(transport: T, config: &Config) -> Self {
		let fetcher = HttpFetcher::new(transport)
			.with_timeout(config.timeout)
			.with_max_body_bytes(config.max_body_bytes);
		let mut client = Self {
			fetcher,
			api_key: config.api_key.clone(),
			base_url: config.base_url.clone(),
			currency_code: CurrencyCode::default(),
		};
		client.set_currency_code(CurrencyCode::default());
		client
	}

	/// Sets the base currency and points the fetcher at its URL.
	pub fn set_currency_code(&mut self, code: CurrencyCode) {
		self.currency_code = code;
		self.fetcher.set_url(url::latest(&self.base_url, &self.api_key, code));
	}

	/// The base currency.
	pub fn currency_code(&self) -> CurrencyCode {
		self.currency_code
	}

	/// Fetches and parses the latest rates for the [base currency](Self::currency_code).
	pub fn fetch_rates(&mut self) -> Result<RateDocument> {
		tracing::debug!(url = %url::latest_redacted(&self.base_url, self.currency_code), "fetching rates");
		let status = self.fetcher.fetch()?;
		let body = self.fetcher.response_body();
		tracing::debug!(status, bytes = body.len(), "fetched rates");
		let document = latest::parse(status, body)?;
		if let Some(last_updated_at) = document.last_updated_at() {
			tracing::debug!(%last_updated_at, rates = document.conversion_rates.len(), "parsed rates");
		}
		Ok(document)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{error::Error, fetch::testing::Fixture, format};

	const FIXTURE: &str = r#"{"conversion_rates":{"EUR":0.92,"JPY":149.5}}"#;

	fn config() -> Config {
		Config::new(ApiKey::try_from("k3y").unwrap())
	}

	#[test]
	fn test_fetch_rates() {
		let fixture = Fixture::ok(FIXTURE);
		let mut client = ExchangeRateClient::with_transport(&fixture, &config());
		client.set_currency_code("USD".parse().unwrap());
		let document = client.fetch_rates().unwrap();
		let rates: Vec<(String, f64)> = document
			.conversion_rates
			.iter()
			.map(|(code, rate)| (code.to_string(), rate.as_f64().unwrap()))
			.collect();
		assert_eq!(rates, [("EUR".to_owned(), 0.92), ("JPY".to_owned(), 149.5)]);
		assert_eq!(format::format(document.conversion_rates.iter()), "EUR: 0.92\nJPY: 149.5\n");
		assert_eq!(fixture.urls.borrow()[0], "https://v6.exchangerate-api.com/v6/k3y/latest/USD");
	}

	#[test]
	fn test_default_currency_code() {
		let fixture = Fixture::ok(FIXTURE);
		let mut client = ExchangeRateClient::with_transport(&fixture, &config());
		assert_eq!(client.currency_code(), CurrencyCode::default());
		client.fetch_rates().unwrap();
		assert!(fixture.urls.borrow()[0].ends_with("/latest/USD"));
	}

	#[test]
	fn test_normalized_code_in_url() {
		let fixture = Fixture::ok(FIXTURE);
		let mut client = ExchangeRateClient::with_transport(&fixture, &config());
		client.set_currency_code(CurrencyCode::normalize("eur").unwrap());
		client.fetch_rates().unwrap();
		assert_eq!(client.currency_code().to_string(), "EUR");
		assert!(fixture.urls.borrow()[0].ends_with("/latest/EUR"));
	}

	#[test]
	fn test_empty_body() {
		let mut client = ExchangeRateClient::with_transport(Fixture::ok(""), &config());
		assert!(matches!(client.fetch_rates(), Err(Error::ResponseParseError(_))));
	}

	#[test]
	fn test_connection_failure() {
		let mut client = ExchangeRateClient::with_transport(Fixture::unreachable("connection refused"), &config());
		assert!(matches!(client.fetch_rates(), Err(Error::TransportError(_))));
	}

	#[test]
	fn test_fetch_twice_is_identical() {
		let mut client = ExchangeRateClient::with_transport(Fixture::ok(FIXTURE), &config());
		let first = format::format(client.fetch_rates().unwrap().conversion_rates.iter());
		let second = format::format(client.fetch_rates().unwrap().conversion_rates.iter());
		assert_eq!(first, second);
	}

	#[test]
	fn test_invalid_key() {
		let fixture = Fixture::status(403, r#"{"result":"error","error-type":"invalid-key"}"#);
		let mut client = ExchangeRateClient::with_transport(fixture, &config());
		match client.fetch_rates() {
			Err(Error::HttpStatusError { status: 403, error_type }) => assert_eq!(error_type.as_deref(), Some("invalid-key")),
			other => panic!("unexpected {other:?}"),
		}
	}
}
