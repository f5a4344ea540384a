//! API for the [`latest`](https://www.exchangerate-api.com/docs/standard-requests) endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json as json;

use crate::{
	currency::CurrencyCode,
	error::{Error, Result},
	rates::Rates,
};

/// [`latest` endpoint](https://www.exchangerate-api.com/docs/standard-requests) response data.
#[derive(Debug, Clone, Deserialize)]
pub struct RateDocument {
	/// `success`, when the provider says so.
	#[serde(default)]
	pub result: Option<String>,
	/// The base currency of [`conversion_rates`](Self::conversion_rates).
	#[serde(default)]
	pub base_code: Option<CurrencyCode>,
	/// The rates, in document order.
	pub conversion_rates: Rates,
	#[serde(default)]
	time_last_update_unix: Option<i64>,
	#[serde(default)]
	time_next_update_unix: Option<i64>,
}

impl RateDocument {
	/// When the provider last updated the rates.
	pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
		self.time_last_update_unix.and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
	}

	/// When the provider will next update the rates.
	pub fn next_update_at(&self) -> Option<DateTime<Utc>> {
		self.time_next_update_unix.and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
	}
}

/// The fields shared by success and error payloads.
#[derive(Debug, Deserialize)]
struct Envelope {
	#[serde(default)]
	result: Option<String>,
	#[serde(default, rename = "error-type")]
	error_type: Option<String>,
}

const QUOTA_REACHED: &str = "quota-reached";

/// Interprets a `latest` reply.
///
/// Non-success statuses map to [`Error::RateLimitError`] or [`Error::HttpStatusError`], a success
/// status with an error payload to [`Error::ApiError`], and a body that is not a rate document to
/// [`Error::ResponseParseError`].
pub fn parse(status: u16, body: &[u8]) -> Result<RateDocument> {
	let envelope = json::from_slice::<Envelope>(body);

	if !(200..300).contains(&status) {
		let error_type = envelope.ok().and_then(|envelope| envelope.error_type);
		if status == 429 || error_type.as_deref() == Some(QUOTA_REACHED) {
			return Err(Error::RateLimitError);
		}
		return Err(Error::HttpStatusError { status, error_type });
	}

	let envelope = envelope?;
	if envelope.result.as_deref() == Some("error") {
		return match envelope.error_type {
			Some(error_type) if error_type == QUOTA_REACHED => Err(Error::RateLimitError),
			error_type => Err(Error::ApiError { error_type: error_type.unwrap_or_else(|| "unknown".into()) }),
		};
	}

	Ok(json::from_slice(body)?)
}
