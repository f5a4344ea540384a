//! URL building

use crate::{currency::CurrencyCode, ApiKey};

/// The provider's v6 API root.
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6/";

/// Stands in for the API key in anything that gets logged.
pub const REDACTED: &str = "***";

/// Builds the [`latest`](https://www.exchangerate-api.com/docs/standard-requests) endpoint URL.
///
/// `<base>/<key>/latest/<code>`; a trailing slash on `base` is optional.
pub fn latest(base: &str, key: &ApiKey, code: CurrencyCode) -> String {
	latest_with(base, key.as_ref(), code)
}

/// [`latest`] with the key replaced by [`REDACTED`].
pub fn latest_redacted(base: &str, code: CurrencyCode) -> String {
	latest_with(base, REDACTED, code)
}

fn latest_with(base: &str, key: &str, code: CurrencyCode) -> String {
	let base = base.trim_end_matches('/');
	let mut url = String::with_capacity(base.len() + 1 + key.len() + "/latest/XXX".len());
	url.push_str(base);
	url.push('/');
	url.push_str(key);
	url.push_str("/latest/");
	url.push_str(code.as_ref());
	url
}
