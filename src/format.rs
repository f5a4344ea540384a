//! Plain-text rendering of rate tables.

use std::fmt::Display;

/// Between a currency code and its rate.
pub const SEPARATOR: &str = ": ";

/// The line introducing the rates of `base`.
pub fn header(base: impl Display) -> String {
	format!("1 {base} is equivalent to the following rates:")
}

/// Renders one `KEY: VALUE` line per entry, in iteration order.
///
/// Values are printed with their [`Display`] impl as-is, so a [`serde_json::Number`] keeps the
/// digits it was parsed with.
pub fn format<K: Display, V: Display>(rates: impl IntoIterator<Item = (K, V)>) -> String {
	rates
		.into_iter()
		.map(|(key, value)| format!("{key}{SEPARATOR}{value}\n"))
		.collect()
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_one_line_per_entry_in_order() {
		let object: serde_json::Map<String, serde_json::Value> =
			serde_json::from_str(r#"{"a":1,"b,c":2.5,"{d}":-3e-7}"#).unwrap();
		let text = format(object.iter());
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), object.len());
		for ((key, value), line) in object.iter().zip(&lines) {
			assert!(line.starts_with(key.as_str()));
			assert!(line.ends_with(&value.to_string()));
		}
	}

	#[test]
	fn test_keeps_insertion_order() {
		let text = format([("JPY", 149.5), ("EUR", 0.92), ("AUD", 1.0)]);
		assert_eq!(text, "JPY: 149.5\nEUR: 0.92\nAUD: 1\n");
	}

	#[test]
	fn test_empty() {
		assert_eq!(format(std::iter::empty::<(&str, f64)>()), "");
	}

	#[test]
	fn test_header() {
		assert_eq!(header("EUR"), "1 EUR is equivalent to the following rates:");
	}
}
