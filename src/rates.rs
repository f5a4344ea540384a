//! Currency rates container.

use std::fmt;

use serde::{de, Deserialize, Deserializer};
use serde_json::Number;

use crate::currency::CurrencyCode;

/// Conversion rates, in the order the provider listed them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Rates {
	currency: Vec<CurrencyCode>,
	rate: Vec<Number>,
}

impl Rates {
	/// Creates a new [`Rates`] value.
	pub const fn new() -> Self {
		Self { currency: Vec::new(), rate: Vec::new() }
	}

	/// Gets the count of rates.
	#[inline] pub fn len(&self) -> usize { self.currency.len() }
	/// Gets whether there are no rates.
	#[inline] pub fn is_empty(&self) -> bool { self.currency.is_empty() }

	/// Gets a slice of the currencies.
	pub fn currencies(&self) -> &[CurrencyCode] {
		&self.currency
	}

	/// Gets a slice of the rates.
	pub fn rates(&self) -> &[Number] {
		&self.rate
	}

	/// Iterates over currency rates.
	pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, &Number)> {
		self.currency.iter().copied().zip(self.rate.iter())
	}

	/// Appends a currency rate.
	pub fn push(&mut self, currency: CurrencyCode, rate: Number) {
		self.currency.push(currency);
		self.rate.push(rate);
	}

	/// Gets the rate for the given currency, if exists.
	pub fn get(&self, currency: CurrencyCode) -> Option<&Number> {
		self.iter()
			.find(|&(c,_)| c == currency)
			.map(|(_,r)| r)
	}
}

impl fmt::Debug for Rates {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut m = f.debug_map();
		for (currency, rate) in self.iter() {
			m.entry(&format_args!("{currency}"), &format_args!("{rate}"));
		}
		m.finish()
	}
}

impl<'de> Deserialize<'de> for Rates {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct RatesVisitor;

		impl<'de> de::Visitor<'de> for RatesVisitor {
			type Value = Rates;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("an object of currency codes to numbers")
			}

			// walking the map directly keeps the document's key order
			fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
				let mut rates = Rates::new();
				while let Some((currency, rate)) = map.next_entry::<CurrencyCode, Number>()? {
					rates.push(currency, rate);
				}
				Ok(rates)
			}
		}

		deserializer.deserialize_map(RatesVisitor)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_keeps_document_order() {
		let rates: Rates = serde_json::from_str(r#"{"USD":1,"JPY":149.5,"EUR":0.92,"AED":3.6725}"#).unwrap();
		let codes: Vec<String> = rates.currencies().iter().map(ToString::to_string).collect();
		assert_eq!(codes, ["USD", "JPY", "EUR", "AED"]);
		assert_eq!(rates.len(), 4);
	}

	#[test]
	fn test_get() {
		let rates: Rates = serde_json::from_str(r#"{"EUR":0.92,"JPY":149.5}"#).unwrap();
		assert_eq!(rates.get("JPY".parse().unwrap()).and_then(Number::as_f64), Some(149.5));
		assert_eq!(rates.get("ILS".parse().unwrap()), None);
	}

	#[test]
	fn test_rejects_non_numbers() {
		assert!(serde_json::from_str::<Rates>(r#"{"EUR":"0.92"}"#).is_err());
		assert!(serde_json::from_str::<Rates>(r#"{"EUR":{"value":0.92}}"#).is_err());
		assert!(serde_json::from_str::<Rates>(r#"{"eur":0.92}"#).is_err());
		assert!(serde_json::from_str::<Rates>("[0.92]").is_err());
	}

	#[test]
	fn test_debug() {
		let mut rates = Rates::new();
		rates.push(CurrencyCode::default(), Number::from(1));
		assert_eq!(format!("{rates:?}"), "{USD: 1}");
	}
}
