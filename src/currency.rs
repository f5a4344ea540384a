//! [Currency codes](CurrencyCode).

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{de, Deserialize, Deserializer};

/// [Currency code](https://en.wikipedia.org/wiki/ISO_4217).
///
/// Not checked against the ISO 4217 list: any three letters are forwarded to the provider,
/// which is the one to reject unknown codes.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct CurrencyCode {
	/// The code in uppercase alpha ASCII bytes.
	code: [u8; 3],
}

/// The default currency code is `USD`.
///
/// It is chosen for being the most traded currency.
impl Default for CurrencyCode {
	fn default() -> Self {
		Self { code: *b"USD" }
	}
}

impl CurrencyCode {
	/// Parses user input into a [`CurrencyCode`].
	///
	/// Surrounding whitespace is ignored and the letters are uppercased, so ` eur ` yields `EUR`.
	pub fn normalize(input: &str) -> Result<Self, InvalidCurrencyCodeError> {
		let bytes: [u8; 3] = input
			.trim()
			.as_bytes()
			.try_into()
			.map_err(|_| InvalidCurrencyCodeError)?;
		Self::try_from(bytes.map(|byte| byte.to_ascii_uppercase()))
	}
}

impl TryFrom<[u8; 3]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
		if value.iter().all(u8::is_ascii_uppercase) {
			Ok(Self { code: value })
		} else {
			Err(InvalidCurrencyCodeError)
		}
	}
}

impl<'a> TryFrom<&'a [u8]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
		let values: [u8; 3] = value.try_into().map_err(|_| InvalidCurrencyCodeError)?;
		Self::try_from(values)
	}
}

impl<'a> TryFrom<&'a str> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		Self::try_from(value.as_bytes())
	}
}

impl FromStr for CurrencyCode {
	type Err = InvalidCurrencyCodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.try_into()
	}
}

impl AsRef<[u8]> for CurrencyCode {
	fn as_ref(&self) -> &[u8] {
		&self.code
	}
}

impl AsRef<str> for CurrencyCode {
	fn as_ref(&self) -> &str {
		unsafe {
			// safety: the code is always ASCII per the invariant documented in CurrencyCode::code therefore
			// valid UTF-8 .
			std::str::from_utf8_unchecked(&self.code)
		}
	}
}

impl Display for CurrencyCode {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let code: &str = self.as_ref();
		code.fmt(f)
	}
}

impl<'de> Deserialize<'de> for CurrencyCode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct CodeVisitor;

		impl de::Visitor<'_> for CodeVisitor {
			type Value = CurrencyCode;

			fn expecting(&self, f: &mut Formatter) -> fmt::Result {
				f.write_str("a three letter uppercase currency code")
			}

			fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
				CurrencyCode::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
			}
		}

		deserializer.deserialize_str(CodeVisitor)
	}
}

/// Invalid currency code error.
///
/// Valid currency codes are three uppercase alpha ASCII characters.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct InvalidCurrencyCodeError;

impl Display for InvalidCurrencyCodeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		"invalid currency code".fmt(f)
	}
}

impl Error for InvalidCurrencyCodeError {}
