//! Prompt, fetch, print.

use std::io::{self, BufRead, Write};

use crate::{
	client::ExchangeRateClient,
	currency::CurrencyCode,
	error::{Error, Result},
	fetch::Transport,
	format,
};

/// Asks for the base currency.
pub const PROMPT: &str = "Please enter the 3 character currency code you wish to check against";

/// The one line a user sees on any failure.
pub const FAILURE_MESSAGE: &str = "Failed to fetch data";

/// Reads the base currency from the first whitespace-delimited token of one line of `input`.
///
/// An empty line or end of input yields the [default](CurrencyCode::default).
pub fn read_currency_code(mut input: impl BufRead) -> Result<CurrencyCode> {
	let mut line = String::new();
	input.read_line(&mut line)?;
	match line.split_whitespace().next() {
		Some(token) => Ok(CurrencyCode::normalize(token)?),
		None => {
			tracing::debug!("no currency code entered, using the default");
			Ok(CurrencyCode::default())
		}
	}
}

/// Resolves the base currency from `code`, or prompts on `out` and reads it from `input`.
pub fn resolve_currency_code(code: Option<&str>, input: impl BufRead, out: &mut impl Write) -> Result<CurrencyCode> {
	match code {
		Some(code) => Ok(CurrencyCode::normalize(code)?),
		None => {
			writeln!(out, "{PROMPT}")?;
			out.flush()?;
			read_currency_code(input)
		}
	}
}

/// Fetches the rates of `code` and prints them to `out`.
///
/// Nothing is written unless the whole table is ready.
pub fn run<T: Transport>(client: &mut ExchangeRateClient<T>, code: CurrencyCode, out: &mut impl Write) -> Result<()> {
	client.set_currency_code(code);
	let document = client.fetch_rates()?;
	let table = format::format(document.conversion_rates.iter());
	write!(out, "{}\n\n{table}", format::header(client.currency_code()))?;
	Ok(out.flush()?)
}

/// Logs `error` and prints the generic [`FAILURE_MESSAGE`] to `err`.
pub fn report_failure(error: &Error, err: &mut impl Write) {
	tracing::error!(kind = error.kind(), %error, "failed to fetch rates");
	if let Err(e) = writeln!(err, "{FAILURE_MESSAGE}") {
		tracing::warn!("failed to write the failure message: {e}");
	}
}

/// [`resolve_currency_code`] then [`run`], reporting any failure on `err`.
///
/// Returns whether it succeeded.
pub fn execute<T: Transport>(
	client: &mut ExchangeRateClient<T>,
	code: Option<&str>,
	input: impl BufRead,
	out: &mut impl Write,
	err: &mut impl Write,
) -> bool {
	let result = resolve_currency_code(code, input, out).and_then(|code| run(client, code, out));
	match result {
		Ok(()) => true,
		Err(error) => {
			report_failure(&error, err);
			false
		}
	}
}

/// [`execute`] on the standard streams.
pub fn execute_stdio<T: Transport>(client: &mut ExchangeRateClient<T>, code: Option<&str>) -> bool {
	execute(client, code, io::stdin().lock(), &mut io::stdout().lock(), &mut io::stderr().lock())
}
