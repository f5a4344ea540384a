use std::{io, process::ExitCode};

use clap::Parser;
use exrates::{cli::Cli, driver, Config, ExchangeRateClient};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> ExitCode {
	init_tracing_subscriber();
	let cli = Cli::parse();

	let client = Config::from_env().and_then(|mut config| {
		cli.apply(&mut config);
		ExchangeRateClient::from_config(&config)
	});
	let mut client = match client {
		Ok(client) => client,
		Err(error) => {
			driver::report_failure(&error, &mut io::stderr().lock());
			return ExitCode::FAILURE;
		}
	};

	if driver::execute_stdio(&mut client, cli.code.as_deref()) {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}

fn init_tracing_subscriber() {
	let level = std::env::var(format!("{}_LOG_LEVEL", env!("CARGO_PKG_NAME").to_uppercase())).ok();
	tracing_subscriber::fmt()
		.with_env_filter(env_filter(level.as_deref()))
		.with_timer(ChronoLocal::rfc_3339())
		.with_writer(io::stderr)
		.init();
}

/// Diagnostics stay silent unless a level is asked for.
fn env_filter(level: Option<&str>) -> EnvFilter {
	let Some(level) = level.filter(|level| !level.trim().is_empty()) else {
		return EnvFilter::new("off");
	};
	let mut filter = EnvFilter::new(level);
	for directive in ["reqwest=warn", "hyper=warn", "rustls=warn"] {
		if let Ok(directive) = directive.parse() {
			filter = filter.add_directive(directive);
		}
	}
	filter
}
