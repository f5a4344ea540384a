//! Single-URL HTTP fetching into an owned buffer.

use std::{io, sync::OnceLock, time::Duration};

use crate::error::{Error, Result};

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default [`ResponseBuffer`] capacity.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1 << 20;

/// A blocking HTTP GET transport.
///
/// Implement this trait to swap the network out, e.g. for fixtures.
pub trait Transport {
	/// GETs `url`, streaming the response body into `sink`, and returns the HTTP status.
	///
	/// A `sink` that accepts fewer bytes than offered aborts the transfer with an error.
	fn get(&self, url: &str, timeout: Duration, sink: &mut dyn io::Write) -> Result<u16>;
}

static SHARED_CLIENT: OnceLock<reqwest::blocking::Client> = OnceLock::new();

/// The [`reqwest`] backed [`Transport`].
///
/// All instances share one underlying connection pool, set up on first use.
#[derive(Debug, Clone)]
pub struct HttpClient {
	client: reqwest::blocking::Client,
}

impl HttpClient {
	/// Creates a new [`HttpClient`], setting up the shared client if needed.
	pub fn new() -> Result<Self> {
		if let Some(client) = SHARED_CLIENT.get() {
			return Ok(Self { client: client.clone() });
		}
		let client = reqwest::blocking::Client::builder()
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()?;
		tracing::debug!("http client initialized");
		// another thread may have set it first
		Ok(Self { client: SHARED_CLIENT.get_or_init(|| client).clone() })
	}
}

impl Transport for HttpClient {
	fn get(&self, url: &str, timeout: Duration, sink: &mut dyn io::Write) -> Result<u16> {
		let mut response = self.client.get(url).timeout(timeout).send()?;
		let status = response.status().as_u16();
		let written = response.copy_to(sink)?;
		tracing::trace!(status, written, "response body received");
		Ok(status)
	}
}

/// Response bytes of the latest transfer.
///
/// Its [`io::Write`] impl is the transfer's write callback: it accepts bytes up to its capacity
/// and reports any shortfall, which makes the transport abort.
#[derive(Debug, Clone)]
pub struct ResponseBuffer {
	bytes: Vec<u8>,
	capacity: usize,
}

impl ResponseBuffer {
	/// Creates an empty buffer that accepts at most `capacity` bytes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self { bytes: Vec::new(), capacity }
	}

	/// The accumulated bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Discards the accumulated bytes.
	pub fn clear(&mut self) {
		self.bytes.clear();
	}
}

impl Default for ResponseBuffer {
	fn default() -> Self {
		Self::with_capacity(DEFAULT_MAX_BODY_BYTES)
	}
}

impl io::Write for ResponseBuffer {
	fn write(&mut self, chunk: &[u8]) -> io::Result<usize> {
		let accepted = chunk.len().min(self.capacity - self.bytes.len());
		self.bytes.extend_from_slice(&chunk[..accepted]);
		if accepted < chunk.len() {
			tracing::warn!(capacity = self.capacity, "response body exceeds the buffer capacity");
		}
		Ok(accepted)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Fetches one configured URL at a time into its own [`ResponseBuffer`].
#[derive(Debug)]
pub struct HttpFetcher<T = HttpClient> {
	transport: T,
	url: Option<String>,
	timeout: Duration,
	buffer: ResponseBuffer,
}

impl<T: Transport> HttpFetcher<T> {
	/// Creates a new [`HttpFetcher`] with no URL set.
	pub fn new(transport: T) -> Self {
		Self {
			transport,
			url: None,
			timeout: DEFAULT_TIMEOUT,
			buffer: ResponseBuffer::default(),
		}
	}

	/// Sets the whole-request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Sets the maximum response body size.
	pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
		self.buffer = ResponseBuffer::with_capacity(max_body_bytes);
		self
	}

	/// Sets the URL for the next [`fetch`](Self::fetch).
	///
	/// The URL is not validated until then.
	pub fn set_url(&mut self, url: impl Into<String>) {
		self.url = Some(url.into());
	}

	/// Performs a blocking GET of the configured URL.
	///
	/// The previous response body is discarded first, so a failed fetch leaves the buffer empty
	/// or holding a partial body.
	pub fn fetch(&mut self) -> Result<u16> {
		self.buffer.clear();
		let url = self.url.as_deref().ok_or_else(|| Error::transport("no url set"))?;
		self.transport.get(url, self.timeout, &mut self.buffer)
	}

	/// The response body of the most recent [`fetch`](Self::fetch).
	pub fn response_body(&self) -> &[u8] {
		self.buffer.as_bytes()
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use std::{cell::RefCell, io, time::Duration};

	use super::Transport;
	use crate::error::{Error, Result};

	/// A [`Transport`] replaying one canned reply and recording requested URLs.
	pub struct Fixture {
		pub reply: std::result::Result<(u16, &'static str), &'static str>,
		pub urls: RefCell<Vec<String>>,
	}

	impl Fixture {
		pub fn ok(body: &'static str) -> Self {
			Self::status(200, body)
		}

		pub fn status(status: u16, body: &'static str) -> Self {
			Self { reply: Ok((status, body)), urls: RefCell::default() }
		}

		pub fn unreachable(message: &'static str) -> Self {
			Self { reply: Err(message), urls: RefCell::default() }
		}
	}

	impl Transport for Fixture {
		fn get(&self, url: &str, _: Duration, sink: &mut dyn io::Write) -> Result<u16> {
			self.urls.borrow_mut().push(url.to_owned());
			let (status, body) = self.reply.map_err(Error::transport)?;
			// small chunks, like a real transfer
			for chunk in body.as_bytes().chunks(7) {
				sink.write_all(chunk).map_err(Error::transport)?;
			}
			Ok(status)
		}
	}

	impl Transport for &Fixture {
		fn get(&self, url: &str, timeout: Duration, sink: &mut dyn io::Write) -> Result<u16> {
			(**self).get(url, timeout, sink)
		}
	}
}
