//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use media_relay::Client;
use media_relay::media::ResponseSink;
use media_relay::resolver::{DirectoryResolver, ServiceConfig, ServicesConfig};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::io::AsyncWrite;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Common Constants

pub const USERNAME: &str = "user";
pub const PASSWORD: &str = "pwd";
/// base64("user:pwd")
pub const BASIC_AUTH_HEADER: &str = "Basic dXNlcjpwd2Q=";

/// A port nothing listens on (connection refused).
pub const CLOSED_URL: &str = "http://127.0.0.1:1";

// endregion: --- Common Constants

// region:    --- Common Clients

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

/// A client with one inline Basic service, `MediaAPI`, pointing to `base_url`.
pub fn client_with_basic_service(base_url: &str) -> Result<Client> {
	init_tracing();
	let services =
		ServicesConfig::default().with_service("MediaAPI", ServiceConfig::from_basic(base_url, USERNAME, PASSWORD));
	Ok(Client::builder().with_config_provider(services).build()?)
}

pub fn client_with_directory(services: ServicesConfig, directory: DirectoryResolver) -> Result<Client> {
	init_tracing();
	Ok(Client::builder()
		.with_config_provider(services)
		.with_directory(directory)
		.build()?)
}

// endregion: --- Common Clients

// region:    --- RecordingSink

/// A `ResponseSink` recording every write size, readable while the sink is in use by another task.
#[derive(Debug, Default)]
pub struct RecordingSink {
	pub headers: Vec<(String, String)>,
	writer: RecordingWriter,
}

impl RecordingSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn write_log(&self) -> WriteLog {
		self.writer.log.clone()
	}

	pub fn body(&self) -> Vec<u8> {
		self.writer.body.clone()
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.rev()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

impl ResponseSink for RecordingSink {
	fn set_header(&mut self, name: &str, value: &str) {
		self.headers.push((name.to_string(), value.to_string()));
	}

	fn writable_stream(&mut self) -> &mut (dyn AsyncWrite + Send + Unpin) {
		&mut self.writer
	}
}

/// Shared list of the sizes of each write call.
#[derive(Debug, Default, Clone)]
pub struct WriteLog(Arc<Mutex<Vec<usize>>>);

impl WriteLog {
	pub fn sizes(&self) -> Vec<usize> {
		self.0.lock().map(|sizes| sizes.clone()).unwrap_or_default()
	}

	/// Wait (up to about one second) until at least `count` writes happened.
	pub async fn wait_for_writes(&self, count: usize) -> Result<()> {
		for _ in 0..1000 {
			if self.sizes().len() >= count {
				return Ok(());
			}
			tokio::time::sleep(Duration::from_millis(1)).await;
		}
		Err(format!("expected {count} writes, got {:?}", self.sizes()).into())
	}
}

#[derive(Debug, Default)]
struct RecordingWriter {
	log: WriteLog,
	body: Vec<u8>,
}

impl AsyncWrite for RecordingWriter {
	fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, buf: &[u8]) -> Poll<std::io::Result<usize>> {
		let this = self.get_mut();
		this.body.extend_from_slice(buf);
		if let Ok(mut sizes) = this.log.0.lock() {
			sizes.push(buf.len());
		}
		Poll::Ready(Ok(buf.len()))
	}

	fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
		Poll::Ready(Ok(()))
	}

	fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
		Poll::Ready(Ok(()))
	}
}

// endregion: --- RecordingSink
