//! The narrow interfaces expected from the hosting web framework.

use tokio::io::AsyncWrite;

// region:    --- ResponseSink

/// The outbound response of the hosting framework: headers, then a writable body.
pub trait ResponseSink: Send {
	fn set_header(&mut self, name: &str, value: &str);

	fn writable_stream(&mut self) -> &mut (dyn AsyncWrite + Send + Unpin);
}

/// The inbound request of the hosting framework, which owns the response to write to.
pub trait InboundRequest: Send {
	type Sink: ResponseSink;

	fn response_sink(&mut self) -> &mut Self::Sink;
}

// endregion: --- ResponseSink

// region:    --- MemorySink

/// An in-memory `ResponseSink`, for hosts that assemble the response themselves (and for tests).
#[derive(Debug, Default)]
pub struct MemorySink {
	headers: Vec<(String, String)>,
	body: Vec<u8>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Last value set for this header (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.rev()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	pub fn headers(&self) -> &[(String, String)] {
		&self.headers
	}

	pub fn body(&self) -> &[u8] {
		&self.body
	}

	pub fn into_body(self) -> Vec<u8> {
		self.body
	}
}

impl ResponseSink for MemorySink {
	fn set_header(&mut self, name: &str, value: &str) {
		self.headers.push((name.to_string(), value.to_string()));
	}

	fn writable_stream(&mut self) -> &mut (dyn AsyncWrite + Send + Unpin) {
		&mut self.body
	}
}

impl InboundRequest for MemorySink {
	type Sink = MemorySink;

	fn response_sink(&mut self) -> &mut Self::Sink {
		self
	}
}

// endregion: --- MemorySink
