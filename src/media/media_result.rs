use crate::media::content_disposition;
use crate::webc::{self, ByteStream, WebResponse};
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::StatusCode;
use std::fmt;

/// Content type used when the remote response did not declare one.
pub const DEFAULT_MEDIA_CONTENT_TYPE: &str = "application/octet-stream";

/// The media result envelope: a byte stream tagged with its content type and optional disposition,
/// so the hosting framework can serve it as a file-like response.
///
/// The `value` stream is single-shot. It yields the buffered bytes once and then ends, it cannot be restarted.
pub struct MediaReadResult {
	pub value: ByteStream,
	pub content_type: String,
	pub disposition_filename: Option<String>,
	pub disposition_type: Option<String>,
}

/// Constructors
impl MediaReadResult {
	/// Wrap an already materialized buffer.
	pub fn from_buffer(buffer: Bytes, content_type: impl Into<String>) -> Self {
		// An empty buffer is just the end of stream.
		let value: ByteStream = if buffer.is_empty() {
			Box::pin(tokio_stream::empty::<webc::Result<Bytes>>())
		} else {
			Box::pin(tokio_stream::once(Ok::<Bytes, webc::Error>(buffer)))
		};

		Self {
			value,
			content_type: content_type.into(),
			disposition_filename: None,
			disposition_type: None,
		}
	}
}

/// Setters (builder style)
impl MediaReadResult {
	pub fn with_disposition_filename(mut self, filename: impl Into<String>) -> Self {
		self.disposition_filename = Some(filename.into());
		self
	}

	/// e.g., `inline` or `attachment`
	pub fn with_disposition_type(mut self, disposition_type: impl Into<String>) -> Self {
		self.disposition_type = Some(disposition_type.into());
		self
	}
}

/// Getters & Consumers
impl MediaReadResult {
	/// The `Content-Disposition` header value, when a filename or a disposition type is set.
	pub fn content_disposition(&self) -> Option<String> {
		match (&self.disposition_type, &self.disposition_filename) {
			(disposition_type, Some(filename)) => Some(content_disposition(disposition_type.as_deref(), filename)),
			(Some(disposition_type), None) => Some(disposition_type.clone()),
			(None, None) => None,
		}
	}

	/// Consume the envelope, reading its stream back into a buffer.
	pub async fn into_bytes(self) -> Result<Bytes> {
		let response = WebResponse::from_stream(StatusCode::OK, Some(self.content_type), self.value);
		webc::drain(response).await.map_err(|cause| Error::StreamRelay { cause })
	}
}

impl fmt::Debug for MediaReadResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MediaReadResult")
			.field("content_type", &self.content_type)
			.field("disposition_filename", &self.disposition_filename)
			.field("disposition_type", &self.disposition_type)
			.finish_non_exhaustive()
	}
}

// region:    --- Tests


// endregion: --- Tests
