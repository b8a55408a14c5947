use crate::webc::{Error, Result};
use bytes::Bytes;
use futures::stream::TryStreamExt;
use futures::{Stream, StreamExt};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use std::fmt;
use std::pin::Pin;

/// The body of a remote response, as a single-shot stream of byte chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

// region:    --- WebResponse

/// A raw streaming response from the remote service.
///
/// The body has not been read yet. It can be relayed chunk by chunk or drained with [`crate::webc::drain`].
pub struct WebResponse {
	pub status: StatusCode,
	pub content_type: Option<String>,
	pub content_length: Option<u64>,
	pub body: ByteStream,
}

/// Constructors
impl WebResponse {
	pub fn from_reqwest(response: reqwest::Response) -> Self {
		let status = response.status();
		let content_type = header_str(response.headers(), CONTENT_TYPE.as_str());
		let content_length = response.content_length();
		let body = response.bytes_stream().map_err(Error::from);

		Self {
			status,
			content_type,
			content_length,
			body: Box::pin(body),
		}
	}

	/// Build a response from any byte stream (e.g., a response coming from another transport).
	pub fn from_stream(
		status: StatusCode,
		content_type: Option<String>,
		body: impl Stream<Item = Result<Bytes>> + Send + 'static,
	) -> Self {
		Self {
			status,
			content_type,
			content_length: None,
			body: Box::pin(body),
		}
	}

	/// Build a successful response from in-memory chunks.
	pub fn from_chunks(content_type: Option<&str>, chunks: impl IntoIterator<Item = Bytes>) -> Self {
		let chunks: Vec<Bytes> = chunks.into_iter().collect();
		let content_length = chunks.iter().map(|c| c.len() as u64).sum();
		Self {
			status: StatusCode::OK,
			content_type: content_type.map(ToString::to_string),
			content_length: Some(content_length),
			body: Box::pin(futures::stream::iter(chunks.into_iter().map(Ok::<Bytes, Error>))),
		}
	}
}

/// Getters
impl WebResponse {
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Read the whole body as text, replacing invalid UTF-8.
	/// Only meant for error bodies, where a failure to read just yields what was read so far.
	pub async fn into_text_lossy(self) -> String {
		let mut body = self.body;
		let mut buf = Vec::new();
		while let Some(Ok(chunk)) = body.next().await {
			buf.extend_from_slice(&chunk);
		}
		String::from_utf8_lossy(&buf).into_owned()
	}
}

impl fmt::Debug for WebResponse {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WebResponse")
			.field("status", &self.status)
			.field("content_type", &self.content_type)
			.field("content_length", &self.content_length)
			.finish_non_exhaustive()
	}
}

// endregion: --- WebResponse

// region:    --- WebStatusResponse

/// A fully read, non-streaming response (used for the upload path, where only the status matters).
#[derive(Debug, Clone)]
pub struct WebStatusResponse {
	pub status: StatusCode,
	pub body: String,
}

// endregion: --- WebStatusResponse

// region:    --- Support

pub(super) fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
	headers.get(name).and_then(|v| v.to_str().ok()).map(ToString::to_string)
}

// endregion: --- Support
