//! The output adapters over a fetched `WebResponse`.
//!
//! - `pipe_to_sink` - direct proxy, chunk by chunk, no intermediate buffer.
//! - `pipe_buffered_to_sink` - drain first, then write the whole buffer (with an optional `Content-Disposition`).
//! - `to_buffer` - drain and return the bytes.
//! - `to_media_result` - drain and wrap into a `MediaReadResult`.

use crate::media::{DEFAULT_MEDIA_CONTENT_TYPE, MediaReadResult, ResponseSink, content_disposition};
use crate::webc::{self, RelayStream, WebResponse};
use crate::{Error, Result};
use bytes::Bytes;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_CONTENT_LENGTH: &str = "Content-Length";
pub const HEADER_CONTENT_DISPOSITION: &str = "Content-Disposition";

/// Direct proxy: mirror the content type, then write each chunk to the sink as it arrives.
///
/// Back-pressure comes from the sink writer. Returns the number of bytes written.
pub async fn pipe_to_sink<S>(response: WebResponse, sink: &mut S) -> Result<u64>
where
	S: ResponseSink + ?Sized,
{
	let WebResponse { content_type, body, .. } = response;

	if let Some(content_type) = content_type.as_deref() {
		sink.set_header(HEADER_CONTENT_TYPE, content_type);
	}

	let writer = sink.writable_stream();
	let mut relay = RelayStream::new(body);

	while let Some(chunk) = relay.next().await {
		let chunk = chunk.map_err(|cause| Error::StreamRelay { cause })?;
		writer.write_all(&chunk).await.map_err(|cause| Error::SinkWrite { cause })?;
	}
	writer.flush().await.map_err(|cause| Error::SinkWrite { cause })?;

	Ok(relay.relayed_bytes())
}

/// Buffered proxy: drain the whole body, then set the headers and write it in one go.
///
/// Nothing is written to the sink when the remote stream fails.
pub async fn pipe_buffered_to_sink<S>(response: WebResponse, sink: &mut S, filename: Option<&str>) -> Result<u64>
where
	S: ResponseSink + ?Sized,
{
	let content_type = response.content_type.clone();
	let buffer = to_buffer(response).await?;

	if let Some(content_type) = content_type.as_deref() {
		sink.set_header(HEADER_CONTENT_TYPE, content_type);
	}
	sink.set_header(HEADER_CONTENT_LENGTH, &buffer.len().to_string());
	if let Some(filename) = filename {
		sink.set_header(HEADER_CONTENT_DISPOSITION, &content_disposition(None, filename));
	}

	let writer = sink.writable_stream();
	writer.write_all(&buffer).await.map_err(|cause| Error::SinkWrite { cause })?;
	writer.flush().await.map_err(|cause| Error::SinkWrite { cause })?;

	Ok(buffer.len() as u64)
}

/// Drain the body into a single buffer.
pub async fn to_buffer(response: WebResponse) -> Result<Bytes> {
	webc::drain(response).await.map_err(|cause| Error::StreamRelay { cause })
}

/// Drain the body and wrap it, with the remote content type, into a `MediaReadResult`.
pub async fn to_media_result(response: WebResponse) -> Result<MediaReadResult> {
	let content_type = response
		.content_type
		.clone()
		.unwrap_or_else(|| DEFAULT_MEDIA_CONTENT_TYPE.to_string());
	let buffer = to_buffer(response).await?;

	Ok(MediaReadResult::from_buffer(buffer, content_type))
}

// region:    --- Tests


// endregion: --- Tests
