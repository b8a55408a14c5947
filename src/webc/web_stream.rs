use crate::webc::{ByteStream, Result, WebResponse};
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// RelayStream is the pass-through between the remote body and whatever consumes it (a sink, or an in-memory buffer).
/// - Each chunk is forwarded as soon as it is polled, nothing is held back.
/// - It keeps count of the relayed bytes and chunks, which are traced when the remote stream ends.
/// - After the first error or the end of the stream, it is done and will not poll the inner stream again.
pub struct RelayStream {
	inner: ByteStream,

	// -- Set by the poll_next
	relayed_bytes: u64,
	relayed_chunks: usize,
	done: bool,
}

impl RelayStream {
	pub fn new(inner: ByteStream) -> Self {
		Self {
			inner,
			relayed_bytes: 0,
			relayed_chunks: 0,
			done: false,
		}
	}

	pub fn relayed_bytes(&self) -> u64 {
		self.relayed_bytes
	}

	pub fn relayed_chunks(&self) -> usize {
		self.relayed_chunks
	}
}

impl Stream for RelayStream {
	type Item = Result<Bytes>;

	fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
		let this = self.get_mut();

		if this.done {
			return Poll::Ready(None);
		}

		match this.inner.as_mut().poll_next(cx) {
			Poll::Ready(Some(Ok(bytes))) => {
				this.relayed_bytes += bytes.len() as u64;
				this.relayed_chunks += 1;
				Poll::Ready(Some(Ok(bytes)))
			}
			Poll::Ready(Some(Err(err))) => {
				tracing::error!(
					target: "media_relay::webc",
					"Relay stream error after {} bytes: {}",
					this.relayed_bytes,
					err
				);
				this.done = true;
				Poll::Ready(Some(Err(err)))
			}
			Poll::Ready(None) => {
				tracing::trace!(
					target: "media_relay::webc",
					"Relay stream ended ({} bytes in {} chunks)",
					this.relayed_bytes,
					this.relayed_chunks
				);
				this.done = true;
				Poll::Ready(None)
			}
			Poll::Pending => Poll::Pending,
		}
	}
}

/// Drain the full body of a response into a single buffer.
///
/// The result is the byte-for-byte concatenation of all the chunks, whatever the chunk boundaries.
/// There is no size limit, the whole body is held in memory.
pub async fn drain(response: WebResponse) -> Result<Bytes> {
	let mut relay = RelayStream::new(response.body);
	let mut buffer = BytesMut::new();

	while let Some(chunk) = relay.next().await {
		buffer.extend_from_slice(&chunk?);
	}

	Ok(buffer.freeze())
}

// region:    --- Tests


// endregion: --- Tests
