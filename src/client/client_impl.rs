use crate::client::{Client, ServiceTarget};
use crate::media::{self, InboundRequest, MediaReadResult};
use crate::resolver::ResolvedDestination;
use crate::webc::WebResponse;
use crate::{Error, Result};
use bytes::Bytes;

/// Destination resolution
impl Client {
	/// Resolve a service name into its destination, surfacing the resolver errors as is
	/// (`Configuration`, `Authentication`, `Url`, `DestinationRetrieval`).
	pub async fn resolve_destination(&self, service_name: &str) -> Result<ResolvedDestination> {
		self.resolver().resolve(service_name).await
	}

	/// Resolve a service name into a `ServiceTarget`.
	/// Any resolution failure is reported as `Error::DestinationRetrieval`.
	pub async fn resolve_service_target(&self, service_name: &str) -> Result<ServiceTarget> {
		let destination = self
			.resolve_destination(service_name)
			.await
			.map_err(|err| into_destination_retrieval(service_name, err))?;

		Ok(ServiceTarget::from_destination(service_name, &destination))
	}
}

/// Remote media calls
impl Client {
	/// Streaming GET of `uri` on the service destination.
	///
	/// The body is not read. Transport failures and non-success statuses are `Error::FetchFailed`.
	pub async fn fetch(&self, uri: &str, service_name: &str) -> Result<WebResponse> {
		let target = self.resolve_service_target(service_name).await?;
		let url = target.url(uri);

		tracing::debug!(target: "media_relay::client", "GET {url} (service '{service_name}')");

		let response = self
			.web_client()
			.do_get_stream(&url, &target.auth.to_headers())
			.await
			.map_err(|webc_error| {
				tracing::error!(target: "media_relay::client", "GET {url} failed: {webc_error}");
				Error::FetchFailed {
					url: url.clone(),
					webc_error,
				}
			})?;

		Ok(response)
	}

	/// PUT `buffer` to `uri` on the service destination, with `Content-Type: file_type`.
	///
	/// - Transport failures (e.g., connection refused) are `Error::SendFailed`.
	/// - Any status outside `[200, 300)` is `Error::StreamRejected`.
	pub async fn send(&self, uri: &str, file_type: &str, buffer: impl Into<Bytes>, service_name: &str) -> Result<()> {
		let target = self.resolve_service_target(service_name).await?;
		let url = target.url(uri);
		let buffer = buffer.into();

		tracing::debug!(
			target: "media_relay::client",
			"PUT {url} ({} bytes of '{file_type}', service '{service_name}')",
			buffer.len()
		);

		let response = self
			.web_client()
			.do_put(&url, &target.auth.to_headers(), file_type, buffer)
			.await
			.map_err(|webc_error| {
				tracing::error!(target: "media_relay::client", "PUT {url} failed: {webc_error}");
				Error::SendFailed {
					url: url.clone(),
					webc_error,
				}
			})?;

		if !response.status.is_success() {
			tracing::warn!(
				target: "media_relay::client",
				"PUT {url} rejected with status {}",
				response.status
			);
			return Err(Error::StreamRejected {
				url,
				status: response.status,
				body: response.body,
			});
		}

		Ok(())
	}
}

/// Fetch + output adapters
impl Client {
	/// Fetch and pipe the remote stream straight into the request's response (no buffering).
	pub async fn proxy_media<R>(&self, request: &mut R, uri: &str, service_name: &str) -> Result<u64>
	where
		R: InboundRequest + ?Sized,
	{
		let response = self.fetch(uri, service_name).await?;
		media::pipe_to_sink(response, request.response_sink()).await
	}

	/// Fetch, buffer, then write into the request's response, with a `Content-Disposition` when `filename` is given.
	pub async fn proxy_media_buffered<R>(
		&self,
		request: &mut R,
		uri: &str,
		service_name: &str,
		filename: Option<&str>,
	) -> Result<u64>
	where
		R: InboundRequest + ?Sized,
	{
		let response = self.fetch(uri, service_name).await?;
		media::pipe_buffered_to_sink(response, request.response_sink(), filename).await
	}

	pub async fn fetch_buffer(&self, uri: &str, service_name: &str) -> Result<Bytes> {
		let response = self.fetch(uri, service_name).await?;
		media::to_buffer(response).await
	}

	pub async fn fetch_media_result(&self, uri: &str, service_name: &str) -> Result<MediaReadResult> {
		let response = self.fetch(uri, service_name).await?;
		media::to_media_result(response).await
	}
}

// region:    --- Support

fn into_destination_retrieval(service_name: &str, err: Error) -> Error {
	match err {
		err @ Error::DestinationRetrieval { .. } => err,
		other => Error::DestinationRetrieval {
			service: service_name.to_string(),
			cause: Box::new(other),
		},
	}
}

// endregion: --- Support
