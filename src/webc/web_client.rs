use crate::webc::{Error, Result, WebResponse, WebStatusResponse};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};

/// Simple reqwest client wrapper for the media calls.
///
/// Headers are plain `(name, value)` pairs, so auth is decided by the caller.
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

impl WebClient {
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		WebClient { reqwest_client }
	}
}

impl WebClient {
	/// Streaming GET.
	///
	/// The body is not read on success. On a non-success status, the body is read as text
	/// and returned in `Error::ResponseFailedStatus`.
	pub async fn do_get_stream(&self, url: &str, headers: &[(String, String)]) -> Result<WebResponse> {
		let reqwest_builder = self.new_req_builder(Method::GET, url, headers);

		let reqwest_res = reqwest_builder.send().await?;
		let response = WebResponse::from_reqwest(reqwest_res);

		if !response.is_success() {
			let status = response.status;
			let body = response.into_text_lossy().await;
			return Err(Error::ResponseFailedStatus { status, body });
		}

		Ok(response)
	}

	/// PUT a byte buffer with an explicit `Content-Type`.
	///
	/// Unlike `do_get_stream`, the status is returned as is. Deciding what counts as a success is up to the caller.
	pub async fn do_put(
		&self,
		url: &str,
		headers: &[(String, String)],
		content_type: &str,
		body: Bytes,
	) -> Result<WebStatusResponse> {
		let reqwest_builder = self
			.new_req_builder(Method::PUT, url, headers)
			.header(CONTENT_TYPE, content_type)
			.body(body);

		let reqwest_res = reqwest_builder.send().await?;
		let status: StatusCode = reqwest_res.status();
		// An unreadable body on an already received status is not a transport failure.
		let body = reqwest_res.text().await.unwrap_or_default();

		Ok(WebStatusResponse { status, body })
	}

	/// Plain GET returning the JSON body (used by the destination directory lookups).
	pub async fn do_get_json(&self, url: &str, headers: &[(String, String)]) -> Result<serde_json::Value> {
		let reqwest_res = self.new_req_builder(Method::GET, url, headers).send().await?;

		let status = reqwest_res.status();
		if !status.is_success() {
			let body = reqwest_res.text().await?;
			return Err(Error::ResponseFailedStatus { status, body });
		}

		let value = reqwest_res.json::<serde_json::Value>().await?;
		Ok(value)
	}

	pub fn new_req_builder(&self, method: Method, url: &str, headers: &[(String, String)]) -> RequestBuilder {
		let mut reqwest_builder = self.reqwest_client.request(method, url);
		for (k, v) in headers.iter() {
			reqwest_builder = reqwest_builder.header(k, v);
		}
		reqwest_builder
	}
}
