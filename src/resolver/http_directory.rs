use crate::BoxError;
use crate::resolver::{AuthData, Endpoint, ResolvedDestination};
use crate::webc::WebClient;
use serde::Deserialize;
use value_ext::JsonValueExt;

/// Client for a destination service exposing
/// `GET {base_url}/destination-configuration/v1/destinations/{name}`.
///
/// Expected response:
/// ```json
/// {
///   "destinationConfiguration": { "URL": "...", "Authentication": "BasicAuthentication", "User": "...", "Password": "..." },
///   "authTokens": [ { "type": "Bearer", "value": "..." } ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpDirectory {
	endpoint: Endpoint,
	auth: AuthData,
	/// When not set, the `Client` hands over its own web client (and so its `WebConfig`).
	web_client: Option<WebClient>,
}

const DESTINATIONS_PATH: &str = "destination-configuration/v1/destinations";

/// Constructors
impl HttpDirectory {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			endpoint: Endpoint::from_owned(base_url.into()),
			auth: AuthData::None,
			web_client: None,
		}
	}

	/// The token used to call the destination service itself.
	pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
		self.auth = AuthData::Bearer(token.into());
		self
	}

	/// Use a dedicated web client for the directory calls, instead of the one of the `Client`.
	pub fn with_web_client(mut self, web_client: WebClient) -> Self {
		self.web_client = Some(web_client);
		self
	}

	pub(crate) fn with_fallback_web_client(mut self, web_client: &WebClient) -> Self {
		if self.web_client.is_none() {
			self.web_client = Some(web_client.clone());
		}
		self
	}
}

impl HttpDirectory {
	pub(crate) async fn fetch_destination(&self, destination_name: &str) -> Result<ResolvedDestination, BoxError> {
		let url = self.lookup_url(destination_name)?;

		tracing::debug!(target: "media_relay::resolver", "Directory lookup for destination '{destination_name}'");

		let web_client = self.web_client.clone().unwrap_or_default();
		let mut body = web_client.do_get_json(&url, &self.auth.to_headers()).await?;

		let config: DirectoryDestinationConfig = body.x_take("destinationConfiguration")?;

		let has_tokens = body.get("authTokens").is_some_and(|tokens| !tokens.is_null());
		let auth_token = if has_tokens {
			match body.x_take::<Vec<DirectoryAuthToken>>("authTokens") {
				Ok(tokens) => tokens.into_iter().next(),
				Err(err) => {
					tracing::warn!(
						target: "media_relay::resolver",
						"Destination '{destination_name}' has unreadable authTokens: {err}"
					);
					None
				}
			}
		} else {
			None
		};

		into_resolved_destination(destination_name, config, auth_token)
	}

	/// The destination name is pushed as a single, percent-encoded, path segment.
	fn lookup_url(&self, destination_name: &str) -> Result<String, BoxError> {
		let mut url = reqwest::Url::parse(&self.endpoint.join(DESTINATIONS_PATH))?;
		url.path_segments_mut()
			.map_err(|_| format!("Directory base url '{}' cannot be a base", self.endpoint.base_url()))?
			.push(destination_name);

		Ok(url.into())
	}
}

// region:    --- Directory Types

#[derive(Debug, Deserialize)]
struct DirectoryDestinationConfig {
	#[serde(rename = "URL")]
	url: String,
	#[serde(rename = "Authentication")]
	authentication: String,
	#[serde(rename = "User")]
	user: Option<String>,
	#[serde(rename = "Password")]
	password: Option<String>,
}

/// An entry of `authTokens`. The directory sets `error` instead of `value` when it could not get the token.
#[derive(Debug, Deserialize)]
struct DirectoryAuthToken {
	value: Option<String>,
	error: Option<String>,
}

fn into_resolved_destination(
	destination_name: &str,
	config: DirectoryDestinationConfig,
	auth_token: Option<DirectoryAuthToken>,
) -> Result<ResolvedDestination, BoxError> {
	let DirectoryDestinationConfig {
		url,
		authentication,
		user,
		password,
	} = config;

	if url.trim().is_empty() {
		return Err(format!("Destination '{destination_name}' has no URL").into());
	}

	let (token, token_error) = match auth_token {
		Some(DirectoryAuthToken { value, error }) => (value.filter(|value| !value.is_empty()), error),
		None => (None, None),
	};

	let destination = match (authentication.as_str(), token) {
		("BasicAuthentication", _) => ResolvedDestination::basic(url, user, password),
		("NoAuthentication", None) => ResolvedDestination::no_auth(url),
		(_, Some(token)) => ResolvedDestination::bearer(url, token),
		(other, None) => {
			let mut message = format!(
				"Destination '{destination_name}' uses authentication '{other}' but the directory returned no auth token"
			);
			if let Some(token_error) = token_error {
				message.push_str(&format!(" (directory error: {token_error})"));
			}
			return Err(message.into());
		}
	};

	Ok(destination)
}

// endregion: --- Directory Types

// region:    --- Tests


// endregion: --- Tests
