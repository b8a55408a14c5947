//! Local service configuration: logical service name -> `{ kind, credentials }`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;
use std::path::Path;

// region:    --- ConfigProvider

/// The capability to look up a service configuration by its logical name.
///
/// Injected into the `DestinationResolver` at construction (no process-wide config).
pub trait ConfigProvider: Send + Sync {
	fn service_config(&self, service_name: &str) -> Option<ServiceConfig>;
}

impl ConfigProvider for ServicesConfig {
	fn service_config(&self, service_name: &str) -> Option<ServiceConfig> {
		self.services.get(service_name).cloned()
	}
}

impl ConfigProvider for HashMap<String, ServiceConfig> {
	fn service_config(&self, service_name: &str) -> Option<ServiceConfig> {
		self.get(service_name).cloned()
	}
}

// endregion: --- ConfigProvider

// region:    --- ServicesConfig

/// The name of the environment variable holding the JSON services config (see `ServicesConfig::from_env`).
pub const SERVICES_CONFIG_ENV_NAME: &str = "MEDIA_RELAY_SERVICES";

/// All the configured services, keyed by logical service name.
///
/// The JSON form is the map itself:
/// `{ "PriceAPI": { "kind": "rest", "credentials": { "destination": "priceDest" } } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServicesConfig {
	services: HashMap<String, ServiceConfig>,
}

/// Constructors
impl ServicesConfig {
	pub fn from_json_str(json: &str) -> Result<Self> {
		let config = serde_json::from_str(json)?;
		Ok(config)
	}

	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|cause| Error::ConfigRead {
			path: path.to_path_buf(),
			cause,
		})?;
		Self::from_json_str(&content)
	}

	/// Read the JSON services config from the `MEDIA_RELAY_SERVICES` environment variable.
	/// Returns an empty config when the variable is not set.
	pub fn from_env() -> Result<Self> {
		Self::from_env_var(SERVICES_CONFIG_ENV_NAME)
	}

	pub fn from_env_var(env_name: &str) -> Result<Self> {
		match std::env::var(env_name) {
			Ok(json) => Self::from_json_str(&json),
			Err(_) => {
				tracing::debug!(target: "media_relay::resolver", "{env_name} not set, starting with no services");
				Ok(Self::default())
			}
		}
	}
}

/// Builder & Getters
impl ServicesConfig {
	pub fn with_service(mut self, service_name: impl Into<String>, config: ServiceConfig) -> Self {
		self.services.insert(service_name.into(), config);
		self
	}

	pub fn service_names(&self) -> impl Iterator<Item = &str> {
		self.services.keys().map(String::as_str)
	}
}

// endregion: --- ServicesConfig

// region:    --- ServiceConfig

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
	pub kind: Option<String>,
	pub credentials: Option<Credentials>,
}

impl ServiceConfig {
	/// A service resolved through the remote destination directory.
	pub fn from_destination(destination: impl Into<String>) -> Self {
		Self {
			kind: None,
			credentials: Some(Credentials {
				destination: Some(destination.into()),
				..Default::default()
			}),
		}
	}

	/// A service with inline Basic credentials.
	pub fn from_basic(url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			kind: None,
			credentials: Some(Credentials {
				url: Some(url.into()),
				authentication: Some(BASIC_AUTHENTICATION.to_string()),
				username: Some(username.into()),
				password: Some(password.into()),
				..Default::default()
			}),
		}
	}

	pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}
}

/// The only inline authentication value accepted by the resolver.
pub const BASIC_AUTHENTICATION: &str = "Basic";

/// Either `{ destination }` (remote) or `{ url, authentication: "Basic", username, password }` (inline).
/// When `destination` is present, it takes precedence over the inline fields.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
	pub destination: Option<String>,
	pub url: Option<String>,
	pub authentication: Option<String>,
	pub username: Option<String>,
	pub password: Option<String>,
}

// endregion: --- ServiceConfig

// region:    --- Tests


// endregion: --- Tests
