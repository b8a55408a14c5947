use crate::resolver::DirectoryResolver;
use std::time::Duration;

/// The client configuration used in the default client construct.
#[derive(Debug, Default, Clone)]
pub struct ClientConfig {
	pub(super) directory: Option<DirectoryResolver>,
	pub(super) web_config: Option<WebConfig>,
}

/// Chainable setters
impl ClientConfig {
	/// Set the destination directory used for services configured with a `destination`.
	pub fn with_directory(mut self, directory: DirectoryResolver) -> Self {
		self.directory = Some(directory);
		self
	}

	pub fn with_web_config(mut self, web_config: WebConfig) -> Self {
		self.web_config = Some(web_config);
		self
	}
}

/// Getters (as ref/deref)
impl ClientConfig {
	pub fn directory(&self) -> Option<&DirectoryResolver> {
		self.directory.as_ref()
	}

	pub fn web_config(&self) -> Option<&WebConfig> {
		self.web_config.as_ref()
	}
}

// region:    --- WebConfig

/// Transport settings applied to the underlying `reqwest::Client`.
///
/// This layer has no timeout of its own. Without one here, a stuck remote call waits as long as the transport does.
#[derive(Debug, Default, Clone)]
pub struct WebConfig {
	pub timeout: Option<Duration>,
	pub connect_timeout: Option<Duration>,
	pub user_agent: Option<String>,
}

impl WebConfig {
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
		self.connect_timeout = Some(timeout);
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}

	pub(super) fn apply_to_builder(&self, mut builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
		if let Some(timeout) = self.timeout {
			builder = builder.timeout(timeout);
		}
		if let Some(timeout) = self.connect_timeout {
			builder = builder.connect_timeout(timeout);
		}
		if let Some(user_agent) = self.user_agent.as_deref() {
			builder = builder.user_agent(user_agent);
		}
		builder
	}
}

// endregion: --- WebConfig
