use crate::client::{Client, ClientConfig, ClientInner, WebConfig};
use crate::resolver::{ConfigProvider, DestinationResolver, DirectoryResolver, ServicesConfig};
use crate::webc::WebClient;
use crate::{Error, Result};
use std::sync::Arc;

/// The builder for the `Client` structure.
///
/// - `ClientBuilder::default()`
/// - `Client::builder()`
#[derive(Default)]
pub struct ClientBuilder {
	config_provider: Option<Arc<dyn ConfigProvider>>,
	config: Option<ClientConfig>,
	reqwest_client: Option<reqwest::Client>,
}

/// Builder methods
impl ClientBuilder {
	/// Set the services configuration the destinations are resolved from.
	/// Without one, every service name fails to resolve with `Error::Configuration`.
	pub fn with_config_provider(mut self, config_provider: impl ConfigProvider + 'static) -> Self {
		self.config_provider = Some(Arc::new(config_provider));
		self
	}

	pub fn with_config_provider_arc(mut self, config_provider: Arc<dyn ConfigProvider>) -> Self {
		self.config_provider = Some(config_provider);
		self
	}

	/// With a client configuration.
	/// NOTE: This will replace the existing `ClientConfig`.
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn with_directory(mut self, directory: DirectoryResolver) -> Self {
		let config = self.config.take().unwrap_or_default().with_directory(directory);
		self.config = Some(config);
		self
	}

	pub fn with_web_config(mut self, web_config: WebConfig) -> Self {
		let config = self.config.take().unwrap_or_default().with_web_config(web_config);
		self.config = Some(config);
		self
	}

	/// Use a pre-configured reqwest client. When set, the `WebConfig` is ignored.
	pub fn with_reqwest(mut self, reqwest_client: reqwest::Client) -> Self {
		self.reqwest_client = Some(reqwest_client);
		self
	}
}

/// Build
impl ClientBuilder {
	pub fn build(self) -> Result<Client> {
		let mut config = self.config.unwrap_or_default();

		let web_client = match (self.reqwest_client, config.web_config()) {
			(Some(reqwest_client), _) => WebClient::from_reqwest_client(reqwest_client),
			(None, Some(web_config)) => {
				let reqwest_client = web_config
					.apply_to_builder(reqwest::Client::builder())
					.build()
					.map_err(|cause| Error::WebClientBuild { cause })?;
				WebClient::from_reqwest_client(reqwest_client)
			}
			(None, None) => WebClient::default(),
		};

		// The directory calls go through the same transport settings as the media calls.
		config.directory = config
			.directory
			.take()
			.map(|directory| directory.with_fallback_web_client(&web_client));

		let config_provider = self
			.config_provider
			.unwrap_or_else(|| Arc::new(ServicesConfig::default()) as Arc<dyn ConfigProvider>);
		let resolver = DestinationResolver::new(config_provider, config.directory().cloned());

		let inner = ClientInner {
			web_client,
			resolver,
			config,
		};

		Ok(Client { inner: Arc::new(inner) })
	}
}
