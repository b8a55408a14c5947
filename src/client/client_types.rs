use crate::client::{ClientBuilder, ClientConfig};
use crate::resolver::DestinationResolver;
use crate::webc::WebClient;
use std::sync::Arc;

/// The main client to fetch media from, and send media to, the configured services.
/// It is cheap to clone, and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Client {
	pub(super) inner: Arc<ClientInner>,
}

// region:    --- Client Constructors

impl Client {
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}
}

// endregion: --- Client Constructors

// region:    --- Client Getters

impl Client {
	pub(crate) fn web_client(&self) -> &WebClient {
		&self.inner.web_client
	}

	pub(crate) fn resolver(&self) -> &DestinationResolver {
		&self.inner.resolver
	}

	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}
}

// endregion: --- Client Getters

// region:    --- ClientInner

#[derive(Debug)]
pub(super) struct ClientInner {
	pub(super) web_client: WebClient,
	pub(super) resolver: DestinationResolver,
	pub(super) config: ClientConfig,
}

// endregion: --- ClientInner
