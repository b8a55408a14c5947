use crate::resolver::{BASIC_AUTHENTICATION, ConfigProvider, DirectoryResolver, ResolvedDestination};
use crate::{Error, Result};
use std::sync::Arc;

/// Resolves a logical service name into a `ResolvedDestination`.
///
/// - A `credentials.destination` is looked up in the `DirectoryResolver` (remote takes precedence).
/// - Otherwise the inline credentials must be `authentication: "Basic"` with a non-empty `url`.
///
/// Every call re-resolves. Nothing is cached or retried.
#[derive(Clone)]
pub struct DestinationResolver {
	config_provider: Arc<dyn ConfigProvider>,
	directory: Option<DirectoryResolver>,
}

/// Constructors
impl DestinationResolver {
	pub fn new(config_provider: Arc<dyn ConfigProvider>, directory: Option<DirectoryResolver>) -> Self {
		Self {
			config_provider,
			directory,
		}
	}
}

impl DestinationResolver {
	pub async fn resolve(&self, service_name: &str) -> Result<ResolvedDestination> {
		let service = service_name.to_string();

		let config = self
			.config_provider
			.service_config(service_name)
			.ok_or_else(|| Error::Configuration { service: service.clone() })?;

		let credentials = config.credentials.unwrap_or_default();

		// -- Remote destination
		if let Some(destination_name) = credentials.destination {
			let Some(directory) = self.directory.as_ref() else {
				return Err(Error::DestinationRetrieval {
					service,
					cause: format!("No destination directory configured to look up '{destination_name}'").into(),
				});
			};

			return directory.resolve(&destination_name).await.map_err(|cause| {
				tracing::warn!(
					target: "media_relay::resolver",
					"Directory lookup of '{destination_name}' for service '{service_name}' failed: {cause}"
				);
				Error::DestinationRetrieval { service, cause }
			});
		}

		// -- Inline Basic credentials
		if credentials.authentication.as_deref() != Some(BASIC_AUTHENTICATION) {
			return Err(Error::Authentication { service });
		}

		let url = match credentials.url {
			Some(url) if !url.is_empty() => url,
			_ => return Err(Error::Url { service }),
		};

		Ok(ResolvedDestination::basic(url, credentials.username, credentials.password))
	}
}

impl std::fmt::Debug for DestinationResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DestinationResolver")
			.field("directory", &self.directory)
			.finish_non_exhaustive()
	}
}

// region:    --- Tests


// endregion: --- Tests
