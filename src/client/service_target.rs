use crate::resolver::{AuthData, Endpoint, ResolvedDestination};

/// A `ServiceTarget` represents the destination and necessary details for making a media call.
///
/// This structure contains:
/// - `service`: The logical service name it was resolved from.
/// - `endpoint`: The base URL of the resolved destination.
/// - `auth`: The authentication data required to access the service.
#[derive(Debug, Clone)]
pub struct ServiceTarget {
	pub service: String,
	pub endpoint: Endpoint,
	pub auth: AuthData,
}

impl ServiceTarget {
	pub fn from_destination(service: impl Into<String>, destination: &ResolvedDestination) -> Self {
		Self {
			service: service.into(),
			endpoint: Endpoint::from_owned(destination.url.as_str()),
			auth: AuthData::from_destination(destination),
		}
	}

	/// The full URL for a resource path of this target.
	pub fn url(&self, uri: &str) -> String {
		self.endpoint.join(uri)
	}
}
