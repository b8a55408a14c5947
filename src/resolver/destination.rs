use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The authentication scheme of a resolved destination.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Authentication {
	/// HTTP Basic with the destination `username` / `password`.
	Basic,
	/// No `Authorization` header.
	NoAuthentication,
	/// `Authorization: Bearer <auth_token>` (token handed out by the destination directory).
	Bearer,
}

/// The minimal connection descriptor handed to the transport layer.
///
/// Built per call from the local configuration or from the destination directory, never cached.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDestination {
	pub url: String,
	pub authentication: Authentication,
	pub username: Option<String>,
	pub password: Option<String>,
	pub auth_token: Option<String>,
}

/// Constructors
impl ResolvedDestination {
	pub fn basic(url: impl Into<String>, username: Option<String>, password: Option<String>) -> Self {
		Self {
			url: url.into(),
			authentication: Authentication::Basic,
			username,
			password,
			auth_token: None,
		}
	}

	pub fn no_auth(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			authentication: Authentication::NoAuthentication,
			username: None,
			password: None,
			auth_token: None,
		}
	}

	pub fn bearer(url: impl Into<String>, token: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			authentication: Authentication::Bearer,
			username: None,
			password: None,
			auth_token: Some(token.into()),
		}
	}
}
