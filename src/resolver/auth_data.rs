use crate::resolver::{Authentication, ResolvedDestination};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// `AuthData` is the typed form of the destination credentials, ready to become request headers.
#[derive(Clone)]
pub enum AuthData {
	None,
	Basic { username: String, password: String },
	Bearer(String),
}

/// Constructors
impl AuthData {
	/// Missing basic fields are sent as empty strings.
	/// A bearer destination without a token is sent without `Authorization`.
	pub fn from_destination(destination: &ResolvedDestination) -> Self {
		match destination.authentication {
			Authentication::Basic => AuthData::Basic {
				username: destination.username.clone().unwrap_or_default(),
				password: destination.password.clone().unwrap_or_default(),
			},
			Authentication::Bearer => match &destination.auth_token {
				Some(token) => AuthData::Bearer(token.clone()),
				None => AuthData::None,
			},
			Authentication::NoAuthentication => AuthData::None,
		}
	}
}

/// Headers
impl AuthData {
	pub fn to_headers(&self) -> Vec<(String, String)> {
		match self {
			AuthData::None => Vec::new(),
			AuthData::Basic { username, password } => {
				let encoded = STANDARD.encode(format!("{username}:{password}"));
				vec![("Authorization".to_string(), format!("Basic {encoded}"))]
			}
			AuthData::Bearer(token) => vec![("Authorization".to_string(), format!("Bearer {token}"))],
		}
	}
}

// region:    --- AuthData Std Impls

// Implement Debug to redact the secrets
impl std::fmt::Debug for AuthData {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AuthData::None => write!(f, "AuthData::None"),
			AuthData::Basic { username, .. } => write!(f, "AuthData::Basic {{ username: {username:?}, password: REDACTED }}"),
			AuthData::Bearer(_) => write!(f, "AuthData::Bearer(REDACTED)"),
		}
	}
}

// endregion: --- AuthData Std Impls

// region:    --- Tests


// endregion: --- Tests
