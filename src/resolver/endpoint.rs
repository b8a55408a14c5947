use std::sync::Arc;

/// A construct to store the base URL of a resolved destination.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// Join a resource path to the base URL with exactly one `/` between them.
	///
	/// An absolute `http(s)://` uri is returned as is.
	#[must_use]
	pub fn join(&self, uri: &str) -> String {
		if uri.starts_with("http://") || uri.starts_with("https://") {
			return uri.to_string();
		}

		let base = self.inner.trim_end_matches('/');
		let path = uri.trim_start_matches('/');
		if path.is_empty() {
			base.to_string()
		} else {
			format!("{base}/{path}")
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
