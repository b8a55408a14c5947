use crate::webc;
use derive_more::{Display, From};
use reqwest::StatusCode;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

/// Boxed error used at the user-provided seams (e.g., directory resolver functions).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Display, From)]
pub enum Error {
	// -- Destination Resolution
	#[display("Service '{service}' is not configured")]
	Configuration { service: String },

	#[display("Service '{service}' has no usable credentials (expected a destination or Basic authentication)")]
	Authentication { service: String },

	#[display("Service '{service}' has Basic credentials but no url")]
	Url { service: String },

	#[display("Destination retrieval failed for service '{service}'")]
	DestinationRetrieval { service: String, cause: BoxError },

	// -- Remote Calls
	#[display("Fetching media from '{url}' failed")]
	FetchFailed { url: String, webc_error: webc::Error },

	#[display("Sending media to '{url}' failed")]
	SendFailed { url: String, webc_error: webc::Error },

	#[display("Remote service rejected the media stream sent to '{url}' with status {status}")]
	StreamRejected { url: String, status: StatusCode, body: String },

	// -- Streams
	#[display("Relaying the remote media stream failed")]
	StreamRelay { cause: webc::Error },

	#[display("Writing to the response sink failed")]
	SinkWrite { cause: std::io::Error },

	// -- Config
	#[display("Cannot read services config file '{}'", path.display())]
	ConfigRead { path: PathBuf, cause: std::io::Error },

	#[display("Cannot parse services config")]
	#[from]
	ConfigParse(serde_json::Error),

	#[display("Cannot build the web client")]
	WebClientBuild { cause: reqwest::Error },
}

/// Classification helpers
impl Error {
	/// True for the failures raised by the destination resolution step, before any media call.
	pub fn is_resolution(&self) -> bool {
		matches!(
			self,
			Self::Configuration { .. } | Self::Authentication { .. } | Self::Url { .. } | Self::DestinationRetrieval { .. }
		)
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::DestinationRetrieval { cause, .. } => Some(cause.as_ref()),
			Self::FetchFailed { webc_error, .. } | Self::SendFailed { webc_error, .. } => Some(webc_error),
			Self::StreamRelay { cause } => Some(cause),
			Self::SinkWrite { cause } | Self::ConfigRead { cause, .. } => Some(cause),
			Self::ConfigParse(cause) => Some(cause),
			Self::WebClientBuild { cause } => Some(cause),
			Self::Configuration { .. } | Self::Authentication { .. } | Self::Url { .. } | Self::StreamRejected { .. } => None,
		}
	}
}

// endregion: --- Error Boilerplate
