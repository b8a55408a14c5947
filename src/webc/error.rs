use derive_more::{Display, From};
use reqwest::StatusCode;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[display("Response failed with status {status}")]
	ResponseFailedStatus { status: StatusCode, body: String },

	#[display("Stream failed: {_0}")]
	StreamFailed(String),

	#[display("{_0}")]
	#[from]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Reqwest(err) => Some(err),
			Self::ResponseFailedStatus { .. } | Self::StreamFailed(_) => None,
		}
	}
}

// endregion: --- Error Boilerplate
