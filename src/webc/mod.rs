//! The `webc` module is the outbound HTTP layer on top of `reqwest`.
//! It knows nothing about services or destinations. It sends the request and hands back the raw streaming response.

// region:    --- Modules

mod error;
mod web_client;
mod web_response;
mod web_stream;

pub use error::{Error, Result};
pub use web_client::*;
pub use web_response::*;
pub use web_stream::*;

// endregion: --- Modules
