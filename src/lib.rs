//! media-relay library
//!
//! Resolves a logical service name into a destination (inline basic auth or a remote destination directory),
//! then streams binary media from it (GET) or pushes a buffer to it (PUT).
//!
//! ```no_run
//! use media_relay::Client;
//! use media_relay::resolver::ServicesConfig;
//!
//! # async fn run() -> media_relay::Result<()> {
//! let services = ServicesConfig::from_json_str(
//! 	r#"{ "MediaAPI": { "kind": "rest", "credentials": {
//! 		"url": "https://media.example.com/api", "authentication": "Basic",
//! 		"username": "user", "password": "secret" } } }"#,
//! )?;
//! let client = Client::builder().with_config_provider(services).build()?;
//!
//! let image = client.fetch_buffer("images/42", "MediaAPI").await?;
//! client.send("images/43", "image/png", image, "MediaAPI").await?;
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod client;
mod error;

// -- Flatten
pub use client::*;
pub use error::{BoxError, Error, Result};

// -- Public Modules
pub mod media;
pub mod resolver;
pub mod webc;

// endregion: --- Modules
