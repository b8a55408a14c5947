//! Resolvers turn a logical service name into a concrete destination (URL + auth).
//!
//! - `ServicesConfig` / `ConfigProvider` hold the local service configuration.
//! - `DirectoryResolver` is the seam to the remote destination directory (`HttpDirectory` is the built-in one).
//! - `DestinationResolver` puts them together.

// region:    --- Modules

mod auth_data;
mod destination;
mod destination_resolver;
mod directory_resolver;
mod endpoint;
mod http_directory;
mod service_config;

pub use auth_data::*;
pub use destination::*;
pub use destination_resolver::*;
pub use directory_resolver::*;
pub use endpoint::*;
pub use http_directory::*;
pub use service_config::*;

// endregion: --- Modules
