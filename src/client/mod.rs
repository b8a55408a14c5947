// region:    --- Modules

mod builder;
mod client_impl;
mod client_types;
mod config;
mod service_target;

pub use builder::*;
pub use client_types::*;
pub use config::*;
pub use service_target::*;

// endregion: --- Modules
