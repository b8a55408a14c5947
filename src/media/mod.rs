//! The media module adapts a fetched remote response to what the caller wants:
//! a hosting framework response (direct or buffered), a raw buffer, or a `MediaReadResult` envelope.

// region:    --- Modules

mod adapters;
mod content_disposition;
mod media_result;
mod sink;

pub use adapters::*;
pub use content_disposition::content_disposition;
pub use media_result::*;
pub use sink::*;

// endregion: --- Modules
