//! Resolvers for where a request goes (`Endpoint`) and how it is credentialed (`Authenticator`).

// region:    --- Modules

mod authenticator;
mod endpoint;

pub use authenticator::*;
pub use endpoint::*;

// endregion: --- Modules
