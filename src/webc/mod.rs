//! The `webc` module holds the request/response data exchanged with the transport,
//! the `Transport` seam, and the default reqwest based `WebClient`.

// region:    --- Modules

mod error;
mod transport;
mod web_client;
mod web_request;
mod web_response;

pub use error::{Error, Result};
pub use transport::*;
pub use web_client::*;
pub use web_request::*;
pub use web_response::*;

// endregion: --- Modules
