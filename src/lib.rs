//! Rust client for the Power Virtual Server DR Automation service (`/drautomation/v1`).
//!
//! Each operation is an async method of [`DrAutomationService`] taking a typed
//! params struct from [`params`]. Required parameters are validated before any
//! I/O, the request is built from the operation's static descriptor, the
//! [`resolver::Authenticator`] adds credentials, and a [`webc::Transport`]
//! (the reqwest based [`webc::WebClient`] by default) sends it.
//!
//! ```no_run
//! use dr_automation::DrAutomationService;
//! use dr_automation::params::GetLastOperationParams;
//! use dr_automation::resolver::BearerTokenAuthenticator;
//!
//! # async fn run() -> dr_automation::Result<()> {
//! let service = DrAutomationService::new(BearerTokenAuthenticator::new("token"))?;
//! let res = service.get_last_operation(GetLastOperationParams::new("instance-id")).await?;
//! println!("{}", res.result);
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod error;
mod service;

pub use error::{Error, ParamNames, Result};
pub use service::*;

pub mod config;
pub mod operation;
pub mod params;
pub mod resolver;
pub mod webc;

/// The transport error, as surfaced in `Error::Webc`.
pub use webc::Error as TransportError;

// endregion: --- Modules
