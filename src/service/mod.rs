//! The `DrAutomationService` handle and its builder.

// region:    --- Modules

mod service_builder;
mod service_impl;
mod service_types;

pub use service_builder::*;
pub use service_types::*;

// endregion: --- Modules
