//! The operation layer: static descriptors of each remote operation, and the
//! single request builder that validates parameters and routes them to the
//! path, query, headers or body.

// region:    --- Modules

mod descriptor;
mod operation_params;
mod request_builder;

pub use descriptor::*;
pub use operation_params::*;
pub use request_builder::*;

// endregion: --- Modules
