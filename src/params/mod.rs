//! Typed call parameters, one struct per operation.
//!
//! All fields are optional so an empty (`Default`) value can be expressed; the
//! request builder rejects it with `Error::MissingParameters`. `new(..)` takes the
//! required values, and `with_..` setters add the optional ones.
//!
//! The structs (de)serialize with the service's camelCase parameter names, so a
//! call can also be loaded from a JSON document.

// region:    --- Modules

mod apikey_params;
mod dr_params;
mod event_params;
mod manage_dr_params;
mod workspace_params;

pub use apikey_params::*;
pub use dr_params::*;
pub use event_params::*;
pub use manage_dr_params::*;
pub use workspace_params::*;

// endregion: --- Modules

/// Setters shared by every params struct (`acceptLanguage` and header overrides).
macro_rules! impl_common_setters {
	($params:ty) => {
		/// Common Setters
		impl $params {
			/// Sets the `Accept-Language` request header.
			#[must_use]
			pub fn with_accept_language(mut self, value: impl Into<String>) -> Self {
				self.accept_language = Some(value.into());
				self
			}

			/// Adds a header override. It replaces any computed header of the same name
			/// (`Accept`, `Content-Type`, `Accept-Language`), but not the authenticator's `Authorization`.
			#[must_use]
			pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
				self.headers.push((name.into(), value.into()));
				self
			}
		}
	};
}

pub(crate) use impl_common_setters;

/// Debug value of a secret field.
pub(crate) fn redacted(value: &Option<String>) -> Option<&'static str> {
	value.as_ref().map(|_| "REDACTED")
}
