use crate::webc;
use derive_more::{Display, From};

/// Main Result type alias (with the crate [`Error`]).
pub type Result<T> = core::result::Result<T, Error>;

/// Main crate error type.
#[derive(Debug, Display, From)]
pub enum Error {
	// -- Request construction
	/// One or more required parameters were not provided. Nothing was sent.
	#[display("Missing required parameters: {names} (operation: {operation})")]
	MissingParameters { operation: &'static str, names: ParamNames },

	#[display("Invalid service URL '{url}': {cause}")]
	InvalidServiceUrl { url: String, cause: String },

	// -- Configuration
	#[display("Missing configuration property '{property}' for service '{service_name}'")]
	ConfigPropertyMissing { service_name: String, property: String },

	#[display("Invalid configuration property '{property}' value '{value}' for service '{service_name}'")]
	ConfigPropertyInvalid {
		service_name: String,
		property: String,
		value: String,
	},

	/// The auth type is valid but no built-in authenticator exists for it.
	/// Provide one through `ServiceBuilder::with_authenticator`.
	#[display("Auth type '{auth_type}' is not supported by the built-in authenticators")]
	AuthTypeNotSupported { auth_type: String },

	#[display("Cannot read credentials file '{path}': {cause}")]
	CredentialsFileRead { path: String, cause: String },

	// -- Externals
	#[from]
	#[display("{_0}")]
	Webc(webc::Error),

	#[from]
	#[display("{_0}")]
	SerdeJson(serde_json::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// region:    --- ParamNames

/// The names of the missing parameters, displayed comma separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNames(pub Vec<&'static str>);

impl ParamNames {
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains(&name)
	}

	pub fn as_slice(&self) -> &[&'static str] {
		&self.0
	}
}

impl core::fmt::Display for ParamNames {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.0.join(", "))
	}
}

// endregion: --- ParamNames
