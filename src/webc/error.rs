use derive_more::{Display, From};
use reqwest::StatusCode;

pub type Result<T> = core::result::Result<T, Error>;

/// Transport level error. Forwarded unchanged by the service layer.
#[derive(Debug, Display, From)]
pub enum Error {
	#[display("Request failed with status {status}: {body}")]
	ResponseFailedStatus {
		status: StatusCode,
		body: String,
		headers: Vec<(String, String)>,
	},

	#[display("Response with status {status} is not JSON: {cause}")]
	ResponseFailedNotJson {
		status: StatusCode,
		body: String,
		cause: serde_json::Error,
	},

	#[display("Invalid request header '{name}'")]
	InvalidHeader { name: String },

	// -- Externals
	#[from]
	#[display("{_0}")]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

impl Error {
	/// The HTTP status of a failed response, if this error carries one.
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::ResponseFailedStatus { status, .. } | Self::ResponseFailedNotJson { status, .. } => Some(*status),
			Self::Reqwest(err) => err.status(),
			Self::InvalidHeader { .. } => None,
		}
	}
}
