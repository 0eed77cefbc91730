use crate::Result;
use crate::webc::WebRequestData;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use derive_more::Display;
use futures::future::BoxFuture;

// region:    --- AuthType

/// The `AUTH_TYPE` values understood by the external configuration.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
pub enum AuthType {
	#[display("noAuth")]
	NoAuth,
	#[display("bearerToken")]
	BearerToken,
	#[display("basic")]
	Basic,
	#[display("iam")]
	Iam,
	#[display("container")]
	Container,
	#[display("vpc")]
	Vpc,
	#[display("cp4d")]
	Cp4d,
}

impl AuthType {
	/// Parses a configuration value, ignoring case.
	pub fn from_config_str(value: &str) -> Option<Self> {
		let auth_type = match value.trim().to_ascii_lowercase().as_str() {
			"noauth" => Self::NoAuth,
			"bearertoken" => Self::BearerToken,
			"basic" => Self::Basic,
			"iam" => Self::Iam,
			"container" => Self::Container,
			"vpc" => Self::Vpc,
			"cp4d" => Self::Cp4d,
			_ => return None,
		};
		Some(auth_type)
	}
}

// endregion: --- AuthType

// region:    --- Authenticator

/// Adds credentials to an outgoing request.
///
/// Implementations that need to fetch or refresh a token (e.g., IAM) can do so
/// inside `authenticate`, which is awaited right before the transport is called.
pub trait Authenticator: Send + Sync + core::fmt::Debug {
	fn auth_type(&self) -> AuthType;

	fn authenticate<'a>(&'a self, request: &'a mut WebRequestData) -> BoxFuture<'a, Result<()>>;
}

// endregion: --- Authenticator

// region:    --- NoAuthAuthenticator

/// Leaves the request untouched.
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
	fn auth_type(&self) -> AuthType {
		AuthType::NoAuth
	}

	fn authenticate<'a>(&'a self, _request: &'a mut WebRequestData) -> BoxFuture<'a, Result<()>> {
		Box::pin(async { Ok(()) })
	}
}

// endregion: --- NoAuthAuthenticator

// region:    --- BearerTokenAuthenticator

/// Sends a fixed `Authorization: Bearer <token>` header.
/// The token is managed (and refreshed) by the caller.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
	bearer_token: String,
}

impl BearerTokenAuthenticator {
	pub fn new(bearer_token: impl Into<String>) -> Self {
		Self {
			bearer_token: bearer_token.into(),
		}
	}
}

// Keep the token out of logs.
impl core::fmt::Debug for BearerTokenAuthenticator {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("BearerTokenAuthenticator").field("bearer_token", &"REDACTED").finish()
	}
}

impl Authenticator for BearerTokenAuthenticator {
	fn auth_type(&self) -> AuthType {
		AuthType::BearerToken
	}

	fn authenticate<'a>(&'a self, request: &'a mut WebRequestData) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			request.set_header("Authorization", format!("Bearer {}", self.bearer_token));
			Ok(())
		})
	}
}

// endregion: --- BearerTokenAuthenticator

// region:    --- BasicAuthenticator

/// Sends `Authorization: Basic base64(username:password)`.
#[derive(Clone)]
pub struct BasicAuthenticator {
	username: String,
	password: String,
}

impl BasicAuthenticator {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
		}
	}

	fn header_value(&self) -> String {
		let credentials = STANDARD.encode(format!("{}:{}", self.username, self.password));
		format!("Basic {credentials}")
	}
}

impl core::fmt::Debug for BasicAuthenticator {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("BasicAuthenticator")
			.field("username", &self.username)
			.field("password", &"REDACTED")
			.finish()
	}
}

impl Authenticator for BasicAuthenticator {
	fn auth_type(&self) -> AuthType {
		AuthType::Basic
	}

	fn authenticate<'a>(&'a self, request: &'a mut WebRequestData) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			request.set_header("Authorization", self.header_value());
			Ok(())
		})
	}
}

// endregion: --- BasicAuthenticator

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_auth_type_from_config_str_ignores_case() {
		assert_eq!(AuthType::from_config_str("bearerToken"), Some(AuthType::BearerToken));
		assert_eq!(AuthType::from_config_str("NOAUTH"), Some(AuthType::NoAuth));
		assert_eq!(AuthType::from_config_str(" iam "), Some(AuthType::Iam));
		assert_eq!(AuthType::from_config_str("kerberos"), None);
	}

	#[test]
	fn test_basic_header_value() {
		let auth = BasicAuthenticator::new("user", "pass");
		// base64("user:pass")
		assert_eq!(auth.header_value(), "Basic dXNlcjpwYXNz");
	}

	#[test]
	fn test_debug_redacts_secrets() {
		let bearer = format!("{:?}", BearerTokenAuthenticator::new("top-secret"));
		let basic = format!("{:?}", BasicAuthenticator::new("user", "top-secret"));
		assert!(!bearer.contains("top-secret"));
		assert!(!basic.contains("top-secret"));
	}
}
