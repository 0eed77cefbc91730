//! External configuration of a service instance.
//!
//! Properties are named `<SERVICE_NAME>_<PROPERTY>`, with the service name
//! upper-cased and `-` turned into `_` (e.g., `DR_AUTOMATION_SERVICE_URL`).
//!
//! Sources (the first one holding any property for the service wins):
//! 1. The credentials file named by `IBM_CREDENTIALS_FILE`
//! 2. `ibm-credentials.env` in the current directory
//! 3. The process environment

use crate::resolver::{AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator};
use crate::webc::RetryConfig;
use crate::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";
pub const DEFAULT_CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

// -- Property names (after the service prefix)
const PROP_URL: &str = "URL";
const PROP_AUTH_TYPE: &str = "AUTH_TYPE";
const PROP_APIKEY: &str = "APIKEY";
const PROP_BEARER_TOKEN: &str = "BEARER_TOKEN";
const PROP_USERNAME: &str = "USERNAME";
const PROP_PASSWORD: &str = "PASSWORD";
const PROP_ENABLE_RETRIES: &str = "ENABLE_RETRIES";
const PROP_MAX_RETRIES: &str = "MAX_RETRIES";
const PROP_RETRY_INTERVAL: &str = "RETRY_INTERVAL";

// region:    --- ExternalConfig

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigSource {
	CredentialsFile,
	Environment,
	#[default]
	None,
}

/// The resolved properties of one service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalConfig {
	pub service_name: String,
	pub source: ConfigSource,
	pub url: Option<String>,
	pub auth_type: Option<String>,
	pub apikey: Option<String>,
	pub bearer_token: Option<String>,
	pub username: Option<String>,
	pub password: Option<String>,
	pub enable_retries: Option<bool>,
	pub max_retries: Option<u32>,
	/// Max retry interval, in seconds on the wire.
	pub retry_interval: Option<Duration>,
}

/// Loaders
impl ExternalConfig {
	/// Reads the configuration of `service_name` from the external sources.
	pub fn read(service_name: &str) -> Result<Self> {
		let credentials_path = credentials_file_path();
		Self::read_from(service_name, credentials_path.as_deref(), env_pairs(std::env::vars_os()))
	}

	/// Same as `read`, with the credentials file and the environment given explicitly.
	pub fn read_from<I>(service_name: &str, credentials_path: Option<&Path>, env: I) -> Result<Self>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		if let Some(path) = credentials_path {
			let mut config = Self::from_pairs(service_name, read_credentials_file(path)?)?;
			if !config.is_empty() {
				debug!(service_name, path = %path.display(), "service configuration from credentials file");
				config.source = ConfigSource::CredentialsFile;
				return Ok(config);
			}
		}

		let mut config = Self::from_pairs(service_name, env)?;
		if !config.is_empty() {
			debug!(service_name, "service configuration from environment");
			config.source = ConfigSource::Environment;
		}
		Ok(config)
	}

	/// Builds the configuration from `(key, value)` pairs, keeping the keys of `service_name` only.
	pub fn from_pairs<I, K, V>(service_name: &str, pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let prefix = format!("{}_", env_prefix(service_name));
		let mut config = Self {
			service_name: service_name.to_string(),
			..Default::default()
		};

		for (key, value) in pairs {
			let Some(property) = key.as_ref().strip_prefix(&prefix) else {
				continue;
			};
			let value: String = value.into();
			match property {
				PROP_URL => config.url = Some(value),
				PROP_AUTH_TYPE => config.auth_type = Some(value),
				PROP_APIKEY => config.apikey = Some(value),
				PROP_BEARER_TOKEN => config.bearer_token = Some(value),
				PROP_USERNAME => config.username = Some(value),
				PROP_PASSWORD => config.password = Some(value),
				PROP_ENABLE_RETRIES => config.enable_retries = Some(parse_bool(service_name, property, &value)?),
				PROP_MAX_RETRIES => config.max_retries = Some(parse_u32(service_name, property, &value)?),
				PROP_RETRY_INTERVAL => {
					let secs = parse_u32(service_name, property, &value)?;
					config.retry_interval = Some(Duration::from_secs(u64::from(secs)));
				}
				_ => (),
			}
		}

		Ok(config)
	}
}

/// Getters
impl ExternalConfig {
	pub fn is_empty(&self) -> bool {
		self.url.is_none()
			&& self.auth_type.is_none()
			&& self.apikey.is_none()
			&& self.bearer_token.is_none()
			&& self.username.is_none()
			&& self.password.is_none()
			&& self.enable_retries.is_none()
			&& self.max_retries.is_none()
			&& self.retry_interval.is_none()
	}

	/// Builds the authenticator selected by `AUTH_TYPE`.
	///
	/// Without `AUTH_TYPE`, a configured `APIKEY` implies `iam`, which must be
	/// provided by the caller (`AuthTypeNotSupported`).
	pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>> {
		let auth_type_value = match (&self.auth_type, &self.apikey) {
			(Some(auth_type), _) => auth_type.clone(),
			(None, Some(_)) => AuthType::Iam.to_string(),
			(None, None) => return Err(self.missing(PROP_AUTH_TYPE)),
		};

		let auth_type = AuthType::from_config_str(&auth_type_value).ok_or_else(|| Error::ConfigPropertyInvalid {
			service_name: self.service_name.clone(),
			property: PROP_AUTH_TYPE.to_string(),
			value: auth_type_value.clone(),
		})?;

		let authenticator: Arc<dyn Authenticator> = match auth_type {
			AuthType::NoAuth => Arc::new(NoAuthAuthenticator),
			AuthType::BearerToken => {
				let token = self.bearer_token.as_deref().ok_or_else(|| self.missing(PROP_BEARER_TOKEN))?;
				Arc::new(BearerTokenAuthenticator::new(token))
			}
			AuthType::Basic => {
				let username = self.username.as_deref().ok_or_else(|| self.missing(PROP_USERNAME))?;
				let password = self.password.as_deref().ok_or_else(|| self.missing(PROP_PASSWORD))?;
				Arc::new(BasicAuthenticator::new(username, password))
			}
			AuthType::Iam | AuthType::Container | AuthType::Vpc | AuthType::Cp4d => {
				return Err(Error::AuthTypeNotSupported {
					auth_type: auth_type.to_string(),
				});
			}
		};

		Ok(authenticator)
	}

	/// The retry configuration, when any retry property is set.
	pub fn retry_config(&self) -> Option<RetryConfig> {
		if self.max_retries.is_none() && self.retry_interval.is_none() {
			return None;
		}
		let mut retry_config = RetryConfig::default();
		if let Some(max_retries) = self.max_retries {
			retry_config = retry_config.with_max_retries(max_retries);
		}
		if let Some(interval) = self.retry_interval {
			retry_config = retry_config.with_max_retry_interval(interval);
		}
		Some(retry_config)
	}

	fn missing(&self, property: &str) -> Error {
		Error::ConfigPropertyMissing {
			service_name: self.service_name.clone(),
			property: property.to_string(),
		}
	}
}

// endregion: --- ExternalConfig

// region:    --- Support

fn env_prefix(service_name: &str) -> String {
	service_name.to_ascii_uppercase().replace('-', "_")
}

fn credentials_file_path() -> Option<PathBuf> {
	if let Ok(path) = std::env::var(CREDENTIALS_FILE_ENV) {
		return Some(PathBuf::from(path));
	}
	let path = PathBuf::from(DEFAULT_CREDENTIALS_FILE_NAME);
	path.is_file().then_some(path)
}

/// The `KEY=VALUE` pairs of a dotenv style file. The process environment is left untouched.
fn read_credentials_file(path: &Path) -> Result<Vec<(String, String)>> {
	let read_err = |err: dotenvy::Error| Error::CredentialsFileRead {
		path: path.display().to_string(),
		cause: err.to_string(),
	};
	dotenvy::from_path_iter(path)
		.map_err(read_err)?
		.map(|item| item.map_err(read_err))
		.collect()
}

/// Keeps the UTF-8 entries only. Other entries cannot hold a service property.
fn env_pairs(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Vec<(String, String)> {
	vars.into_iter()
		.filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
		.collect()
}

fn parse_bool(service_name: &str, property: &str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" => Ok(true),
		"false" => Ok(false),
		_ => Err(invalid(service_name, property, value)),
	}
}

fn parse_u32(service_name: &str, property: &str, value: &str) -> Result<u32> {
	value.trim().parse().map_err(|_| invalid(service_name, property, value))
}

fn invalid(service_name: &str, property: &str, value: &str) -> Error {
	Error::ConfigPropertyInvalid {
		service_name: service_name.to_string(),
		property: property.to_string(),
		value: value.to_string(),
	}
}

// endregion: --- Support

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write as _;
	use tempfile::NamedTempFile;

	const SERVICE: &str = "dr_automation_service";

	#[test]
	fn test_from_pairs_keeps_service_keys_only() {
		let config = ExternalConfig::from_pairs(
			SERVICE,
			[
				("DR_AUTOMATION_SERVICE_URL", "https://power-dra.test.cloud.ibm.com"),
				("DR_AUTOMATION_SERVICE_AUTH_TYPE", "noauth"),
				("OTHER_SERVICE_URL", "https://other.example.com"),
				("DR_AUTOMATION_SERVICE_UNKNOWN", "x"),
			],
		)
		.unwrap();

		assert_eq!(config.url.as_deref(), Some("https://power-dra.test.cloud.ibm.com"));
		assert_eq!(config.auth_type.as_deref(), Some("noauth"));
		assert!(!config.is_empty());
	}

	#[test]
	fn test_from_pairs_prefix_from_dashed_name() {
		let config = ExternalConfig::from_pairs("dr-automation", [("DR_AUTOMATION_URL", "https://x")]).unwrap();
		assert_eq!(config.url.as_deref(), Some("https://x"));
	}

	#[test]
	fn test_from_pairs_retry_properties() {
		let config = ExternalConfig::from_pairs(
			SERVICE,
			[
				("DR_AUTOMATION_SERVICE_ENABLE_RETRIES", "TRUE"),
				("DR_AUTOMATION_SERVICE_MAX_RETRIES", "2"),
				("DR_AUTOMATION_SERVICE_RETRY_INTERVAL", "10"),
			],
		)
		.unwrap();

		assert_eq!(config.enable_retries, Some(true));
		let retry_config = config.retry_config().unwrap();
		assert_eq!(retry_config.max_retries, 2);
		assert_eq!(retry_config.max_retry_interval, Duration::from_secs(10));
	}

	#[test]
	fn test_from_pairs_invalid_number() {
		let res = ExternalConfig::from_pairs(SERVICE, [("DR_AUTOMATION_SERVICE_MAX_RETRIES", "many")]);
		assert!(matches!(res, Err(Error::ConfigPropertyInvalid { property, .. }) if property == "MAX_RETRIES"));
	}

	#[test]
	fn test_authenticator_selection() {
		let bearer = ExternalConfig::from_pairs(
			SERVICE,
			[
				("DR_AUTOMATION_SERVICE_AUTH_TYPE", "bearerToken"),
				("DR_AUTOMATION_SERVICE_BEARER_TOKEN", "tok"),
			],
		)
		.unwrap();
		assert_eq!(bearer.authenticator().unwrap().auth_type(), AuthType::BearerToken);

		let basic_missing_password = ExternalConfig::from_pairs(
			SERVICE,
			[
				("DR_AUTOMATION_SERVICE_AUTH_TYPE", "basic"),
				("DR_AUTOMATION_SERVICE_USERNAME", "me"),
			],
		)
		.unwrap();
		assert!(matches!(
			basic_missing_password.authenticator(),
			Err(Error::ConfigPropertyMissing { property, .. }) if property == "PASSWORD"
		));

		// APIKEY without AUTH_TYPE means IAM
		let iam = ExternalConfig::from_pairs(SERVICE, [("DR_AUTOMATION_SERVICE_APIKEY", "k")]).unwrap();
		assert!(matches!(iam.authenticator(), Err(Error::AuthTypeNotSupported { auth_type }) if auth_type == "iam"));

		let empty = ExternalConfig::from_pairs(SERVICE, Vec::<(String, String)>::new()).unwrap();
		assert!(matches!(empty.authenticator(), Err(Error::ConfigPropertyMissing { .. })));
	}

	#[test]
	fn test_read_from_credentials_file_wins_over_env() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(
			file,
			"# dr automation\nDR_AUTOMATION_SERVICE_URL=https://file.example.com # primary\nexport DR_AUTOMATION_SERVICE_AUTH_TYPE=noauth\nDR_AUTOMATION_SERVICE_USERNAME=\"me\""
		)
		.unwrap();
		let env = vec![("DR_AUTOMATION_SERVICE_URL".to_string(), "https://env.example.com".to_string())];

		let config = ExternalConfig::read_from(SERVICE, Some(file.path()), env).unwrap();

		assert_eq!(config.source, ConfigSource::CredentialsFile);
		assert_eq!(config.url.as_deref(), Some("https://file.example.com"));
		assert_eq!(config.auth_type.as_deref(), Some("noauth"));
		assert_eq!(config.username.as_deref(), Some("me"));
	}

	#[test]
	fn test_read_from_file_without_service_falls_through() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "OTHER_SERVICE_URL=https://other.example.com").unwrap();
		let env = vec![
			("DR_AUTOMATION_SERVICE_URL".to_string(), "https://env.example.com".to_string()),
			("DR_AUTOMATION_SERVICE_AUTH_TYPE".to_string(), "noauth".to_string()),
		];

		let config = ExternalConfig::read_from(SERVICE, Some(file.path()), env).unwrap();

		assert_eq!(config.source, ConfigSource::Environment);
		assert_eq!(config.url.as_deref(), Some("https://env.example.com"));
	}

	#[test]
	fn test_read_from_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing-credentials.env");

		let res = ExternalConfig::read_from(SERVICE, Some(&path), Vec::<(String, String)>::new());

		assert!(matches!(res, Err(Error::CredentialsFileRead { path: p, .. }) if p.ends_with("missing-credentials.env")));
	}

	#[test]
	fn test_read_from_nothing_configured() {
		let config = ExternalConfig::read_from(SERVICE, None, Vec::<(String, String)>::new()).unwrap();
		assert!(config.is_empty());
		assert_eq!(config.source, ConfigSource::None);
	}

	#[cfg(unix)]
	#[test]
	fn test_env_pairs_skips_non_utf8() {
		use std::os::unix::ffi::OsStringExt;

		let vars = vec![
			(OsString::from("BAD_VALUE"), OsString::from_vec(vec![0xff])),
			(OsString::from_vec(vec![0xfe]), OsString::from("x")),
			(OsString::from("DR_AUTOMATION_SERVICE_AUTH_TYPE"), OsString::from("noauth")),
		];

		let pairs = env_pairs(vars);

		assert_eq!(
			pairs,
			vec![("DR_AUTOMATION_SERVICE_AUTH_TYPE".to_string(), "noauth".to_string())]
		);
	}
}
