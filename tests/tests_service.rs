mod support;

use crate::support::{CountingAuthenticator, RecordingTransport, Result, TEST_SERVICE_URL, expected_url};
use dr_automation::config::{ConfigSource, ExternalConfig};
use dr_automation::params::{GetDrSummaryParams, GetEventParams, UpdateApikeyParams};
use dr_automation::resolver::{AuthType, BearerTokenAuthenticator, NoAuthAuthenticator};
use dr_automation::{DrAutomationService, Error};
use std::sync::Arc;
use std::sync::atomic::Ordering;

// region:    --- Builder

#[test]
fn test_service_builder_defaults() -> Result<()> {
	let service = DrAutomationService::new(NoAuthAuthenticator)?;

	assert_eq!(service.service_url(), DrAutomationService::DEFAULT_SERVICE_URL);
	assert_eq!(service.service_url(), "https://power-dra.cloud.ibm.com");
	assert_eq!(service.service_name(), "dr_automation_service");
	assert_eq!(service.authenticator().auth_type(), AuthType::NoAuth);
	assert!(!service.is_retries_enabled());

	Ok(())
}

#[test]
fn test_service_builder_explicit_values() -> Result<()> {
	let service = DrAutomationService::builder()
		.with_service_url(TEST_SERVICE_URL)
		.with_service_name("my_dr")
		.with_authenticator(BearerTokenAuthenticator::new("tok"))
		.with_retries(true)
		.build()?;

	assert_eq!(service.service_url(), TEST_SERVICE_URL);
	assert_eq!(service.service_name(), "my_dr");
	assert_eq!(service.authenticator().auth_type(), AuthType::BearerToken);
	assert!(service.is_retries_enabled());
	// secrets stay out of Debug
	assert!(!format!("{service:?}").contains("tok\""));

	Ok(())
}

#[test]
fn test_service_builder_from_config() -> Result<()> {
	let config = ExternalConfig::from_pairs(
		DrAutomationService::DEFAULT_SERVICE_NAME,
		[
			("DR_AUTOMATION_SERVICE_URL", TEST_SERVICE_URL),
			("DR_AUTOMATION_SERVICE_AUTH_TYPE", "bearerToken"),
			("DR_AUTOMATION_SERVICE_BEARER_TOKEN", "tok"),
			("DR_AUTOMATION_SERVICE_ENABLE_RETRIES", "true"),
		],
	)?;

	let service = DrAutomationService::builder().with_config(config).build()?;

	assert_eq!(service.service_url(), TEST_SERVICE_URL);
	assert_eq!(service.authenticator().auth_type(), AuthType::BearerToken);
	assert!(service.is_retries_enabled());

	Ok(())
}

#[test]
fn test_service_builder_explicit_url_beats_config() -> Result<()> {
	let config = ExternalConfig::from_pairs(
		DrAutomationService::DEFAULT_SERVICE_NAME,
		[
			("DR_AUTOMATION_SERVICE_URL", "https://from-config.example.com"),
			("DR_AUTOMATION_SERVICE_AUTH_TYPE", "noauth"),
		],
	)?;

	let service = DrAutomationService::builder()
		.with_service_url(TEST_SERVICE_URL)
		.with_config(config)
		.build()?;

	assert_eq!(service.service_url(), TEST_SERVICE_URL);

	Ok(())
}

#[test]
fn test_service_builder_config_errors() -> Result<()> {
	let iam = ExternalConfig::from_pairs(
		DrAutomationService::DEFAULT_SERVICE_NAME,
		[("DR_AUTOMATION_SERVICE_APIKEY", "k")],
	)?;
	let res = DrAutomationService::builder().with_config(iam).build();
	assert!(matches!(res, Err(Error::AuthTypeNotSupported { auth_type }) if auth_type == "iam"));

	let empty = ExternalConfig::default();
	let res = DrAutomationService::builder().with_config(empty).build();
	assert!(matches!(res, Err(Error::ConfigPropertyMissing { property, .. }) if property == "AUTH_TYPE"));

	Ok(())
}

#[test]
#[serial_test::serial]
fn test_service_read_unknown_service_name() -> Result<()> {
	// No credentials file nor environment for this name.
	let config = ExternalConfig::read("dr_automation_unconfigured_test")?;
	assert!(config.is_empty());
	assert_eq!(config.source, ConfigSource::None);

	let res = DrAutomationService::builder()
		.with_service_name("dr_automation_unconfigured_test")
		.build();
	assert!(matches!(res, Err(Error::ConfigPropertyMissing { .. })));

	Ok(())
}

// endregion: --- Builder

// region:    --- Retries Flag

#[test]
fn test_service_clones_share_retries_flag() -> Result<()> {
	let service = DrAutomationService::new(NoAuthAuthenticator)?;
	let other = service.clone();

	service.enable_retries();
	assert!(other.is_retries_enabled());

	other.disable_retries();
	assert!(!service.is_retries_enabled());

	Ok(())
}

// endregion: --- Retries Flag

// region:    --- Invoke

#[tokio::test]
async fn test_service_validation_skips_authenticator() -> Result<()> {
	let counting = Arc::new(CountingAuthenticator::default());
	let transport = Arc::new(RecordingTransport::default());
	let service = DrAutomationService::builder()
		.with_service_url(TEST_SERVICE_URL)
		.with_shared_authenticator(counting.clone())
		.with_transport(transport.clone())
		.build()?;

	let res = service.get_event(GetEventParams::new("i1", "")).await;
	// an empty string is a value, not a missing parameter
	assert!(res.is_ok());
	assert_eq!(counting.count.load(Ordering::SeqCst), 1);

	let res = service.get_event(GetEventParams::default()).await;
	assert!(matches!(res, Err(Error::MissingParameters { .. })));
	assert_eq!(counting.count.load(Ordering::SeqCst), 1);
	assert_eq!(transport.call_count(), 1);

	Ok(())
}

#[tokio::test]
async fn test_service_bearer_header_reaches_transport() -> Result<()> {
	let transport = Arc::new(RecordingTransport::default());
	let service = DrAutomationService::builder()
		.with_service_url(TEST_SERVICE_URL)
		.with_authenticator(BearerTokenAuthenticator::new("my-token"))
		.with_transport(transport.clone())
		.build()?;

	// A caller `Authorization` override does not replace the authenticator's.
	let params = GetDrSummaryParams::new("i1").with_header("Authorization", "Bearer other");
	service.get_dr_summary(params).await?;

	let request = transport.last_request();
	assert_eq!(request.header("Authorization"), Some("Bearer my-token"));
	assert_eq!(request.url, expected_url("/drautomation/v1/dr_summary/i1"));
	assert!(request.header("User-Agent").is_some_and(|ua| ua.starts_with("dr-automation-rust/")));

	Ok(())
}

#[tokio::test]
async fn test_service_base_url_with_path_prefix() -> Result<()> {
	let transport = Arc::new(RecordingTransport::default());
	let service = DrAutomationService::builder()
		.with_service_url("https://proxy.example.com/dra/")
		.with_authenticator(NoAuthAuthenticator)
		.with_transport(transport.clone())
		.build()?;

	service.update_apikey(UpdateApikeyParams::new("a b", "k")).await?;

	assert_eq!(
		transport.last_request().url,
		"https://proxy.example.com/dra/drautomation/v1/apikey/a%20b"
	);

	Ok(())
}

#[tokio::test]
async fn test_service_invalid_url_fails_at_call() -> Result<()> {
	let transport = Arc::new(RecordingTransport::default());
	let service = DrAutomationService::builder()
		.with_service_url("not a url")
		.with_authenticator(NoAuthAuthenticator)
		.with_transport(transport.clone())
		.build()?;

	let res = service.get_dr_summary(GetDrSummaryParams::new("i1")).await;

	assert!(matches!(res, Err(Error::InvalidServiceUrl { url, .. }) if url == "not a url"));
	assert_eq!(transport.call_count(), 0);

	Ok(())
}

// endregion: --- Invoke
