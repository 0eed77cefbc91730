use crate::config::ExternalConfig;
use crate::resolver::{Authenticator, Endpoint};
use crate::service::DrAutomationService;
use crate::service::service_types::ServiceInner;
use crate::webc::{RetryConfig, Transport, WebClient};
use crate::Result;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tracing::debug;

/// Builder of a `DrAutomationService`.
///
/// When no authenticator is given, `build()` resolves the external
/// configuration of the service name (authenticator, URL and retry settings),
/// or takes the one given with `with_config`.
/// With an explicit authenticator, no external configuration is read.
#[derive(Default)]
pub struct ServiceBuilder {
	service_url: Option<Endpoint>,
	service_name: Option<String>,
	authenticator: Option<Arc<dyn Authenticator>>,
	config: Option<ExternalConfig>,
	transport: Option<Arc<dyn Transport>>,
	retries_enabled: Option<bool>,
	retry_config: Option<RetryConfig>,
}

/// Chainable Setters
impl ServiceBuilder {
	#[must_use]
	pub fn with_service_url(mut self, service_url: impl Into<Endpoint>) -> Self {
		self.service_url = Some(service_url.into());
		self
	}

	/// The name used to look up the external configuration (default: `dr_automation_service`).
	#[must_use]
	pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
		self.service_name = Some(service_name.into());
		self
	}

	#[must_use]
	pub fn with_authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
		self.authenticator = Some(Arc::new(authenticator));
		self
	}

	#[must_use]
	pub fn with_shared_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
		self.authenticator = Some(authenticator);
		self
	}

	/// Uses `config` instead of reading the external sources. Ignored with an explicit authenticator.
	#[must_use]
	pub fn with_config(mut self, config: ExternalConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// Replaces the default reqwest `WebClient`.
	#[must_use]
	pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
		self.transport = Some(Arc::new(transport));
		self
	}

	#[must_use]
	pub fn with_retries(mut self, enabled: bool) -> Self {
		self.retries_enabled = Some(enabled);
		self
	}

	/// Retry settings of the default `WebClient`. Ignored with a custom transport.
	#[must_use]
	pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
		self.retry_config = Some(retry_config);
		self
	}
}

/// Builder
impl ServiceBuilder {
	pub fn build(self) -> Result<DrAutomationService> {
		let service_name = self
			.service_name
			.unwrap_or_else(|| DrAutomationService::DEFAULT_SERVICE_NAME.to_string());

		let mut service_url = self.service_url;
		let mut retries_enabled = self.retries_enabled;
		let mut retry_config = self.retry_config;

		let authenticator = match self.authenticator {
			Some(authenticator) => authenticator,
			None => {
				let config = match self.config {
					Some(config) => config,
					None => ExternalConfig::read(&service_name)?,
				};
				let authenticator = config.authenticator()?;
				if service_url.is_none() {
					service_url = config.url.clone().map(Endpoint::from_owned);
				}
				if retries_enabled.is_none() {
					retries_enabled = config.enable_retries;
				}
				if retry_config.is_none() {
					retry_config = config.retry_config();
				}
				authenticator
			}
		};

		let endpoint = service_url.unwrap_or_else(|| Endpoint::from_static(DrAutomationService::DEFAULT_SERVICE_URL));

		let transport = match self.transport {
			Some(transport) => transport,
			None => Arc::new(WebClient::new()?.with_retry_config(retry_config.unwrap_or_default())),
		};

		let retries_enabled = retries_enabled.unwrap_or(false);

		debug!(
			service_name = %service_name,
			service_url = endpoint.base_url(),
			auth_type = %authenticator.auth_type(),
			retries_enabled,
			"dr automation service built"
		);

		let inner = ServiceInner {
			endpoint,
			service_name,
			authenticator,
			transport,
			retries_enabled: AtomicBool::new(retries_enabled),
		};

		Ok(DrAutomationService { inner: Arc::new(inner) })
	}
}
