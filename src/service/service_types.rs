use crate::resolver::{Authenticator, Endpoint};
use crate::service::ServiceBuilder;
use crate::webc::Transport;
use crate::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Client of the DR Automation service (`/drautomation/v1`).
///
/// Cheap to clone; all clones share the same configuration and the same
/// retries flag.
#[derive(Clone)]
pub struct DrAutomationService {
	pub(super) inner: Arc<ServiceInner>,
}

pub(super) struct ServiceInner {
	pub(super) endpoint: Endpoint,
	pub(super) service_name: String,
	pub(super) authenticator: Arc<dyn Authenticator>,
	pub(super) transport: Arc<dyn Transport>,
	pub(super) retries_enabled: AtomicBool,
}

/// Constants
impl DrAutomationService {
	pub const DEFAULT_SERVICE_URL: &str = "https://power-dra.cloud.ibm.com";
	pub const DEFAULT_SERVICE_NAME: &str = "dr_automation_service";
}

/// Constructors
impl DrAutomationService {
	pub fn builder() -> ServiceBuilder {
		ServiceBuilder::default()
	}

	/// Service on the default URL with the given authenticator and the default transport.
	pub fn new(authenticator: impl Authenticator + 'static) -> Result<Self> {
		Self::builder().with_authenticator(authenticator).build()
	}

	/// Service fully configured from the external configuration of
	/// `DEFAULT_SERVICE_NAME` (see `crate::config`).
	pub fn new_instance() -> Result<Self> {
		Self::builder().build()
	}
}

/// Getters
impl DrAutomationService {
	pub fn service_url(&self) -> &str {
		self.inner.endpoint.base_url()
	}

	pub fn endpoint(&self) -> &Endpoint {
		&self.inner.endpoint
	}

	pub fn service_name(&self) -> &str {
		&self.inner.service_name
	}

	pub fn authenticator(&self) -> &dyn Authenticator {
		self.inner.authenticator.as_ref()
	}

	pub fn is_retries_enabled(&self) -> bool {
		self.inner.retries_enabled.load(Ordering::Relaxed)
	}
}

/// Retries toggle (affects the transport only, never the request shape)
impl DrAutomationService {
	pub fn enable_retries(&self) {
		self.inner.retries_enabled.store(true, Ordering::Relaxed);
	}

	pub fn disable_retries(&self) {
		self.inner.retries_enabled.store(false, Ordering::Relaxed);
	}
}

impl core::fmt::Debug for DrAutomationService {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("DrAutomationService")
			.field("service_url", &self.service_url())
			.field("service_name", &self.service_name())
			.field("authenticator", &self.inner.authenticator)
			.field("retries_enabled", &self.is_retries_enabled())
			.finish()
	}
}
