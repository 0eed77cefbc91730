use crate::operation::{CREATE_MANAGE_DR, OperationDescriptor, OperationParams, ParamValues};
use crate::params::{impl_common_setters, redacted};
use serde::{Deserialize, Serialize};

/// Parameters of `createManageDr` (`POST /manage_dr/{instance_id}`).
///
/// Deploys the DR orchestrator (and its standby, for HA) in the given workspaces.
/// The call is asynchronous on the service side; poll `getLastOperation` for progress.
#[serde_with::skip_serializing_none]
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManageDrParams {
	pub instance_id: Option<String>,

	// -- Required body fields
	/// The DR location (e.g., `dal10`).
	pub location_id: Option<String>,
	/// Machine type of the orchestrator VM (e.g., `s922`).
	pub machine_type: Option<String>,
	/// `off-premises` or `on-premises`.
	pub orchestrator_location_type: Option<String>,
	/// Admin user name of the orchestrator.
	pub orchestrator_name: Option<String>,
	/// Admin password of the orchestrator.
	pub orchestrator_password: Option<String>,
	/// The workspace the primary orchestrator is deployed in.
	pub orchestrator_workspace_id: Option<String>,

	// -- Optional body fields
	/// IBM Cloud API key, when not using Secrets Manager.
	pub api_key: Option<String>,
	/// MFA client id.
	pub client_id: Option<String>,
	/// MFA client secret.
	pub client_secret: Option<String>,
	pub guid: Option<String>,
	/// Deploy a standby orchestrator for high availability.
	pub orchestrator_ha: Option<bool>,
	/// Proxy `host:port` for on-premises orchestrators.
	pub proxy_ip: Option<String>,
	pub region_id: Option<String>,
	/// CRN of the Secrets Manager instance.
	pub resource_instance: Option<String>,
	pub secret: Option<String>,
	pub secret_group: Option<String>,
	pub ssh_key_name: Option<String>,
	pub standby_machine_type: Option<String>,
	pub standby_orchestrator_name: Option<String>,
	pub standby_orchestrator_workspace_id: Option<String>,
	pub standby_tier: Option<String>,
	/// MFA tenant name.
	pub tenant_name: Option<String>,
	/// Storage tier of the orchestrator (e.g., `tier1`).
	pub tier: Option<String>,

	// -- Query
	/// Sent as `stand_by_redeploy`.
	pub stand_by_redeploy: Option<String>,
	/// Sent as `accepts_incomplete`. The service runs the deployment asynchronously.
	pub accepts_incomplete: Option<bool>,

	pub accept_language: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub headers: Vec<(String, String)>,
}

impl CreateManageDrParams {
	pub fn new(
		instance_id: impl Into<String>,
		location_id: impl Into<String>,
		machine_type: impl Into<String>,
		orchestrator_location_type: impl Into<String>,
		orchestrator_name: impl Into<String>,
		orchestrator_password: impl Into<String>,
		orchestrator_workspace_id: impl Into<String>,
	) -> Self {
		Self {
			instance_id: Some(instance_id.into()),
			location_id: Some(location_id.into()),
			machine_type: Some(machine_type.into()),
			orchestrator_location_type: Some(orchestrator_location_type.into()),
			orchestrator_name: Some(orchestrator_name.into()),
			orchestrator_password: Some(orchestrator_password.into()),
			orchestrator_workspace_id: Some(orchestrator_workspace_id.into()),
			..Default::default()
		}
	}
}

/// Chainable Setters
impl CreateManageDrParams {
	#[must_use]
	pub fn with_api_key(mut self, value: impl Into<String>) -> Self {
		self.api_key = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_client_id(mut self, value: impl Into<String>) -> Self {
		self.client_id = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_client_secret(mut self, value: impl Into<String>) -> Self {
		self.client_secret = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_guid(mut self, value: impl Into<String>) -> Self {
		self.guid = Some(value.into());
		self
	}

	#[must_use]
	pub const fn with_orchestrator_ha(mut self, value: bool) -> Self {
		self.orchestrator_ha = Some(value);
		self
	}

	#[must_use]
	pub fn with_proxy_ip(mut self, value: impl Into<String>) -> Self {
		self.proxy_ip = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_region_id(mut self, value: impl Into<String>) -> Self {
		self.region_id = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_resource_instance(mut self, value: impl Into<String>) -> Self {
		self.resource_instance = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_secret(mut self, value: impl Into<String>) -> Self {
		self.secret = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_secret_group(mut self, value: impl Into<String>) -> Self {
		self.secret_group = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_ssh_key_name(mut self, value: impl Into<String>) -> Self {
		self.ssh_key_name = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_standby_machine_type(mut self, value: impl Into<String>) -> Self {
		self.standby_machine_type = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_standby_orchestrator_name(mut self, value: impl Into<String>) -> Self {
		self.standby_orchestrator_name = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_standby_orchestrator_workspace_id(mut self, value: impl Into<String>) -> Self {
		self.standby_orchestrator_workspace_id = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_standby_tier(mut self, value: impl Into<String>) -> Self {
		self.standby_tier = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_tenant_name(mut self, value: impl Into<String>) -> Self {
		self.tenant_name = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_tier(mut self, value: impl Into<String>) -> Self {
		self.tier = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_stand_by_redeploy(mut self, value: impl Into<String>) -> Self {
		self.stand_by_redeploy = Some(value.into());
		self
	}

	#[must_use]
	pub const fn with_accepts_incomplete(mut self, value: bool) -> Self {
		self.accepts_incomplete = Some(value);
		self
	}
}

impl_common_setters!(CreateManageDrParams);

// Passwords and keys stay out of logs.
impl core::fmt::Debug for CreateManageDrParams {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("CreateManageDrParams")
			.field("instance_id", &self.instance_id)
			.field("location_id", &self.location_id)
			.field("machine_type", &self.machine_type)
			.field("orchestrator_location_type", &self.orchestrator_location_type)
			.field("orchestrator_name", &self.orchestrator_name)
			.field("orchestrator_password", &redacted(&self.orchestrator_password))
			.field("orchestrator_workspace_id", &self.orchestrator_workspace_id)
			.field("api_key", &redacted(&self.api_key))
			.field("client_id", &self.client_id)
			.field("client_secret", &redacted(&self.client_secret))
			.field("guid", &self.guid)
			.field("orchestrator_ha", &self.orchestrator_ha)
			.field("proxy_ip", &self.proxy_ip)
			.field("region_id", &self.region_id)
			.field("resource_instance", &self.resource_instance)
			.field("secret", &redacted(&self.secret))
			.field("secret_group", &self.secret_group)
			.field("ssh_key_name", &self.ssh_key_name)
			.field("standby_machine_type", &self.standby_machine_type)
			.field("standby_orchestrator_name", &self.standby_orchestrator_name)
			.field("standby_orchestrator_workspace_id", &self.standby_orchestrator_workspace_id)
			.field("standby_tier", &self.standby_tier)
			.field("tenant_name", &self.tenant_name)
			.field("tier", &self.tier)
			.field("stand_by_redeploy", &self.stand_by_redeploy)
			.field("accepts_incomplete", &self.accepts_incomplete)
			.field("accept_language", &self.accept_language)
			.field("headers", &self.headers)
			.finish()
	}
}

impl OperationParams for CreateManageDrParams {
	fn descriptor() -> &'static OperationDescriptor {
		&CREATE_MANAGE_DR
	}

	fn param_values(&self) -> ParamValues {
		ParamValues::new()
			.with("instanceId", &self.instance_id)
			.with("locationId", &self.location_id)
			.with("machineType", &self.machine_type)
			.with("orchestratorLocationType", &self.orchestrator_location_type)
			.with("orchestratorName", &self.orchestrator_name)
			.with("orchestratorPassword", &self.orchestrator_password)
			.with("orchestratorWorkspaceId", &self.orchestrator_workspace_id)
			.with("apiKey", &self.api_key)
			.with("clientId", &self.client_id)
			.with("clientSecret", &self.client_secret)
			.with("guid", &self.guid)
			.with("orchestratorHa", &self.orchestrator_ha)
			.with("proxyIp", &self.proxy_ip)
			.with("regionId", &self.region_id)
			.with("resourceInstance", &self.resource_instance)
			.with("secret", &self.secret)
			.with("secretGroup", &self.secret_group)
			.with("sshKeyName", &self.ssh_key_name)
			.with("standbyMachineType", &self.standby_machine_type)
			.with("standbyOrchestratorName", &self.standby_orchestrator_name)
			.with("standbyOrchestratorWorkspaceId", &self.standby_orchestrator_workspace_id)
			.with("standbyTier", &self.standby_tier)
			.with("tenantName", &self.tenant_name)
			.with("tier", &self.tier)
			.with("standByRedeploy", &self.stand_by_redeploy)
			.with("acceptsIncomplete", &self.accepts_incomplete)
			.with("acceptLanguage", &self.accept_language)
	}

	fn header_overrides(&self) -> &[(String, String)] {
		&self.headers
	}
}
