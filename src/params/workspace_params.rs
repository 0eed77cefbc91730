use crate::operation::{GET_MACHINE_TYPE, GET_POWERVS_WORKSPACES, OperationDescriptor, OperationParams, ParamValues};
use crate::params::impl_common_setters;
use serde::{Deserialize, Serialize};

// region:    --- GetMachineTypeParams

/// Parameters of `getMachineType`: machine types available in the workspaces.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMachineTypeParams {
	pub instance_id: Option<String>,
	/// Sent as the `primary_workspace_name` query parameter.
	pub primary_workspace_name: Option<String>,
	/// Sent as the `standby_workspace_name` query parameter.
	pub standby_workspace_name: Option<String>,
	pub accept_language: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub headers: Vec<(String, String)>,
}

impl GetMachineTypeParams {
	pub fn new(instance_id: impl Into<String>, primary_workspace_name: impl Into<String>) -> Self {
		Self {
			instance_id: Some(instance_id.into()),
			primary_workspace_name: Some(primary_workspace_name.into()),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_standby_workspace_name(mut self, value: impl Into<String>) -> Self {
		self.standby_workspace_name = Some(value.into());
		self
	}
}

impl_common_setters!(GetMachineTypeParams);

impl OperationParams for GetMachineTypeParams {
	fn descriptor() -> &'static OperationDescriptor {
		&GET_MACHINE_TYPE
	}

	fn param_values(&self) -> ParamValues {
		ParamValues::new()
			.with("instanceId", &self.instance_id)
			.with("primaryWorkspaceName", &self.primary_workspace_name)
			.with("standbyWorkspaceName", &self.standby_workspace_name)
			.with("acceptLanguage", &self.accept_language)
	}

	fn header_overrides(&self) -> &[(String, String)] {
		&self.headers
	}
}

// endregion: --- GetMachineTypeParams

// region:    --- GetPowervsWorkspacesParams

/// Parameters of `getPowervsWorkspaces`: the Power Virtual Server workspaces of a location.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPowervsWorkspacesParams {
	pub instance_id: Option<String>,
	/// Sent as the `location_id` query parameter (e.g., `dal10`).
	pub location_id: Option<String>,
	pub accept_language: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub headers: Vec<(String, String)>,
}

impl GetPowervsWorkspacesParams {
	pub fn new(instance_id: impl Into<String>) -> Self {
		Self {
			instance_id: Some(instance_id.into()),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_location_id(mut self, value: impl Into<String>) -> Self {
		self.location_id = Some(value.into());
		self
	}
}

impl_common_setters!(GetPowervsWorkspacesParams);

impl OperationParams for GetPowervsWorkspacesParams {
	fn descriptor() -> &'static OperationDescriptor {
		&GET_POWERVS_WORKSPACES
	}

	fn param_values(&self) -> ParamValues {
		ParamValues::new()
			.with("instanceId", &self.instance_id)
			.with("locationId", &self.location_id)
			.with("acceptLanguage", &self.accept_language)
	}

	fn header_overrides(&self) -> &[(String, String)] {
		&self.headers
	}
}

// endregion: --- GetPowervsWorkspacesParams
