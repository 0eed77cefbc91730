//! Static descriptors of the `drautomation/v1` operations.

use crate::webc::HttpMethod;

pub const BASE_PATH: &str = "/drautomation/v1";
pub const MEDIA_TYPE_JSON: &str = "application/json";

// region:    --- Types

/// Where a parameter goes in the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
	Path,
	Query,
	Header,
	Body,
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
	/// camelCase name, as reported in `MissingParameters`.
	pub name: &'static str,
	/// The name on the wire (path placeholder, query key, header name or body field).
	pub wire_name: &'static str,
	pub placement: Placement,
	pub required: bool,
}

/// Const Constructors
impl ParamSpec {
	pub const fn path(name: &'static str, wire_name: &'static str) -> Self {
		Self::new(name, wire_name, Placement::Path)
	}

	pub const fn query(name: &'static str, wire_name: &'static str) -> Self {
		Self::new(name, wire_name, Placement::Query)
	}

	pub const fn header(name: &'static str, wire_name: &'static str) -> Self {
		Self::new(name, wire_name, Placement::Header)
	}

	pub const fn body(name: &'static str, wire_name: &'static str) -> Self {
		Self::new(name, wire_name, Placement::Body)
	}

	#[must_use]
	pub const fn required(mut self) -> Self {
		self.required = true;
		self
	}

	const fn new(name: &'static str, wire_name: &'static str, placement: Placement) -> Self {
		Self {
			name,
			wire_name,
			placement,
			required: false,
		}
	}
}

/// Immutable metadata of one remote operation.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
	pub name: &'static str,
	pub method: HttpMethod,
	pub url_template: &'static str,
	pub params: &'static [ParamSpec],
	pub accept: &'static str,
	/// Set for body-bearing operations only.
	pub content_type: Option<&'static str>,
}

impl OperationDescriptor {
	pub fn required_params(&self) -> impl Iterator<Item = &ParamSpec> {
		self.params.iter().filter(|p| p.required)
	}

	pub fn param(&self, name: &str) -> Option<&ParamSpec> {
		self.params.iter().find(|p| p.name == name)
	}

	pub fn has_body(&self) -> bool {
		self.params.iter().any(|p| p.placement == Placement::Body)
	}
}

// endregion: --- Types

// region:    --- Descriptors

const INSTANCE_ID: ParamSpec = ParamSpec::path("instanceId", "instance_id").required();
const ACCEPT_LANGUAGE: ParamSpec = ParamSpec::header("acceptLanguage", "Accept-Language");
const INSTANCE_READ_PARAMS: &[ParamSpec] = &[INSTANCE_ID, ACCEPT_LANGUAGE];

/// Descriptor of a GET on `template` with only the instance id and the language header.
const fn instance_read(name: &'static str, url_template: &'static str) -> OperationDescriptor {
	OperationDescriptor {
		name,
		method: HttpMethod::Get,
		url_template,
		params: INSTANCE_READ_PARAMS,
		accept: MEDIA_TYPE_JSON,
		content_type: None,
	}
}

pub static UPDATE_APIKEY: OperationDescriptor = OperationDescriptor {
	name: "updateApikey",
	method: HttpMethod::Put,
	url_template: "/drautomation/v1/apikey/{instance_id}",
	params: &[INSTANCE_ID, ParamSpec::body("apiKey", "api_key").required(), ACCEPT_LANGUAGE],
	accept: MEDIA_TYPE_JSON,
	content_type: Some(MEDIA_TYPE_JSON),
};

pub static GET_DR_GRS_LOCATION_PAIR: OperationDescriptor =
	instance_read("getDrGrsLocationPair", "/drautomation/v1/dr_grs_location_pairs/{instance_id}");

pub static GET_DR_LOCATIONS: OperationDescriptor =
	instance_read("getDrLocations", "/drautomation/v1/dr_locations/{instance_id}");

pub static GET_DR_MANAGED_VM: OperationDescriptor =
	instance_read("getDrManagedVm", "/drautomation/v1/dr_managed_vms/{instance_id}");

pub static GET_DR_SUMMARY: OperationDescriptor =
	instance_read("getDrSummary", "/drautomation/v1/dr_summary/{instance_id}");

pub static GET_MACHINE_TYPE: OperationDescriptor = OperationDescriptor {
	name: "getMachineType",
	method: HttpMethod::Get,
	url_template: "/drautomation/v1/machinetypes/{instance_id}",
	params: &[
		INSTANCE_ID,
		ParamSpec::query("primaryWorkspaceName", "primary_workspace_name").required(),
		ParamSpec::query("standbyWorkspaceName", "standby_workspace_name"),
		ACCEPT_LANGUAGE,
	],
	accept: MEDIA_TYPE_JSON,
	content_type: None,
};

pub static GET_POWERVS_WORKSPACES: OperationDescriptor = OperationDescriptor {
	name: "getPowervsWorkspaces",
	method: HttpMethod::Get,
	url_template: "/drautomation/v1/powervs_workspaces/{instance_id}",
	params: &[INSTANCE_ID, ParamSpec::query("locationId", "location_id"), ACCEPT_LANGUAGE],
	accept: MEDIA_TYPE_JSON,
	content_type: None,
};

pub static CREATE_MANAGE_DR: OperationDescriptor = OperationDescriptor {
	name: "createManageDr",
	method: HttpMethod::Post,
	url_template: "/drautomation/v1/manage_dr/{instance_id}",
	params: &[
		INSTANCE_ID,
		// -- Required body
		ParamSpec::body("locationId", "location_id").required(),
		ParamSpec::body("machineType", "machine_type").required(),
		ParamSpec::body("orchestratorLocationType", "orchestrator_location_type").required(),
		ParamSpec::body("orchestratorName", "orchestrator_name").required(),
		ParamSpec::body("orchestratorPassword", "orchestrator_password").required(),
		ParamSpec::body("orchestratorWorkspaceId", "orchestrator_workspace_id").required(),
		// -- Optional body
		ParamSpec::body("apiKey", "api_key"),
		ParamSpec::body("clientId", "client_id"),
		ParamSpec::body("clientSecret", "client_secret"),
		ParamSpec::body("guid", "guid"),
		ParamSpec::body("orchestratorHa", "orchestrator_ha"),
		ParamSpec::body("proxyIp", "proxy_ip"),
		ParamSpec::body("regionId", "region_id"),
		ParamSpec::body("resourceInstance", "resource_instance"),
		ParamSpec::body("secret", "secret"),
		ParamSpec::body("secretGroup", "secret_group"),
		ParamSpec::body("sshKeyName", "ssh_key_name"),
		ParamSpec::body("standbyMachineType", "standby_machine_type"),
		ParamSpec::body("standbyOrchestratorName", "standby_orchestrator_name"),
		ParamSpec::body("standbyOrchestratorWorkspaceId", "standby_orchestrator_workspace_id"),
		ParamSpec::body("standbyTier", "standby_tier"),
		ParamSpec::body("tenantName", "tenant_name"),
		ParamSpec::body("tier", "tier"),
		// -- Query
		ParamSpec::query("standByRedeploy", "stand_by_redeploy"),
		ParamSpec::query("acceptsIncomplete", "accepts_incomplete"),
		ACCEPT_LANGUAGE,
	],
	accept: MEDIA_TYPE_JSON,
	content_type: Some(MEDIA_TYPE_JSON),
};

pub static GET_LAST_OPERATION: OperationDescriptor =
	instance_read("getLastOperation", "/drautomation/v1/last_operation/{instance_id}");

pub static LIST_EVENTS: OperationDescriptor = OperationDescriptor {
	name: "listEvents",
	method: HttpMethod::Get,
	url_template: "/drautomation/v1/service_instances/{instance_id}/events",
	params: &[
		INSTANCE_ID,
		ParamSpec::query("time", "time"),
		ParamSpec::query("fromTime", "from_time"),
		ParamSpec::query("toTime", "to_time"),
		ACCEPT_LANGUAGE,
	],
	accept: MEDIA_TYPE_JSON,
	content_type: None,
};

pub static GET_EVENT: OperationDescriptor = OperationDescriptor {
	name: "getEvent",
	method: HttpMethod::Get,
	url_template: "/drautomation/v1/service_instances/{instance_id}/events/{event_id}",
	params: &[INSTANCE_ID, ParamSpec::path("eventId", "event_id").required(), ACCEPT_LANGUAGE],
	accept: MEDIA_TYPE_JSON,
	content_type: None,
};

/// Every operation of the service, in the order they appear in the API reference.
pub static ALL_OPERATIONS: &[&OperationDescriptor] = &[
	&UPDATE_APIKEY,
	&GET_DR_GRS_LOCATION_PAIR,
	&GET_DR_LOCATIONS,
	&GET_DR_MANAGED_VM,
	&GET_DR_SUMMARY,
	&GET_MACHINE_TYPE,
	&GET_POWERVS_WORKSPACES,
	&CREATE_MANAGE_DR,
	&GET_LAST_OPERATION,
	&LIST_EVENTS,
	&GET_EVENT,
];

// endregion: --- Descriptors

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_templates_start_with_base_path() {
		for op in ALL_OPERATIONS {
			assert!(op.url_template.starts_with(BASE_PATH), "{}", op.name);
		}
	}

	#[test]
	fn test_path_params_match_template_placeholders() {
		for op in ALL_OPERATIONS {
			for spec in op.params.iter().filter(|p| p.placement == Placement::Path) {
				let placeholder = format!("{{{}}}", spec.wire_name);
				assert!(op.url_template.contains(&placeholder), "{} / {}", op.name, spec.name);
				assert!(spec.required, "path params must be required: {}", spec.name);
			}
		}
	}

	#[test]
	fn test_content_type_only_for_body_operations() {
		for op in ALL_OPERATIONS {
			assert_eq!(op.content_type.is_some(), op.has_body(), "{}", op.name);
		}
	}

	#[test]
	fn test_every_operation_accepts_language_header() {
		for op in ALL_OPERATIONS {
			let spec = op.param("acceptLanguage").expect("acceptLanguage declared");
			assert_eq!(spec.placement, Placement::Header);
			assert_eq!(spec.wire_name, "Accept-Language");
		}
	}
}
