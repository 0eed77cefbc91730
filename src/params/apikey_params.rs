use crate::operation::{OperationDescriptor, OperationParams, ParamValues, UPDATE_APIKEY};
use crate::params::{impl_common_setters, redacted};
use serde::{Deserialize, Serialize};

/// Parameters of `updateApikey` (`PUT /apikey/{instance_id}`).
#[serde_with::skip_serializing_none]
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApikeyParams {
	/// The service instance id.
	pub instance_id: Option<String>,
	/// The new IBM Cloud API key used by the orchestrator.
	pub api_key: Option<String>,
	pub accept_language: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub headers: Vec<(String, String)>,
}

impl UpdateApikeyParams {
	pub fn new(instance_id: impl Into<String>, api_key: impl Into<String>) -> Self {
		Self {
			instance_id: Some(instance_id.into()),
			api_key: Some(api_key.into()),
			..Default::default()
		}
	}
}

impl_common_setters!(UpdateApikeyParams);

// Keep the api key out of logs.
impl core::fmt::Debug for UpdateApikeyParams {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("UpdateApikeyParams")
			.field("instance_id", &self.instance_id)
			.field("api_key", &redacted(&self.api_key))
			.field("accept_language", &self.accept_language)
			.field("headers", &self.headers)
			.finish()
	}
}

impl OperationParams for UpdateApikeyParams {
	fn descriptor() -> &'static OperationDescriptor {
		&UPDATE_APIKEY
	}

	fn param_values(&self) -> ParamValues {
		ParamValues::new()
			.with("instanceId", &self.instance_id)
			.with("apiKey", &self.api_key)
			.with("acceptLanguage", &self.accept_language)
	}

	fn header_overrides(&self) -> &[(String, String)] {
		&self.headers
	}
}
