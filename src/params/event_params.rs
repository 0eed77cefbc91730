use crate::operation::{GET_EVENT, LIST_EVENTS, OperationDescriptor, OperationParams, ParamValues};
use crate::params::impl_common_setters;
use serde::{Deserialize, Serialize};

// region:    --- ListEventsParams

/// Parameters of `listEvents`. The time filters are RFC 3339 strings
/// (e.g., `2025-06-19T00:00:00Z`), passed through untouched.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsParams {
	pub instance_id: Option<String>,
	pub time: Option<String>,
	pub from_time: Option<String>,
	pub to_time: Option<String>,
	pub accept_language: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub headers: Vec<(String, String)>,
}

impl ListEventsParams {
	pub fn new(instance_id: impl Into<String>) -> Self {
		Self {
			instance_id: Some(instance_id.into()),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_time(mut self, value: impl Into<String>) -> Self {
		self.time = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_from_time(mut self, value: impl Into<String>) -> Self {
		self.from_time = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_to_time(mut self, value: impl Into<String>) -> Self {
		self.to_time = Some(value.into());
		self
	}
}

impl_common_setters!(ListEventsParams);

impl OperationParams for ListEventsParams {
	fn descriptor() -> &'static OperationDescriptor {
		&LIST_EVENTS
	}

	fn param_values(&self) -> ParamValues {
		ParamValues::new()
			.with("instanceId", &self.instance_id)
			.with("time", &self.time)
			.with("fromTime", &self.from_time)
			.with("toTime", &self.to_time)
			.with("acceptLanguage", &self.accept_language)
	}

	fn header_overrides(&self) -> &[(String, String)] {
		&self.headers
	}
}

// endregion: --- ListEventsParams

// region:    --- GetEventParams

/// Parameters of `getEvent`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEventParams {
	pub instance_id: Option<String>,
	pub event_id: Option<String>,
	pub accept_language: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub headers: Vec<(String, String)>,
}

impl GetEventParams {
	pub fn new(instance_id: impl Into<String>, event_id: impl Into<String>) -> Self {
		Self {
			instance_id: Some(instance_id.into()),
			event_id: Some(event_id.into()),
			..Default::default()
		}
	}
}

impl_common_setters!(GetEventParams);

impl OperationParams for GetEventParams {
	fn descriptor() -> &'static OperationDescriptor {
		&GET_EVENT
	}

	fn param_values(&self) -> ParamValues {
		ParamValues::new()
			.with("instanceId", &self.instance_id)
			.with("eventId", &self.event_id)
			.with("acceptLanguage", &self.accept_language)
	}

	fn header_overrides(&self) -> &[(String, String)] {
		&self.headers
	}
}

// endregion: --- GetEventParams
