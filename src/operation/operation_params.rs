use crate::operation::OperationDescriptor;
use serde_json::Value;

/// Implemented by every typed parameter struct of the `params` module.
pub trait OperationParams {
	fn descriptor() -> &'static OperationDescriptor;

	/// The values present in this call, keyed by the descriptor's camelCase names.
	fn param_values(&self) -> ParamValues;

	/// Caller supplied headers. They replace the computed headers of the same name.
	fn header_overrides(&self) -> &[(String, String)];
}

// region:    --- ParamValues

/// The present (non-`None`) parameter values of one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamValues(Vec<(&'static str, Value)>);

impl ParamValues {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `name` when `value` is `Some`.
	#[must_use]
	pub fn with<T>(mut self, name: &'static str, value: &Option<T>) -> Self
	where
		T: Clone + Into<Value>,
	{
		if let Some(value) = value {
			self.0.push((name, value.clone().into()));
		}
		self
	}

	/// Returns the value for `name`. A JSON `null` counts as absent.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0
			.iter()
			.find(|(n, v)| *n == name && !v.is_null())
			.map(|(_, v)| v)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

// endregion: --- ParamValues
