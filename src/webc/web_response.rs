use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The decoded response of one operation call.
#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: StatusCode,
	/// The JSON body. `Value::Null` when the service returned an empty body.
	pub result: Value,
	pub headers: Vec<(String, String)>,
}

/// Getters
impl WebResponse {
	/// Returns the response header value for `name` (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	/// Deserializes a clone of `result` into `T`.
	pub fn result_as<T: DeserializeOwned>(&self) -> crate::Result<T> {
		Ok(serde_json::from_value(self.result.clone())?)
	}

	/// Consumes the response and deserializes `result` into `T`.
	pub fn into_result_as<T: DeserializeOwned>(self) -> crate::Result<T> {
		Ok(serde_json::from_value(self.result)?)
	}
}
