use derive_more::Display;
use serde_json::Value;

// region:    --- HttpMethod

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	#[display("GET")]
	Get,
	#[display("PUT")]
	Put,
	#[display("POST")]
	Post,
}

impl HttpMethod {
	#[must_use]
	pub fn to_reqwest(self) -> reqwest::Method {
		match self {
			Self::Get => reqwest::Method::GET,
			Self::Put => reqwest::Method::PUT,
			Self::Post => reqwest::Method::POST,
		}
	}
}

// endregion: --- HttpMethod

// region:    --- WebRequestData

/// A fully built request, ready to be handed to a `Transport`.
///
/// Besides the resolved `url`, it keeps the `url_template` and the substituted
/// `path_params` so that transports (and tests) can inspect how the URL was made.
#[derive(Debug, Clone, PartialEq)]
pub struct WebRequestData {
	/// The name of the operation that produced this request (e.g., `updateApikey`).
	pub operation: &'static str,
	pub method: HttpMethod,
	pub url_template: &'static str,
	/// The absolute URL, with path params escaped and the query string appended.
	pub url: String,
	/// `(wire_name, raw value)` in template order.
	pub path_params: Vec<(&'static str, String)>,
	/// `(wire_name, value)` in descriptor order, already part of `url`.
	pub query: Vec<(&'static str, String)>,
	pub headers: Vec<(String, String)>,
	pub body: Option<Value>,
}

/// Getters
impl WebRequestData {
	/// Returns the header value for `name` (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	pub fn path_param(&self, wire_name: &str) -> Option<&str> {
		self.path_params.iter().find(|(n, _)| *n == wire_name).map(|(_, v)| v.as_str())
	}

	pub fn query_param(&self, wire_name: &str) -> Option<&str> {
		self.query.iter().find(|(n, _)| *n == wire_name).map(|(_, v)| v.as_str())
	}

	/// Returns the body field for `wire_name`, if there is a JSON object body.
	pub fn body_field(&self, wire_name: &str) -> Option<&Value> {
		self.body.as_ref().and_then(|body| body.get(wire_name))
	}
}

/// Setters
impl WebRequestData {
	/// Sets a header, replacing any existing value with the same (case-insensitive) name.
	pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
			Some(entry) => *entry = (name, value),
			None => self.headers.push((name, value)),
		}
	}
}

// endregion: --- WebRequestData
