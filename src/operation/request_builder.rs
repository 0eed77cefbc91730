use crate::error::ParamNames;
use crate::operation::{OperationParams, Placement};
use crate::resolver::Endpoint;
use crate::webc::WebRequestData;
use crate::{Error, Result};
use reqwest::Url;
use serde_json::{Map, Value};

pub const USER_AGENT: &str = concat!("dr-automation-rust/", env!("CARGO_PKG_VERSION"));

/// Validates `params` against its operation descriptor and builds the request.
///
/// Fails with `Error::MissingParameters` (listing every missing name) before
/// anything else is done when a required parameter is absent.
pub fn build_request<P: OperationParams>(endpoint: &Endpoint, params: &P) -> Result<WebRequestData> {
	let descriptor = P::descriptor();
	let values = params.param_values();

	// -- Validate
	let missing: Vec<&'static str> = descriptor
		.required_params()
		.filter(|spec| values.get(spec.name).is_none())
		.map(|spec| spec.name)
		.collect();
	if !missing.is_empty() {
		return Err(Error::MissingParameters {
			operation: descriptor.name,
			names: ParamNames(missing),
		});
	}

	// -- Route
	let mut path_params: Vec<(&'static str, String)> = Vec::new();
	let mut query: Vec<(&'static str, String)> = Vec::new();
	let mut header_params: Vec<(&'static str, String)> = Vec::new();
	let mut body = Map::new();

	for spec in descriptor.params {
		let Some(value) = values.get(spec.name) else {
			continue;
		};
		match spec.placement {
			Placement::Path => path_params.push((spec.wire_name, value_to_string(value))),
			Placement::Query => query.push((spec.wire_name, value_to_string(value))),
			Placement::Header => header_params.push((spec.wire_name, value_to_string(value))),
			Placement::Body => {
				body.insert(spec.wire_name.to_string(), value.clone());
			}
		}
	}

	let url = build_url(endpoint.base_url(), descriptor.name, descriptor.url_template, &path_params, &query)?;

	let mut request = WebRequestData {
		operation: descriptor.name,
		method: descriptor.method,
		url_template: descriptor.url_template,
		url,
		path_params,
		query,
		headers: Vec::new(),
		body: descriptor.has_body().then_some(Value::Object(body)),
	};

	// -- Headers (defaults, then header params, then caller overrides)
	request.set_header("User-Agent", USER_AGENT);
	request.set_header("Accept", descriptor.accept);
	if let Some(content_type) = descriptor.content_type {
		request.set_header("Content-Type", content_type);
	}
	for (name, value) in header_params {
		request.set_header(name, value);
	}
	for (name, value) in params.header_overrides() {
		request.set_header(name.as_str(), value.as_str());
	}

	Ok(request)
}

// region:    --- Support

/// Strings go as-is, other JSON values with their JSON text (e.g., `true`).
fn value_to_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Joins `base_url` and the template, path-escaping each substituted value,
/// and appends the query pairs in order.
fn build_url(
	base_url: &str,
	operation: &'static str,
	url_template: &'static str,
	path_params: &[(&'static str, String)],
	query: &[(&'static str, String)],
) -> Result<String> {
	let invalid = |cause: &str| Error::InvalidServiceUrl {
		url: base_url.to_string(),
		cause: cause.to_string(),
	};

	let mut url = Url::parse(base_url).map_err(|err| invalid(&err.to_string()))?;

	{
		let mut segments = url.path_segments_mut().map_err(|_| invalid("URL cannot be a base"))?;
		segments.pop_if_empty();
		for segment in url_template.split('/').filter(|s| !s.is_empty()) {
			match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
				Some(placeholder) => {
					let value = path_params
						.iter()
						.find(|(name, _)| *name == placeholder)
						.map(|(_, value)| value.as_str())
						.ok_or_else(|| Error::MissingParameters {
							operation,
							names: ParamNames(vec![placeholder]),
						})?;
					segments.push(value);
				}
				None => {
					segments.push(segment);
				}
			}
		}
	}

	if !query.is_empty() {
		url.query_pairs_mut()
			.extend_pairs(query.iter().map(|(name, value)| (*name, value.as_str())));
	}

	Ok(url.to_string())
}

// endregion: --- Support
