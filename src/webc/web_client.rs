use crate::webc::{Error, Result, Transport, WebRequestData, WebResponse};
use futures::future::BoxFuture;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

// region:    --- RetryConfig

/// Retry settings used by `WebClient` when the service has retries enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
	/// Retries after the first attempt.
	pub max_retries: u32,
	/// Upper bound for a single backoff delay.
	pub max_retry_interval: Duration,
	/// Delay before the first retry, doubled for each following one.
	pub base_backoff: Duration,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_retries: 4,
			max_retry_interval: Duration::from_secs(30),
			base_backoff: Duration::from_secs(1),
		}
	}
}

/// Chainable Setters
impl RetryConfig {
	#[must_use]
	pub const fn with_max_retries(mut self, value: u32) -> Self {
		self.max_retries = value;
		self
	}

	#[must_use]
	pub const fn with_max_retry_interval(mut self, value: Duration) -> Self {
		self.max_retry_interval = value;
		self
	}

	#[must_use]
	pub const fn with_base_backoff(mut self, value: Duration) -> Self {
		self.base_backoff = value;
		self
	}
}

impl RetryConfig {
	/// Delay before retry number `retry_number` (1-based).
	pub fn backoff_delay(&self, retry_number: u32) -> Duration {
		let shift = retry_number.saturating_sub(1).min(16);
		self.base_backoff.saturating_mul(1u32 << shift).min(self.max_retry_interval)
	}
}

// endregion: --- RetryConfig

// region:    --- WebClient

/// The default `Transport`, backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
	retry_config: RetryConfig,
}

/// Constructors & Setters
impl WebClient {
	/// Timeout of a whole request (connect to end of body) for `new()`.
	pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

	pub fn new() -> Result<Self> {
		Self::with_timeout(Self::DEFAULT_TIMEOUT)
	}

	/// A client whose requests fail with a (retryable) timeout after `timeout`.
	pub fn with_timeout(timeout: Duration) -> Result<Self> {
		let reqwest_client = reqwest::Client::builder().timeout(timeout).build()?;
		Ok(Self::from_reqwest_client(reqwest_client))
	}

	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self {
			reqwest_client,
			retry_config: RetryConfig::default(),
		}
	}

	#[must_use]
	pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
		self.retry_config = retry_config;
		self
	}

	pub fn retry_config(&self) -> &RetryConfig {
		&self.retry_config
	}
}

/// Execution
impl WebClient {
	/// Sends the request, retrying retryable failures when `retries_enabled`.
	pub async fn execute(&self, request: &WebRequestData, retries_enabled: bool) -> Result<WebResponse> {
		let max_attempts = if retries_enabled {
			self.retry_config.max_retries.saturating_add(1)
		} else {
			1
		};
		let headers = to_header_map(&request.headers)?;
		let method = request.method.to_reqwest();

		let mut attempt: u32 = 0;
		loop {
			attempt += 1;

			let mut builder = self
				.reqwest_client
				.request(method.clone(), request.url.as_str())
				.headers(headers.clone());
			if let Some(body) = &request.body {
				builder = builder.body(body.to_string());
			}

			debug!(attempt, operation = request.operation, %method, url = %request.url, "sending request");

			match builder.send().await {
				Ok(response) => {
					let status = response.status();
					if attempt < max_attempts && is_retryable_status(status) {
						warn!(attempt, operation = request.operation, %status, "retryable response status");
						tokio::time::sleep(self.retry_config.backoff_delay(attempt)).await;
						continue;
					}
					debug!(attempt, operation = request.operation, %status, "received response");
					return into_web_response(response).await;
				}
				Err(err) => {
					if attempt < max_attempts && is_retryable_error(&err) {
						warn!(attempt, operation = request.operation, error = %err, "retryable request failure");
						tokio::time::sleep(self.retry_config.backoff_delay(attempt)).await;
						continue;
					}
					return Err(err.into());
				}
			}
		}
	}
}

impl Transport for WebClient {
	fn send(&self, request: WebRequestData, retries_enabled: bool) -> BoxFuture<'_, Result<WebResponse>> {
		Box::pin(async move { self.execute(&request, retries_enabled).await })
	}
}

// endregion: --- WebClient

// region:    --- Support

fn to_header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
	let mut map = HeaderMap::with_capacity(headers.len());
	for (name, value) in headers {
		let header_name =
			HeaderName::from_bytes(name.as_bytes()).map_err(|_| Error::InvalidHeader { name: name.to_string() })?;
		let header_value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader { name: name.to_string() })?;
		map.insert(header_name, header_value);
	}
	Ok(map)
}

async fn into_web_response(response: reqwest::Response) -> Result<WebResponse> {
	let status = response.status();
	let headers: Vec<(String, String)> = response
		.headers()
		.iter()
		.filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string())))
		.collect();
	let body = response.text().await?;

	if !status.is_success() {
		return Err(Error::ResponseFailedStatus { status, body, headers });
	}

	let result = if body.trim().is_empty() {
		Value::Null
	} else {
		match serde_json::from_str(&body) {
			Ok(value) => value,
			Err(cause) => return Err(Error::ResponseFailedNotJson { status, body, cause }),
		}
	};

	Ok(WebResponse { status, result, headers })
}

fn is_retryable_status(status: StatusCode) -> bool {
	matches!(
		status,
		StatusCode::TOO_MANY_REQUESTS
			| StatusCode::INTERNAL_SERVER_ERROR
			| StatusCode::BAD_GATEWAY
			| StatusCode::SERVICE_UNAVAILABLE
			| StatusCode::GATEWAY_TIMEOUT
	)
}

fn is_retryable_error(err: &reqwest::Error) -> bool {
	err.is_timeout() || err.is_connect()
}

// endregion: --- Support
