//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use dr_automation::DrAutomationService;
use dr_automation::resolver::{AuthType, Authenticator, NoAuthAuthenticator};
use dr_automation::webc::{self, Transport, WebRequestData, WebResponse};
use futures::future::BoxFuture;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Common Constants

pub const TEST_SERVICE_URL: &str = "https://power-dra.test.cloud.ibm.com";
pub const INSTANCE_ID: &str = "123456d3-1122-3344-b67d-4389b44b7bf9";
pub const EVENT_ID: &str = "00116b2a-9326-4024-839e-fb5364b76898";
pub const ACCEPT_LANGUAGE: &str = "testString";
pub const JSON: &str = "application/json";

pub const USER_ACCEPT: &str = "fake/accept";
pub const USER_CONTENT_TYPE: &str = "fake/contentType";

// endregion: --- Common Constants

// region:    --- RecordingTransport

#[derive(Debug, Clone)]
pub struct RecordedCall {
	pub request: WebRequestData,
	pub retries_enabled: bool,
}

/// Records every request and answers `200 {"ok": true}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
	calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
	pub fn calls(&self) -> Vec<RecordedCall> {
		self.calls.lock().unwrap().clone()
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().unwrap().len()
	}

	pub fn last_call(&self) -> RecordedCall {
		self.calls.lock().unwrap().last().cloned().expect("at least one transport call")
	}

	pub fn last_request(&self) -> WebRequestData {
		self.last_call().request
	}

	pub fn clear(&self) {
		self.calls.lock().unwrap().clear();
	}
}

impl Transport for RecordingTransport {
	fn send(&self, request: WebRequestData, retries_enabled: bool) -> BoxFuture<'_, webc::Result<WebResponse>> {
		self.calls.lock().unwrap().push(RecordedCall {
			request,
			retries_enabled,
		});
		Box::pin(async {
			Ok(WebResponse {
				status: StatusCode::OK,
				result: json!({"ok": true}),
				headers: vec![("content-type".to_string(), JSON.to_string())],
			})
		})
	}
}

// endregion: --- RecordingTransport

// region:    --- CountingAuthenticator

/// NoAuth that counts how many requests it was asked to authenticate.
#[derive(Debug, Default)]
pub struct CountingAuthenticator {
	pub count: AtomicUsize,
}

impl Authenticator for CountingAuthenticator {
	fn auth_type(&self) -> AuthType {
		AuthType::NoAuth
	}

	fn authenticate<'a>(&'a self, _request: &'a mut WebRequestData) -> BoxFuture<'a, dr_automation::Result<()>> {
		self.count.fetch_add(1, Ordering::SeqCst);
		Box::pin(async { Ok(()) })
	}
}

// endregion: --- CountingAuthenticator

// region:    --- Common Services

/// A service on `TEST_SERVICE_URL`, with NoAuth and a recording transport.
pub fn recording_service() -> (DrAutomationService, Arc<RecordingTransport>) {
	let transport = Arc::new(RecordingTransport::default());
	let service = DrAutomationService::builder()
		.with_service_url(TEST_SERVICE_URL)
		.with_authenticator(NoAuthAuthenticator)
		.with_transport(transport.clone())
		.build()
		.expect("service should build");
	(service, transport)
}

pub fn expected_url(path: &str) -> String {
	format!("{TEST_SERVICE_URL}{path}")
}

/// Asserts the computed `Accept` / `Content-Type` of a request.
pub fn assert_media_headers(request: &WebRequestData, accept: &str, content_type: Option<&str>) {
	assert_eq!(request.header("Accept"), Some(accept), "Accept");
	assert_eq!(request.header("Content-Type"), content_type, "Content-Type");
}

// endregion: --- Common Services
