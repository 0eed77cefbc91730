use std::sync::Arc;

/// The service URL that operation templates are appended to.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}
}

impl From<&str> for Endpoint {
	fn from(url: &str) -> Self {
		Self::from_owned(url)
	}
}

impl From<String> for Endpoint {
	fn from(url: String) -> Self {
		Self::from_owned(url)
	}
}
