use crate::webc::{Result, WebRequestData, WebResponse};
use futures::future::BoxFuture;

/// The seam between the operation layer and the network.
///
/// A `Transport` sends one `WebRequestData` and decodes the reply.
/// Retry behavior is owned by the transport; the service only tells it
/// whether retries are currently enabled.
pub trait Transport: Send + Sync {
	fn send(&self, request: WebRequestData, retries_enabled: bool) -> BoxFuture<'_, Result<WebResponse>>;
}

impl<T> Transport for std::sync::Arc<T>
where
	T: Transport + ?Sized,
{
	fn send(&self, request: WebRequestData, retries_enabled: bool) -> BoxFuture<'_, Result<WebResponse>> {
		(**self).send(request, retries_enabled)
	}
}
