//! High-level client coordinating authentication, telemetry, and setup operations.

pub mod auth;
pub mod request;
pub mod setup;
pub mod telemetry;

pub use auth::RefreshMetrics;
pub use request::Call;

// self
use crate::{
	_prelude::*,
	client::auth::RefreshSlot,
	error::ConfigError,
	http::ApiTransport,
	store::SessionStore,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestTransport>;

/// Coordinates every interaction with one system-stats backend.
///
/// The client owns the transport, the session store, and the refresh gate so individual
/// operations can focus on endpoint-specific logic. The gate is the process-wide
/// singleflight guard: whatever the number of interleaved callers that observe a stale or
/// rejected access token, at most one `auth/refresh` call is ever outstanding.
pub struct Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	/// Session store that persists issued tokens.
	pub store: Arc<dyn SessionStore>,
	base_url: Url,
	refresh_gate: Arc<AsyncMutex<RefreshSlot>>,
	refresh_metrics: Arc<RefreshMetrics>,
}
impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	///
	/// The base URL should point at the API root (e.g. `http://host:8080/api/v1`); endpoint
	/// paths are joined onto it, so a missing trailing slash is added here.
	pub fn with_transport(
		mut base_url: Url,
		store: Arc<dyn SessionStore>,
		transport: impl Into<Arc<T>>,
	) -> Self {
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());

			base_url.set_path(&path);
		}

		Self {
			transport: transport.into(),
			store,
			base_url,
			refresh_gate: Default::default(),
			refresh_metrics: Default::default(),
		}
	}

	/// Returns the API root this client talks to.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Returns the shared refresh counters.
	pub fn refresh_metrics(&self) -> &RefreshMetrics {
		&self.refresh_metrics
	}

	pub(crate) fn refresh_gate(&self) -> &AsyncMutex<RefreshSlot> {
		&self.refresh_gate
	}

	pub(crate) fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
		let mut url = self.base_url.join(path).map_err(|e| ConfigError::InvalidEndpoint {
			path: path.to_owned(),
			source: e,
		})?;

		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
		}

		Ok(url)
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Creates a new client for the provided API root and session store.
	///
	/// The client provisions its own reqwest-backed transport so callers do not need to pass
	/// HTTP handles explicitly.
	pub fn new(base_url: Url, store: Arc<dyn SessionStore>) -> Self {
		Self::with_transport(base_url, store, ReqwestTransport::default())
	}
}
impl<T> Clone for Client<T>
where
	T: ?Sized + ApiTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			store: self.store.clone(),
			base_url: self.base_url.clone(),
			refresh_gate: self.refresh_gate.clone(),
			refresh_metrics: self.refresh_metrics.clone(),
		}
	}
}
impl<T> Debug for Client<T>
where
	T: ?Sized + ApiTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client").field("base_url", &self.base_url.as_str()).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::store::MemoryStore;

	#[cfg(feature = "reqwest")]
	#[test]
	fn endpoint_joining_normalizes_the_base() {
		let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::default());
		let base = Url::parse("http://127.0.0.1:8080/api/v1").expect("Base URL should parse.");
		let client = Client::new(base, store);

		assert_eq!(
			client
				.endpoint("auth/login", &[])
				.expect("Endpoint join should succeed.")
				.as_str(),
			"http://127.0.0.1:8080/api/v1/auth/login",
		);
		assert_eq!(
			client
				.endpoint("cpu", &[("hours", "24".into())])
				.expect("Endpoint join should succeed.")
				.as_str(),
			"http://127.0.0.1:8080/api/v1/cpu?hours=24",
		);
	}
}
