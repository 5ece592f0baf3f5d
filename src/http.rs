//! Transport primitives for backend API calls.
//!
//! The module exposes [`ApiTransport`] alongside [`ApiRequest`] and [`ApiResponse`] so
//! downstream crates can integrate custom HTTP stacks. The trait is the client's only
//! dependency on an HTTP implementation; the default reqwest-backed transport lives behind
//! the `reqwest` feature.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// HTTP methods the backend API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
	/// `GET` request.
	Get,
	/// `POST` request.
	Post,
}
impl Method {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// A fully resolved request handed to the transport.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute endpoint URL including any query parameters.
	pub url: Url,
	/// Bearer token attached as an `Authorization` header, when present.
	pub bearer: Option<String>,
	/// JSON body for `POST` requests.
	pub body: Option<serde_json::Value>,
}
impl ApiRequest {
	/// Builds a `GET` request for the provided URL.
	pub fn get(url: Url) -> Self {
		Self { method: Method::Get, url, bearer: None, body: None }
	}

	/// Builds a `POST` request carrying a JSON body.
	pub fn post(url: Url, body: serde_json::Value) -> Self {
		Self { method: Method::Post, url, bearer: None, body: Some(body) }
	}

	/// Attaches (or removes) the bearer token.
	pub fn with_bearer(mut self, bearer: Option<String>) -> Self {
		self.bearer = bearer;

		self
	}
}

/// Raw response captured by the transport before decoding.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Returns `true` for a 401 status, the sole trigger for the refresh coordinator.
	pub fn is_unauthorized(&self) -> bool {
		self.status == 401
	}
}

/// Boxed future returned by [`ApiTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing backend API calls.
///
/// Implementations must be `Send + Sync + 'static` so they can be shared behind `Arc`
/// across client clones without additional wrappers.
pub trait ApiTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes the request and returns the raw response.
	///
	/// Implementations surface connection-level failures as [`TransportError`]; non-2xx
	/// statuses are not errors at this layer, the dispatcher classifies them.
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiTransport for ReqwestTransport {
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
			};
			let mut builder = client.request(method, request.url);

			if let Some(bearer) = &request.bearer {
				builder = builder.header("authorization", format!("Bearer {bearer}"));
			}
			if let Some(body) = &request.body {
				let bytes = serde_json::to_vec(body).map_err(TransportError::network)?;

				builder = builder.header("content-type", "application/json").body(bytes);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(ApiResponse { status, body })
		})
	}
}
