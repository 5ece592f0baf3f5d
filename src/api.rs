//! Wire-level payloads and decoding helpers shared by every operation.
//!
//! Auth and setup endpoints wrap successful payloads in a `{"data": ...}` envelope and report
//! failures as `{"code", "error", "detail"}` bodies; telemetry endpoints use per-widget shapes
//! defined alongside their types. All bodies are decoded through `serde_path_to_error` so a
//! malformed payload reports the JSON path that failed.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{ApiRejection, DecodeError},
	http::ApiResponse,
	session::User,
};

/// Success envelope used by auth and setup endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
	/// Wrapped payload.
	pub data: T,
}

/// Payload returned by `auth/login` and `auth/register`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthPayload {
	/// Authenticated user identity.
	pub user: User,
	/// Newly issued access token.
	pub access_token: String,
	/// Newly issued refresh token.
	pub refresh_token: String,
	/// Access-token TTL in seconds.
	pub expires_in: i64,
}

/// Payload returned by `auth/refresh`.
#[derive(Clone, Debug, Deserialize)]
pub struct RefreshPayload {
	/// Rotated access token.
	pub access_token: String,
	/// Rotated refresh token.
	pub refresh_token: String,
	/// Access-token TTL in seconds.
	pub expires_in: i64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
	code: Option<String>,
	error: Option<String>,
	detail: Option<String>,
}

/// Decodes a 2xx response body into `T`, or classifies the failure.
pub(crate) fn decode<T>(response: &ApiResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	if !response.is_success() {
		return Err(rejection(response).into());
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|e| DecodeError { source: e, status: response.status }.into())
}

/// Builds a structured rejection from a non-2xx response, tolerating bodies that are not the
/// backend's canonical error shape.
pub(crate) fn rejection(response: &ApiResponse) -> ApiRejection {
	let body: ErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();

	ApiRejection {
		status: response.status,
		code: body.code,
		message: body.error.unwrap_or_else(|| format!("request failed with status {}", response.status)),
		detail: body.detail,
	}
}
