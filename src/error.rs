//! Client-level error types shared across operations, stores, and transports.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Backend response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Backend rejected the request with a structured error payload.
	#[error(transparent)]
	Api(#[from] ApiRejection),

	/// Refresh token is missing or past its expiry; re-authentication is required.
	#[error("Session has expired and must be re-established by logging in.")]
	SessionExpired,
	/// Backend rejected the refresh exchange or it failed in transit; the session was cleared.
	#[error("Token refresh failed: {0}")]
	RefreshFailed(#[source] RefreshFailure),
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Endpoint path could not be joined onto the configured base URL.
	#[error("Endpoint path `{path}` cannot be joined onto the base URL.")]
	InvalidEndpoint {
		/// Relative endpoint path that failed to join.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body for `{path}` could not be serialized.")]
	RequestBody {
		/// Relative endpoint path the body was destined for.
		path: String,
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Setup form values failed client-side validation.
	#[error(transparent)]
	InvalidSetup(#[from] crate::setup::SetupValidationError),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the backend.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Backend returned a body that could not be decoded into the expected type.
#[derive(Debug, ThisError)]
#[error("Backend returned a malformed response body (status {status}).")]
pub struct DecodeError {
	/// Structured parsing failure including the path that failed.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the offending response.
	pub status: u16,
}

/// Structured rejection payload surfaced by the backend.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Backend rejected the request: {message} (status {status}).")]
pub struct ApiRejection {
	/// HTTP status code of the rejection.
	pub status: u16,
	/// Machine-readable error code, when supplied.
	pub code: Option<String>,
	/// Human-readable error message.
	pub message: String,
	/// Additional detail string, when supplied.
	pub detail: Option<String>,
}
impl ApiRejection {
	/// Returns `true` when the rejection carries a 401 status.
	pub fn is_unauthorized(&self) -> bool {
		self.status == 401
	}
}

/// Terminal refresh outcome fanned out to every caller queued behind a pending refresh.
///
/// The coordinator clears the stored session before surfacing one of these, so the type is
/// cloneable by design: each waiter receives the same outcome without re-running the exchange.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RefreshFailure {
	/// Backend rejected the refresh token.
	#[error("backend rejected the refresh token: {message} (status {status}).")]
	Rejected {
		/// HTTP status code of the rejection.
		status: u16,
		/// Machine-readable error code, when supplied.
		code: Option<String>,
		/// Human-readable error message.
		message: String,
	},
	/// Refresh call failed in transit before a response arrived.
	#[error("refresh call failed in transit: {message}.")]
	Network {
		/// Transport error rendered as a string so the failure stays cloneable.
		message: String,
	},
}
