//! Redacting wrapper for bearer-token material.
//!
//! Access and refresh tokens transit every layer of the client (store snapshots, refresh
//! exchanges, the dispatcher's retry bookkeeping), so the wrapper makes leaking them through
//! `Debug`/`Display` formatting impossible rather than merely discouraged. The raw value is
//! only reachable through [`TokenSecret::expose`].

// self
use crate::_prelude::*;

/// An access or refresh token, redacted in all formatting output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(Box<str>);
impl TokenSecret {
	/// Wraps freshly issued token material.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into().into_boxed_str())
	}

	/// Returns the raw token value for wire use. Callers must not log this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Compares the token against a candidate raw value.
	///
	/// The refresh coordinator uses this to recognize that a queued caller's token was
	/// already rotated by the exchange it waited behind.
	pub fn matches(&self, candidate: &str) -> bool {
		self.expose() == candidate
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "TokenSecret(<redacted {} bytes>)", self.0.len())
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = TokenSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "TokenSecret(<redacted 12 bytes>)");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn matches_compares_raw_values() {
		let secret = TokenSecret::new("access-1");

		assert!(secret.matches("access-1"));
		assert!(!secret.matches("access-2"));
		assert_eq!(secret.expose(), "access-1");
	}

	#[test]
	fn secret_serializes_as_the_raw_string() {
		let secret = TokenSecret::new("opaque-token");
		let payload =
			serde_json::to_string(&secret).expect("Token secret should serialize to JSON.");

		assert_eq!(payload, "\"opaque-token\"");

		let round_trip: TokenSecret =
			serde_json::from_str(&payload).expect("Token secret should deserialize from JSON.");

		assert!(round_trip.matches("opaque-token"));
	}
}
