//! Immutable session record, lifecycle helpers, and builder.

// self
use crate::{
	_prelude::*,
	session::{secret::TokenSecret, user::User},
};

/// Errors produced by [`SessionBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SessionBuilderError {
	/// Issued when no access token value was provided.
	#[error("Access token is required.")]
	MissingAccessToken,
	/// Issued when no refresh token value was provided.
	#[error("Refresh token is required.")]
	MissingRefreshToken,
	/// Issued when no access-token expiry was configured.
	#[error("Access expiry must be supplied via access_expires_at or access_expires_in.")]
	MissingAccessExpiry,
	/// Issued when no refresh-token expiry was configured.
	#[error("Refresh expiry must be supplied via refresh_expires_at or refresh_expires_in.")]
	MissingRefreshExpiry,
}

/// Immutable record describing an authenticated session.
///
/// Owned exclusively by the session store; replaced wholesale by login, register, and refresh,
/// and destroyed by logout or an irrecoverable refresh failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
	/// User identity returned alongside the token pair.
	pub user: User,
	/// Short-lived bearer credential attached to each request.
	pub access_token: TokenSecret,
	/// Expiry instant for the access token.
	pub access_expires_at: OffsetDateTime,
	/// Longer-lived credential exchanged for a new token pair.
	pub refresh_token: TokenSecret,
	/// Expiry instant for the refresh token.
	pub refresh_expires_at: OffsetDateTime,
}
impl Session {
	/// Returns a builder for constructing session records.
	pub fn builder(user: User) -> SessionBuilder {
		SessionBuilder::new(user)
	}

	/// Returns `true` if the access token has expired at the provided instant.
	pub fn access_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.access_expires_at
	}

	/// Returns `true` if the access token is expired relative to the current clock.
	pub fn access_expired(&self) -> bool {
		self.access_expired_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` if the refresh token has expired at the provided instant.
	pub fn refresh_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.refresh_expires_at
	}

	/// Returns `true` if the refresh token is expired relative to the current clock.
	pub fn refresh_expired(&self) -> bool {
		self.refresh_expired_at(OffsetDateTime::now_utc())
	}

	/// Determines whether the access token should be refreshed at the provided instant,
	/// treating anything inside `leeway` of the expiry as already stale.
	pub fn needs_refresh(&self, instant: OffsetDateTime, leeway: Duration) -> bool {
		self.access_expires_at - instant <= leeway
	}

	/// Produces the rotated session that replaces this one after a successful refresh,
	/// carrying the user identity forward.
	pub fn rotated(
		&self,
		access_token: impl Into<String>,
		access_expires_at: OffsetDateTime,
		refresh_token: impl Into<String>,
		refresh_expires_at: OffsetDateTime,
	) -> Self {
		Self {
			user: self.user.clone(),
			access_token: TokenSecret::new(access_token),
			access_expires_at,
			refresh_token: TokenSecret::new(refresh_token),
			refresh_expires_at,
		}
	}
}

/// Builder for [`Session`].
#[derive(Clone, Debug)]
pub struct SessionBuilder {
	user: User,
	access_token: Option<TokenSecret>,
	refresh_token: Option<TokenSecret>,
	issued_at: Option<OffsetDateTime>,
	access_expires_at: Option<OffsetDateTime>,
	access_expires_in: Option<Duration>,
	refresh_expires_at: Option<OffsetDateTime>,
	refresh_expires_in: Option<Duration>,
}
impl SessionBuilder {
	fn new(user: User) -> Self {
		Self {
			user,
			access_token: None,
			refresh_token: None,
			issued_at: None,
			access_expires_at: None,
			access_expires_in: None,
			refresh_expires_at: None,
			refresh_expires_in: None,
		}
	}

	/// Sets the issued-at instant relative expiries are computed from (defaults to now).
	pub fn issued_at(mut self, instant: OffsetDateTime) -> Self {
		self.issued_at = Some(instant);

		self
	}

	/// Provides the access token value.
	pub fn access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(TokenSecret::new(token));

		self
	}

	/// Provides the refresh token value.
	pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Sets an absolute access-token expiry instant.
	pub fn access_expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.access_expires_at = Some(instant);

		self
	}

	/// Sets a relative access-token expiry duration from the issued instant.
	pub fn access_expires_in(mut self, duration: Duration) -> Self {
		self.access_expires_in = Some(duration);

		self
	}

	/// Sets an absolute refresh-token expiry instant.
	pub fn refresh_expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.refresh_expires_at = Some(instant);

		self
	}

	/// Sets a relative refresh-token expiry duration from the issued instant.
	pub fn refresh_expires_in(mut self, duration: Duration) -> Self {
		self.refresh_expires_in = Some(duration);

		self
	}

	/// Consumes the builder and produces a [`Session`].
	pub fn build(self) -> Result<Session, SessionBuilderError> {
		let access_token = self.access_token.ok_or(SessionBuilderError::MissingAccessToken)?;
		let refresh_token = self.refresh_token.ok_or(SessionBuilderError::MissingRefreshToken)?;
		let issued_at = self.issued_at.unwrap_or_else(OffsetDateTime::now_utc);
		let access_expires_at = match (self.access_expires_at, self.access_expires_in) {
			(Some(instant), _) => instant,
			(None, Some(delta)) => issued_at + delta,
			(None, None) => return Err(SessionBuilderError::MissingAccessExpiry),
		};
		let refresh_expires_at = match (self.refresh_expires_at, self.refresh_expires_in) {
			(Some(instant), _) => instant,
			(None, Some(delta)) => issued_at + delta,
			(None, None) => return Err(SessionBuilderError::MissingRefreshExpiry),
		};

		Ok(Session {
			user: self.user,
			access_token,
			access_expires_at,
			refresh_token,
			refresh_expires_at,
		})
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn user() -> User {
		User { id: 7, email: "op@example.com".into(), role: "admin".into() }
	}

	#[test]
	fn builder_handles_relative_expiry() {
		let issued = macros::datetime!(2025-01-01 00:00 UTC);
		let session = Session::builder(user())
			.access_token("access")
			.refresh_token("refresh")
			.issued_at(issued)
			.access_expires_in(Duration::minutes(15))
			.refresh_expires_in(Duration::days(30))
			.build()
			.expect("Session builder should support relative expiry calculations.");

		assert_eq!(session.access_expires_at, macros::datetime!(2025-01-01 00:15 UTC));
		assert_eq!(session.refresh_expires_at, macros::datetime!(2025-01-31 00:00 UTC));
	}

	#[test]
	fn builder_requires_both_tokens_and_expiries() {
		let err = Session::builder(user())
			.refresh_token("refresh")
			.refresh_expires_in(Duration::days(30))
			.build()
			.expect_err("Missing access token should be rejected.");

		assert_eq!(err, SessionBuilderError::MissingAccessToken);

		let err = Session::builder(user())
			.access_token("access")
			.refresh_token("refresh")
			.access_expires_in(Duration::minutes(15))
			.build()
			.expect_err("Missing refresh expiry should be rejected.");

		assert_eq!(err, SessionBuilderError::MissingRefreshExpiry);
	}

	#[test]
	fn expiry_helpers_cover_both_tokens() {
		let issued = macros::datetime!(2025-06-01 12:00 UTC);
		let session = Session::builder(user())
			.access_token("access")
			.refresh_token("refresh")
			.issued_at(issued)
			.access_expires_in(Duration::minutes(15))
			.refresh_expires_in(Duration::days(30))
			.build()
			.expect("Session fixture should build successfully.");

		assert!(!session.access_expired_at(macros::datetime!(2025-06-01 12:10 UTC)));
		assert!(session.access_expired_at(macros::datetime!(2025-06-01 12:15 UTC)));
		assert!(!session.refresh_expired_at(macros::datetime!(2025-06-15 12:00 UTC)));
		assert!(session.refresh_expired_at(macros::datetime!(2025-07-01 12:00 UTC)));
		assert!(session.needs_refresh(macros::datetime!(2025-06-01 12:14:40 UTC), Duration::seconds(30)));
		assert!(!session.needs_refresh(macros::datetime!(2025-06-01 12:05 UTC), Duration::seconds(30)));
	}

	#[test]
	fn rotation_preserves_the_user() {
		let issued = macros::datetime!(2025-06-01 12:00 UTC);
		let session = Session::builder(user())
			.access_token("access-old")
			.refresh_token("refresh-old")
			.issued_at(issued)
			.access_expires_in(Duration::minutes(15))
			.refresh_expires_in(Duration::days(30))
			.build()
			.expect("Session fixture should build successfully.");
		let rotated = session.rotated(
			"access-new",
			issued + Duration::minutes(30),
			"refresh-new",
			issued + Duration::days(60),
		);

		assert_eq!(rotated.user, session.user);
		assert_eq!(rotated.access_token.expose(), "access-new");
		assert_eq!(rotated.refresh_token.expose(), "refresh-new");
	}
}
