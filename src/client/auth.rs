//! Authentication operations and the singleflight refresh coordinator.
//!
//! Every caller that needs a rotation queues on one process-wide async gate, so at most one
//! `auth/refresh` exchange is in flight at a time. The caller holding the gate performs the
//! exchange and persists the rotated [`Session`]; callers that were queued behind it observe
//! the already-rotated session when they acquire the gate and return without touching the
//! network. A failed exchange clears the stored session and is remembered in the gate slot,
//! keyed by the access token it invalidated, so queued callers receive the same terminal
//! outcome instead of hammering the backend with doomed retries.

mod metrics;

pub use metrics::RefreshMetrics;

// self
use crate::{
	_prelude::*,
	api::{self, AuthPayload, Envelope, RefreshPayload},
	client::{Client, request::Call},
	error::RefreshFailure,
	http::{ApiRequest, ApiTransport},
	obs::{self, CallKind, CallOutcome, CallSpan},
	session::{Session, TokenSecret, User},
};

/// Access tokens inside this window of their expiry are treated as already stale, absorbing
/// clock skew between the client and the backend.
const ACCESS_REFRESH_LEEWAY: Duration = Duration::seconds(30);
/// The backend does not report a refresh-token TTL, so the client tracks the documented
/// thirty-day lifetime itself.
const REFRESH_TOKEN_TTL: Duration = Duration::days(30);

/// State protected by the refresh gate.
///
/// Besides serializing refresh exchanges, the slot remembers the last terminal failure and
/// the access token that failure invalidated, so late arrivals holding that token share the
/// outcome instead of re-running a refresh that is known to be doomed.
#[derive(Debug, Default)]
pub(crate) struct RefreshSlot {
	failed: Option<FailedRefresh>,
}

#[derive(Debug)]
struct FailedRefresh {
	access: String,
	failure: RefreshFailure,
}

impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Exchanges credentials for a token pair via `auth/login` and persists the session.
	pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
		let payload: Envelope<AuthPayload> = self
			.call(
				CallKind::Auth,
				"login",
				Call::post(
					"auth/login",
					serde_json::json!({ "email": email, "password": password }),
				),
			)
			.await?;

		self.adopt(payload.data).await
	}

	/// Creates an account via `auth/register` and persists the resulting session.
	pub async fn register(&self, email: &str, password: &str) -> Result<Session> {
		let payload: Envelope<AuthPayload> = self
			.call(
				CallKind::Auth,
				"register",
				Call::post(
					"auth/register",
					serde_json::json!({ "email": email, "password": password }),
				),
			)
			.await?;

		self.adopt(payload.data).await
	}

	/// Fetches the authenticated user's identity via `users/me`.
	pub async fn me(&self) -> Result<User> {
		let payload: Envelope<User> =
			self.call(CallKind::Auth, "me", Call::get("users/me").authenticated()).await?;

		Ok(payload.data)
	}

	/// Ends the session: revokes the refresh token server-side on a best-effort basis, then
	/// clears the store unconditionally. The local session is gone when this returns `Ok`,
	/// whatever the backend said.
	pub async fn logout(&self) -> Result<()> {
		if let Some(session) = self.store.load().await? {
			let call = Call::post(
				"auth/logout",
				serde_json::json!({ "refresh_token": session.refresh_token.expose() }),
			)
			.authenticated();
			let result: Result<serde_json::Value> =
				self.call(CallKind::Auth, "logout", call).await;

			if let Err(_e) = result {
				#[cfg(feature = "tracing")]
				tracing::warn!(error = %_e, "Server-side logout failed; clearing the local session anyway.");
			}
		}

		self.store.clear().await?;

		Ok(())
	}

	/// Ensures the stored access token is valid for at least the refresh leeway, rotating it
	/// proactively when it is not, and returns the resulting session.
	///
	/// Callers that poll on a schedule can use this to avoid paying the 401 round-trip on
	/// their next request.
	pub async fn ensure_fresh_token(&self) -> Result<Session> {
		const KIND: CallKind = CallKind::Refresh;

		let span = CallSpan::new(KIND, "ensure_fresh_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.refresh_session(None)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Core of the refresh coordinator; `observed_access` is the bearer the caller last used,
	/// `None` for proactive rotations that saw no 401.
	pub(crate) async fn refresh_session(&self, observed_access: Option<&str>) -> Result<Session> {
		let mut slot = self.refresh_gate().lock().await;

		self.refresh_metrics().record_attempt();

		let now = OffsetDateTime::now_utc();
		let current = match self.store.load().await {
			Ok(session) => session,
			Err(e) => {
				self.refresh_metrics().record_failure();

				return Err(e.into());
			},
		};
		let Some(session) = current else {
			self.refresh_metrics().record_failure();

			// A cleared store plus a matching failure record means this caller was queued
			// behind the exchange that just failed; fan the same outcome out to it.
			if let Some(observed) = observed_access
				&& let Some(failed) = &slot.failed
				&& failed.access == observed
			{
				return Err(Error::RefreshFailed(failed.failure.clone()));
			}

			return Err(Error::SessionExpired);
		};

		// Queued callers find the session already rotated by the gate holder that preceded
		// them; reuse it without another exchange.
		if let Some(observed) = observed_access
			&& !session.access_token.matches(observed)
			&& !session.access_expired_at(now)
		{
			self.refresh_metrics().record_success();

			return Ok(session);
		}
		if observed_access.is_none() && !session.needs_refresh(now, ACCESS_REFRESH_LEEWAY) {
			self.refresh_metrics().record_success();

			return Ok(session);
		}
		if session.refresh_expired_at(now) {
			self.refresh_metrics().record_failure();

			return Err(Error::SessionExpired);
		}

		// The exchange goes straight through the transport rather than the dispatcher: a 401
		// here is a terminal rejection of the refresh token, never a trigger for recursion.
		let url = self.endpoint("auth/refresh", &[])?;
		let body = serde_json::json!({ "refresh_token": session.refresh_token.expose() });
		let response = match self.transport.execute(ApiRequest::post(url, body)).await {
			Ok(response) => response,
			Err(e) => {
				let failure = RefreshFailure::Network { message: e.to_string() };

				return Err(self.fail_refresh(&mut slot, &session, failure).await?);
			},
		};

		if !response.is_success() {
			let rejection = api::rejection(&response);
			let failure = RefreshFailure::Rejected {
				status: rejection.status,
				code: rejection.code,
				message: rejection.message,
			};

			return Err(self.fail_refresh(&mut slot, &session, failure).await?);
		}

		let payload: Envelope<RefreshPayload> = match api::decode(&response) {
			Ok(payload) => payload,
			Err(e) => {
				self.refresh_metrics().record_failure();

				return Err(e);
			},
		};
		let rotated = session.rotated(
			payload.data.access_token,
			now + Duration::seconds(payload.data.expires_in),
			payload.data.refresh_token,
			now + REFRESH_TOKEN_TTL,
		);

		self.store.save(rotated.clone()).await?;

		slot.failed = None;

		self.refresh_metrics().record_success();

		Ok(rotated)
	}

	/// Records a terminal refresh failure, then clears the session so no further request can
	/// reuse the invalidated tokens.
	///
	/// The failure is parked in the slot and counted before the store is touched; queued
	/// callers holding the invalidated token fan out the shared outcome even when the clear
	/// itself fails.
	async fn fail_refresh(
		&self,
		slot: &mut RefreshSlot,
		session: &Session,
		failure: RefreshFailure,
	) -> Result<Error> {
		slot.failed = Some(FailedRefresh {
			access: session.access_token.expose().to_owned(),
			failure: failure.clone(),
		});

		self.refresh_metrics().record_failure();

		#[cfg(feature = "tracing")]
		tracing::warn!(error = %failure, "Token refresh failed; clearing the session.");

		self.store.clear().await?;

		Ok(Error::RefreshFailed(failure))
	}

	async fn adopt(&self, payload: AuthPayload) -> Result<Session> {
		let now = OffsetDateTime::now_utc();
		let session = Session {
			user: payload.user,
			access_token: TokenSecret::new(payload.access_token),
			access_expires_at: now + Duration::seconds(payload.expires_in),
			refresh_token: TokenSecret::new(payload.refresh_token),
			refresh_expires_at: now + REFRESH_TOKEN_TTL,
		};

		self.store.save(session.clone()).await?;

		Ok(session)
	}
}
