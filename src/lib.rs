//! Async Rust client for the system-stats monitoring backend: session storage, singleflight
//! token refresh, and typed telemetry/setup endpoints in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod obs;
pub mod session;
pub mod setup;
pub mod store;
pub mod telemetry;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::Client,
		http::ReqwestTransport,
		session::{Session, User},
		store::{MemoryStore, SessionStore},
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = Client<ReqwestTransport>;

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_transport() -> ReqwestTransport {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	/// Constructs a [`Client`] backed by an in-memory session store and the reqwest transport
	/// used across integration tests.
	pub fn build_reqwest_test_client(base_url: &str) -> (ReqwestTestClient, Arc<MemoryStore>) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn SessionStore> = store_backend.clone();
		let base_url = Url::parse(base_url).expect("Test base URL should parse successfully.");
		let client = Client::with_transport(base_url, store, test_reqwest_transport());

		(client, store_backend)
	}

	/// Seeds the store with a session whose token lifetimes are relative to the current clock.
	pub async fn seed_session(
		store: &MemoryStore,
		access: &str,
		access_ttl: Duration,
		refresh: &str,
		refresh_ttl: Duration,
	) -> Session {
		let now = OffsetDateTime::now_utc();
		let user = User { id: 1, email: "admin@example.com".into(), role: "admin".into() };
		let session = Session::builder(user)
			.access_token(access)
			.access_expires_at(now + access_ttl)
			.refresh_token(refresh)
			.refresh_expires_at(now + refresh_ttl)
			.build()
			.expect("Session fixture should build successfully.");

		store.save(session.clone()).await.expect("Failed to seed session fixture into the store.");

		session
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _, tokio as _};
