//! Storage contracts and built-in store implementations for the persisted session.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, session::Session};

/// Persistence contract future for session stores.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Storage backend contract implemented by session stores.
///
/// A store holds at most one [`Session`]; login, register, and refresh replace it wholesale,
/// and logout or an irrecoverable refresh failure clears it.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Fetches the persisted session, if present.
	fn load(&self) -> StoreFuture<'_, Option<Session>>;

	/// Persists or replaces the session.
	fn save(&self, session: Session) -> StoreFuture<'_, ()>;

	/// Removes the persisted session, returning what was stored.
	fn clear(&self) -> StoreFuture<'_, Option<Session>>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn store_error_can_be_serialized() {
		let payload = serde_json::to_string(&StoreError::Serialization { message: "bad".into() })
			.expect("StoreError should serialize to JSON.");
		let round_trip: StoreError =
			serde_json::from_str(&payload).expect("Serialized error should deserialize from JSON.");

		assert_eq!(round_trip, StoreError::Serialization { message: "bad".into() });
	}
}
