//! Thread-safe in-memory [`SessionStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	session::Session,
	store::{SessionStore, StoreError, StoreFuture},
};

type Slot = Arc<RwLock<Option<Session>>>;

/// Thread-safe storage backend that keeps the session in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Slot);
impl MemoryStore {
	fn load_now(slot: Slot) -> Option<Session> {
		slot.read().clone()
	}

	fn save_now(slot: Slot, session: Session) -> Result<(), StoreError> {
		*slot.write() = Some(session);

		Ok(())
	}

	fn clear_now(slot: Slot) -> Option<Session> {
		slot.write().take()
	}
}
impl SessionStore for MemoryStore {
	fn load(&self) -> StoreFuture<'_, Option<Session>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(Self::load_now(slot)) })
	}

	fn save(&self, session: Session) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move { Self::save_now(slot, session) })
	}

	fn clear(&self) -> StoreFuture<'_, Option<Session>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(Self::clear_now(slot)) })
	}
}
