//! Simple file-backed [`SessionStore`] mirroring the browser's local-storage layout.
//!
//! Tokens and expiries persist under the same fixed keys the dashboard's local storage used
//! (`app:access`, `app:accessExp`, `app:refresh`, `app:refreshExp`, `app:user`), so a snapshot
//! survives process restarts and decides the initial authentication state.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	session::{Session, TokenSecret, User},
	store::{SessionStore, StoreError, StoreFuture},
};

#[derive(Serialize, Deserialize)]
struct PersistedSession {
	#[serde(rename = "app:access")]
	access: String,
	#[serde(rename = "app:accessExp")]
	access_exp: i64,
	#[serde(rename = "app:refresh")]
	refresh: String,
	#[serde(rename = "app:refreshExp")]
	refresh_exp: i64,
	#[serde(rename = "app:user")]
	user: User,
}
impl PersistedSession {
	fn from_session(session: &Session) -> Self {
		Self {
			access: session.access_token.expose().to_owned(),
			access_exp: session.access_expires_at.unix_timestamp(),
			refresh: session.refresh_token.expose().to_owned(),
			refresh_exp: session.refresh_expires_at.unix_timestamp(),
			user: session.user.clone(),
		}
	}

	fn into_session(self) -> Result<Session, StoreError> {
		let access_expires_at =
			OffsetDateTime::from_unix_timestamp(self.access_exp).map_err(|e| {
				StoreError::Serialization { message: format!("Invalid access expiry: {e}") }
			})?;
		let refresh_expires_at =
			OffsetDateTime::from_unix_timestamp(self.refresh_exp).map_err(|e| {
				StoreError::Serialization { message: format!("Invalid refresh expiry: {e}") }
			})?;

		Ok(Session {
			user: self.user,
			access_token: TokenSecret::new(self.access),
			access_expires_at,
			refresh_token: TokenSecret::new(self.refresh),
			refresh_expires_at,
		})
	}
}

/// Persists the session to a JSON file after each mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<Option<Session>>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let snapshot = if path.exists() { Self::load_snapshot(&path)? } else { None };

		Ok(Self { path, inner: Arc::new(RwLock::new(snapshot)) })
	}

	fn load_snapshot(path: &Path) -> Result<Option<Session>, StoreError> {
		let metadata = path.metadata().map_err(|e| StoreError::Backend {
			message: format!("Failed to inspect {}: {e}", path.display()),
		})?;

		if metadata.len() == 0 {
			return Ok(None);
		}

		let bytes = fs::read(path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;
		let persisted: Option<PersistedSession> =
			serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
				message: format!("Failed to parse {}: {e}", path.display()),
			})?;

		persisted.map(PersistedSession::into_session).transpose()
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}
		Ok(())
	}

	fn persist_locked(&self, contents: &Option<Session>) -> Result<(), StoreError> {
		Self::ensure_parent_exists(&self.path)?;

		let snapshot = contents.as_ref().map(PersistedSession::from_session);
		let serialized =
			serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Serialization {
				message: format!("Failed to serialize session snapshot: {e}"),
			})?;
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		{
			let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(&serialized).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", self.path.display()),
		})
	}
}
impl SessionStore for FileStore {
	fn load(&self) -> StoreFuture<'_, Option<Session>> {
		Box::pin(async move { Ok(self.inner.read().clone()) })
	}

	fn save(&self, session: Session) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			*guard = Some(session);
			self.persist_locked(&guard)?;

			Ok(())
		})
	}

	fn clear(&self) -> StoreFuture<'_, Option<Session>> {
		Box::pin(async move {
			let mut guard = self.inner.write();
			let previous = guard.take();

			self.persist_locked(&guard)?;

			Ok(previous)
		})
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::{env, process};
	// crates.io
	use tokio::runtime::Runtime;
	// self
	use super::*;

	fn temp_path() -> PathBuf {
		let unique = format!(
			"system_stats_client_file_store_{}_{}.json",
			process::id(),
			OffsetDateTime::now_utc().unix_timestamp_nanos(),
		);

		env::temp_dir().join(unique)
	}

	fn build_session() -> Session {
		let user = User { id: 1, email: "admin@example.com".into(), role: "admin".into() };

		Session::builder(user)
			.access_token("access-token")
			.refresh_token("refresh-token")
			.access_expires_in(Duration::minutes(15))
			.refresh_expires_in(Duration::days(30))
			.build()
			.expect("Failed to build file-store test session.")
	}

	#[test]
	fn save_and_reload_round_trip() {
		let path = temp_path();
		let store = FileStore::open(&path).expect("Failed to open file store snapshot.");
		let session = build_session();
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		rt.block_on(store.save(session.clone()))
			.expect("Failed to save fixture session to file store.");
		drop(store);

		let reopened = FileStore::open(&path).expect("Failed to reopen file store snapshot.");
		let fetched = rt
			.block_on(reopened.load())
			.expect("Failed to load fixture session from file store.")
			.expect("File store lost session after reopen.");

		assert_eq!(fetched.access_token.expose(), session.access_token.expose());
		assert_eq!(fetched.user, session.user);
		// Unix-second persistence truncates sub-second precision.
		assert_eq!(
			fetched.access_expires_at.unix_timestamp(),
			session.access_expires_at.unix_timestamp(),
		);

		fs::remove_file(&path).unwrap_or_else(|e| {
			panic!("Failed to remove temporary file store snapshot {}: {e}", path.display())
		});
	}

	#[test]
	fn clear_persists_an_empty_snapshot() {
		let path = temp_path();
		let store = FileStore::open(&path).expect("Failed to open file store snapshot.");
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		rt.block_on(store.save(build_session())).expect("Failed to save fixture session.");

		let cleared =
			rt.block_on(store.clear()).expect("Failed to clear the file store.");

		assert!(cleared.is_some());
		drop(store);

		let reopened = FileStore::open(&path).expect("Failed to reopen cleared file store.");
		let loaded = rt.block_on(reopened.load()).expect("Failed to load cleared file store.");

		assert!(loaded.is_none());

		fs::remove_file(&path).unwrap_or_else(|e| {
			panic!("Failed to remove temporary file store snapshot {}: {e}", path.display())
		});
	}
}
