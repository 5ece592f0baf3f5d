#![cfg(feature = "reqwest")]

// std
use std::{env, fs, process};
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use system_stats_client::{
	_preludet::*,
	client::Client,
	session::{Session, User},
	store::{FileStore, MemoryStore, SessionStore},
};

fn build_session(access: &str, refresh: &str) -> Session {
	let user = User { id: 1, email: "admin@example.com".into(), role: "admin".into() };

	Session::builder(user)
		.access_token(access)
		.refresh_token(refresh)
		.access_expires_in(Duration::minutes(15))
		.refresh_expires_in(Duration::days(30))
		.build()
		.expect("Session fixture should build successfully.")
}

#[tokio::test]
async fn save_load_clear_round_trip() {
	let store = MemoryStore::default();

	assert!(store.load().await.expect("Empty store load should succeed.").is_none());

	store
		.save(build_session("access-1", "refresh-1"))
		.await
		.expect("Saving the session fixture should succeed.");

	let loaded = store
		.load()
		.await
		.expect("Store load should succeed.")
		.expect("Stored session should remain present.");

	assert_eq!(loaded.access_token.expose(), "access-1");

	let cleared = store
		.clear()
		.await
		.expect("Store clear should succeed.")
		.expect("Clear should return the previous session.");

	assert_eq!(cleared.access_token.expose(), "access-1");
	assert!(store.load().await.expect("Cleared store load should succeed.").is_none());
}

#[tokio::test]
async fn saving_replaces_the_previous_session_wholesale() {
	let store = MemoryStore::default();

	store
		.save(build_session("access-1", "refresh-1"))
		.await
		.expect("Saving the first session should succeed.");
	store
		.save(build_session("access-2", "refresh-2"))
		.await
		.expect("Saving the replacement session should succeed.");

	let loaded = store
		.load()
		.await
		.expect("Store load should succeed.")
		.expect("Replacement session should remain present.");

	assert_eq!(loaded.access_token.expose(), "access-2");
	assert_eq!(loaded.refresh_token.expose(), "refresh-2");
}

#[tokio::test]
async fn client_clones_share_the_same_store() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&format!("{}/api/v1", server.base_url()));
	let clone = client.clone();

	seed_session(&store, "access-shared", Duration::minutes(5), "refresh-shared", Duration::days(30))
		.await;

	let from_clone = clone
		.store
		.load()
		.await
		.expect("Cloned client's store load should succeed.")
		.expect("Cloned client should observe the seeded session.");

	assert_eq!(from_clone.access_token.expose(), "access-shared");

	clone.store.clear().await.expect("Cloned client's store clear should succeed.");

	assert!(
		client.store.load().await.expect("Store load should succeed.").is_none(),
		"Clearing through one clone must be visible to the other.",
	);
}

#[tokio::test]
async fn file_backed_login_survives_a_restart() {
	let server = MockServer::start_async().await;
	let path = env::temp_dir().join(format!(
		"system_stats_client_it_{}_{}.json",
		process::id(),
		OffsetDateTime::now_utc().unix_timestamp_nanos(),
	));
	let store: Arc<dyn SessionStore> =
		Arc::new(FileStore::open(&path).expect("File store should open."));
	let base_url = Url::parse(&format!("{}/api/v1", server.base_url()))
		.expect("Test base URL should parse successfully.");
	let client = Client::with_transport(base_url, store, test_reqwest_transport());

	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/login");
			then.status(200).json_body(json!({
				"data": {
					"user": { "id": 1, "email": "admin@example.com", "role": "admin" },
					"access_token": "access-persisted",
					"refresh_token": "refresh-persisted",
					"expires_in": 900
				}
			}));
		})
		.await;

	client
		.login("admin@example.com", "sup3rsecret")
		.await
		.expect("Login should succeed against the mock backend.");

	// Simulate a restart by opening a fresh store over the same snapshot.
	let reopened = FileStore::open(&path).expect("Reopening the file store should succeed.");
	let restored = reopened
		.load()
		.await
		.expect("Reopened store load should succeed.")
		.expect("The persisted session should survive the restart.");

	assert_eq!(restored.access_token.expose(), "access-persisted");
	assert_eq!(restored.user.email, "admin@example.com");

	fs::remove_file(&path).expect("Temporary snapshot should be removable.");
}
