//! Authenticated user identity returned by the backend.

// self
use crate::_prelude::*;

/// User record attached to a session and returned by the `users/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	/// Numeric user identifier.
	pub id: u64,
	/// Account email address.
	pub email: String,
	/// Role label assigned by the backend (e.g. `admin`).
	pub role: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn user_deserializes_from_backend_shape() {
		let user: User =
			serde_json::from_str("{\"id\":1,\"email\":\"admin@example.com\",\"role\":\"admin\"}")
				.expect("User payload should deserialize successfully.");

		assert_eq!(user.id, 1);
		assert_eq!(user.role, "admin");
	}
}
