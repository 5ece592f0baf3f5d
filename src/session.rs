//! Session-domain models: the authenticated user, redacted token secrets, and the session record.

pub mod record;
pub mod secret;
pub mod user;

pub use record::*;
pub use secret::*;
pub use user::*;
