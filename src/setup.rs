//! First-run setup wizard payloads and the client-side validation the wizard enforced.

// self
use crate::_prelude::*;

const SECRET_MIN_LEN: usize = 16;
const PASSWORD_MIN_LEN: usize = 8;

/// Response of the `setup/status` endpoint.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct SetupStatus {
	/// `true` while no users exist and the wizard must run.
	pub setup_needed: bool,
}

/// Server configuration values exchanged during setup.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
	/// Secret used to sign access tokens; at least sixteen characters.
	pub jwt_secret: String,
	/// Secret used to sign refresh tokens; at least sixteen characters.
	pub refresh_secret: String,
	/// Listen address.
	#[serde(default = "default_addr")]
	pub addr: String,
	/// Server framework mode (`debug` or `release`).
	#[serde(default = "default_gin_mode")]
	pub gin_mode: String,
	/// Debug logging flag (`true` or `false`).
	#[serde(default = "default_debug")]
	pub debug: String,
	/// Database engine identifier.
	#[serde(default = "default_db_type")]
	pub db_type: String,
	/// Database connection string.
	#[serde(default = "default_db_dsn")]
	pub db_dsn: String,
}
impl ServerConfig {
	/// Creates a configuration with the backend's defaults and the provided secrets.
	pub fn with_secrets(jwt_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
		Self {
			jwt_secret: jwt_secret.into(),
			refresh_secret: refresh_secret.into(),
			addr: default_addr(),
			gin_mode: default_gin_mode(),
			debug: default_debug(),
			db_type: default_db_type(),
			db_dsn: default_db_dsn(),
		}
	}

	/// Validates the configuration against the wizard's rules.
	pub fn validate(&self) -> Result<(), SetupValidationError> {
		if self.jwt_secret.len() < SECRET_MIN_LEN {
			return Err(SetupValidationError::SecretTooShort {
				field: "jwt_secret",
				min: SECRET_MIN_LEN,
			});
		}
		if self.refresh_secret.len() < SECRET_MIN_LEN {
			return Err(SetupValidationError::SecretTooShort {
				field: "refresh_secret",
				min: SECRET_MIN_LEN,
			});
		}
		if !matches!(self.gin_mode.as_str(), "debug" | "release") {
			return Err(SetupValidationError::InvalidMode { value: self.gin_mode.clone() });
		}
		if !matches!(self.debug.as_str(), "true" | "false") {
			return Err(SetupValidationError::InvalidDebugFlag { value: self.debug.clone() });
		}

		Ok(())
	}
}

/// Response of the `setup/config` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConfigResponse {
	/// Current configuration values read from the server.
	pub config: ServerConfig,
}

/// Request body for the `setup/complete` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CompleteSetup {
	/// Server configuration to write.
	pub config: ServerConfig,
	/// Email address for the initial admin account.
	pub admin_email: String,
	/// Password for the initial admin account.
	pub admin_password: String,
}
impl CompleteSetup {
	/// Validates the whole request against the wizard's rules.
	pub fn validate(&self) -> Result<(), SetupValidationError> {
		self.config.validate()?;
		validate_email(&self.admin_email)?;
		validate_password(&self.admin_password)?;

		Ok(())
	}
}

/// Response of the `setup/complete` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SetupOutcome {
	/// Human-readable completion message.
	pub message: String,
}

/// Client-side validation failures mirroring the wizard's form rules.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SetupValidationError {
	/// A signing secret is shorter than the minimum.
	#[error("{field} must be at least {min} characters.")]
	SecretTooShort {
		/// Config field name.
		field: &'static str,
		/// Minimum character count.
		min: usize,
	},
	/// Server mode outside the accepted set.
	#[error("Server mode must be debug or release, got `{value}`.")]
	InvalidMode {
		/// Rejected value.
		value: String,
	},
	/// Debug flag outside the accepted set.
	#[error("Debug flag must be true or false, got `{value}`.")]
	InvalidDebugFlag {
		/// Rejected value.
		value: String,
	},
	/// Admin email address is malformed.
	#[error("Invalid email address.")]
	InvalidEmail,
	/// Admin password is shorter than the minimum.
	#[error("Password must be at least {min} characters.")]
	PasswordTooShort {
		/// Minimum character count.
		min: usize,
	},
	/// Admin password lacks a letter or a digit.
	#[error("Password must contain at least one letter and one number.")]
	PasswordMissingClasses,
}

fn validate_email(email: &str) -> Result<(), SetupValidationError> {
	let Some((local, domain)) = email.split_once('@') else {
		return Err(SetupValidationError::InvalidEmail);
	};

	if local.is_empty() || domain.is_empty() || !domain.contains('.') {
		return Err(SetupValidationError::InvalidEmail);
	}

	Ok(())
}

fn validate_password(password: &str) -> Result<(), SetupValidationError> {
	if password.len() < PASSWORD_MIN_LEN {
		return Err(SetupValidationError::PasswordTooShort { min: PASSWORD_MIN_LEN });
	}
	if !password.chars().any(|c| c.is_ascii_alphabetic())
		|| !password.chars().any(|c| c.is_ascii_digit())
	{
		return Err(SetupValidationError::PasswordMissingClasses);
	}

	Ok(())
}

fn default_addr() -> String {
	":8080".into()
}

fn default_gin_mode() -> String {
	"release".into()
}

fn default_debug() -> String {
	"false".into()
}

fn default_db_type() -> String {
	"sqlite".into()
}

fn default_db_dsn() -> String {
	"stats.db".into()
}
