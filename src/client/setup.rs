//! First-run setup operations; these endpoints are only open while no users exist.

// self
use crate::{
	_prelude::*,
	api::Envelope,
	client::{Client, request::Call},
	error::ConfigError,
	http::ApiTransport,
	obs::CallKind,
	setup::{CompleteSetup, ConfigResponse, SetupOutcome, SetupStatus},
};

impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Checks whether the first-run wizard must be completed.
	pub async fn setup_status(&self) -> Result<SetupStatus> {
		let payload: Envelope<SetupStatus> =
			self.call(CallKind::Setup, "status", Call::get("setup/status")).await?;

		Ok(payload.data)
	}

	/// Reads the server configuration values offered to the wizard.
	pub async fn setup_config(&self) -> Result<ConfigResponse> {
		let payload: Envelope<ConfigResponse> =
			self.call(CallKind::Setup, "config", Call::get("setup/config")).await?;

		Ok(payload.data)
	}

	/// Completes the wizard, writing the configuration and creating the admin account.
	///
	/// The request is validated locally first so obviously invalid forms are rejected
	/// without a round-trip, exactly as the wizard did.
	pub async fn complete_setup(&self, setup: &CompleteSetup) -> Result<SetupOutcome> {
		const PATH: &str = "setup/complete";

		setup.validate().map_err(ConfigError::from)?;

		let body = self.encode_body(PATH, setup)?;
		let payload: Envelope<SetupOutcome> =
			self.call(CallKind::Setup, "complete", Call::post(PATH, body)).await?;

		Ok(payload.data)
	}
}
