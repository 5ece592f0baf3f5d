//! Telemetry polling operations; all endpoints require a valid session.

// self
use crate::{
	_prelude::*,
	client::{Client, request::Call},
	http::ApiTransport,
	obs::CallKind,
	telemetry::{
		CpuStats, DiskStats, DockerStats, Host, HostsResponse, MemoryStats, NetworkStats,
		SensorsResponse, TemperatureMetric, TimeRange,
	},
};

impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Fetches the latest CPU metrics plus history for the requested window.
	pub async fn cpu(&self, range: TimeRange) -> Result<CpuStats> {
		self.windowed(CallKind::Telemetry, "cpu", "cpu", range).await
	}

	/// Fetches the latest memory metrics plus history for the requested window.
	pub async fn memory(&self, range: TimeRange) -> Result<MemoryStats> {
		self.windowed(CallKind::Telemetry, "memory", "memory", range).await
	}

	/// Fetches the latest disk metrics plus history for the requested window.
	pub async fn disk(&self, range: TimeRange) -> Result<DiskStats> {
		self.windowed(CallKind::Telemetry, "disk", "disk", range).await
	}

	/// Fetches the latest network metrics plus history for the requested window.
	pub async fn network(&self, range: TimeRange) -> Result<NetworkStats> {
		self.windowed(CallKind::Telemetry, "network", "network", range).await
	}

	/// Fetches the latest Docker metrics plus history for the requested window.
	pub async fn docker(&self, range: TimeRange) -> Result<DockerStats> {
		self.windowed(CallKind::Telemetry, "docker", "docker", range).await
	}

	/// Fetches the current temperature sensor readings, optionally scoped to one host.
	pub async fn sensors(&self, host_id: Option<u64>) -> Result<TemperatureMetric> {
		let mut call = Call::get("sensors").authenticated();

		if let Some(host_id) = host_id {
			call = call.query("host_id", host_id.to_string());
		}

		let response: SensorsResponse = self.call(CallKind::Telemetry, "sensors", call).await?;

		Ok(response.sensors)
	}

	/// Fetches the registered host inventory.
	pub async fn hosts(&self) -> Result<Vec<Host>> {
		let response: HostsResponse = self
			.call(CallKind::Telemetry, "hosts", Call::get("hosts").authenticated())
			.await?;

		Ok(response.hosts)
	}

	async fn windowed<R>(
		&self,
		kind: CallKind,
		stage: &'static str,
		path: &str,
		range: TimeRange,
	) -> Result<R>
	where
		R: serde::de::DeserializeOwned,
	{
		let call = Call::get(path).query("hours", range.as_hours_param()).authenticated();

		self.call(kind, stage, call).await
	}
}
