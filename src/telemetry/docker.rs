//! Docker telemetry payloads.

// self
use crate::_prelude::*;

/// Resource usage of one running container.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContainerStats {
	/// CPU usage percentage.
	pub cpu_percent: f64,
	/// Memory in use, bytes.
	pub memory_usage: u64,
	/// Memory limit, bytes.
	pub memory_limit: u64,
	/// Memory usage percentage.
	pub memory_percent: f64,
	/// Cumulative network bytes received.
	pub network_rx: u64,
	/// Cumulative network bytes sent.
	pub network_tx: u64,
	/// Cumulative block-device bytes read.
	pub block_read: u64,
	/// Cumulative block-device bytes written.
	pub block_write: u64,
}

/// A published container port mapping.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContainerPort {
	/// Port inside the container.
	pub private_port: u16,
	/// Host port, when published.
	#[serde(default)]
	pub public_port: Option<u16>,
	/// Protocol (`tcp`/`udp`).
	#[serde(rename = "type")]
	pub protocol: String,
	/// Bind address, when published.
	#[serde(default)]
	pub ip: Option<String>,
}

/// One container as listed by the backend.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Container {
	/// Container identifier.
	pub id: String,
	/// Container name.
	pub name: String,
	/// Image reference.
	pub image: String,
	/// Lifecycle state (`running`, `exited`, ...).
	pub state: String,
	/// Human-readable status line.
	pub status: String,
	/// Published port mappings.
	pub ports: Vec<ContainerPort>,
	/// Resource usage snapshot.
	pub stats: ContainerStats,
	/// Creation timestamp as reported by the backend.
	pub created: String,
	/// Finish timestamp for exited containers.
	#[serde(default)]
	pub finished_at: Option<String>,
}

/// Current Docker metrics.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DockerMetric {
	/// Containers known to the daemon.
	pub containers: Vec<Container>,
	/// Total container count.
	pub total_containers: u32,
	/// Running container count.
	pub running_containers: u32,
	/// Whether a Docker daemon was reachable at collection time.
	pub docker_available: bool,
	/// Collection error, when the daemon was unreachable.
	#[serde(default)]
	pub error: Option<String>,
}

/// Response of the `docker` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DockerStats {
	/// Latest collected metrics.
	pub latest: DockerMetric,
	/// Historical samples for the requested window.
	#[serde(default)]
	pub history: Vec<DockerMetric>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn unavailable_daemon_payload_decodes() {
		let metric: DockerMetric = serde_json::from_str(
			"{\"containers\":[],\"total_containers\":0,\"running_containers\":0,\
			 \"docker_available\":false,\"error\":\"Cannot connect to the Docker daemon\"}",
		)
		.expect("Unavailable-daemon payload should deserialize successfully.");

		assert!(!metric.docker_available);
		assert!(metric.error.is_some());
	}

	#[test]
	fn port_protocol_uses_the_wire_name() {
		let port: ContainerPort =
			serde_json::from_str("{\"private_port\":80,\"public_port\":8080,\"type\":\"tcp\"}")
				.expect("Port payload should deserialize successfully.");

		assert_eq!(port.protocol, "tcp");
		assert_eq!(port.public_port, Some(8080));
	}
}
