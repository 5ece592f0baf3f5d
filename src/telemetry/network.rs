//! Network telemetry payloads.

// self
use crate::_prelude::*;

/// Counters and throughput for one network interface.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NetworkInterface {
	/// Interface name.
	pub name: String,
	/// Cumulative bytes sent.
	pub bytes_sent: u64,
	/// Cumulative bytes received.
	pub bytes_recv: u64,
	/// Cumulative packets sent.
	pub packets_sent: u64,
	/// Cumulative packets received.
	pub packets_recv: u64,
	/// Current send throughput in kbit/s.
	pub speed_kbps_sent: f64,
	/// Current receive throughput in kbit/s.
	pub speed_kbps_recv: f64,
}

/// Current network metrics across all interfaces.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NetworkMetric {
	/// Per-interface counters.
	pub interfaces: Vec<NetworkInterface>,
}

/// Response of the `network` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NetworkStats {
	/// Latest collected metrics.
	pub latest: NetworkMetric,
	/// Historical samples for the requested window.
	#[serde(default)]
	pub history: Vec<NetworkMetric>,
}
