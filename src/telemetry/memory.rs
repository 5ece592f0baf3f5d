//! Memory telemetry payloads.

// self
use crate::_prelude::*;

/// Current memory metrics in bytes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MemoryMetric {
	/// Total physical memory.
	pub total: u64,
	/// Memory available for new allocations.
	pub available: u64,
	/// Memory in use.
	pub used: u64,
	/// Usage percentage.
	pub usage_percent: f64,
	/// Completely unused memory.
	pub free: u64,
	/// Page-cache memory.
	#[serde(default)]
	pub cached: u64,
	/// Buffer memory.
	#[serde(default)]
	pub buffers: u64,
	/// Total swap space.
	#[serde(default)]
	pub swap_total: u64,
	/// Swap space in use.
	#[serde(default)]
	pub swap_used: u64,
	/// Recently used memory.
	#[serde(default)]
	pub active: u64,
	/// Less recently used memory.
	#[serde(default)]
	pub inactive: u64,
	/// Shared memory.
	#[serde(default)]
	pub shared: u64,
	/// Unused swap space.
	#[serde(default)]
	pub swap_free: u64,
}

/// One historical memory sample.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MemoryHistoryPoint {
	/// Sample timestamp as reported by the backend.
	pub timestamp: String,
	/// Usage percentage at the sample instant.
	pub usage_percent: f64,
	/// Bytes in use.
	pub used_bytes: u64,
	/// Total bytes.
	pub total_bytes: u64,
}

/// Response of the `memory` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MemoryStats {
	/// Latest collected metrics.
	pub latest: MemoryMetric,
	/// Historical samples for the requested window.
	#[serde(default)]
	pub history: Vec<MemoryHistoryPoint>,
}
