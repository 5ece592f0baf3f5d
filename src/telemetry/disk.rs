//! Disk telemetry payloads.

// self
use crate::_prelude::*;

/// A partition table entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DiskPartition {
	/// Device path.
	pub device: String,
	/// Mount point path.
	pub mountpoint: String,
	/// Filesystem type.
	pub fstype: String,
	/// Mount options string.
	pub opts: String,
}

/// Usage of one mounted filesystem.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MountUsage {
	/// Mount point path.
	pub path: String,
	/// Filesystem type.
	pub fstype: String,
	/// Total bytes.
	pub total: u64,
	/// Free bytes.
	pub free: u64,
	/// Used bytes.
	pub used: u64,
	/// Usage percentage.
	pub used_percent: f64,
	/// Total inode count.
	pub inodes_total: u64,
	/// Used inode count.
	pub inodes_used: u64,
	/// Free inode count.
	pub inodes_free: u64,
	/// Inode usage percentage.
	pub inodes_used_percent: f64,
}

/// Cumulative I/O counters for one block device.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DiskIoCounters {
	/// Device name.
	pub name: String,
	/// Completed read operations.
	pub read_count: u64,
	/// Merged read operations.
	pub merged_read_count: u64,
	/// Completed write operations.
	pub write_count: u64,
	/// Merged write operations.
	pub merged_write_count: u64,
	/// Bytes read.
	pub read_bytes: u64,
	/// Bytes written.
	pub write_bytes: u64,
	/// Milliseconds spent reading.
	pub read_time: u64,
	/// Milliseconds spent writing.
	pub write_time: u64,
	/// I/O operations currently in flight.
	pub iops_in_progress: u64,
	/// Milliseconds spent doing I/O.
	pub io_time: u64,
	/// Weighted milliseconds spent doing I/O.
	pub weighted_io: u64,
	/// Device serial number, when exposed.
	#[serde(default)]
	pub serial_number: String,
	/// Device label, when exposed.
	#[serde(default)]
	pub label: String,
}

/// Current disk metrics for the root filesystem plus per-device detail.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DiskMetric {
	/// Total bytes.
	pub total: u64,
	/// Used bytes.
	pub used: u64,
	/// Free bytes.
	pub free: u64,
	/// Usage percentage.
	pub usage_percent: f64,
	/// Partition table entries.
	#[serde(default)]
	pub partitions: Vec<DiskPartition>,
	/// Per-mount usage detail.
	#[serde(default)]
	pub mounts: Vec<MountUsage>,
	/// Per-device I/O counters.
	#[serde(default)]
	pub io_counters: Vec<DiskIoCounters>,
}

/// One historical disk sample.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DiskHistoryPoint {
	/// Sample timestamp as reported by the backend.
	pub timestamp: String,
	/// Usage percentage at the sample instant.
	pub usage_percent: f64,
	/// Bytes in use.
	pub used_bytes: u64,
	/// Total bytes.
	pub total_bytes: u64,
}

/// Response of the `disk` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DiskStats {
	/// Latest collected metrics.
	pub latest: DiskMetric,
	/// Historical samples for the requested window.
	#[serde(default)]
	pub history: Vec<DiskHistoryPoint>,
}
