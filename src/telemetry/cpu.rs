//! CPU telemetry payloads.

// self
use crate::_prelude::*;

/// Current CPU metrics including static processor info and cumulative times.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CpuMetric {
	/// Aggregate CPU usage percentage.
	pub usage_percent: f64,
	/// Logical core count.
	pub cores: u32,
	/// One-minute load average.
	pub load_avg_1: f64,
	/// Five-minute load average.
	pub load_avg_5: f64,
	/// Fifteen-minute load average.
	pub load_avg_15: f64,
	/// Package temperature in degrees Celsius.
	pub temperature: f64,
	/// CPU vendor identifier.
	#[serde(default)]
	pub vendor_id: String,
	/// CPU family string.
	#[serde(default)]
	pub family: String,
	/// CPU model string.
	#[serde(default)]
	pub model: String,
	/// Marketing model name.
	#[serde(default)]
	pub model_name: String,
	/// Clock speed in MHz.
	#[serde(default)]
	pub mhz: f64,
	/// Cache size in KiB.
	#[serde(default)]
	pub cache_size: i64,
	/// Feature flags reported by the processor.
	#[serde(default)]
	pub flags: Vec<String>,
	/// Microcode revision.
	#[serde(default)]
	pub microcode: String,
	/// Cumulative user time.
	#[serde(default)]
	pub user: f64,
	/// Cumulative system time.
	#[serde(default)]
	pub system: f64,
	/// Cumulative idle time.
	#[serde(default)]
	pub idle: f64,
	/// Cumulative niced time.
	#[serde(default)]
	pub nice: f64,
	/// Cumulative I/O-wait time.
	#[serde(default)]
	pub iowait: f64,
	/// Cumulative IRQ time.
	#[serde(default)]
	pub irq: f64,
	/// Cumulative soft-IRQ time.
	#[serde(default)]
	pub softirq: f64,
	/// Cumulative steal time.
	#[serde(default)]
	pub steal: f64,
	/// Cumulative guest time.
	#[serde(default)]
	pub guest: f64,
	/// Cumulative niced guest time.
	#[serde(default)]
	pub guest_nice: f64,
}

/// One historical CPU sample.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CpuHistoryPoint {
	/// Sample timestamp as reported by the backend.
	pub timestamp: String,
	/// Aggregate usage percentage at the sample instant.
	pub usage: f64,
	/// One-minute load average.
	pub load_avg_1: f64,
	/// Five-minute load average.
	pub load_avg_5: f64,
	/// Fifteen-minute load average.
	pub load_avg_15: f64,
	/// Package temperature in degrees Celsius.
	pub temperature: f64,
}

/// Response of the `cpu` endpoint: the latest sample plus the requested history window.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CpuStats {
	/// Latest collected metrics.
	pub latest: CpuMetric,
	/// Historical samples for the requested window.
	#[serde(default)]
	pub history: Vec<CpuHistoryPoint>,
}
