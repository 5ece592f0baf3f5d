//! Temperature sensor telemetry payloads.

// self
use crate::_prelude::*;

/// One temperature sensor reading.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TemperatureStat {
	/// Sensor identifier key.
	pub sensor_key: String,
	/// Current temperature in degrees Celsius.
	pub temperature: f64,
	/// High-temperature threshold, when reported.
	#[serde(default)]
	pub high: f64,
	/// Critical-temperature threshold, when reported.
	#[serde(default)]
	pub critical: f64,
}

/// Collected sensor readings at one instant.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TemperatureMetric {
	/// Collection timestamp as reported by the backend.
	pub timestamp: String,
	/// Individual sensor readings.
	pub sensors: Vec<TemperatureStat>,
}

/// Response of the `sensors` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SensorsResponse {
	/// Collected readings.
	pub sensors: TemperatureMetric,
}
