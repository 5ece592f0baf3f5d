//! Typed telemetry payloads returned by the backend's polling endpoints.
//!
//! Each widget family gets its own module mirroring the backend wire shapes; fields the
//! backend may omit carry `#[serde(default)]` so older servers keep decoding.

pub mod cpu;
pub mod disk;
pub mod docker;
pub mod hosts;
pub mod memory;
pub mod network;
pub mod sensors;

pub use cpu::*;
pub use disk::*;
pub use docker::*;
pub use hosts::*;
pub use memory::*;
pub use network::*;
pub use sensors::*;

// self
use crate::_prelude::*;

/// Named history windows offered by the dashboard's time-range filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
	/// Last five minutes (the backend's default window).
	#[default]
	FiveMinutes,
	/// Last hour.
	Hour,
	/// Last twenty-four hours.
	Day,
	/// Last seven days.
	Week,
}
impl TimeRange {
	/// Returns the window expressed in hours, the unit the backend's `hours` query expects.
	pub const fn as_hours(self) -> f64 {
		match self {
			TimeRange::FiveMinutes => 0.0833,
			TimeRange::Hour => 1.,
			TimeRange::Day => 24.,
			TimeRange::Week => 168.,
		}
	}

	/// Returns the window pre-rendered for the `hours` query parameter.
	pub const fn as_hours_param(self) -> &'static str {
		match self {
			TimeRange::FiveMinutes => "0.0833",
			TimeRange::Hour => "1",
			TimeRange::Day => "24",
			TimeRange::Week => "168",
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TimeRange::FiveMinutes => "5m",
			TimeRange::Hour => "1h",
			TimeRange::Day => "24h",
			TimeRange::Week => "7d",
		}
	}
}
impl Display for TimeRange {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn time_range_matches_backend_hours() {
		assert_eq!(TimeRange::default(), TimeRange::FiveMinutes);
		assert_eq!(TimeRange::FiveMinutes.as_hours(), 0.0833);
		assert_eq!(TimeRange::Week.as_hours(), 168.);
		assert_eq!(TimeRange::FiveMinutes.as_hours_param(), "0.0833");
		assert_eq!(TimeRange::Day.as_str(), "24h");
	}
}
