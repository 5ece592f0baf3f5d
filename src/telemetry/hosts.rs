//! Monitored host inventory payloads.

// self
use crate::_prelude::*;

/// A host registered with the backend.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Host {
	/// Numeric host identifier.
	pub id: u64,
	/// Host name.
	pub name: String,
	/// Primary MAC address.
	pub mac_address: String,
	/// Primary IPv4 address.
	#[serde(default)]
	pub ipv4: String,
	/// Operating system family.
	#[serde(default)]
	pub os: String,
	/// Platform name.
	#[serde(default)]
	pub platform: String,
	/// Platform family.
	#[serde(default)]
	pub platform_family: String,
	/// Platform version.
	#[serde(default)]
	pub platform_version: String,
	/// Kernel version.
	#[serde(default)]
	pub kernel_version: String,
	/// Virtualization system, when detected.
	#[serde(default)]
	pub virtualization_system: String,
	/// Virtualization role (`host`/`guest`), when detected.
	#[serde(default)]
	pub virtualization_role: String,
	/// System-reported host identifier.
	#[serde(default)]
	pub system_host_id: String,
	/// Last heartbeat timestamp.
	#[serde(default)]
	pub last_seen: String,
	/// Record creation timestamp.
	pub created_at: String,
	/// Record update timestamp.
	pub updated_at: String,
}

/// Response of the `hosts` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HostsResponse {
	/// Registered hosts.
	pub hosts: Vec<Host>,
}
