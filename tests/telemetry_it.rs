#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use system_stats_client::{_preludet::*, telemetry::TimeRange};

fn api_base(server: &MockServer) -> String {
	format!("{}/api/v1", server.base_url())
}

async fn authed_client(server: &MockServer) -> ReqwestTestClient {
	let (client, store) = build_reqwest_test_client(&api_base(server));

	seed_session(&store, "access-ok", Duration::minutes(5), "refresh-ok", Duration::days(30))
		.await;

	client
}

#[tokio::test]
async fn cpu_requests_the_selected_window() {
	let server = MockServer::start_async().await;
	let client = authed_client(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/cpu")
				.query_param("hours", "24")
				.header("authorization", "Bearer access-ok");
			then.status(200).json_body(json!({
				"latest": {
					"usage_percent": 37.2,
					"cores": 16,
					"load_avg_1": 1.2,
					"load_avg_5": 0.9,
					"load_avg_15": 0.7,
					"temperature": 52.0,
					"model_name": "AMD Ryzen 9 7950X",
					"mhz": 4500.0
				},
				"history": [
					{
						"timestamp": "2025-08-29T11:00:00Z",
						"usage": 30.1,
						"load_avg_1": 1.0,
						"load_avg_5": 0.8,
						"load_avg_15": 0.6,
						"temperature": 50.0
					}
				]
			}));
		})
		.await;
	let stats = client.cpu(TimeRange::Day).await.expect("CPU stats should decode.");

	mock.assert_async().await;

	assert_eq!(stats.latest.cores, 16);
	assert_eq!(stats.latest.model_name, "AMD Ryzen 9 7950X");
	assert_eq!(stats.history.len(), 1);
	assert_eq!(stats.history[0].usage, 30.1);
}

#[tokio::test]
async fn memory_defaults_to_the_five_minute_window() {
	let server = MockServer::start_async().await;
	let client = authed_client(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/memory").query_param("hours", "0.0833");
			then.status(200).json_body(json!({
				"latest": {
					"total": 68719476736u64,
					"available": 34359738368u64,
					"used": 30064771072u64,
					"usage_percent": 43.75,
					"free": 4294967296u64,
					"swap_total": 8589934592u64,
					"swap_used": 0
				},
				"history": []
			}));
		})
		.await;
	let stats = client.memory(TimeRange::default()).await.expect("Memory stats should decode.");

	mock.assert_async().await;

	assert_eq!(stats.latest.total, 68719476736);
	assert_eq!(stats.latest.swap_used, 0);
	assert!(stats.history.is_empty());
}

#[tokio::test]
async fn disk_decodes_mounts_and_io_counters() {
	let server = MockServer::start_async().await;
	let client = authed_client(&server).await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/disk").query_param("hours", "1");
			then.status(200).json_body(json!({
				"latest": {
					"total": 1000204886016u64,
					"used": 400081954406u64,
					"free": 600122931610u64,
					"usage_percent": 40.0,
					"partitions": [
						{
							"device": "/dev/nvme0n1p2",
							"mountpoint": "/",
							"fstype": "ext4",
							"opts": "rw,relatime"
						}
					],
					"mounts": [
						{
							"path": "/",
							"fstype": "ext4",
							"total": 1000204886016u64,
							"free": 600122931610u64,
							"used": 400081954406u64,
							"used_percent": 40.0,
							"inodes_total": 61054976,
							"inodes_used": 1503238,
							"inodes_free": 59551738,
							"inodes_used_percent": 2.46
						}
					],
					"io_counters": [
						{
							"name": "nvme0n1",
							"read_count": 123456,
							"merged_read_count": 789,
							"write_count": 654321,
							"merged_write_count": 987,
							"read_bytes": 5368709120u64,
							"write_bytes": 10737418240u64,
							"read_time": 4000,
							"write_time": 9000,
							"iops_in_progress": 0,
							"io_time": 12000,
							"weighted_io": 13000
						}
					]
				},
				"history": []
			}));
		})
		.await;

	let stats = client.disk(TimeRange::Hour).await.expect("Disk stats should decode.");

	assert_eq!(stats.latest.partitions[0].mountpoint, "/");
	assert_eq!(stats.latest.mounts[0].inodes_total, 61054976);
	assert_eq!(stats.latest.io_counters[0].name, "nvme0n1");
}

#[tokio::test]
async fn network_decodes_per_interface_counters() {
	let server = MockServer::start_async().await;
	let client = authed_client(&server).await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/network").query_param("hours", "168");
			then.status(200).json_body(json!({
				"latest": {
					"interfaces": [
						{
							"name": "eth0",
							"bytes_sent": 123456789,
							"bytes_recv": 987654321,
							"packets_sent": 100000,
							"packets_recv": 200000,
							"speed_kbps_sent": 512.0,
							"speed_kbps_recv": 2048.0
						}
					]
				},
				"history": []
			}));
		})
		.await;

	let stats = client.network(TimeRange::Week).await.expect("Network stats should decode.");

	assert_eq!(stats.latest.interfaces.len(), 1);
	assert_eq!(stats.latest.interfaces[0].name, "eth0");
	assert_eq!(stats.latest.interfaces[0].speed_kbps_recv, 2048.0);
}

#[tokio::test]
async fn docker_decodes_containers_and_daemon_state() {
	let server = MockServer::start_async().await;
	let client = authed_client(&server).await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/docker").query_param("hours", "0.0833");
			then.status(200).json_body(json!({
				"latest": {
					"containers": [
						{
							"id": "3f4e5d6c7b8a",
							"name": "web",
							"image": "nginx:1.27",
							"state": "running",
							"status": "Up 3 days",
							"ports": [
								{ "private_port": 80, "public_port": 8080, "type": "tcp" }
							],
							"stats": {
								"cpu_percent": 0.5,
								"memory_usage": 52428800,
								"memory_limit": 1073741824,
								"memory_percent": 4.88,
								"network_rx": 1048576,
								"network_tx": 2097152,
								"block_read": 4096,
								"block_write": 8192
							},
							"created": "2025-08-26T09:00:00Z"
						}
					],
					"total_containers": 1,
					"running_containers": 1,
					"docker_available": true
				},
				"history": []
			}));
		})
		.await;

	let stats =
		client.docker(TimeRange::FiveMinutes).await.expect("Docker stats should decode.");

	assert!(stats.latest.docker_available);
	assert_eq!(stats.latest.containers[0].ports[0].protocol, "tcp");
	assert_eq!(stats.latest.containers[0].stats.memory_usage, 52428800);
}

#[tokio::test]
async fn sensors_scopes_to_the_requested_host() {
	let server = MockServer::start_async().await;
	let client = authed_client(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/sensors").query_param("host_id", "3");
			then.status(200).json_body(json!({
				"sensors": {
					"timestamp": "2025-08-29T12:00:00Z",
					"sensors": [
						{ "sensor_key": "coretemp_package_id_0", "temperature": 58.0, "high": 80.0, "critical": 100.0 },
						{ "sensor_key": "nvme_composite", "temperature": 41.0 }
					]
				}
			}));
		})
		.await;
	let reading = client.sensors(Some(3)).await.expect("Sensor readings should decode.");

	mock.assert_async().await;

	assert_eq!(reading.sensors.len(), 2);
	assert_eq!(reading.sensors[0].sensor_key, "coretemp_package_id_0");
	assert_eq!(reading.sensors[1].high, 0.0);
}

#[tokio::test]
async fn hosts_returns_the_registered_inventory() {
	let server = MockServer::start_async().await;
	let client = authed_client(&server).await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/hosts");
			then.status(200).json_body(json!({
				"hosts": [
					{
						"id": 1,
						"name": "atlas",
						"mac_address": "aa:bb:cc:dd:ee:ff",
						"ipv4": "192.168.1.10",
						"os": "linux",
						"platform": "debian",
						"platform_version": "12",
						"kernel_version": "6.1.0",
						"last_seen": "2025-08-29T12:00:00Z",
						"created_at": "2025-08-01T00:00:00Z",
						"updated_at": "2025-08-29T12:00:00Z"
					}
				]
			}));
		})
		.await;

	let hosts = client.hosts().await.expect("Host inventory should decode.");

	assert_eq!(hosts.len(), 1);
	assert_eq!(hosts[0].name, "atlas");
	assert_eq!(hosts[0].platform_family, "");
}

#[tokio::test]
async fn telemetry_without_a_session_sends_no_bearer() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&api_base(&server));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/hosts");
			then.status(401).json_body(json!({ "code": "unauthorized", "error": "Unauthorized" }));
		})
		.await;
	let err = client.hosts().await.expect_err("Unauthenticated telemetry should fail.");

	// Without a session there is nothing to refresh.
	assert!(matches!(err, Error::SessionExpired));

	mock.assert_async().await;
}
