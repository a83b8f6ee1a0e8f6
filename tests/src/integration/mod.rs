//! # Integration Tests
//!
//! A `NodeRuntime` bound to loopback ports, fed over UDP and queried over
//! HTTP exactly as a deployment would be.

pub mod e2e_flows;

use std::net::SocketAddr;
use std::time::Duration;

use iw_01_ingestion::encode;
use node_runtime::{NodeConfig, NodeRuntime, RunSummary};
use shared_types::{Address, AppKey, IpEvent};
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// Application key used across the flows.
pub const SHA: &str = "0fe3fa2fa0869e5100e24ede99f6daf2fc8a30cfd3a10e9a8e17b8926fc445ce";

/// A node running in the background of a test.
pub struct TestNode {
    pub udp_addr: SocketAddr,
    pub http_addr: SocketAddr,
    pub task: JoinHandle<anyhow::Result<RunSummary>>,
    client: reqwest::Client,
    sender: UdpSocket,
}

impl TestNode {
    /// Bind on ephemeral loopback ports and start serving.
    pub async fn start() -> Self {
        let mut config = NodeConfig::default();
        config.network.udp_addr = "127.0.0.1:0".parse().expect("loopback addr");
        config.network.http_addr = "127.0.0.1:0".parse().expect("loopback addr");

        let runtime = NodeRuntime::bind(&config).await.expect("node binds");
        let udp_addr = runtime.udp_addr();
        let http_addr = runtime.http_addr();
        let task = tokio::spawn(runtime.run());

        Self {
            udp_addr,
            http_addr,
            task,
            client: reqwest::Client::new(),
            sender: UdpSocket::bind("127.0.0.1:0").await.expect("client socket"),
        }
    }

    /// Send one observation record.
    pub async fn send(&self, app_key: &str, octets: [u8; 4]) {
        let event = IpEvent {
            app_key: AppKey::new_unchecked(app_key),
            address: Address::from_octets(octets),
        };
        self.send_raw(&encode(&event)).await;
    }

    /// Send arbitrary bytes to the UDP port.
    pub async fn send_raw(&self, payload: &[u8]) {
        self.sender
            .send_to(payload, self.udp_addr)
            .await
            .expect("udp send");
    }

    /// Issue a request and return status and body.
    pub async fn request(&self, method: reqwest::Method, path: &str) -> (u16, String) {
        let response = self
            .client
            .request(method, format!("http://{}{}", self.http_addr, path))
            .send()
            .await
            .expect("http request");
        let status = response.status().as_u16();
        (status, response.text().await.expect("http body"))
    }

    pub async fn get(&self, path: &str) -> (u16, String) {
        self.request(reqwest::Method::GET, path).await
    }

    /// Poll `/health` until the store holds `observations` observations.
    pub async fn wait_for_observations(&self, observations: u64) {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let (_, body) = self.get("/health").await;
                let health: serde_json::Value = serde_json::from_str(&body).expect("health json");
                if health["observations"].as_u64() >= Some(observations) {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("observations should arrive");
    }

    /// Wait for the node to exit after `/quit`.
    pub async fn join(self) -> RunSummary {
        drop(self.client);
        tokio::time::timeout(Duration::from_secs(5), self.task)
            .await
            .expect("node should stop")
            .expect("node task panicked")
            .expect("node run failed")
    }
}
