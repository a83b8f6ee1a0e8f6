//! # End-to-End Flows
//!
//! UDP records in, HTTP classification out, through one running node.
//!
//! ## Flows Tested
//!
//! 1. **Ingest → Query**: canonical good/bad split
//! 2. **Unknown application**: `500 Not found`
//! 3. **Reset**: store cleared, new records counted from zero
//! 4. **Bad input**: malformed datagrams and paths never disturb the node
//! 5. **Quit**: `/quit` stops both listeners and reports final counters

#[cfg(test)]
mod tests {
    use crate::integration::{TestNode, SHA};
    use reqwest::Method;

    // =============================================================================
    // INGEST → QUERY
    // =============================================================================

    #[tokio::test]
    async fn test_canonical_split_over_the_wire() {
        let node = TestNode::start().await;
        for octets in [
            [192, 160, 0, 1],
            [192, 160, 0, 2],
            [192, 160, 0, 3],
            [192, 160, 0, 4],
            [10, 0, 0, 1],
        ] {
            node.send(SHA, octets).await;
        }
        node.wait_for_observations(5).await;

        let (status, body) = node.get(&format!("/events/{SHA}")).await;
        assert_eq!(status, 200);
        assert_eq!(
            body,
            r#"{"count":5,"good_ips":["192.160.0.1","192.160.0.2","192.160.0.3","192.160.0.4"],"bad_ips":["10.0.0.1"]}"#
        );
    }

    #[tokio::test]
    async fn test_repeated_address_counts_every_record() {
        let node = TestNode::start().await;
        for _ in 0..3 {
            node.send(SHA, [172, 16, 4, 2]).await;
        }
        node.wait_for_observations(3).await;

        let (status, body) = node.get(&format!("/events/{SHA}")).await;
        assert_eq!(status, 200);
        assert_eq!(body, r#"{"count":3,"good_ips":["172.16.4.2"],"bad_ips":[]}"#);
    }

    #[tokio::test]
    async fn test_applications_are_isolated() {
        let node = TestNode::start().await;
        let other = "f".repeat(64);
        node.send(SHA, [10, 0, 0, 1]).await;
        node.send(&other, [10, 0, 0, 2]).await;
        node.send(&other, [10, 0, 0, 3]).await;
        node.wait_for_observations(3).await;

        let (_, body) = node.get(&format!("/events/{SHA}")).await;
        assert_eq!(body, r#"{"count":1,"good_ips":["10.0.0.1"],"bad_ips":[]}"#);
        let (_, body) = node.get(&format!("/events/{other}")).await;
        assert_eq!(
            body,
            r#"{"count":2,"good_ips":["10.0.0.2","10.0.0.3"],"bad_ips":[]}"#
        );
    }

    // =============================================================================
    // UNKNOWN APPLICATION / RESET
    // =============================================================================

    #[tokio::test]
    async fn test_unknown_application_is_not_found() {
        let node = TestNode::start().await;
        let (status, body) = node.get(&format!("/events/{SHA}")).await;
        assert_eq!(status, 500);
        assert_eq!(body, "Not found\n");
    }

    #[tokio::test]
    async fn test_reset_then_record_again() {
        let node = TestNode::start().await;
        node.send(SHA, [1, 2, 3, 4]).await;
        node.wait_for_observations(1).await;

        let (status, body) = node.request(Method::POST, "/reset").await;
        assert_eq!(status, 200);
        assert!(body.is_empty());

        let (status, body) = node.get(&format!("/events/{SHA}")).await;
        assert_eq!((status, body.as_str()), (500, "Not found\n"));

        node.send(SHA, [1, 2, 3, 5]).await;
        node.wait_for_observations(1).await;
        let (_, body) = node.get(&format!("/events/{SHA}")).await;
        assert_eq!(body, r#"{"count":1,"good_ips":["1.2.3.5"],"bad_ips":[]}"#);
    }

    // =============================================================================
    // BAD INPUT
    // =============================================================================

    #[tokio::test]
    async fn test_malformed_datagrams_are_ignored() {
        let node = TestNode::start().await;
        node.send_raw(b"").await;
        node.send_raw(&[0u8; 67]).await;
        node.send_raw(&[0u8; 69]).await;
        node.send_raw(&[b'z'; 68]).await;
        node.send(SHA, [10, 0, 0, 1]).await;
        node.wait_for_observations(1).await;

        let (status, body) = node.get("/health").await;
        assert_eq!(status, 200);
        assert_eq!(body, r#"{"status":"ok","applications":1,"observations":1}"#);
    }

    #[tokio::test]
    async fn test_malformed_paths_are_404() {
        let node = TestNode::start().await;
        for path in ["/events/short", "/events/", "/nothing-here"] {
            let (status, body) = node.get(path).await;
            assert_eq!(status, 404, "{path}");
            assert_eq!(body, "404 page not found\n", "{path}");
        }

        // Node still serves afterwards.
        let (status, _) = node.get("/health").await;
        assert_eq!(status, 200);
    }

    // =============================================================================
    // QUIT
    // =============================================================================

    #[tokio::test]
    async fn test_quit_stops_node_with_summary() {
        let node = TestNode::start().await;
        node.send(SHA, [10, 0, 0, 1]).await;
        node.send_raw(b"junk").await;
        node.wait_for_observations(1).await;

        let (status, body) = node.get("/quit").await;
        assert_eq!(status, 200);
        assert!(body.is_empty());

        let summary = node.join().await;
        assert_eq!(summary.ingest.accepted, 1);
        assert_eq!(summary.store.applications, 1);
        assert_eq!(summary.store.observations, 1);
    }
}
