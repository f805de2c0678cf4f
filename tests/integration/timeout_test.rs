//! Timeout behavior against a server that never answers.

use super::test_client;
use hc::{Client, ClientConfig};
use serial_test::serial;
use std::net::TcpListener;
use std::time::{Duration, Instant};

/// A listener that accepts connections at the socket level but never replies.
fn silent_server() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    (listener, url)
}

#[test]
fn test_read_timeout_aborts_request() {
    let (_listener, url) = silent_server();
    let client = test_client();
    client.set_read_timeout(Duration::from_millis(200));

    let started = Instant::now();
    let err = client.get(&url).unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {:?}", err);
    assert!(err.is_transport());
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn test_write_timeout_bounds_request() {
    let (_listener, url) = silent_server();
    let config = ClientConfig::default().with_write_timeout(Duration::from_millis(200));
    let client = Client::with_config(config).unwrap();

    let err = client.post(&url, "payload", None).unwrap_err();
    assert!(err.is_timeout());
}

#[test]
fn test_timeout_change_applies_to_later_requests() {
    let (_listener, url) = silent_server();
    let client = test_client();
    client.set_read_timeout(Duration::from_millis(100));
    assert!(client.get(&url).unwrap_err().is_timeout());

    client.set_read_timeout(Duration::from_millis(300));
    let started = Instant::now();
    assert!(client.get(&url).unwrap_err().is_timeout());
    assert!(started.elapsed() >= Duration::from_millis(300));
}

#[test]
#[serial]
fn test_default_client_setters() {
    let timeout = Duration::from_secs(60);

    hc::set_read_timeout(timeout).unwrap();
    hc::set_write_timeout(timeout).unwrap();
    let client = hc::default_client().unwrap();
    assert_eq!(client.read_timeout(), timeout);
    assert_eq!(client.write_timeout(), timeout);

    hc::set_read_timeout(Duration::ZERO).unwrap();
    hc::set_write_timeout(Duration::ZERO).unwrap();
    assert_eq!(client.timeouts(), hc::Timeouts::default());
}
