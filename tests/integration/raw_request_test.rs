//! Raw request tests: caller-configured requests sent with `make_raw_request`.

use super::{init_test_env, test_client};
use hc::Method;
use mockito::Server;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

#[test]
fn test_make_raw_request_fills_response() {
    init_test_env();
    let mut server = Server::new();
    let mock = server.mock("GET", "/").with_status(502).create();

    let mut request = hc::acquire_request();
    let mut response = hc::acquire_response();
    request.set_request_uri(server.url());

    hc::make_raw_request(&request, &mut response).unwrap();

    mock.assert();
    assert_eq!(response.status_code, 502);
    assert!(response.is_server_error());
    assert_eq!(request.uri(), server.url());
}

#[test]
fn test_make_raw_request_sends_request_headers() {
    let client = test_client();
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/resource")
        .match_header("authorization", "Bearer token123")
        .match_body("replace")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("done")
        .create();

    let mut request = client.acquire_request();
    let mut response = client.acquire_response();
    request.set_method(Method::PUT);
    request.set_request_uri(format!("{}/resource", server.url()));
    request.set_header("Authorization", "Bearer token123").unwrap();
    request.set_body("replace");

    client.make_raw_request(&request, &mut response).unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type(), Some("text/plain"));
    assert_eq!(response.body_as_string().unwrap(), "done");

    client.release_request(request);
    client.release_response(response);
}

#[test]
fn test_reused_response_is_overwritten() {
    let client = test_client();
    let mut server = Server::new();
    let first = server
        .mock("GET", "/first")
        .with_status(200)
        .with_header("x-first", "1")
        .with_body("first body")
        .create();
    let second = server.mock("GET", "/second").with_status(404).create();

    let mut request = client.acquire_request();
    let mut response = client.acquire_response();

    request.set_request_uri(format!("{}/first", server.url()));
    client.make_raw_request(&request, &mut response).unwrap();
    assert_eq!(response.body(), b"first body");

    request.set_request_uri(format!("{}/second", server.url()));
    client.make_raw_request(&request, &mut response).unwrap();

    first.assert();
    second.assert();
    assert_eq!(response.status_code, 404);
    assert!(response.body().is_empty());
    assert_eq!(response.header("x-first"), None);
}

#[test]
fn test_truncated_body_keeps_status() {
    init_test_env();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
            .unwrap();
    });

    let client = test_client();
    let mut request = client.acquire_request();
    let mut response = client.acquire_response();
    request.set_request_uri(format!("http://{}/", addr));

    let err = client.make_raw_request(&request, &mut response).unwrap_err();

    server.join().unwrap();
    assert!(err.is_transport());
    assert_eq!(response.status_code, 200);
    assert_eq!(response.header("content-length"), Some("100"));
}

#[test]
fn test_repeated_response_headers_are_joined() {
    init_test_env();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(
                b"HTTP/1.1 200 OK\r\n\
                  Set-Cookie: a=1\r\n\
                  Set-Cookie: b=2\r\n\
                  Content-Length: 2\r\n\
                  Connection: close\r\n\r\nok",
            )
            .unwrap();
    });

    let client = test_client();
    let mut request = client.acquire_request();
    let mut response = client.acquire_response();
    request.set_request_uri(format!("http://{}/", addr));

    client.make_raw_request(&request, &mut response).unwrap();

    server.join().unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.header("set-cookie"), Some("a=1, b=2"));
    assert_eq!(response.body(), b"ok");
}
