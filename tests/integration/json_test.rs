//! JSON helper tests across a real round trip.

use super::test_client;
use hc::Method;
use mockito::{Matcher, Server};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Payload {
    data: String,
}

#[derive(Debug, Deserialize)]
struct Pair {
    #[serde(rename = "d1")]
    data1: String,
    #[serde(rename = "d2")]
    data2: String,
}

#[test]
fn test_write_json_is_decoded_by_server() {
    let client = test_client();
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"data": "good data"})))
        .with_status(201)
        .create();

    let mut request = client.acquire_request();
    let mut response = client.acquire_response();
    request.set_request_uri(server.url());
    request.set_method(Method::POST);
    request
        .write_json(&Payload {
            data: "good data".to_string(),
        })
        .unwrap();

    client.make_raw_request(&request, &mut response).unwrap();

    mock.assert();
    assert_eq!(response.status_code, 201);
}

#[test]
fn test_write_json_nested_value() {
    let client = test_client();
    let value = json!({
        "id": 42,
        "tags": ["a", "b"],
        "meta": {"active": true, "score": 1.5, "note": null}
    });
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/items/42")
        .match_body(Matcher::Json(value.clone()))
        .with_status(200)
        .create();

    let mut request = client.acquire_request();
    let mut response = client.acquire_response();
    request.set_method(Method::PUT);
    request.set_request_uri(format!("{}/items/42", server.url()));
    request.write_json(&value).unwrap();

    client.make_raw_request(&request, &mut response).unwrap();
    mock.assert();
}

#[test]
fn test_read_json_from_server() {
    let client = test_client();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"d1":"data1","d2":"data2"}"#)
        .create();

    let mut request = client.acquire_request();
    let mut response = client.acquire_response();
    request.set_request_uri(server.url());
    client.make_raw_request(&request, &mut response).unwrap();

    mock.assert();
    let pair: Pair = response.read_json().unwrap();
    assert_eq!(pair.data1, "data1");
    assert_eq!(pair.data2, "data2");
}

#[test]
fn test_read_json_rejects_non_json_body() {
    let client = test_client();
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html></html>")
        .create();

    let response = client
        .make_request(Method::GET, &server.url(), Vec::new(), None)
        .unwrap();

    let err = response.read_json::<Pair>().unwrap_err();
    assert!(err.is_serialization());
}
