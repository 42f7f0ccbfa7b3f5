use super::*;

#[test]
fn url_joins_base_and_path_with_single_slash() {
    let client = BrowserClient::new("http://localhost:8080/");
    assert_eq!(client.url("/auth/sign-in"), "http://localhost:8080/auth/sign-in");
    assert_eq!(client.url("auth/sign-in"), "http://localhost:8080/auth/sign-in");
}

#[test]
fn url_with_empty_base_stays_relative() {
    let client = BrowserClient::new("");
    assert_eq!(client.url("/auth/sign-up"), "/auth/sign-up");
}

#[test]
fn is_success_covers_2xx_only() {
    let ok = HttpResponse { status: 201, body: Value::Null };
    let redirect = HttpResponse { status: 302, body: Value::Null };
    let unauthorized = HttpResponse { status: 401, body: Value::Null };
    assert!(ok.is_success());
    assert!(!redirect.is_success());
    assert!(!unauthorized.is_success());
}

#[test]
fn parse_body_decodes_json() {
    assert_eq!(parse_body(r#"{"error":"nope"}"#), serde_json::json!({ "error": "nope" }));
}

#[test]
fn parse_body_maps_empty_to_null() {
    assert_eq!(parse_body(""), Value::Null);
    assert_eq!(parse_body("  \n"), Value::Null);
}

#[test]
fn parse_body_keeps_non_json_text() {
    assert_eq!(parse_body("Bad Gateway"), Value::String("Bad Gateway".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_client_outside_browser_reports_transport_error() {
    let client = BrowserClient::new("http://localhost:8080");
    let result = futures::executor::block_on(client.post("/auth/sign-in", &Value::Null));
    assert_eq!(result, Err(TransportError("not available on server".to_owned())));
}
