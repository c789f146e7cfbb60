use super::*;

// --- upstream_url ---

#[test]
fn joins_path_without_query() {
    assert_eq!(
        upstream_url("http://api.local", "/api/recipes", None),
        "http://api.local/api/recipes"
    );
}

#[test]
fn joins_path_with_query() {
    assert_eq!(
        upstream_url("http://api.local", "/api/recipes/r1/comments/c2", Some("userId=u3")),
        "http://api.local/api/recipes/r1/comments/c2?userId=u3"
    );
}

#[test]
fn empty_query_is_ignored() {
    assert_eq!(
        upstream_url("http://api.local", "/api/categories", Some("")),
        "http://api.local/api/categories"
    );
}

// --- is_hop_by_hop ---

#[test]
fn connection_scoped_headers_are_stripped() {
    for name in [
        "connection",
        "keep-alive",
        "transfer-encoding",
        "upgrade",
        "host",
        "content-length",
    ] {
        assert!(is_hop_by_hop(name), "{name} should be stripped");
    }
}

#[test]
fn content_headers_pass_through() {
    for name in ["content-type", "accept", "authorization", "cookie", "cache-control"] {
        assert!(!is_hop_by_hop(name), "{name} should pass through");
    }
}
