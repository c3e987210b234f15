use axum::http::HeaderMap;

/// Request metadata recorded alongside an accepted submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestMetadata {
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

/// Extract submission metadata from request headers.
pub fn extract(headers: &HeaderMap) -> RequestMetadata {
    let user_agent = header_str(headers, "user-agent").map(|s| s.to_string());

    RequestMetadata {
        user_agent,
        ip: extract_ip(headers),
    }
}

/// The `X-Forwarded-For` value as received (the full proxy chain), else `X-Real-IP`.
fn extract_ip(headers: &HeaderMap) -> Option<String> {
    ["x-forwarded-for", "x-real-ip"]
        .into_iter()
        .filter_map(|name| header_str(headers, name).map(|s| s.trim()))
        .find(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
