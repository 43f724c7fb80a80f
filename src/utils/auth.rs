//! Authentication headers for upstream requests.

/// Attach `Authorization: Bearer <api_key>` to an upstream request.
pub fn add_bearer_auth(request: reqwest::RequestBuilder, api_key: &str) -> reqwest::RequestBuilder {
    request.header(reqwest::header::AUTHORIZATION, format!("Bearer {api_key}"))
}
