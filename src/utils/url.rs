//! Endpoint URL helpers.

/// Append `endpoint` to `base_url` with exactly one slash between them.
///
/// ```
/// use autotranslate::utils::url::join_endpoint;
///
/// assert_eq!(
///     join_endpoint("https://llm.example.com/", "/v1/chat/completions"),
///     "https://llm.example.com/v1/chat/completions"
/// );
/// ```
pub fn join_endpoint(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{base}/{endpoint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slashes_are_collapsed_at_the_seam() {
        assert_eq!(
            join_endpoint("http://127.0.0.1:3000", "api/chat"),
            "http://127.0.0.1:3000/api/chat"
        );
        assert_eq!(
            join_endpoint("http://127.0.0.1:3000///", "///api/chat"),
            "http://127.0.0.1:3000/api/chat"
        );
    }

    #[test]
    fn base_path_is_preserved() {
        assert_eq!(
            join_endpoint("https://gateway.example.com/nilai/", "v1/chat/completions"),
            "https://gateway.example.com/nilai/v1/chat/completions"
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            join_endpoint(" https://x.example.com/ \n", "v1/chat/completions"),
            "https://x.example.com/v1/chat/completions"
        );
    }
}
