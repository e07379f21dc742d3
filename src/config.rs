/// Backend origin, baked in at compile time since the browser build has no
/// runtime environment. Set `DUCKTEES_BACKEND_URL` when building against a
/// deployed API; the default targets a local dev server.
pub fn backend_url() -> &'static str {
    option_env!("DUCKTEES_BACKEND_URL")
        .unwrap_or("http://localhost:8000")
        .trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_has_no_trailing_slash() {
        assert!(!backend_url().ends_with('/'));
    }

    #[test]
    fn test_backend_url_is_an_origin() {
        assert!(backend_url().starts_with("http"));
    }
}
