//! Bearer-header decision logic.
//!
//! Every outgoing request passes through [`bearer_for_request`], which
//! decides whether an `Authorization` header is attached and what it
//! carries. The decision is pure so it can be tested without a socket:
//!
//! - The Telegram auth exchange itself is never authenticated (it is the
//!   request that *produces* the token).
//! - Otherwise the stored session token wins, falling back to a statically
//!   configured token when no session exists.
//! - Expiry is not checked here. A stale stored token is still attached;
//!   the server rejects it and the auth bridge replaces it on the next
//!   startup.

/// Path of the Telegram init-data exchange endpoint.
pub const AUTH_ENDPOINT_PATH: &str = "/api/auth/telegram";

/// True when `path` is the auth exchange endpoint, which must go out
/// without an `Authorization` header.
pub fn is_auth_endpoint(path: &str) -> bool {
    path == AUTH_ENDPOINT_PATH
}

/// Computes the `Authorization` header value for a request to `path`,
/// or `None` when the request must go out bare.
///
/// Empty tokens are treated as absent so a blanked-out storage entry
/// cannot produce a `Bearer ` header with nothing behind it.
pub fn bearer_for_request(
    path: &str,
    session_token: Option<&str>,
    fallback_token: Option<&str>,
) -> Option<String> {
    if is_auth_endpoint(path) {
        return None;
    }

    session_token
        .filter(|t| !t.is_empty())
        .or_else(|| fallback_token.filter(|t| !t.is_empty()))
        .map(|t| format!("Bearer {}", t))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Interceptor Tests ==========

    #[test]
    fn test_auth_endpoint_never_gets_bearer() {
        let header = bearer_for_request(AUTH_ENDPOINT_PATH, Some("session"), Some("fallback"));
        assert_eq!(header, None);
    }

    #[test]
    fn test_session_token_wins_over_fallback() {
        let header = bearer_for_request("/api/cards", Some("session"), Some("fallback"));
        assert_eq!(header, Some("Bearer session".to_string()));
    }

    #[test]
    fn test_fallback_token_used_when_no_session() {
        let header = bearer_for_request("/api/cards", None, Some("fallback"));
        assert_eq!(header, Some("Bearer fallback".to_string()));
    }

    #[test]
    fn test_no_tokens_means_no_header() {
        assert_eq!(bearer_for_request("/api/cards", None, None), None);
    }

    #[test]
    fn test_empty_tokens_are_treated_as_absent() {
        assert_eq!(bearer_for_request("/api/cards", Some(""), None), None);
        let header = bearer_for_request("/api/cards", Some(""), Some("fallback"));
        assert_eq!(header, Some("Bearer fallback".to_string()));
    }

    #[test]
    fn test_is_auth_endpoint_is_exact_match() {
        assert!(is_auth_endpoint("/api/auth/telegram"));
        assert!(!is_auth_endpoint("/api/auth/telegram/refresh"));
        assert!(!is_auth_endpoint("/api/cards"));
    }
}
