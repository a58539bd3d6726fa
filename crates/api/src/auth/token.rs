//! Session-token extraction from inbound requests.
//!
//! Clients deliver the session token over several transports, checked in
//! strict precedence order: the `session` query parameter, the
//! `rosseti-session` cookie, the JSON body's `data.session` field, and
//! finally the `Authorization` header (`Bearer` or `Session` scheme).
//!
//! Body inspection is opt-in per call site: a handler that binds the body
//! itself must pass `None` so the payload stays untouched, while a handler
//! with no payload of its own (the relay connect proxy) may hand the
//! buffered bytes over.

use axum::extract::Query;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::{HeaderMap, Uri};
use serde::Deserialize;

use rosseti_core::error::CoreError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "rosseti-session";

#[derive(Debug, Deserialize)]
struct SessionQuery {
    session: Option<String>,
}

/// Extract a session token from the request, trying each transport in
/// precedence order and short-circuiting on the first non-empty hit.
///
/// Fails with [`CoreError::BadAuthRequest`] when no transport carries a
/// token. A body that is not valid JSON, or carries no `data.session`
/// string, simply falls through to the header check.
pub fn extract_token(
    uri: &Uri,
    headers: &HeaderMap,
    body: Option<&[u8]>,
) -> Result<String, CoreError> {
    // 1. `?session=` query parameter.
    if let Ok(Query(query)) = Query::<SessionQuery>::try_from_uri(uri) {
        if let Some(token) = query.session.filter(|t| !t.is_empty()) {
            return Ok(token);
        }
    }

    // 2. Session cookie.
    if let Some(token) = session_cookie(headers).filter(|t| !t.is_empty()) {
        return Ok(token);
    }

    // 3. JSON body `data.session` (only when the caller allows body use).
    if let Some(bytes) = body {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) {
            if let Some(token) = value
                .get("data")
                .and_then(|data| data.get("session"))
                .and_then(|session| session.as_str())
            {
                if !token.is_empty() {
                    return Ok(token.to_string());
                }
            }
        }
    }

    // 4. Authorization header: "<scheme> <token>", scheme `bearer` or
    //    `session` case-insensitively.
    if let Some(header) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        let mut parts = header.splitn(2, ' ');
        let scheme = parts.next().unwrap_or_default().trim();
        if let Some(rest) = parts.next() {
            if scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("session") {
                let token = rest.trim();
                if !token.is_empty() {
                    return Ok(token.to_string());
                }
            }
        }
    }

    Err(CoreError::BadAuthRequest(
        "no session token in query, cookie, body, or Authorization header".into(),
    ))
}

/// Read the `rosseti-session` cookie value, if present.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::header::{AUTHORIZATION, COOKIE};
    use axum::http::{HeaderMap, HeaderValue, Uri};

    use rosseti_core::error::CoreError;

    use super::{extract_token, session_cookie};

    fn uri(path_and_query: &str) -> Uri {
        path_and_query.parse().expect("test URI must parse")
    }

    fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_query_token() {
        let token = extract_token(&uri("/connect?session=q-token"), &HeaderMap::new(), None);
        assert_eq!(token.unwrap(), "q-token");
    }

    #[test]
    fn test_query_beats_cookie_beats_body_beats_header() {
        let hdrs = headers(&[
            (COOKIE, "rosseti-session=c-token"),
            (AUTHORIZATION, "Bearer h-token"),
        ]);
        let body = br#"{"data":{"session":"b-token"}}"#;

        // All four present: query wins.
        let token = extract_token(&uri("/x?session=q-token"), &hdrs, Some(body));
        assert_eq!(token.unwrap(), "q-token");

        // No query: cookie wins.
        let token = extract_token(&uri("/x"), &hdrs, Some(body));
        assert_eq!(token.unwrap(), "c-token");

        // No query or cookie: body wins over header.
        let hdrs = headers(&[(AUTHORIZATION, "Bearer h-token")]);
        let token = extract_token(&uri("/x"), &hdrs, Some(body));
        assert_eq!(token.unwrap(), "b-token");

        // Header is last.
        let token = extract_token(&uri("/x"), &hdrs, None);
        assert_eq!(token.unwrap(), "h-token");
    }

    #[test]
    fn test_no_token_anywhere() {
        let result = extract_token(&uri("/x"), &HeaderMap::new(), None);
        assert_matches!(result, Err(CoreError::BadAuthRequest(_)));
    }

    #[test]
    fn test_malformed_authorization_header() {
        let hdrs = headers(&[(AUTHORIZATION, "justoneword")]);
        let result = extract_token(&uri("/x"), &hdrs, None);
        assert_matches!(result, Err(CoreError::BadAuthRequest(_)));
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        let hdrs = headers(&[(AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
        let result = extract_token(&uri("/x"), &hdrs, None);
        assert_matches!(result, Err(CoreError::BadAuthRequest(_)));
    }

    #[test]
    fn test_schemes_are_case_insensitive() {
        for header in ["bearer t1", "BEARER t1", "Session t1", "sEsSiOn t1"] {
            let hdrs = headers(&[(AUTHORIZATION, header)]);
            assert_eq!(extract_token(&uri("/x"), &hdrs, None).unwrap(), "t1");
        }
    }

    #[test]
    fn test_body_is_ignored_when_not_allowed() {
        let body = br#"{"data":{"session":"b-token"}}"#;
        let result = extract_token(&uri("/x"), &HeaderMap::new(), None);
        assert_matches!(result, Err(CoreError::BadAuthRequest(_)));

        // Same request with body access allowed finds the token.
        let token = extract_token(&uri("/x"), &HeaderMap::new(), Some(body));
        assert_eq!(token.unwrap(), "b-token");
    }

    #[test]
    fn test_unparseable_body_falls_through_to_header() {
        let hdrs = headers(&[(AUTHORIZATION, "Bearer h-token")]);
        let token = extract_token(&uri("/x"), &hdrs, Some(b"not json at all"));
        assert_eq!(token.unwrap(), "h-token");
    }

    #[test]
    fn test_empty_query_value_falls_through() {
        let hdrs = headers(&[(COOKIE, "rosseti-session=c-token")]);
        let token = extract_token(&uri("/x?session="), &hdrs, None);
        assert_eq!(token.unwrap(), "c-token");
    }

    #[test]
    fn test_session_cookie_among_others() {
        let hdrs = headers(&[(COOKIE, "theme=dark; rosseti-session=c-token; lang=ru")]);
        assert_eq!(session_cookie(&hdrs).unwrap(), "c-token");
    }

    #[test]
    fn test_missing_session_cookie() {
        let hdrs = headers(&[(COOKIE, "theme=dark")]);
        assert!(session_cookie(&hdrs).is_none());
    }
}
