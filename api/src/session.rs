//! Session credential and token validation.
//!
//! The session token is an opaque bearer credential minted at login, which
//! happens outside this application. The token's real validity is decided
//! by the service; locally we only apply a [`TokenValidator`] predicate —
//! injected wherever a session is established, with [`claims_not_expired`]
//! as the default.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

/// Opaque bearer credential proving the user is authenticated.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The credential must not leak into logs.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// An authenticated session, passed into the view tree at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: AccessToken,
}

impl Session {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }
}

/// Injected validation predicate for session tokens.
pub type TokenValidator = fn(&AccessToken) -> bool;

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Default [`TokenValidator`]: the token is a three-segment JWT whose `exp`
/// claim lies in the future. Signature verification stays with the service.
pub fn claims_not_expired(token: &AccessToken) -> bool {
    claims_not_expired_at(token, now_unix())
}

/// Same check against an explicit clock. Malformed tokens and tokens
/// without an `exp` claim are invalid.
pub fn claims_not_expired_at(token: &AccessToken, now: i64) -> bool {
    let mut segments = token.as_str().split('.');
    let (Some(_), Some(payload), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return false;
    };

    let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload) else {
        return false;
    };
    let Ok(claims) = serde_json::from_slice::<Claims>(&bytes) else {
        return false;
    };

    claims.exp.is_some_and(|exp| exp > now)
}

fn now_unix() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_payload(payload: &str) -> AccessToken {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        AccessToken::new(format!("{header}.{body}.sig"))
    }

    #[test]
    fn accepts_unexpired_token() {
        let token = jwt_with_payload(r#"{"sub":"admin","exp":2000}"#);
        assert!(claims_not_expired_at(&token, 1999));
    }

    #[test]
    fn rejects_expired_token() {
        let token = jwt_with_payload(r#"{"sub":"admin","exp":2000}"#);
        assert!(!claims_not_expired_at(&token, 2000));
        assert!(!claims_not_expired_at(&token, 3000));
    }

    #[test]
    fn rejects_token_without_exp() {
        let token = jwt_with_payload(r#"{"sub":"admin"}"#);
        assert!(!claims_not_expired_at(&token, 0));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(!claims_not_expired_at(&AccessToken::new(""), 0));
        assert!(!claims_not_expired_at(&AccessToken::new("not-a-jwt"), 0));
        assert!(!claims_not_expired_at(&AccessToken::new("a.b"), 0));
        assert!(!claims_not_expired_at(&AccessToken::new("a.b.c.d"), 0));
        assert!(!claims_not_expired_at(
            &AccessToken::new("a.%%%not-base64%%%.c"),
            0
        ));
    }

    #[test]
    fn debug_redacts_the_credential() {
        let token = AccessToken::new("super-secret");
        assert_eq!(format!("{token:?}"), "AccessToken(***)");
    }
}
