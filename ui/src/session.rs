//! Session context and hooks for the UI.
//!
//! The app root establishes the session exactly once: it reads the stored
//! token, and [`SessionProvider`] applies the injected validation predicate
//! before any view mounts. Views only ever see the context — none of them
//! touch browser storage.

use api::session::{claims_not_expired, AccessToken, Session, TokenValidator};
use dioxus::prelude::*;

/// localStorage key the login flow writes the bearer token under.
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub authorized: bool,
}

impl SessionState {
    /// No credential, or one that failed validation.
    pub fn anonymous() -> Self {
        Self {
            session: None,
            authorized: false,
        }
    }

    /// Apply the validation predicate to an optional token. Invalid or
    /// absent tokens yield the anonymous state; the session is only kept
    /// when the predicate passes.
    pub fn establish(token: Option<AccessToken>, validate: TokenValidator) -> Self {
        match token {
            Some(token) if validate(&token) => Self {
                session: Some(Session::new(token)),
                authorized: true,
            },
            _ => Self::anonymous(),
        }
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.session.as_ref().map(Session::token)
    }
}

/// Get the current session state.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
///
/// The token is a prop: whoever mounts the provider decides where the
/// credential comes from, and the validator can be swapped out the same
/// way. Evaluated once, synchronously, before any child renders.
#[component]
pub fn SessionProvider(
    token: Option<AccessToken>,
    #[props(default = claims_not_expired as TokenValidator)] validate: TokenValidator,
    children: Element,
) -> Element {
    let state = use_signal(|| SessionState::establish(token.clone(), validate));
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Read the bearer token the login flow left in browser storage.
///
/// For the app root only — views get the session via context. Returns
/// `None` off-web, where no login flow exists to have stored one.
pub fn stored_token() -> Option<AccessToken> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(TOKEN_STORAGE_KEY).ok()??;
        if raw.is_empty() {
            return None;
        }
        Some(AccessToken::new(raw))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(_: &AccessToken) -> bool {
        true
    }

    fn reject(_: &AccessToken) -> bool {
        false
    }

    #[test]
    fn no_token_is_anonymous() {
        let state = SessionState::establish(None, accept);
        assert!(!state.authorized);
        assert!(state.token().is_none());
    }

    #[test]
    fn valid_token_is_authorized() {
        let state = SessionState::establish(Some(AccessToken::new("tok")), accept);
        assert!(state.authorized);
        assert_eq!(state.token().map(AccessToken::as_str), Some("tok"));
    }

    #[test]
    fn rejected_token_is_dropped() {
        let state = SessionState::establish(Some(AccessToken::new("tok")), reject);
        assert!(!state.authorized);
        assert!(state.token().is_none());
    }
}
