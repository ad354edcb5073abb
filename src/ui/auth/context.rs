//! Auth context for the global login state
//!
//! Restores the bearer token from localStorage after hydration and exposes
//! `login_failure`, which pages call when the backend rejects the token.

use leptos::logging::warn;
use leptos::prelude::*;

use super::storage::clear_token;
#[cfg(not(feature = "ssr"))]
use super::storage::load_token;

/// Authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Auth context providing the login state and token
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    token: RwSignal<Option<String>>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::Unauthenticated),
            token: RwSignal::new(None),
        }
    }

    /// Current bearer token.
    /// Uses get_untracked() since this is read from request handlers
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Adopt a token, e.g. one restored from storage
    pub fn set_token(&self, token: String) {
        self.token.set(Some(token));
        self.state.set(AuthState::Authenticated);
    }

    /// Drop the session after the backend refused it
    pub fn login_failure(&self) {
        warn!("Backend rejected credentials, clearing session");
        if let Err(e) = clear_token() {
            warn!("Failed to clear stored token: {}", e);
        }
        self.token.set(None);
        self.state.set(AuthState::Unauthenticated);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Unauthenticated on both server and client to avoid hydration mismatch
    let ctx = AuthContext::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if let Some(token) = load_token() {
            ctx.set_token(token);
        }
    });

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_resets_state() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AuthContext::new();
            ctx.set_token("abc".to_string());
            assert_eq!(ctx.state.get_untracked(), AuthState::Authenticated);
            assert_eq!(ctx.token().as_deref(), Some("abc"));

            ctx.login_failure();
            assert_eq!(ctx.state.get_untracked(), AuthState::Unauthenticated);
            assert!(ctx.token().is_none());
        });
    }
}
