//! Authentication state shared across pages
//!
//! Only the parts the student editor needs: the stored bearer token and the
//! login-failure reset performed when the backend answers 401.

mod context;
mod storage;

pub use context::{AuthContext, AuthState, provide_auth_context, use_auth_context};
