//! Login request state and current-user selectors for shopkit.
//!
//! ```rust
//! use shopkit_session::{is_requesting_login, LoginAction, LoginState};
//!
//! let state = LoginState::new().reduce(&LoginAction::LoginRequest);
//! assert!(is_requesting_login(Some(&state)));
//! assert!(!is_requesting_login(Some(&state.reduce(&LoginAction::Persist))));
//! ```

mod login;
mod selectors;
mod user;

pub use login::{LoginAction, LoginState, TwoFactorAuth};
pub use selectors::*;
pub use user::CurrentUser;
