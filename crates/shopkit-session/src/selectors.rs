//! Read-only queries over session state.

use crate::login::{LoginState, TwoFactorAuth};
use crate::user::CurrentUser;

/// Right-to-left flag of the current user.
///
/// `None` when nobody is signed in or the record does not carry the flag.
pub fn is_rtl(current_user: Option<&CurrentUser>) -> Option<bool> {
    current_user.and_then(|user| user.is_rtl)
}

/// Check if a login request is in flight.
pub fn is_requesting_login(state: Option<&LoginState>) -> bool {
    state.map(|s| s.is_requesting).unwrap_or(false)
}

/// Error message of the last failed login request.
pub fn get_login_error(state: Option<&LoginState>) -> Option<&str> {
    state.and_then(|s| s.request_error.as_deref())
}

/// Outcome of the last completed login request, if any.
pub fn is_login_successful(state: Option<&LoginState>) -> Option<bool> {
    state.and_then(|s| s.request_success)
}

/// Second-factor challenge from the last successful request.
pub fn get_two_factor_auth(state: Option<&LoginState>) -> Option<&TwoFactorAuth> {
    state.and_then(|s| s.two_factor_auth.as_ref())
}

/// Check if the account must complete a second factor.
pub fn is_two_factor_required(state: Option<&LoginState>) -> bool {
    get_two_factor_auth(state).map(|t| t.result).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::LoginAction;

    fn user(json: &str) -> CurrentUser {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_is_rtl_without_user() {
        assert_eq!(is_rtl(None), None);
    }

    #[test]
    fn test_is_rtl_without_flag() {
        let current = user(r#"{ "ID": 73705554, "username": "shopper" }"#);
        assert_eq!(is_rtl(Some(&current)), None);
    }

    #[test]
    fn test_is_rtl_with_flag() {
        let current = user(r#"{ "ID": 73705554, "isRTL": true }"#);
        assert_eq!(is_rtl(Some(&current)), Some(true));

        let current = user(r#"{ "ID": 73705554, "isRTL": false }"#);
        assert_eq!(is_rtl(Some(&current)), Some(false));
    }

    #[test]
    fn test_login_selectors_without_state() {
        assert!(!is_requesting_login(None));
        assert_eq!(get_login_error(None), None);
        assert_eq!(is_login_successful(None), None);
        assert!(!is_two_factor_required(None));
    }

    #[test]
    fn test_login_selectors_after_success() {
        let state = LoginState::new().reduce(&LoginAction::LoginRequestSuccess {
            data: Some(TwoFactorAuth {
                result: true,
                two_step_id: Some(1),
                two_step_nonce: Some("nonce".to_string()),
            }),
        });
        assert!(!is_requesting_login(Some(&state)));
        assert_eq!(is_login_successful(Some(&state)), Some(true));
        assert!(is_two_factor_required(Some(&state)));
        assert_eq!(
            get_two_factor_auth(Some(&state)).and_then(|t| t.two_step_nonce.as_deref()),
            Some("nonce")
        );
    }

    #[test]
    fn test_login_selectors_after_failure() {
        let state = LoginState::new().reduce(&LoginAction::LoginRequestFailure {
            error: "unknown user".to_string(),
        });
        assert_eq!(get_login_error(Some(&state)), Some("unknown user"));
        assert_eq!(is_login_successful(Some(&state)), Some(false));
        assert!(!is_two_factor_required(Some(&state)));
    }
}
