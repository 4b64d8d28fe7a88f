//! Login request state and the actions that drive it.

use serde::{Deserialize, Serialize};

/// Second-factor challenge returned by a successful password step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorAuth {
    /// Whether the account requires a second factor.
    #[serde(default)]
    pub result: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_step_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_step_nonce: Option<String>,
}

/// Actions that update login state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoginAction {
    /// Credentials were submitted.
    LoginRequest,
    /// The login endpoint rejected the request.
    LoginRequestFailure { error: String },
    /// The login endpoint accepted the credentials.
    LoginRequestSuccess {
        #[serde(default)]
        data: Option<TwoFactorAuth>,
    },
    /// Application state is being written to storage.
    Persist,
    /// Application state is being restored from storage.
    Hydrate,
}

/// Login slice of application state.
///
/// Every field is transient: none of it survives persist or hydrate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginState {
    /// A login request is in flight.
    pub is_requesting: bool,
    /// Error message of the last failed request.
    pub request_error: Option<String>,
    /// `None` until a request completes.
    pub request_success: Option<bool>,
    pub two_factor_auth: Option<TwoFactorAuth>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action`, returning the next state.
    pub fn reduce(self, action: &LoginAction) -> Self {
        match action {
            LoginAction::LoginRequest => Self {
                is_requesting: true,
                ..Self::default()
            },
            LoginAction::LoginRequestFailure { error } => Self {
                is_requesting: false,
                request_error: Some(error.clone()),
                request_success: Some(false),
                two_factor_auth: None,
            },
            LoginAction::LoginRequestSuccess { data } => Self {
                is_requesting: false,
                request_error: None,
                request_success: Some(true),
                two_factor_auth: data.clone(),
            },
            LoginAction::Persist | LoginAction::Hydrate => Self::default(),
        }
    }

    /// Fold a sequence of actions starting from this state.
    pub fn reduce_all<'a, I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a LoginAction>,
    {
        actions.into_iter().fold(self, LoginState::reduce)
    }
}
