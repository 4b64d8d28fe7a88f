use shopkit_session::{
    get_login_error, is_login_successful, is_requesting_login, is_two_factor_required,
    LoginAction, LoginState,
};

fn replay(json: &str) -> LoginState {
    let actions: Vec<LoginAction> = serde_json::from_str(json).unwrap();
    LoginState::new().reduce_all(&actions)
}

#[test]
fn test_retry_after_failure_requires_second_factor() {
    let state = replay(
        r#"[
            { "type": "login_request" },
            { "type": "login_request_failure", "error": "invalid password" },
            { "type": "login_request" },
            { "type": "login_request_success", "data": { "result": true, "two_step_id": 9 } }
        ]"#,
    );

    assert!(!is_requesting_login(Some(&state)));
    assert_eq!(get_login_error(Some(&state)), None);
    assert_eq!(is_login_successful(Some(&state)), Some(true));
    assert!(is_two_factor_required(Some(&state)));
}

#[test]
fn test_in_flight_request_dropped_on_hydrate() {
    let state = replay(r#"[{ "type": "login_request" }, { "type": "hydrate" }]"#);
    assert_eq!(state, LoginState::default());
}

#[test]
fn test_state_serializes_snake_case() {
    let state = replay(r#"[{ "type": "login_request_failure", "error": "locked" }]"#);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "is_requesting": false,
            "request_error": "locked",
            "request_success": false,
            "two_factor_auth": null
        })
    );
}
