//! Login state and current-user commands.

use anyhow::{Context as _, Result};
use serde::Serialize;
use shopkit_session::{
    get_login_error, is_login_successful, is_requesting_login, is_rtl, is_two_factor_required,
    CurrentUser, LoginAction, LoginState,
};

use super::{SessionArgs, SessionCommand};
use crate::context::Context;

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SessionCommand::Replay { actions } => replay(&actions, ctx),
        SessionCommand::Rtl { user } => rtl(&user, ctx),
    }
}

#[derive(Debug, PartialEq, Serialize)]
struct LoginSummary<'a> {
    requesting: bool,
    successful: Option<bool>,
    error: Option<&'a str>,
    two_factor_required: bool,
}

fn summarize(state: &LoginState) -> LoginSummary<'_> {
    LoginSummary {
        requesting: is_requesting_login(Some(state)),
        successful: is_login_successful(Some(state)),
        error: get_login_error(Some(state)),
        two_factor_required: is_two_factor_required(Some(state)),
    }
}

fn replay(path: &str, ctx: &Context) -> Result<()> {
    let content = ctx.read_input(path)?;
    let actions: Vec<LoginAction> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse login actions: {}", path))?;

    ctx.logger
        .builder(shopkit_observability::LogLevel::Debug, "replaying login actions")
        .field_u64("actions", actions.len() as u64)
        .emit();

    let state = LoginState::new().reduce_all(&actions);
    let summary = summarize(&state);

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Login state");
    ctx.output.kv("requesting", &summary.requesting.to_string());
    ctx.output.kv("successful", &optional(summary.successful));
    ctx.output.kv("error", summary.error.unwrap_or("none"));
    ctx.output
        .kv("two factor", &summary.two_factor_required.to_string());

    Ok(())
}

/// Reads a current-user document; `null` means nobody is signed in.
fn rtl(path: &str, ctx: &Context) -> Result<()> {
    let content = ctx.read_input(path)?;
    let user: Option<CurrentUser> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse current user: {}", path))?;

    let rtl = is_rtl(user.as_ref());
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "is_rtl": rtl }));
    } else {
        println!("{}", optional(rtl));
    }

    Ok(())
}

fn optional(value: Option<bool>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}
