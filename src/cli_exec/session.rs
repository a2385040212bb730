use adconsole::config::{ENV_PASSWORD, non_empty_env};

use super::*;

pub(super) fn handle_login_command(
    ctx: &CliContext,
    user: String,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => non_empty_env(ENV_PASSWORD).with_context(|| {
            format!("no password given (pass --password or set {})", ENV_PASSWORD)
        })?,
    };
    if user.trim().is_empty() || password.is_empty() {
        anyhow::bail!("Username and password are required");
    }

    let client = ctx.client()?;
    let token = client
        .login(&user, &password)
        .map_err(|err| anyhow::anyhow!(err.notice("Invalid credentials")))?;
    ctx.state
        .session_store()
        .write(&token, &user)
        .context("store session")?;

    println!("Logged in as {}", user);
    Ok(())
}

pub(super) fn handle_logout_command(ctx: &CliContext) -> Result<()> {
    ctx.state.session_store().clear()?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(ctx: &CliContext, json: bool) -> Result<()> {
    let client = ctx.client()?;
    let cred = require_session(ctx, &client)?;
    let state = ctx.state.session_store().read_state()?;
    if json {
        print_json(
            &serde_json::json!({
                "user": cred.display_identity(),
                "api_url": client.base_url(),
                "logged_in_at": state.logged_in_at,
            }),
            "whoami json",
        )?;
    } else {
        println!("user: {}", cred.display_identity());
        println!("api_url: {}", client.base_url());
        if let Some(at) = state.logged_in_at {
            println!("logged_in_at: {}", at);
        }
    }
    Ok(())
}
