use anyhow::{Context, Result};

use adconsole::editor::Notice;

use crate::{
    CliContext, Commands, ConfigCommands, FlatCommands, GridCommands, PostsCommands,
    require_session,
};

mod config;
mod dispatch;
mod records;
mod session;

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    dispatch::handle_command(ctx, command)
}

/// Prints a success notice; turns an error notice into a failing exit.
fn report_notice(notice: Notice) -> Result<()> {
    match notice {
        Notice::Info(text) => {
            println!("{}", text);
            Ok(())
        }
        Notice::Error(text) => anyhow::bail!(text),
    }
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {}", what))?
    );
    Ok(())
}
