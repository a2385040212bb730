use super::config::handle_config_command;
use super::records::{handle_flat_command, handle_grid_command, handle_posts_command};
use super::session::{handle_login_command, handle_logout_command, handle_whoami_command};
use super::*;

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Tui => {
            let api = ctx.client()?;
            adconsole::tui::run_with_options(adconsole::tui::TuiRunOptions {
                state: ctx.state.clone(),
                api,
            })?
        }
        Commands::Login(args) => handle_login_command(ctx, args.user, args.password)?,
        Commands::Logout => handle_logout_command(ctx)?,
        Commands::Whoami(args) => handle_whoami_command(ctx, args.json)?,
        Commands::Config { command } => handle_config_command(ctx, command)?,
        Commands::Flat { command } => handle_flat_command(ctx, command)?,
        Commands::Grid { command } => handle_grid_command(ctx, command)?,
        Commands::Posts { command } => handle_posts_command(ctx, command)?,
    }

    Ok(())
}
