use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use adconsole::config::{self, ENV_API_URL, ENV_LOG};
use adconsole::gate::{AccessGate, GateDecision};
use adconsole::model::{ConsoleConfig, SessionCredential};
use adconsole::remote::RemoteClient;
use adconsole::store::StateDir;

use crate::Commands;

#[derive(Parser)]
#[command(name = "adconsole")]
#[command(about = "Session-gated ad and thumbnail console", long_about = None)]
pub(crate) struct Cli {
    /// State directory (config.json, session.json, adconsole.log)
    #[arg(long, value_name = "DIR", global = true)]
    state_dir: Option<PathBuf>,

    /// Base URL of the content API
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// What every command handler gets: the opened state directory, its config,
/// and the `--api-url` override.
pub(crate) struct CliContext {
    pub(crate) state: StateDir,
    pub(crate) config: ConsoleConfig,
    api_url: Option<String>,
}

impl CliContext {
    pub(crate) fn client(&self) -> Result<RemoteClient> {
        let url = config::resolve_api_url(
            self.api_url.as_deref(),
            config::non_empty_env(ENV_API_URL),
            &self.config,
        )?;
        Ok(RemoteClient::new(&url)?)
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let root = config::resolve_state_dir(cli.state_dir)?;
    let state = StateDir::open(&root)?;
    let cfg = state
        .read_config()
        .with_context(|| format!("load settings from {}", root.display()))?;

    let filter = config::resolve_log_filter(config::non_empty_env(ENV_LOG), &cfg);
    if let Err(err) = adconsole::logging::init_file_logging(&state.log_path(), &filter) {
        eprintln!("warning: file logging disabled: {}", err);
    }

    let ctx = CliContext {
        state,
        config: cfg,
        api_url: cli.api_url,
    };
    crate::cli_exec::handle_command(&ctx, cli.command.unwrap_or(Commands::Tui))
}

/// Runs the access gate. Record commands refuse to run without a session the
/// API still accepts; a rejected session is wiped on the way out.
pub(crate) fn require_session(
    ctx: &CliContext,
    client: &RemoteClient,
) -> Result<SessionCredential> {
    let store = ctx.state.session_store();
    match AccessGate::evaluate(&store, client) {
        GateDecision::Authenticated => store
            .credential()?
            .context("session disappeared after verification"),
        GateDecision::Unauthenticated => {
            anyhow::bail!("not logged in (run `adconsole login --user ...`)")
        }
    }
}
