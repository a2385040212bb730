use anyhow::Result;

use crate::remote::RemoteClient;
use crate::store::StateDir;

/// Everything the console needs from the command line.
#[derive(Clone)]
pub struct TuiRunOptions {
    pub state: StateDir,
    pub api: RemoteClient,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
