use clap::Subcommand;

use crate::{ConfigCommands, FlatCommands, GridCommands, PostsCommands};

pub(crate) mod session;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Open the interactive console (default)
    Tui,

    /// Log in and store the session token
    Login(session::LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show the stored identity and whether the API still accepts it
    Whoami(session::WhoamiArgs),

    /// Show or change console settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Flat ads (`ads/fetcher/fetch_flatads.php`)
    Flat {
        #[command(subcommand)]
        command: FlatCommands,
    },

    /// Grid ads grouped by `Group`
    Grid {
        #[command(subcommand)]
        command: GridCommands,
    },

    /// Posts and their thumbnail image URLs
    Posts {
        #[command(subcommand)]
        command: PostsCommands,
    },
}
