use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Print the current settings
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Change settings in config.json
    Set {
        /// Base URL of the content API
        #[arg(long)]
        api_url: Option<String>,
        /// Log filter, e.g. `info` or `adconsole=debug`
        #[arg(long)]
        log_filter: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum FlatCommands {
    /// List flat ads (at most 8)
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update the title of one flat ad
    Set {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum GridCommands {
    /// List distinct groups
    Groups {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the members displayed for a group (at most 4)
    Show {
        #[arg(long)]
        group: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update the title of one grid ad
    Set {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum PostsCommands {
    /// List posts, optionally filtered by title
    List {
        /// Case-insensitive title substring
        #[arg(long)]
        search: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update the image URL of one post
    SetImage {
        #[arg(long)]
        id: String,
        #[arg(long)]
        url: String,
    },
}
