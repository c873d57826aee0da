use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a user record and a fresh auth token
    Login {
        #[arg(long)]
        user_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Clear the auth token
    Logout,

    /// Session state commands
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Tenant commands
    Tenant {
        #[command(subcommand)]
        action: TenantCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Print the current session state as JSON
    Show {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TenantCommands {
    /// Replace the active tenant and persist it
    Set {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: Option<String>,
    },
}
