use clap::{Parser, Subcommand};
use std::process::ExitCode;

use larder::commands::{
    cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_feedback, cmd_login,
    cmd_logout, cmd_whoami,
};

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Terminal recipe catalog browser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in against the user directory
    Login {
        /// Directory username
        username: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Clear the stored session identity
    Logout,

    /// Print the current session identity
    Whoami,

    /// Browse the recipe catalog
    #[command(visible_alias = "b")]
    Browse,

    /// Send feedback about the catalog
    Feedback {
        /// Your name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// The feedback message
        #[arg(long)]
        message: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (directory_url, catalog_url, page_size, remote_timeout)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (directory_url, catalog_url, page_size, remote_timeout)
        key: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Login { username, password } => cmd_login(&username, password.as_deref()).await,
        Commands::Logout => cmd_logout(),
        Commands::Whoami => cmd_whoami(),
        Commands::Browse => cmd_browse().await,
        Commands::Feedback {
            name,
            email,
            message,
        } => cmd_feedback(&name, &email, &message),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
