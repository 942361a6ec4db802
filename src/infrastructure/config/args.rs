use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "codevalley",
    version,
    about = "Command-line client for the CodeValley social coding platform",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend root URL.
    #[arg(long, env = "CODEVALLEY_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Bearer token to use instead of the stored one.
    #[arg(long, env = "CODEVALLEY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Do not read or write the system keyring.
    #[arg(long)]
    pub no_remember: bool,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with email and password.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long, env = "CODEVALLEY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account.
    Register {
        /// Public handle.
        #[arg(long)]
        username: String,
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long, env = "CODEVALLEY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the signed-in user.
    Me,
    /// Show a user's profile.
    Profile { id: u64 },
    /// Search users by handle.
    Search { username: String },
    /// Upload an avatar image.
    Avatar { user_id: u64, file: PathBuf },
    /// Manage two-factor authentication.
    #[command(subcommand, name = "2fa")]
    TwoFactor(TwoFactorCommand),
    /// End the session.
    Logout,
}

#[derive(Debug, Subcommand)]
pub enum TwoFactorCommand {
    /// Generate authenticator enrollment data.
    Generate,
    /// Enable two-factor authentication.
    On,
    /// Disable two-factor authentication.
    Off,
    /// Complete a pending login with a one-time code.
    Authenticate { code: String },
}
