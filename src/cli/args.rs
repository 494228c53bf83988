//! Clap argument types.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use mcprofile::models::UserProfile;

/// Look up Minecraft profiles and avatars.
#[derive(Parser, Debug)]
#[command(name = "mcprofile", version = mcprofile::constants::VERSION)]
pub struct Cli {
    /// Service base URL (overrides config and MCPROFILE_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides config and MCPROFILE_TIMEOUT).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Look up a profile by username or UUID.
    User(UserArgs),

    /// Download an avatar image.
    Avatar(AvatarArgs),

    /// Print the request URL for a lookup without sending it.
    Url {
        #[command(subcommand)]
        target: UrlTarget,
    },

    /// Print version and build information.
    Version,
}

/// Arguments for the `user` subcommand.
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Username or UUID (dashed or undashed).
    pub id: String,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `avatar` subcommand.
#[derive(Parser, Debug)]
pub struct AvatarArgs {
    /// Username or UUID (dashed or undashed).
    pub id: String,

    /// Edge length in pixels (default from config, 64 if unset).
    #[arg(long, short)]
    pub size: Option<u32>,

    /// File to write the image to. Writes to stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Endpoints `url` can describe.
#[derive(clap::Subcommand, Debug)]
pub enum UrlTarget {
    /// Profile endpoint URL.
    User {
        id: String,
    },
    /// Avatar endpoint URL.
    Avatar {
        id: String,
        #[arg(long, short)]
        size: Option<u32>,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a profile using the renderer for this format.
    pub fn render(&self, profile: &UserProfile) -> String {
        use mcprofile::output::ProfileRenderer;
        match self {
            OutputFormat::Terminal => mcprofile::output::terminal::TerminalRenderer.render(profile),
            OutputFormat::Json => mcprofile::output::json::JsonRenderer.render(profile),
        }
    }
}
