//! mcprofile: Minecraft profile and avatar lookups.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use mcprofile::config;
use mcprofile::constants;
use mcprofile::env;

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{AvatarArgs, Cli, Command, UrlTarget, UserArgs};
use config::Config;
use env::Env;
use mcprofile::Client;
use mcprofile::models::Identifier;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    if let Command::Version = cli.command {
        return run_version();
    }

    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let mut config = Config::load(Some(&cwd), &Env::real()).context("failed to load configuration")?;
    cli::apply_overrides(&mut config, &cli);
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Command::User(args) => run_user(args, &config),
        Command::Avatar(args) => run_avatar(args, &config),
        Command::Url { target } => run_url(target, &config),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}   {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Normalise UUID input to the dashed form; usernames pass through.
fn resolve_id(raw: &str) -> String {
    let id = Identifier::parse(raw);
    tracing::debug!(input = raw, uuid = id.is_uuid(), "resolved identifier");
    id.as_path_segment()
}

fn build_client(config: &Config) -> Result<Client> {
    Client::from_config(&config.service).context("failed to set up HTTP client")
}

/// Look up a profile and print it.
fn run_user(args: UserArgs, config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let profile = client
        .user(&resolve_id(&args.id))
        .with_context(|| format!("lookup of '{}' failed", args.id))?;

    print!("{}", args.format.render(&profile));
    Ok(())
}

/// Download an avatar to a file or stdout.
fn run_avatar(args: AvatarArgs, config: &Config) -> Result<()> {
    let size = args.size.unwrap_or(config.avatar.size);
    let client = build_client(config)?;
    let image = client
        .avatar(&resolve_id(&args.id), size)
        .with_context(|| format!("avatar download for '{}' failed", args.id))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &image)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", image.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(&image).context("failed to write avatar to stdout")?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// Print a request URL without sending it.
fn run_url(target: UrlTarget, config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let url = match target {
        UrlTarget::User { id } => client.user_url(&resolve_id(&id))?,
        UrlTarget::Avatar { id, size } => {
            client.avatar_url(&resolve_id(&id), size.unwrap_or(config.avatar.size))?
        }
    };
    println!("{url}");
    Ok(())
}
