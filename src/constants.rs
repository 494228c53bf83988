//! App-wide constants.
//!
//! Service endpoints, config paths and environment variable names live here
//! so the rest of the crate never hardcodes them.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "mcprofile";

/// Crate version, from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for.
pub const TARGET: &str = env!("TARGET");

/// Default `User-Agent` header sent with every request.
pub const USER_AGENT: &str = concat!("mcprofile/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.mcprofile.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".mcprofile.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "mcprofile";

// ── Remote service ──────────────────────────────────────────────────

/// Host serving the profile and avatar endpoints.
pub const DEFAULT_BASE_URL: &str = "https://ashcon.app";

/// Path prefix of the profile endpoint: `{base}/minecraft/user/{id}`.
pub const USER_PATH: &str = "/minecraft/user/";

/// Path prefix of the avatar endpoint: `{base}/minecraft/avatar/{id}/{size}`.
pub const AVATAR_PATH: &str = "/minecraft/avatar/";

/// Avatar edge length in pixels used by the CLI when none is given.
pub const DEFAULT_AVATAR_SIZE: u32 = 64;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "MCPROFILE_BASE_URL";
pub const ENV_USER_AGENT: &str = "MCPROFILE_USER_AGENT";
pub const ENV_TIMEOUT: &str = "MCPROFILE_TIMEOUT";
pub const ENV_AVATAR_SIZE: &str = "MCPROFILE_AVATAR_SIZE";
