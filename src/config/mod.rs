//! Configuration loading and layering.
//!
//! Handles `.mcprofile.toml` loading and environment variable resolution.
//! CLI flags are merged on top by the binary.

pub mod loader;

pub use loader::{
    AvatarConfig, Config, ConfigError, PartialAvatar, PartialConfig, PartialService, ServiceConfig,
};
