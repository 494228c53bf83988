//! mcprofile: Minecraft profile and avatar lookups (library crate).
//!
//! [`client::Client`] wraps the `/minecraft/user/{id}` and
//! `/minecraft/avatar/{id}/{size}` endpoints of a public profile service.
//! Re-exports public modules for integration tests and external use.

pub mod client;
pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod output;
pub mod transport;

pub use client::{Client, ClientError};
pub use models::{AvatarImage, UserProfile};
pub use transport::{Fetch, HttpTransport, TransportError};
