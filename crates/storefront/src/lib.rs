//! Text storefront over a shared inventory store.
//!
//! Wires configuration, the inventory store and its three consumer views
//! (browse, sales, reports) together behind a small command interpreter.

pub mod app;
pub mod config;
pub mod views;
pub mod watch;

pub use app::{Command, CommandError, Reply, Storefront};
pub use config::StorefrontConfig;
