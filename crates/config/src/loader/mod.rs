//! Configuration loader for environment variables and the config file.
//!
//! Responsibilities:
//! - Load runtime settings from `.env`, environment variables and the
//!   `settings` section of `config.json`.
//! - Provide a builder-pattern `ConfigLoader` for layered merging.
//! - Enforce the `DOTENV_DISABLED` gate so tests never pick up a stray `.env`.
//!
//! Does NOT handle:
//! - Persisting UI state (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Later layers win: builder > environment > file > defaults, provided the
//!   caller applies them in that order.
//! - Range checks run in `build()`, so every layer is validated the same way.

mod builder;
mod env;
mod error;
mod file;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
