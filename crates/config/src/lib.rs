//! Configuration management for Pulse Query Viewer.
//!
//! This crate provides the shared constants and the layered loader that turns
//! `.env`, environment variables, and command-line values into one `Config`.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, LoggingConfig, OutputTargets};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
