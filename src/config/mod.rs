//! Process-level configuration
//!
//! Venue credentials live with the adapter (`ParadexConfig::from_env`);
//! this module only owns logging setup.

pub mod logging;

pub use logging::init_logging;
