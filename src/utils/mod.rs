//! Utility modules for logging and synthetic data

pub mod logging;
pub mod test_data;

pub use logging::init_logging;
