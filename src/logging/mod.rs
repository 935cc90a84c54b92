//! Logging and observability
//!
//! Structured logging with:
//! - Console output with a configurable level
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use kanilog::logging::init_logging;
//! use kanilog::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use kanilog::log_error_with_context;
/// use kanilog::domain::KanilogError;
///
/// let error = KanilogError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
