//! CLI command implementations
//!
//! Commands return the process exit code:
//!
//! | Code | Meaning |
//! |---|---|
//! | 0 | success |
//! | 2 | configuration error |
//! | 4 | client initialisation error |
//! | 5 | fatal run error |

pub mod export;
pub mod init;
pub mod validate;

/// Successful run
pub const EXIT_OK: i32 = 0;

/// Configuration could not be loaded or is invalid
pub const EXIT_CONFIG: i32 = 2;

/// API clients could not be created
pub const EXIT_INIT: i32 = 4;

/// The run failed
pub const EXIT_FATAL: i32 = 5;
