//! Hostel snack storefront server
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/      # Config, state, HTTP server
//! ├── utils/     # Errors, logging, validation
//! ├── db/        # SQLite pool, migrations, repositories, seed
//! ├── checkout/  # Cart → order transaction and stock reservation
//! └── api/       # HTTP routes and handlers
//! ```

pub mod api;
pub mod checkout;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
