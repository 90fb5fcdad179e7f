//! Protview Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the protview workspace.
//!
//! # Overview
//!
//! - **Error Handling**: the [`ProtviewError`] type and [`Result`] alias
//! - **Logging**: centralized `tracing` subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use protview_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{ProtviewError, Result};
