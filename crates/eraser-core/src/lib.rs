//! # Eraser Core
//!
//! Core library for the eraser secure file overwrite tool.
//!
//! ## Modules
//!
//! - `eraser`: the erase engine — pattern fill, chunked overwrite loop,
//!   durable flush, progress and throughput accounting
//! - `pattern`: the three wipe patterns (ALL-ZERO, ALL-ONE, RANDOM)
//! - `units`: human-readable size and throughput rendering
//! - `config`: erase configuration (block size, pattern sequence)
//! - `error`: error types and result alias
//!
//! ## Example
//!
//! ```ignore
//! use eraser_core::{EraseConfig, Eraser, Pattern};
//! use std::path::Path;
//!
//! let config = EraseConfig::new().block_size(4096);
//! let mut eraser = Eraser::with_config(config).on_progress(|event| {
//!     println!("{:?}", event);
//! });
//!
//! let outcome = eraser.erase(Path::new("secret.dat"), Pattern::Zero)?;
//! println!(
//!     "{} bytes in {:?}, {}",
//!     outcome.bytes_written,
//!     outcome.elapsed,
//!     outcome.throughput_display().unwrap_or_default()
//! );
//! ```
//!
//! The engine only guarantees that writes were issued, accepted by the
//! OS, and flushed. It does not defeat wear-leveling or remapping by
//! the underlying hardware, does not erase filesystem metadata, and
//! does not read back to verify destruction at the device level.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod eraser;
pub mod pattern;
pub mod units;

pub use config::{EraseConfig, DEFAULT_BLOCK_SIZE, DEFAULT_PATTERNS};
pub use error::{Error, Result};
pub use eraser::{
    EraseEvent, EraseOutcome, EraseProgress, Eraser, ProgressCallback, PROGRESS_INTERVAL,
};
pub use pattern::{Pattern, CODE_ONE, CODE_RANDOM, CODE_ZERO};
pub use units::{human_size, human_throughput};
