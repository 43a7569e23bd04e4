//! # Calculate Sales
//!
//! A batch tool that aggregates per-branch (and optionally per-commodity)
//! sales totals from a directory of plain-text files.
//!
//! ## Design Principles
//!
//! - **Fail fast**: the first malformed file ends the run; no partial output
//! - **Strict formats**: codes and amounts are checked against fixed patterns
//! - **Overflow ceiling**: totals never reach 10,000,000,000
//! - **Deterministic output**: reports follow definition file order
//!
//! ## Example
//!
//! ```no_run
//! use calculate_sales::{pipeline, SalesConfig};
//! use std::path::Path;
//!
//! let config = SalesConfig::with_commodity().unwrap();
//! let summary = pipeline::run(Path::new("sales"), &config).unwrap();
//! println!("{} record(s) aggregated", summary.records);
//! ```

pub mod amount;
pub mod cli;
pub mod config;
pub mod definition;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod report;

pub use amount::Amount;
pub use config::{EntityAxis, SalesConfig, Variant};
pub use engine::{Ledger, SalesEngine};
pub use error::{ErrorKind, Result, SalesError};
pub use pipeline::RunSummary;
pub use record::{SalesRecord, TransactionFile};
pub use registry::{Entity, EntityRegistry, TotalsMap};
