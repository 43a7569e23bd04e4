//! Calculate Sales CLI (branch totals)
//!
//! Reads `branch.lst` and every `<8 digits>.rcd` file in a directory and
//! writes per-branch totals to `branch.out` in the same directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin calculate-sales -- ./sales
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use calculate_sales::{cli, Variant};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = cli::run(env::args().skip(1), Variant::BranchOnly) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
