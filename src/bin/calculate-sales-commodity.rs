//! Calculate Sales CLI (branch and commodity totals)
//!
//! Like `calculate-sales`, but record files also carry a commodity code on
//! their second line. Reads `branch.lst` and `commodity.lst`, writes
//! `branch.out` and `commodity.out`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin calculate-sales-commodity -- ./sales
//! ```

use calculate_sales::{cli, Variant};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = cli::run(env::args().skip(1), Variant::BranchAndCommodity) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
