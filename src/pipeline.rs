//! End-to-end run over one input directory.
//!
//! Load definitions, find record files, check their sequence, apply each
//! record, write the reports. The first failure ends the run.

use crate::config::SalesConfig;
use crate::definition::load_definitions;
use crate::engine::{Ledger, SalesEngine};
use crate::error::Result;
use crate::record::{check_sequence, discover_records, read_record};
use crate::report::write_report;
use log::info;
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of record files aggregated.
    pub records: usize,

    /// Report files written, branch report first.
    pub outputs: Vec<PathBuf>,
}

/// Aggregates every record file in `dir` and writes the report file(s) there.
pub fn run(dir: &Path, config: &SalesConfig) -> Result<RunSummary> {
    let (registry, totals) = load_definitions(dir, &config.branch)?;
    let branches = Ledger::new(registry, totals);

    let mut engine = match &config.commodity {
        Some(axis) => {
            let (registry, totals) = load_definitions(dir, axis)?;
            SalesEngine::with_commodities(branches, Ledger::new(registry, totals))
        }
        None => SalesEngine::new(branches),
    };

    let files = discover_records(dir, config)?;
    check_sequence(&files)?;

    let variant = config.variant();
    for file in &files {
        let record = read_record(file, variant)?;
        engine.apply(&record)?;
    }

    let mut outputs = vec![write_report(dir, &config.branch, engine.branches())?];
    if let (Some(axis), Some(ledger)) = (&config.commodity, engine.commodities()) {
        outputs.push(write_report(dir, axis, ledger)?);
    }

    info!(
        "Aggregated {} record file(s) from {}",
        engine.applied(),
        dir.display()
    );
    Ok(RunSummary {
        records: engine.applied(),
        outputs,
    })
}
