//! Report writing: one `code,name,total` line per defined entity.

use crate::amount::Amount;
use crate::config::EntityAxis;
use crate::engine::Ledger;
use crate::error::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A single report line.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    code: &'a str,
    name: &'a str,
    total: Amount,
}

/// Writes the ledger as report lines, in registry order.
///
/// Entities without any sales are written with a zero total. No header row.
pub fn write_rows<W: Write>(writer: W, ledger: &Ledger) -> Result<W> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for entity in ledger.registry.iter() {
        csv_writer.serialize(ReportRow {
            code: &entity.code,
            name: &entity.name,
            total: ledger.totals.get(&entity.code).unwrap_or_default(),
        })?;
    }

    csv_writer.flush()?;
    csv_writer
        .into_inner()
        .map_err(|e| e.into_error().into())
}

/// Writes `axis.output_file_name` into `dir`, replacing any existing file.
///
/// The file is synced before returning so a failed close is reported.
pub fn write_report(dir: &Path, axis: &EntityAxis, ledger: &Ledger) -> Result<PathBuf> {
    let path = dir.join(&axis.output_file_name);
    let file = write_rows(File::create(&path)?, ledger)?;
    file.sync_all()?;

    debug!("Wrote {} line(s) to {}", ledger.registry.len(), path.display());
    Ok(path)
}
