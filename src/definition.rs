//! Definition file loading.
//!
//! A definition file lists one entity per line as `code,name`. The whole
//! file is rejected if any line is malformed.

use crate::config::EntityAxis;
use crate::error::{Result, SalesError};
use crate::registry::{EntityRegistry, TotalsMap};
use csv::ReaderBuilder;
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads `axis.definition_file_name` from `dir`.
///
/// Returns the registry in file order and a totals map with every code at zero.
pub fn load_definitions(dir: &Path, axis: &EntityAxis) -> Result<(EntityRegistry, TotalsMap)> {
    let path = dir.join(&axis.definition_file_name);
    if !path.exists() {
        return Err(SalesError::DefinitionNotFound {
            label: axis.label.clone(),
        });
    }

    let file = File::open(&path)?;
    let registry = parse_definitions(file, axis)?;
    let totals = TotalsMap::zeroed(&registry);

    debug!("Loaded {} entities from {}", registry.len(), path.display());
    Ok((registry, totals))
}

/// Parses definition lines from any reader.
///
/// Blank lines are skipped. Quotes carry no special meaning. A line with
/// an empty name, such as `001,`, is malformed.
pub fn parse_definitions<R: Read>(reader: R, axis: &EntityAxis) -> Result<EntityRegistry> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut registry = EntityRegistry::new();
    for result in csv_reader.records() {
        let record = result?;

        if record.len() != 2 || record[1].is_empty() || !axis.accepts(&record[0]) {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            warn!(
                "{} line {}: expected `code,name` with a valid code and a name",
                axis.definition_file_name, line
            );
            return Err(SalesError::InvalidDefinition {
                label: axis.label.clone(),
            });
        }

        registry.insert(record[0].to_string(), record[1].to_string());
    }

    Ok(registry)
}
