//! Aggregation engine.
//!
//! Holds the registries and running totals for one run and applies sales
//! records to them. A record either updates every total it touches or none.

use crate::amount::{Amount, AmountError};
use crate::error::{Result, SalesError};
use crate::record::SalesRecord;
use crate::registry::{EntityRegistry, TotalsMap};
use log::{debug, warn};
use std::str::FromStr;

/// One entity axis: its definitions and the totals accumulated so far.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub registry: EntityRegistry,
    pub totals: TotalsMap,
}

impl Ledger {
    pub fn new(registry: EntityRegistry, totals: TotalsMap) -> Self {
        Ledger { registry, totals }
    }
}

/// The sales aggregation engine.
///
/// Owns the branch ledger and, for the branch + commodity variant, the
/// commodity ledger. Nothing else mutates the totals.
pub struct SalesEngine {
    branches: Ledger,
    commodities: Option<Ledger>,
    applied: usize,
}

impl SalesEngine {
    /// Creates an engine that aggregates per branch only.
    pub fn new(branches: Ledger) -> Self {
        SalesEngine {
            branches,
            commodities: None,
            applied: 0,
        }
    }

    /// Creates an engine that aggregates per branch and per commodity.
    pub fn with_commodities(branches: Ledger, commodities: Ledger) -> Self {
        SalesEngine {
            branches,
            commodities: Some(commodities),
            applied: 0,
        }
    }

    /// Validates one record against the registries and adds its amount.
    ///
    /// Checks run in a fixed order: branch code, commodity code, amount
    /// format, then the ceiling. On any failure no total changes.
    pub fn apply(&mut self, record: &SalesRecord) -> Result<()> {
        let file = &record.file_name;

        if !self.branches.registry.contains(&record.branch_code) {
            warn!("{}: unknown branch code {:?}", file, record.branch_code);
            return Err(SalesError::UnknownBranchCode { file: file.clone() });
        }

        let commodity_code = match (&self.commodities, &record.commodity_code) {
            (Some(ledger), Some(code)) => {
                if !ledger.registry.contains(code) {
                    warn!("{}: unknown commodity code {:?}", file, code);
                    return Err(SalesError::UnknownCommodityCode { file: file.clone() });
                }
                Some(code.as_str())
            }
            (Some(_), None) => {
                return Err(SalesError::InvalidRecordFormat { file: file.clone() })
            }
            (None, _) => None,
        };

        let amount = match Amount::from_str(&record.amount) {
            Ok(amount) => amount,
            Err(AmountError::NotNumeric) => {
                warn!("{}: amount {:?} is not a digit string", file, record.amount);
                return Err(SalesError::InvalidAmount);
            }
            Err(AmountError::TooLarge) => {
                warn!("{}: amount {} exceeds the ceiling on its own", file, record.amount);
                return Err(SalesError::Overflow);
            }
        };

        let branch_total = self
            .branches
            .totals
            .candidate(&record.branch_code, amount)
            .ok_or_else(|| overflow(file, &record.branch_code))?;

        let commodity_total = match (&self.commodities, commodity_code) {
            (Some(ledger), Some(code)) => Some((
                code,
                ledger
                    .totals
                    .candidate(code, amount)
                    .ok_or_else(|| overflow(file, code))?,
            )),
            _ => None,
        };

        self.branches.totals.commit(&record.branch_code, branch_total);
        if let (Some(ledger), Some((code, total))) = (&mut self.commodities, commodity_total) {
            ledger.totals.commit(code, total);
        }
        self.applied += 1;

        debug!(
            "{}: added {} to branch {} (now {})",
            file, amount, record.branch_code, branch_total
        );
        Ok(())
    }

    /// Branch definitions and totals.
    pub fn branches(&self) -> &Ledger {
        &self.branches
    }

    /// Commodity definitions and totals, for the branch + commodity variant.
    pub fn commodities(&self) -> Option<&Ledger> {
        self.commodities.as_ref()
    }

    /// Number of records applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

fn overflow(file: &str, code: &str) -> SalesError {
    warn!("{}: total for {} would exceed 10 digits", file, code);
    SalesError::Overflow
}
