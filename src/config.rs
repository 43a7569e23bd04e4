//! Run configuration: which entity axes to aggregate and where their files live.

use crate::error::Result;
use regex::Regex;

/// File name pattern of sales record files: eight digits plus `.rcd`.
pub const RECORD_FILE_PATTERN: &str = r"[0-9]{8}\.rcd";

/// Everything the pipeline needs to know about one entity axis.
#[derive(Debug, Clone)]
pub struct EntityAxis {
    /// Human-readable name of the definition file, used in error messages.
    pub label: String,

    /// Definition file read from the input directory.
    pub definition_file_name: String,

    /// Report file written into the input directory.
    pub output_file_name: String,

    /// Pattern every entity code must match in full.
    pub code_pattern: Regex,
}

impl EntityAxis {
    /// Builds an axis, anchoring `code_pattern` so it must match a whole code.
    pub fn new(
        label: impl Into<String>,
        definition_file_name: impl Into<String>,
        output_file_name: impl Into<String>,
        code_pattern: &str,
    ) -> Result<Self> {
        Ok(EntityAxis {
            label: label.into(),
            definition_file_name: definition_file_name.into(),
            output_file_name: output_file_name.into(),
            code_pattern: full_match(code_pattern)?,
        })
    }

    /// Branches: three-digit codes in `branch.lst`, totals in `branch.out`.
    pub fn branch() -> Result<Self> {
        Self::new("branch definition file", "branch.lst", "branch.out", "[0-9]{3}")
    }

    /// Commodities: eight alphanumeric codes in `commodity.lst`, totals in `commodity.out`.
    pub fn commodity() -> Result<Self> {
        Self::new(
            "commodity definition file",
            "commodity.lst",
            "commodity.out",
            "[0-9A-Za-z]{8}",
        )
    }

    /// Returns `true` if `code` matches the whole code pattern.
    pub fn accepts(&self, code: &str) -> bool {
        self.code_pattern.is_match(code)
    }
}

/// Which program variant is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Records carry a branch code and an amount.
    BranchOnly,
    /// Records carry a branch code, a commodity code and an amount.
    BranchAndCommodity,
}

impl Variant {
    /// Builds the default configuration for this variant.
    pub fn config(self) -> Result<SalesConfig> {
        match self {
            Variant::BranchOnly => SalesConfig::branch_only(),
            Variant::BranchAndCommodity => SalesConfig::with_commodity(),
        }
    }

    /// Number of lines a valid record file has.
    pub fn record_line_count(self) -> usize {
        match self {
            Variant::BranchOnly => 2,
            Variant::BranchAndCommodity => 3,
        }
    }
}

/// Configuration of one run.
#[derive(Debug, Clone)]
pub struct SalesConfig {
    /// Always aggregated.
    pub branch: EntityAxis,

    /// Aggregated alongside branches when present.
    pub commodity: Option<EntityAxis>,

    /// Full-match pattern selecting sales record files.
    pub record_pattern: Regex,
}

impl SalesConfig {
    pub fn branch_only() -> Result<Self> {
        Ok(SalesConfig {
            branch: EntityAxis::branch()?,
            commodity: None,
            record_pattern: full_match(RECORD_FILE_PATTERN)?,
        })
    }

    pub fn with_commodity() -> Result<Self> {
        Ok(SalesConfig {
            commodity: Some(EntityAxis::commodity()?),
            ..Self::branch_only()?
        })
    }

    /// The variant this configuration represents.
    pub fn variant(&self) -> Variant {
        if self.commodity.is_some() {
            Variant::BranchAndCommodity
        } else {
            Variant::BranchOnly
        }
    }
}

fn full_match(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^(?:{})$", pattern))?)
}
