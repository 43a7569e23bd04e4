//! Sales record files: discovery, sequence checking and line parsing.

use crate::config::{SalesConfig, Variant};
use crate::error::{Result, SalesError};
use log::debug;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// A sales record file found in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFile {
    /// File name, e.g. `00000001.rcd`.
    pub name: String,

    /// Full path to the file.
    pub path: PathBuf,

    /// Numeric value of the eight-digit stem.
    pub number: u32,
}

impl TransactionFile {
    /// Builds a handle from a file name already known to match the record pattern.
    pub fn new(dir: &Path, name: &str) -> Option<Self> {
        let number = name.get(..8)?.parse().ok()?;
        Some(TransactionFile {
            name: name.to_string(),
            path: dir.join(name),
            number,
        })
    }
}

/// Lines of one record file, split by role.
///
/// Codes are not yet checked against any registry and the amount is still
/// raw text; [`crate::SalesEngine::apply`] does both, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    /// Name of the file the record came from.
    pub file_name: String,

    /// First line.
    pub branch_code: String,

    /// Second line, only for the branch + commodity variant.
    pub commodity_code: Option<String>,

    /// Last line.
    pub amount: String,
}

impl SalesRecord {
    /// Splits file lines into a record, checking only the line count.
    pub fn from_lines(file_name: &str, mut lines: Vec<String>, variant: Variant) -> Result<Self> {
        if lines.len() != variant.record_line_count() {
            return Err(SalesError::InvalidRecordFormat {
                file: file_name.to_string(),
            });
        }

        let amount = lines.pop().unwrap_or_default();
        let commodity_code = match variant {
            Variant::BranchOnly => None,
            Variant::BranchAndCommodity => lines.pop(),
        };
        let branch_code = lines.pop().unwrap_or_default();

        Ok(SalesRecord {
            file_name: file_name.to_string(),
            branch_code,
            commodity_code,
            amount,
        })
    }
}

/// Lists record files in `dir`, sorted by name.
///
/// Only regular files whose whole name matches the record pattern are kept.
pub fn discover_records(dir: &Path, config: &SalesConfig) -> Result<Vec<TransactionFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        if !config.record_pattern.is_match(&name) || !entry.path().is_file() {
            continue;
        }
        if let Some(file) = TransactionFile::new(dir, &name) {
            files.push(file);
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Found {} record file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Fails with [`SalesError::NonConsecutive`] unless every stem is one more than the previous.
pub fn check_sequence(files: &[TransactionFile]) -> Result<()> {
    for pair in files.windows(2) {
        if pair[1].number != pair[0].number + 1 {
            debug!("Sequence gap between {} and {}", pair[0].name, pair[1].name);
            return Err(SalesError::NonConsecutive);
        }
    }
    Ok(())
}

/// Reads every line of a record file and splits it by role.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The handle is dropped
/// before this returns; `std` discards any error from closing a read-only
/// file, so only open and read failures are reported.
pub fn read_record(file: &TransactionFile, variant: Variant) -> Result<SalesRecord> {
    let mut text = String::new();
    {
        let mut reader = BufReader::new(File::open(&file.path)?);
        reader.read_to_string(&mut text)?;
    }
    let lines = split_lines(&text);
    debug!("Read {} line(s) from {}", lines.len(), file.name);
    SalesRecord::from_lines(&file.name, lines, variant)
}

/// Splits text into lines; a terminator at the very end adds no empty line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + width..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn files(names: &[&str]) -> Vec<TransactionFile> {
        names
            .iter()
            .map(|n| TransactionFile::new(Path::new("."), n).unwrap())
            .collect()
    }

    #[test]
    fn test_from_lines_branch_only() {
        let record =
            SalesRecord::from_lines("00000001.rcd", lines(&["001", "1000"]), Variant::BranchOnly)
                .unwrap();
        assert_eq!(record.branch_code, "001");
        assert_eq!(record.commodity_code, None);
        assert_eq!(record.amount, "1000");
    }

    #[test]
    fn test_from_lines_branch_and_commodity() {
        let record = SalesRecord::from_lines(
            "00000001.rcd",
            lines(&["001", "A1234567", "500"]),
            Variant::BranchAndCommodity,
        )
        .unwrap();
        assert_eq!(record.branch_code, "001");
        assert_eq!(record.commodity_code.as_deref(), Some("A1234567"));
        assert_eq!(record.amount, "500");
    }

    #[test]
    fn test_from_lines_rejects_wrong_line_count() {
        let cases = [
            (lines(&["001"]), Variant::BranchOnly),
            (lines(&["001", "A1234567", "500"]), Variant::BranchOnly),
            (lines(&["001", "500"]), Variant::BranchAndCommodity),
            (Vec::new(), Variant::BranchAndCommodity),
        ];
        for (input, variant) in cases {
            let err = SalesRecord::from_lines("00000007.rcd", input, variant).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat);
            assert_eq!(err.to_string(), "00000007.rcd has an invalid format");
        }
    }

    #[test]
    fn test_check_sequence_accepts_contiguous_and_trivial_lists() {
        assert!(check_sequence(&[]).is_ok());
        assert!(check_sequence(&files(&["00000005.rcd"])).is_ok());
        assert!(check_sequence(&files(&["00000001.rcd", "00000002.rcd", "00000003.rcd"])).is_ok());
        assert!(check_sequence(&files(&["00000099.rcd", "00000100.rcd"])).is_ok());
    }

    #[test]
    fn test_check_sequence_rejects_gap() {
        let err = check_sequence(&files(&["00000001.rcd", "00000003.rcd"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonConsecutive);
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "00000002.rcd",
            "00000001.rcd",
            "0000003.rcd",
            "00000004.txt",
            "00000005.RCD",
            "branch.lst",
            "00000003.rcd.bak",
        ] {
            fs::write(dir.path().join(name), "001\n10\n").unwrap();
        }
        fs::create_dir(dir.path().join("00000003.rcd")).unwrap();

        let config = SalesConfig::branch_only().unwrap();
        let found = discover_records(dir.path(), &config).unwrap();
        let names: Vec<_> = found.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["00000001.rcd", "00000002.rcd"]);
        assert_eq!(found[1].number, 2);
    }

    #[test]
    fn test_read_record_strips_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("00000001.rcd"), "001\r\n1000\r\n").unwrap();

        let file = TransactionFile::new(dir.path(), "00000001.rcd").unwrap();
        let record = read_record(&file, Variant::BranchOnly).unwrap();
        assert_eq!(record.branch_code, "001");
        assert_eq!(record.amount, "1000");
    }

    #[test]
    fn test_read_record_accepts_lone_carriage_return() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("00000001.rcd"), "001\r1000").unwrap();

        let file = TransactionFile::new(dir.path(), "00000001.rcd").unwrap();
        let record = read_record(&file, Variant::BranchOnly).unwrap();
        assert_eq!(record.branch_code, "001");
        assert_eq!(record.amount, "1000");
    }

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines(""), Vec::<String>::new());
        assert_eq!(split_lines("a\nb\n"), lines(&["a", "b"]));
        assert_eq!(split_lines("a\r\nb"), lines(&["a", "b"]));
        assert_eq!(split_lines("a\rb\r"), lines(&["a", "b"]));
        assert_eq!(split_lines("a\n\nb"), lines(&["a", "", "b"]));
        assert_eq!(split_lines("a\n\r\n"), lines(&["a", ""]));
    }
}
