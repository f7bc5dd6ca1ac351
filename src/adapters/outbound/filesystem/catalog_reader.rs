use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::correlation::domain::{CatalogEntry, PackageCatalog};
use crate::ports::outbound::CatalogFeed;
use crate::shared::error::AuditError;
use crate::shared::Result;

const CATALOG_FILENAME: &str = "packages.csv";
const FIELD_SEPARATOR: char = ';';

/// CatalogCsvReader adapter for loading the package catalog from a
/// semicolon-separated file.
///
/// The header row names the columns; their order is not fixed. Malformed
/// data rows are skipped rather than failing the batch, and a single
/// warning with the skip count is written to stderr.
pub struct CatalogCsvReader {
    path: PathBuf,
}

impl CatalogCsvReader {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CATALOG_FILENAME),
        }
    }

    fn parse_row(columns: &HashMap<String, usize>, fields: &[&str]) -> Option<CatalogEntry> {
        let field = |name: &str| -> Option<&str> { fields.get(*columns.get(name)?).copied() };

        Some(CatalogEntry {
            source: field("source")?.to_string(),
            source_version: field("source_version")?.to_string(),
            package: field("package")?.to_string(),
            version: field("version")?.to_string(),
            release_snapshot: field("release_snapshot")?.to_string(),
            date: parse_date(field("date")?)?,
            version_order: parse_order(field("version_order")?)?,
            last_order: parse_order(field("last_order")?)?,
        })
    }
}

/// Catalog dates appear either as plain dates or as full timestamps.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .ok()
}

/// Version ranks are integers but occasionally serialized as floats
/// (`3.0`) by tabular tooling upstream.
fn parse_order(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    raw.parse::<u64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|f| f as u64))
}

impl CatalogFeed for CatalogCsvReader {
    fn load_catalog(&self) -> Result<PackageCatalog> {
        if !self.path.exists() {
            return Err(AuditError::CatalogNotFound {
                path: self.path.clone(),
                suggestion: "Download the package catalog feed into the data directory first."
                    .to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| AuditError::FileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        let mut lines = content.lines();
        let header = lines.next().ok_or_else(|| AuditError::FeedParseError {
            path: self.path.clone(),
            details: "Catalog file is empty".to_string(),
        })?;

        let columns: HashMap<String, usize> = header
            .split(FIELD_SEPARATOR)
            .enumerate()
            .map(|(idx, name)| (name.trim().to_string(), idx))
            .collect();

        for required in [
            "source",
            "source_version",
            "package",
            "version",
            "release_snapshot",
            "date",
            "version_order",
            "last_order",
        ] {
            if !columns.contains_key(required) {
                return Err(AuditError::FeedParseError {
                    path: self.path.clone(),
                    details: format!("Missing column: {}", required),
                }
                .into());
            }
        }

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            match Self::parse_row(&columns, &fields) {
                Some(entry) => entries.push(entry),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            eprintln!(
                "⚠️  Warning: Skipped {} malformed catalog row(s) in {}",
                skipped,
                self.path.display()
            );
        }

        Ok(PackageCatalog::new(entries))
    }
}
