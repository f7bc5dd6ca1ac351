use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::correlation::domain::{BugOrigin, BugRecord};
use crate::ports::outbound::BugFeed;
use crate::shared::error::AuditError;
use crate::shared::Result;

const BUGS_FILENAME: &str = "bugs.csv";
const FIELD_SEPARATOR: char = ';';
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// BugCsvReader adapter for a pre-downloaded bug tracker export.
///
/// Querying the tracker database directly is out of scope; this adapter
/// serves a semicolon-separated dump (`bugs.csv`) from the data directory
/// instead, filtered per source package on each fetch. The whole file is
/// parsed lazily on the first call and kept in memory.
pub struct BugCsvReader {
    path: PathBuf,
    records: tokio::sync::OnceCell<HashMap<String, Vec<BugRecord>>>,
}

impl BugCsvReader {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(BUGS_FILENAME),
            records: tokio::sync::OnceCell::new(),
        }
    }

    fn load(&self) -> Result<HashMap<String, Vec<BugRecord>>> {
        // A data directory without a bug dump means no bugs are known.
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| AuditError::FileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        let mut lines = content.lines();
        let header = lines.next().ok_or_else(|| AuditError::FeedParseError {
            path: self.path.clone(),
            details: "Bug file is empty".to_string(),
        })?;

        let columns: HashMap<String, usize> = header
            .split(FIELD_SEPARATOR)
            .enumerate()
            .map(|(idx, name)| (name.trim().to_string(), idx))
            .collect();

        let mut by_source: HashMap<String, Vec<BugRecord>> = HashMap::new();
        let mut skipped = 0usize;
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            match parse_row(&columns, &fields) {
                Some(record) => by_source.entry(record.source.clone()).or_default().push(record),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            eprintln!(
                "⚠️  Warning: Skipped {} malformed bug row(s) in {}",
                skipped,
                self.path.display()
            );
        }

        Ok(by_source)
    }
}

fn parse_row(columns: &HashMap<String, usize>, fields: &[&str]) -> Option<BugRecord> {
    let field = |name: &str| -> Option<&str> { fields.get(*columns.get(name)?).copied() };

    // Older dumps label the table column "type" instead of "origin".
    let origin = field("origin").or_else(|| field("type"))?;
    let origin = match origin.trim() {
        "archived" => BugOrigin::Archived,
        _ => BugOrigin::Normal,
    };

    Some(BugRecord {
        source: field("source")?.trim().to_string(),
        debianbug: field("debianbug")?.trim().parse().ok()?,
        found_in: field("found_in")?.trim().to_string(),
        fixed_in: optional_version(field("fixed_in")?),
        origin,
        status: field("status")?.trim().to_string(),
        severity: field("severity")?.trim().to_string(),
        arrival: parse_timestamp(field("arrival").unwrap_or("")),
        last_modified: parse_timestamp(field("last_modified").unwrap_or("")),
    })
}

/// Absent fixed-in versions come through as empty cells or the literal
/// strings `None`/`nan` depending on what produced the dump.
fn optional_version(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "None" || raw == "nan" {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

#[async_trait]
impl BugFeed for BugCsvReader {
    async fn fetch_bugs(&self, source: &str) -> Result<Vec<BugRecord>> {
        let records = self
            .records
            .get_or_try_init(|| async { self.load() })
            .await?;
        Ok(records.get(source).cloned().unwrap_or_default())
    }
}
