use std::collections::{HashMap, HashSet};

use crate::correlation::domain::{BugMatch, BugRecord, DebianVersion, TrackedPackage, UNDEFINED};

/// BugCorrelator service: matches tracked packages against defect reports.
///
/// A bug applies to an installed source version `v` iff
/// `found_in <= v < fixed_in`, with a missing fixed-in bound treated as
/// unbounded above (the bug is still open). The range test is version-only:
/// the catalog date join the upstream data ships alongside is advisory
/// context and deliberately not part of the rule (see DESIGN.md).
pub struct BugCorrelator;

impl BugCorrelator {
    pub fn correlate(tracked: &[TrackedPackage], bugs: &[BugRecord]) -> Vec<BugMatch> {
        let mut by_source: HashMap<&str, Vec<&BugRecord>> = HashMap::new();
        for bug in bugs {
            by_source.entry(bug.source.as_str()).or_default().push(bug);
        }

        // One row per (debianbug, source): the first tracked version a bug
        // can be attributed through wins.
        let mut emitted: HashSet<(u64, &str)> = HashSet::new();
        let mut matches = Vec::new();

        for (source, source_version) in unique_source_versions(tracked) {
            let Some(records) = by_source.get(source) else {
                continue;
            };
            let installed = DebianVersion::new(source_version);

            for bug in records {
                if !bug.applies_to(&installed) {
                    continue;
                }
                if !emitted.insert((bug.debianbug, source)) {
                    continue;
                }

                let fixed_in = match &bug.fixed_in {
                    Some(fixed) => fixed
                        .rsplit('/')
                        .next()
                        .unwrap_or(fixed.as_str())
                        .to_string(),
                    None => UNDEFINED.to_string(),
                };

                matches.push(BugMatch {
                    source: source.to_string(),
                    source_version: source_version.to_string(),
                    debianbug: bug.debianbug,
                    found_in: bug.found_in_version().as_str().to_string(),
                    fixed_in,
                    origin: bug.origin,
                    status: bug.status.clone(),
                    severity: bug.severity.clone(),
                    arrival: bug.arrival,
                    last_modified: bug.last_modified,
                });
            }
        }

        matches
    }
}

/// Unique (source, source_version) pairs in first-occurrence order.
fn unique_source_versions(tracked: &[TrackedPackage]) -> Vec<(&str, &str)> {
    let mut seen = HashSet::new();
    tracked
        .iter()
        .map(|t| (t.source.as_str(), t.source_version.as_str()))
        .filter(|pair| seen.insert(*pair))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::domain::BugOrigin;

    fn tracked(source: &str, source_version: &str) -> TrackedPackage {
        TrackedPackage {
            container_id: "c".to_string(),
            package: source.to_string(),
            version: source_version.to_string(),
            source: source.to_string(),
            source_version: source_version.to_string(),
            release_snapshot: "stretch".to_string(),
            date: "2017-06-17".parse().unwrap(),
            outdate: 0,
        }
    }

    fn bug(source: &str, debianbug: u64, found_in: &str, fixed_in: Option<&str>) -> BugRecord {
        BugRecord {
            source: source.to_string(),
            debianbug,
            found_in: found_in.to_string(),
            fixed_in: fixed_in.map(String::from),
            origin: BugOrigin::Normal,
            status: "done".to_string(),
            severity: "normal".to_string(),
            arrival: None,
            last_modified: None,
        }
    }

    #[test]
    fn test_version_in_range_matches() {
        let matches = BugCorrelator::correlate(
            &[tracked("curl", "1.5")],
            &[bug("curl", 100, "1.0", Some("2.0"))],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].debianbug, 100);
        assert_eq!(matches[0].found_in, "1.0");
        assert_eq!(matches[0].fixed_in, "2.0");
    }

    #[test]
    fn test_fixed_version_excluded_half_open() {
        let matches = BugCorrelator::correlate(
            &[tracked("curl", "2.0")],
            &[bug("curl", 100, "1.0", Some("2.0"))],
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_missing_fixed_in_never_excludes() {
        let matches = BugCorrelator::correlate(
            &[tracked("curl", "99.9")],
            &[bug("curl", 100, "1.0", None)],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fixed_in, UNDEFINED);
    }

    #[test]
    fn test_path_qualifiers_normalized() {
        let matches = BugCorrelator::correlate(
            &[tracked("curl", "1.5")],
            &[bug("curl", 100, "experimental/1.0", Some("sid/2.0"))],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].found_in, "1.0");
        assert_eq!(matches[0].fixed_in, "2.0");
    }

    #[test]
    fn test_dedup_per_bug_and_source() {
        // The same bug is attributable through both tracked versions;
        // the first match wins.
        let matches = BugCorrelator::correlate(
            &[tracked("curl", "1.5"), tracked("curl", "1.6")],
            &[bug("curl", 100, "1.0", Some("2.0"))],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].source_version, "1.5");
    }

    #[test]
    fn test_unrelated_source_ignored() {
        let matches = BugCorrelator::correlate(
            &[tracked("curl", "1.5")],
            &[bug("openssl", 200, "1.0", None)],
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_version_below_found_in_excluded() {
        let matches = BugCorrelator::correlate(
            &[tracked("curl", "0.9")],
            &[bug("curl", 100, "1.0", Some("2.0"))],
        );
        assert!(matches.is_empty());
    }
}
