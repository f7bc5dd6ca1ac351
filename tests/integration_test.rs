/// Integration tests for the application layer
mod test_utilities;

use debtective::prelude::*;
use test_utilities::mocks::*;

fn catalog_entry(
    source: &str,
    source_version: &str,
    package: &str,
    version: &str,
    release: &str,
    date: &str,
    version_order: u64,
    last_order: u64,
) -> CatalogEntry {
    CatalogEntry {
        source: source.to_string(),
        source_version: source_version.to_string(),
        package: package.to_string(),
        version: version.to_string(),
        release_snapshot: release.to_string(),
        date: date.parse().unwrap(),
        version_order,
        last_order,
    }
}

fn buster_listing() -> MockListingSource {
    MockListingSource::new(
        "10.4",
        &[
            "Desired=Unknown/Install/Remove/Purge/Hold",
            "ii  foo  1.2-1  amd64  a package under audit",
        ],
    )
}

fn buster_catalog() -> MockCatalogFeed {
    MockCatalogFeed::new(vec![catalog_entry(
        "foo", "1.2-1", "foo", "1.2-1", "buster", "2019-07-06", 3, 5,
    )])
}

#[tokio::test]
async fn test_audit_happy_path() {
    let vulnerability_feed = MockVulnerabilityFeed::new()
        .with_advisory(
            "foo",
            "CVE-2020-0001",
            "buster",
            "resolved",
            "medium",
            Some("1.3-1"),
            Some(123_456),
        )
        .with_advisory(
            "foo",
            "CVE-2020-0002",
            "buster",
            "open",
            "low",
            None,
            None,
        )
        .with_advisory(
            "foo",
            "TEMP-0000000-1A2B3C",
            "buster",
            "open",
            "low",
            None,
            None,
        );

    let use_case: RunAuditUseCase<_, _, _, MockBugFeed, MockMetadataClient, _> =
        RunAuditUseCase::new(
            buster_listing(),
            buster_catalog(),
            vulnerability_feed,
            None,
            None,
            MockProgressReporter::new(),
        );

    let request = AuditRequest::new("debian:buster", false, false);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.release, "buster");
    assert_eq!(response.installed_count, 1);
    assert_eq!(response.tracked_packages.len(), 1);
    assert_eq!(response.tracked_packages[0].outdate, 2);

    // The resolved CVE matches because 1.2-1 < 1.3-1; the open CVE matches
    // unconditionally; the TEMP advisory is not CVE-prefixed and is skipped.
    assert_eq!(response.vulnerabilities.len(), 2);
    let cves: Vec<&str> = response
        .vulnerabilities
        .iter()
        .map(|v| v.cve.as_str())
        .collect();
    assert!(cves.contains(&"CVE-2020-0001"));
    assert!(cves.contains(&"CVE-2020-0002"));

    let open = response
        .vulnerabilities
        .iter()
        .find(|v| v.cve == "CVE-2020-0002")
        .unwrap();
    assert_eq!(open.fixed_version, "undefined");
    assert_eq!(open.debianbug, "undefined");

    assert!(response.bugs.is_none());
    assert!(response.image_info.is_none());
    assert!(response.has_findings());
}

#[tokio::test]
async fn test_audit_resolved_cve_at_fixed_version_not_emitted() {
    let listing = MockListingSource::new(
        "10.4",
        &["ii  foo  1.3-1  amd64  already at the fixed version"],
    );
    let catalog = MockCatalogFeed::new(vec![catalog_entry(
        "foo", "1.3-1", "foo", "1.3-1", "buster", "2020-02-08", 5, 5,
    )]);
    let vulnerability_feed = MockVulnerabilityFeed::new().with_advisory(
        "foo",
        "CVE-2020-0001",
        "buster",
        "resolved",
        "medium",
        Some("1.3-1"),
        None,
    );

    let use_case: RunAuditUseCase<_, _, _, MockBugFeed, MockMetadataClient, _> =
        RunAuditUseCase::new(
            listing,
            catalog,
            vulnerability_feed,
            None,
            None,
            MockProgressReporter::new(),
        );

    let request = AuditRequest::new("debian:buster", false, false);
    let response = use_case.execute(request).await.unwrap();

    assert!(response.vulnerabilities.is_empty());
    assert!(!response.has_findings());
    assert!(response.tracked_packages[0].outdate == 0);
}

#[tokio::test]
async fn test_audit_with_bug_correlation() {
    let bug_feed = MockBugFeed::new()
        .with_bug("foo", 900_001, "1.0-1", Some("1.3-1"))
        .with_bug("foo", 900_002, "1.3-1", None);

    let use_case = RunAuditUseCase::new(
        buster_listing(),
        buster_catalog(),
        MockVulnerabilityFeed::new(),
        Some(bug_feed),
        None::<MockMetadataClient>,
        MockProgressReporter::new(),
    );

    let request = AuditRequest::new("debian:buster", true, false);
    let response = use_case.execute(request).await.unwrap();

    // 1.2-1 falls inside [1.0-1, 1.3-1); the second bug starts above it
    let bugs = response.bugs.unwrap();
    assert_eq!(bugs.len(), 1);
    assert_eq!(bugs[0].debianbug, 900_001);
    assert_eq!(bugs[0].fixed_in, "1.3-1");
}

#[tokio::test]
async fn test_audit_bug_feed_failure_does_not_abort() {
    let progress_reporter = MockProgressReporter::new();

    let use_case = RunAuditUseCase::new(
        buster_listing(),
        buster_catalog(),
        MockVulnerabilityFeed::new(),
        Some(MockBugFeed::with_failure()),
        None::<MockMetadataClient>,
        progress_reporter.clone(),
    );

    let request = AuditRequest::new("debian:buster", true, false);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.bugs, Some(vec![]));
    let messages = progress_reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m.contains("Error:") && m.contains("foo")));
}

#[tokio::test]
async fn test_audit_skip_bugs() {
    let bug_feed = MockBugFeed::new().with_bug("foo", 900_001, "1.0-1", None);

    let use_case = RunAuditUseCase::new(
        buster_listing(),
        buster_catalog(),
        MockVulnerabilityFeed::new(),
        Some(bug_feed),
        None::<MockMetadataClient>,
        MockProgressReporter::new(),
    );

    let request = AuditRequest::new("debian:buster", false, false);
    let response = use_case.execute(request).await.unwrap();

    assert!(response.bugs.is_none());
}

#[tokio::test]
async fn test_audit_with_image_metadata() {
    let use_case = RunAuditUseCase::new(
        buster_listing(),
        buster_catalog(),
        MockVulnerabilityFeed::new(),
        None::<MockBugFeed>,
        Some(MockMetadataClient::new("Debian is a Linux distribution", 42)),
        MockProgressReporter::new(),
    );

    let request = AuditRequest::new("debian:buster", false, true);
    let response = use_case.execute(request).await.unwrap();

    let info = response.image_info.unwrap();
    assert_eq!(info.star_count, Some(42));
}

#[tokio::test]
async fn test_audit_metadata_failure_degrades_to_none() {
    let use_case = RunAuditUseCase::new(
        buster_listing(),
        buster_catalog(),
        MockVulnerabilityFeed::new(),
        None::<MockBugFeed>,
        Some(MockMetadataClient::with_failure()),
        MockProgressReporter::new(),
    );

    let request = AuditRequest::new("debian:buster", false, true);
    let response = use_case.execute(request).await.unwrap();

    assert!(response.image_info.is_none());
}

#[tokio::test]
async fn test_audit_listing_failure() {
    let use_case: RunAuditUseCase<_, _, _, MockBugFeed, MockMetadataClient, _> =
        RunAuditUseCase::new(
            MockListingSource::with_failure(),
            buster_catalog(),
            MockVulnerabilityFeed::new(),
            None,
            None,
            MockProgressReporter::new(),
        );

    let request = AuditRequest::new("debian:buster", false, false);
    let result = use_case.execute(request).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_audit_catalog_failure() {
    let use_case: RunAuditUseCase<_, _, _, MockBugFeed, MockMetadataClient, _> =
        RunAuditUseCase::new(
            buster_listing(),
            MockCatalogFeed::with_failure(),
            MockVulnerabilityFeed::new(),
            None,
            None,
            MockProgressReporter::new(),
        );

    let request = AuditRequest::new("debian:buster", false, false);
    let result = use_case.execute(request).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_audit_progress_reporting() {
    let progress_reporter = MockProgressReporter::new();

    let use_case: RunAuditUseCase<_, _, _, MockBugFeed, MockMetadataClient, _> =
        RunAuditUseCase::new(
            buster_listing(),
            buster_catalog(),
            MockVulnerabilityFeed::new(),
            None,
            None,
            progress_reporter.clone(),
        );

    let request = AuditRequest::new("debian:buster", false, false);
    let _response = use_case.execute(request).await.unwrap();

    assert!(progress_reporter.message_count() > 0);
}

#[tokio::test]
async fn test_audit_formatters_render_response() {
    let use_case: RunAuditUseCase<_, _, _, MockBugFeed, MockMetadataClient, _> =
        RunAuditUseCase::new(
            buster_listing(),
            buster_catalog(),
            MockVulnerabilityFeed::new().with_advisory(
                "foo",
                "CVE-2020-0002",
                "buster",
                "open",
                "low",
                None,
                None,
            ),
            None,
            None,
            MockProgressReporter::new(),
        );

    let request = AuditRequest::new("debian:buster", false, false);
    let response = use_case.execute(request).await.unwrap();

    let json = JsonFormatter::new().format(&response).unwrap();
    assert!(json.contains("CVE-2020-0002"));

    let csv = CsvFormatter::new().format(&response).unwrap();
    assert!(csv.starts_with("source;source_version;urgency;status"));
    assert!(csv.contains("CVE-2020-0002"));
}
