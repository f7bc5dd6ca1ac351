use std::collections::HashSet;

use crate::application::dto::{AuditRequest, AuditResponse};
use crate::correlation::domain::{
    codename_for, BugMatch, BugRecord, ImageMetadata, PackageCatalog, TrackedPackage,
    VulnerabilityCatalog,
};
use crate::correlation::services::{
    BugCorrelator, PackageExtractor, ProvenanceTracker, ReportGenerator, VulnerabilityCorrelator,
};
use crate::ports::outbound::{
    BugFeed, CatalogFeed, ImageMetadataClient, PackageListingSource, ProgressReporter,
    VulnerabilityFeed,
};
use crate::shared::Result;

/// RunAuditUseCase - Core use case for auditing a container image
///
/// This use case orchestrates the audit workflow using generic dependency
/// injection for all infrastructure dependencies: extract the installed
/// packages, trace their provenance against the catalog, then correlate
/// vulnerabilities and (optionally) defect reports.
///
/// # Type Parameters
/// * `LS` - PackageListingSource implementation
/// * `CF` - CatalogFeed implementation
/// * `VF` - VulnerabilityFeed implementation
/// * `BF` - BugFeed implementation (optional)
/// * `MC` - ImageMetadataClient implementation (optional)
/// * `PR` - ProgressReporter implementation
pub struct RunAuditUseCase<LS, CF, VF, BF, MC, PR> {
    listing_source: LS,
    catalog_feed: CF,
    vulnerability_feed: VF,
    bug_feed: Option<BF>,
    metadata_client: Option<MC>,
    progress_reporter: PR,
}

impl<LS, CF, VF, BF, MC, PR> RunAuditUseCase<LS, CF, VF, BF, MC, PR>
where
    LS: PackageListingSource,
    CF: CatalogFeed,
    VF: VulnerabilityFeed,
    BF: BugFeed,
    MC: ImageMetadataClient,
    PR: ProgressReporter,
{
    /// Creates a new RunAuditUseCase with injected dependencies
    pub fn new(
        listing_source: LS,
        catalog_feed: CF,
        vulnerability_feed: VF,
        bug_feed: Option<BF>,
        metadata_client: Option<MC>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            listing_source,
            catalog_feed,
            vulnerability_feed,
            bug_feed,
            metadata_client,
            progress_reporter,
        }
    }

    /// Executes the container audit use case
    ///
    /// # Arguments
    /// * `request` - Audit request containing the image reference and options
    ///
    /// # Returns
    /// AuditResponse with tracked packages, vulnerability and bug matches,
    /// and report metadata
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Extract installed packages from the raw listing
        let (release, installed_count, tracked, catalog) = self.extract_and_track(&request)?;

        // Step 2: Correlate vulnerabilities
        let vulnerabilities = self.correlate_vulnerabilities(&tracked, &catalog)?;

        // Step 3: Correlate defect reports if requested
        let bugs = self.correlate_bugs_if_requested(&request, &tracked).await?;

        // Step 4: Fetch registry metadata if requested
        let image_info = self.fetch_metadata_if_requested(&request).await;

        let metadata = ReportGenerator::generate_default_metadata(&request.image, &release);

        Ok(AuditResponse {
            release,
            installed_count,
            tracked_packages: tracked,
            vulnerabilities,
            bugs,
            image_info,
            metadata,
        })
    }

    /// Reads the listing, extracts installed packages and traces their
    /// provenance against the catalog.
    fn extract_and_track(
        &self,
        request: &AuditRequest,
    ) -> Result<(String, usize, Vec<TrackedPackage>, PackageCatalog)> {
        self.progress_reporter
            .report(&format!("📖 Reading package listing for: {}", request.image));

        let release_version = self.listing_source.read_release_version()?;
        let release = codename_for(&release_version);
        let lines = self.listing_source.read_listing()?;

        let installed = PackageExtractor::extract(&request.container_id(), &lines);
        self.progress_reporter.report(&format!(
            "✅ Detected {} installed package(s)",
            installed.len()
        ));

        let catalog = self.load_catalog()?;
        let tracked = ProvenanceTracker::track(&installed, &catalog);
        let untracked = installed.len() - tracked.len();
        self.progress_reporter.report(&format!(
            "🔎 Traced {} package(s) to the distribution ({} untracked)",
            tracked.len(),
            untracked
        ));

        Ok((release, installed.len(), tracked, catalog))
    }

    fn load_catalog(&self) -> Result<PackageCatalog> {
        self.progress_reporter.report("🗄  Loading package catalog...");
        let catalog = self.catalog_feed.load_catalog()?;
        self.progress_reporter
            .report(&format!("✅ Catalog loaded: {} entries", catalog.len()));
        Ok(catalog)
    }

    /// Loads the vulnerability feed and matches it against tracked packages.
    fn correlate_vulnerabilities(
        &self,
        tracked: &[TrackedPackage],
        catalog: &PackageCatalog,
    ) -> Result<Vec<crate::correlation::domain::VulnerabilityMatch>> {
        self.progress_reporter
            .report("🔐 Checking for known vulnerabilities...");

        let vulnerabilities: VulnerabilityCatalog =
            self.vulnerability_feed.load_vulnerabilities()?;
        let matches = VulnerabilityCorrelator::correlate(tracked, catalog, &vulnerabilities);

        if matches.is_empty() {
            self.progress_reporter
                .report_completion("✅ Vulnerability check complete: no matches");
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Vulnerability check complete: {} match(es)",
                matches.len()
            ));
        }

        Ok(matches)
    }

    /// Fetches defect reports per unique source package and correlates them.
    ///
    /// Fetches run with a bounded concurrency; progress is reported per
    /// completed source package.
    async fn correlate_bugs_if_requested(
        &self,
        request: &AuditRequest,
        tracked: &[TrackedPackage],
    ) -> Result<Option<Vec<BugMatch>>> {
        if !request.check_bugs {
            return Ok(None);
        }
        let Some(feed) = &self.bug_feed else {
            // No feed configured - skip bug correlation
            return Ok(None);
        };

        self.progress_reporter.report("🐛 Checking defect reports...");

        use futures::stream::{self, StreamExt};

        const MAX_CONCURRENT_FETCHES: usize = 10;

        let sources = unique_sources(tracked);
        let total = sources.len();

        let mut fetches = stream::iter(sources)
            .map(|source| async move {
                let result = feed.fetch_bugs(&source).await;
                (source, result)
            })
            .buffer_unordered(MAX_CONCURRENT_FETCHES);

        let mut records: Vec<BugRecord> = Vec::new();
        let mut completed = 0;
        while let Some((source, result)) = fetches.next().await {
            completed += 1;
            match result {
                Ok(bugs) => records.extend(bugs),
                Err(e) => {
                    // One source failing does not abort the batch
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to fetch defect reports for {}: {}",
                        source, e
                    ));
                }
            }
            self.progress_reporter
                .report_progress(completed, total, Some(&source));
        }

        let matches = BugCorrelator::correlate(tracked, &records);
        self.progress_reporter.report_completion(&format!(
            "✅ Defect report check complete: {} match(es) across {} source package(s)",
            matches.len(),
            total
        ));

        Ok(Some(matches))
    }

    /// Fetches registry metadata; failures degrade to no metadata rather
    /// than failing the audit.
    async fn fetch_metadata_if_requested(&self, request: &AuditRequest) -> Option<ImageMetadata> {
        if !request.fetch_image_metadata {
            return None;
        }
        let client = self.metadata_client.as_ref()?;

        self.progress_reporter
            .report("🌐 Fetching registry metadata...");

        match client.fetch_image_metadata(&request.image).await {
            Ok(info) => Some(info),
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to fetch registry metadata: {}",
                    e
                ));
                None
            }
        }
    }
}

/// Unique source package names in first-occurrence order.
fn unique_sources(tracked: &[TrackedPackage]) -> Vec<String> {
    let mut seen = HashSet::new();
    tracked
        .iter()
        .map(|t| t.source.clone())
        .filter(|source| seen.insert(source.clone()))
        .collect()
}
