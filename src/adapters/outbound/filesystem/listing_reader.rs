use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::outbound::PackageListingSource;
use crate::shared::error::AuditError;
use crate::shared::Result;

/// DpkgListingReader adapter for reading a captured `dpkg -l` listing.
///
/// This adapter implements the PackageListingSource port against files in
/// the data directory: `<container_id>_dpkg.txt` holds the raw listing and
/// `<container_id>_release.txt` the content of `/etc/debian_version`.
/// Capturing those files from a running container is outside the core's
/// scope; any mechanism that produces them works.
pub struct DpkgListingReader {
    listing_path: PathBuf,
    release_path: PathBuf,
}

impl DpkgListingReader {
    pub fn new(data_dir: &Path, container_id: &str) -> Self {
        Self {
            listing_path: data_dir.join(format!("{}_dpkg.txt", container_id)),
            release_path: data_dir.join(format!("{}_release.txt", container_id)),
        }
    }
}

impl PackageListingSource for DpkgListingReader {
    fn read_release_version(&self) -> Result<String> {
        // A container without /etc/debian_version is still auditable;
        // the release just stays unknown.
        if !self.release_path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.release_path)
            .map(|content| content.trim().to_string())
            .map_err(|e| {
                AuditError::FileReadError {
                    path: self.release_path.clone(),
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn read_listing(&self) -> Result<Vec<String>> {
        if !self.listing_path.exists() {
            return Err(AuditError::ListingNotFound {
                path: self.listing_path.clone(),
                suggestion: format!(
                    "Capture the listing with: docker run --entrypoint /bin/bash <image> -c 'dpkg -l' > {}",
                    self.listing_path.display()
                ),
            }
            .into());
        }

        let content = fs::read_to_string(&self.listing_path).map_err(|e| AuditError::FileReadError {
            path: self.listing_path.clone(),
            details: e.to_string(),
        })?;

        Ok(content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}
