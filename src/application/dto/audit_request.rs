/// AuditRequest - Internal request DTO for the container audit use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external CLI surface.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Image reference being audited (e.g. "debian:stretch")
    pub image: String,
    /// Whether to correlate defect reports from the bug feed
    pub check_bugs: bool,
    /// Whether to fetch general image metadata from the registry
    pub fetch_image_metadata: bool,
}

impl AuditRequest {
    pub fn new(image: impl Into<String>, check_bugs: bool, fetch_image_metadata: bool) -> Self {
        Self {
            image: image.into(),
            check_bugs,
            fetch_image_metadata,
        }
    }

    /// File-safe identifier of the container, used to tag extracted rows.
    pub fn container_id(&self) -> String {
        self.image.replace('/', "_")
    }
}
