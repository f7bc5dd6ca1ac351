use crate::correlation::domain::ImageMetadata;
use crate::shared::Result;
use async_trait::async_trait;

/// ImageMetadataClient port for retrieving general information about the
/// audited image from its registry.
///
/// # Async Support
/// All methods are async; implementations must be `Send + Sync` to support
/// concurrent access.
#[async_trait]
pub trait ImageMetadataClient: Send + Sync {
    /// Fetches registry metadata for an image reference such as
    /// `debian:stretch` or `library/debian`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The registry returns an error status code
    /// - The response cannot be parsed
    async fn fetch_image_metadata(&self, image: &str) -> Result<ImageMetadata>;
}
