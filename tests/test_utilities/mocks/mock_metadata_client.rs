use async_trait::async_trait;
use debtective::correlation::domain::ImageMetadata;
use debtective::prelude::*;

/// Mock ImageMetadataClient for testing
pub struct MockMetadataClient {
    pub metadata: ImageMetadata,
    pub should_fail: bool,
}

impl MockMetadataClient {
    pub fn new(description: &str, star_count: u64) -> Self {
        Self {
            metadata: ImageMetadata {
                description: Some(description.to_string()),
                star_count: Some(star_count),
                ..Default::default()
            },
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            metadata: ImageMetadata::default(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ImageMetadataClient for MockMetadataClient {
    async fn fetch_image_metadata(&self, _image: &str) -> Result<ImageMetadata> {
        if self.should_fail {
            anyhow::bail!("Mock metadata fetch failure");
        }
        Ok(self.metadata.clone())
    }
}
