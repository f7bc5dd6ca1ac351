use crate::correlation::domain::ImageMetadata;
use crate::ports::outbound::ImageMetadataClient;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingImageMetadataClient wraps an ImageMetadataClient and adds
/// in-memory caching keyed by image reference.
///
/// This adapter implements the decorator pattern to add caching capability
/// to any ImageMetadataClient implementation. The cache is thread-safe and
/// suitable for concurrent access; auditing the same image twice in one run
/// costs a single registry round trip.
pub struct CachingImageMetadataClient<C: ImageMetadataClient> {
    inner: C,
    cache: Arc<DashMap<String, ImageMetadata>>,
}

impl<C: ImageMetadataClient> CachingImageMetadataClient<C> {
    /// Creates a new caching client wrapping the given inner client
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<C: ImageMetadataClient> ImageMetadataClient for CachingImageMetadataClient<C> {
    async fn fetch_image_metadata(&self, image: &str) -> Result<ImageMetadata> {
        if let Some(cached) = self.cache.get(image) {
            return Ok(cached.clone());
        }

        let metadata = self.inner.fetch_image_metadata(image).await?;
        self.cache.insert(image.to_string(), metadata.clone());

        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock client for testing that tracks call counts
    struct MockMetadataClient {
        call_count: AtomicUsize,
    }

    impl MockMetadataClient {
        fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageMetadataClient for MockMetadataClient {
        async fn fetch_image_metadata(&self, image: &str) -> Result<ImageMetadata> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Ok(ImageMetadata {
                description: Some(format!("{} description", image)),
                star_count: Some(10),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_caching_client_returns_cached_value() {
        let mock = MockMetadataClient::new();
        let caching_client = CachingImageMetadataClient::new(mock);

        let result1 = caching_client
            .fetch_image_metadata("debian:stretch")
            .await
            .unwrap();
        assert_eq!(result1.description, Some("debian:stretch description".to_string()));
        assert_eq!(caching_client.inner.get_call_count(), 1);

        // Second call is served from cache
        let result2 = caching_client
            .fetch_image_metadata("debian:stretch")
            .await
            .unwrap();
        assert_eq!(result2, result1);
        assert_eq!(caching_client.inner.get_call_count(), 1);
        assert_eq!(caching_client.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_caching_client_different_images_cached_separately() {
        let mock = MockMetadataClient::new();
        let caching_client = CachingImageMetadataClient::new(mock);

        caching_client
            .fetch_image_metadata("debian:stretch")
            .await
            .unwrap();
        caching_client
            .fetch_image_metadata("debian:buster")
            .await
            .unwrap();

        assert_eq!(caching_client.inner.get_call_count(), 2);
        assert_eq!(caching_client.cache_size(), 2);
    }
}
