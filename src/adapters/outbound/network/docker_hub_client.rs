use crate::correlation::domain::ImageMetadata;
use crate::ports::outbound::ImageMetadataClient;
use crate::shared::error::AuditError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const REGISTRY_BASE: &str = "https://registry.hub.docker.com/v2/repositories";

#[derive(Debug, Default, Deserialize)]
struct RepositoryInfo {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    star_count: Option<u64>,
    #[serde(default)]
    pull_count: Option<u64>,
    #[serde(default)]
    full_size: Option<u64>,
    #[serde(default)]
    last_updated: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TagInfo {
    #[serde(default)]
    full_size: Option<u64>,
    #[serde(default)]
    last_updated: Option<String>,
    #[serde(default)]
    images: Vec<TagImage>,
}

#[derive(Debug, Deserialize)]
struct TagImage {
    #[serde(default)]
    architecture: Option<String>,
}

/// DockerHubMetadataClient adapter for fetching general image information
/// from the Docker Hub registry API.
///
/// This adapter implements the ImageMetadataClient port, combining the
/// repository endpoint (description, popularity counters) with the tag
/// endpoint (size, freshness, architectures). Official images without a
/// namespace resolve under `library/`.
///
/// # Async Support
/// Uses async reqwest client for non-blocking HTTP requests.
pub struct DockerHubMetadataClient {
    client: reqwest::Client,
}

impl DockerHubMetadataClient {
    /// Creates a new Docker Hub client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("debtective/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Splits an image reference into (repository slug, tag). Images without
    /// a namespace are official images living under `library/`.
    fn split_reference(image: &str) -> (String, String) {
        let (name, tag) = match image.rsplit_once(':') {
            Some((name, tag)) if !tag.contains('/') => (name, tag),
            _ => (image, "latest"),
        };

        let slug = if name.contains('/') {
            name.to_string()
        } else {
            format!("library/{}", name)
        };

        (slug, tag.to_string())
    }

    fn encode_slug(slug: &str) -> String {
        slug.split('/')
            .map(|part| urlencoding::encode(part).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    async fn fetch_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Registry returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }

    async fn fetch_repository(&self, slug: &str) -> Result<RepositoryInfo> {
        let url = format!("{}/{}", REGISTRY_BASE, Self::encode_slug(slug));
        self.fetch_json(&url).await
    }

    async fn fetch_tag(&self, slug: &str, tag: &str) -> Result<TagInfo> {
        let url = format!(
            "{}/{}/tags/{}",
            REGISTRY_BASE,
            Self::encode_slug(slug),
            urlencoding::encode(tag)
        );
        self.fetch_json(&url).await
    }
}

#[async_trait]
impl ImageMetadataClient for DockerHubMetadataClient {
    async fn fetch_image_metadata(&self, image: &str) -> Result<ImageMetadata> {
        let (slug, tag) = Self::split_reference(image);

        let repository = self.fetch_repository(&slug).await.map_err(|e| {
            AuditError::MetadataFetchError {
                image: image.to_string(),
                details: e.to_string(),
            }
        })?;

        // Tag-level data is preferred for size and freshness; the repository
        // record is the fallback when the tag endpoint has no answer.
        let tag_info = self.fetch_tag(&slug, &tag).await.unwrap_or_default();

        let architectures: Vec<String> = tag_info
            .images
            .iter()
            .filter_map(|img| img.architecture.clone())
            .collect();

        Ok(ImageMetadata {
            description: repository.description,
            star_count: repository.star_count,
            pull_count: repository.pull_count,
            full_size: tag_info.full_size.or(repository.full_size),
            last_updated: tag_info.last_updated.or(repository.last_updated),
            architectures: if architectures.is_empty() {
                None
            } else {
                Some(architectures)
            },
        })
    }
}
