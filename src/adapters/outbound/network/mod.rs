/// Network adapters - registry metadata lookup
pub mod caching_metadata_client;
pub mod docker_hub_client;

pub use caching_metadata_client::CachingImageMetadataClient;
pub use docker_hub_client::DockerHubMetadataClient;
