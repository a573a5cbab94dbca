//! Result envelopes delivered from asynchronous engine calls.
//!
//! Each envelope carries either the payload or the error, never both.

use crate::errors::DockerApiError;

/// Docker IDs returned by a container listing.
pub type ListContainersResponse = Result<Vec<String>, DockerApiError>;

pub type ListImagesResponse = Result<ImageList, DockerApiError>;

pub type ListPluginsResponse = Result<Vec<bollard::models::Plugin>, DockerApiError>;

/// Outcome of a volume create or inspect through the legacy client.
pub type VolumeResponse = Result<bollard::models::Volume, DockerApiError>;

/// Outcome of a volume create through the SDK client.
pub type SdkVolumeResponse = Result<bollard::models::Volume, DockerApiError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList {
    pub image_ids: Vec<String>,
    pub repo_tags: Vec<String>,
}

impl From<Vec<bollard::models::ImageSummary>> for ImageList {
    fn from(value: Vec<bollard::models::ImageSummary>) -> Self {
        let mut images = ImageList::default();
        for image in value {
            images.image_ids.push(image.id);
            images.repo_tags.extend(image.repo_tags);
        }
        images
    }
}

/// Docker IDs of listed containers, skipping entries the engine returned without one.
pub fn container_ids(containers: Vec<bollard::models::ContainerSummary>) -> Vec<String> {
    containers
        .into_iter()
        .filter_map(|container| container.id)
        .collect()
}
