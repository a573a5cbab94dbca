pub mod codes;
pub mod container;
pub mod transition;

use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::codes::ErrorCode;
use crate::errors::container::ContainerNotFound;
use crate::errors::transition::ContainerTransitionError;

pub type DockerApiResult<T> = Result<T, DockerApiError>;

pub trait HasErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum DockerApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ContainerNotFound(#[from] ContainerNotFound),

    #[error(transparent)]
    Transition(#[from] ContainerTransitionError),

    #[error("Docker engine request failed: {0}")]
    Engine(#[from] bollard::errors::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl HasErrorCode for DockerApiError {
    fn error_code(&self) -> &'static str {
        match self {
            DockerApiError::Config(e) => e.error_code(),
            DockerApiError::ContainerNotFound(e) => e.error_code(),
            DockerApiError::Transition(e) => e.error_code(),
            DockerApiError::Engine(_) => ErrorCode::ENGINE_REQUEST_FAILED,
            DockerApiError::Internal(_) => ErrorCode::INTERNAL,
        }
    }
}
