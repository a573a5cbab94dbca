use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::errors::codes::ErrorCode;

/// Closed set of reasons a container transition can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionErrorKind {
    CannotPullContainer,
    CannotCreateContainer,
    CannotStartContainer,
    CannotStopContainer,
    CannotInspectContainer,
    CannotRemoveContainer,
    CannotListContainers,
    DockerTimeout,
    OutOfMemory,
    ContainerNetworking,
    CannotCreateVolume,
    CannotInspectVolume,
}

impl TransitionErrorKind {
    /// Stable name reported to the control plane.
    pub fn name(&self) -> &'static str {
        match self {
            TransitionErrorKind::CannotPullContainer => "CannotPullContainerError",
            TransitionErrorKind::CannotCreateContainer => "CannotCreateContainerError",
            TransitionErrorKind::CannotStartContainer => "CannotStartContainerError",
            TransitionErrorKind::CannotStopContainer => "CannotStopContainerError",
            TransitionErrorKind::CannotInspectContainer => "CannotInspectContainerError",
            TransitionErrorKind::CannotRemoveContainer => "CannotRemoveContainerError",
            TransitionErrorKind::CannotListContainers => "CannotListContainersError",
            TransitionErrorKind::DockerTimeout => "DockerTimeoutError",
            TransitionErrorKind::OutOfMemory => "OutOfMemoryError",
            TransitionErrorKind::ContainerNetworking => "ContainerNetworkingError",
            TransitionErrorKind::CannotCreateVolume => "CannotCreateVolumeError",
            TransitionErrorKind::CannotInspectVolume => "CannotInspectVolumeError",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TransitionErrorKind::CannotPullContainer => ErrorCode::CANNOT_PULL_CONTAINER,
            TransitionErrorKind::CannotCreateContainer => ErrorCode::CANNOT_CREATE_CONTAINER,
            TransitionErrorKind::CannotStartContainer => ErrorCode::CANNOT_START_CONTAINER,
            TransitionErrorKind::CannotStopContainer => ErrorCode::CANNOT_STOP_CONTAINER,
            TransitionErrorKind::CannotInspectContainer => ErrorCode::CANNOT_INSPECT_CONTAINER,
            TransitionErrorKind::CannotRemoveContainer => ErrorCode::CANNOT_REMOVE_CONTAINER,
            TransitionErrorKind::CannotListContainers => ErrorCode::CANNOT_LIST_CONTAINERS,
            TransitionErrorKind::DockerTimeout => ErrorCode::DOCKER_TIMEOUT,
            TransitionErrorKind::OutOfMemory => ErrorCode::OUT_OF_MEMORY,
            TransitionErrorKind::ContainerNetworking => ErrorCode::CONTAINER_NETWORKING,
            TransitionErrorKind::CannotCreateVolume => ErrorCode::CANNOT_CREATE_VOLUME,
            TransitionErrorKind::CannotInspectVolume => ErrorCode::CANNOT_INSPECT_VOLUME,
        }
    }
}

impl fmt::Display for TransitionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set on container metadata when the engine could not complete a requested transition.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ContainerTransitionError {
    pub kind: TransitionErrorKind,
    pub message: String,
    #[source]
    pub source: Option<Arc<dyn StdError + Send + Sync>>,
}

impl ContainerTransitionError {
    pub fn new(kind: TransitionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Builds the error from an underlying cause, reusing its message.
    pub fn from_cause<E>(kind: TransitionErrorKind, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            kind,
            message: cause.to_string(),
            source: Some(Arc::new(cause)),
        }
    }

    pub fn timeout(transition: &str, waited: std::time::Duration) -> Self {
        Self::new(
            TransitionErrorKind::DockerTimeout,
            format!(
                "Could not transition to {}; timed out after waiting {:?}",
                transition, waited
            ),
        )
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}
