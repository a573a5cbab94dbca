use thiserror::Error;

/// Raised when a container cannot be located within its task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Could not find container '{container_name}' in task '{task_arn}'")]
pub struct ContainerNotFound {
    /// ARN of the task the container belongs to
    pub task_arn: String,
    /// Name of the missing container
    pub container_name: String,
}

impl ContainerNotFound {
    pub fn new(task_arn: impl Into<String>, container_name: impl Into<String>) -> Self {
        Self {
            task_arn: task_arn.into(),
            container_name: container_name.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        crate::errors::codes::ErrorCode::CONTAINER_NOT_FOUND
    }
}
