use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Utc};

use crate::errors::transition::ContainerTransitionError;
use crate::models::health::HealthStatus;
use crate::models::mount::MountPoint;
use crate::models::port::PortBinding;
use crate::models::status::{ContainerStatus, DockerEventType};

/// Snapshot of everything observed about a container after a runtime operation.
///
/// When `error` is set the remaining fields are best-effort and must not be
/// treated as the container's actual state.
#[derive(Debug, Clone, Default)]
pub struct ContainerMetadata {
    /// Identifier assigned by the engine
    pub docker_id: String,
    /// Present only once the container has exited, zero included
    pub exit_code: Option<i64>,
    pub port_bindings: Vec<PortBinding>,
    pub error: Option<ContainerTransitionError>,
    pub volumes: Vec<MountPoint>,
    pub labels: HashMap<String, String>,
    pub created_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub health: HealthStatus,
    pub network_mode: String,
    pub network_settings: Option<bollard::models::NetworkSettings>,
}

impl ContainerMetadata {
    pub fn new(docker_id: impl Into<String>) -> Self {
        Self {
            docker_id: docker_id.into(),
            ..Default::default()
        }
    }

    /// Metadata for an operation that failed before anything could be observed.
    pub fn from_error(error: ContainerTransitionError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_authoritative(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_exited(&self) -> bool {
        self.exit_code.is_some()
    }
}

/// A container state change observed on the engine's event stream.
#[derive(Debug, Clone, Default)]
pub struct ContainerChangeEvent {
    pub status: ContainerStatus,
    pub metadata: ContainerMetadata,
    pub event_type: DockerEventType,
}

impl ContainerChangeEvent {
    pub fn new(
        status: ContainerStatus,
        metadata: ContainerMetadata,
        event_type: DockerEventType,
    ) -> Self {
        Self {
            status,
            metadata,
            event_type,
        }
    }
}

impl Deref for ContainerChangeEvent {
    type Target = ContainerMetadata;

    fn deref(&self) -> &Self::Target {
        &self.metadata
    }
}

impl fmt::Display for ContainerChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}, DockerID: {}", self.status, self.docker_id)?;
        write!(f, ", health: {}", self.health.status)?;

        if let Some(exit_code) = self.exit_code {
            write!(f, ", ExitCode: {}", exit_code)?;
        }

        if !self.port_bindings.is_empty() {
            write!(f, ", PortBindings: {}", bracketed(&self.port_bindings))?;
        }

        if let Some(error) = &self.error {
            write!(f, ", Error: {}", error)?;
        }

        if !self.volumes.is_empty() {
            write!(f, ", Volumes: {}", bracketed(&self.volumes))?;
        }

        if !self.labels.is_empty() {
            let sorted: BTreeMap<_, _> = self.labels.iter().collect();
            let pairs: Vec<String> = sorted
                .into_iter()
                .map(|(key, value)| format!("{}:{}", key, value))
                .collect();
            write!(f, ", Labels: map[{}]", pairs.join(" "))?;
        }

        let timestamps = [
            ("CreatedAt", self.created_at),
            ("StartedAt", self.started_at),
            ("FinishedAt", self.finished_at),
        ];
        for (label, timestamp) in timestamps {
            if let Some(timestamp) = timestamp {
                write!(f, ", {}: {}", label, timestamp)?;
            }
        }

        Ok(())
    }
}

fn bracketed<T: fmt::Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(" "))
}
