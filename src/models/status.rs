use std::fmt;

/// Lifecycle status observed for a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainerStatus {
    #[default]
    None,
    ManifestPulled,
    Pulled,
    Created,
    Running,
    ResourcesProvisioned,
    Stopped,
    Zombie,
}

impl ContainerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerStatus::None => "NONE",
            ContainerStatus::ManifestPulled => "MANIFEST_PULLED",
            ContainerStatus::Pulled => "PULLED",
            ContainerStatus::Created => "CREATED",
            ContainerStatus::Running => "RUNNING",
            ContainerStatus::ResourcesProvisioned => "RESOURCES_PROVISIONED",
            ContainerStatus::Stopped => "STOPPED",
            ContainerStatus::Zombie => "ZOMBIE",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ContainerStatus::Stopped | ContainerStatus::Zombie)
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a raw engine notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DockerEventType {
    /// The container's lifecycle status changed
    #[default]
    Container,
    /// The container's health check result changed
    Health,
}

impl fmt::Display for DockerEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DockerEventType::Container => f.write_str("container"),
            DockerEventType::Health => f.write_str("health"),
        }
    }
}
