use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HealthStatusKind {
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
}

impl HealthStatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatusKind::Unknown => "UNKNOWN",
            HealthStatusKind::Healthy => "HEALTHY",
            HealthStatusKind::Unhealthy => "UNHEALTHY",
        }
    }
}

impl fmt::Display for HealthStatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the most recent container health check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: HealthStatusKind,
    /// When the status was first observed
    pub since: Option<DateTime<Utc>>,
    pub exit_code: Option<i64>,
    pub output: Option<String>,
}

impl HealthStatus {
    pub fn new(status: HealthStatusKind) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}
