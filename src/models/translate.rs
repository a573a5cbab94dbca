//! Conversions from engine records into the container model.

use std::collections::HashMap;

use bollard::models::{
    ContainerInspectResponse, EventMessage, EventMessageTypeEnum, HealthStatusEnum,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::errors::transition::{ContainerTransitionError, TransitionErrorKind};
use crate::models::container::{ContainerChangeEvent, ContainerMetadata};
use crate::models::health::{HealthStatus, HealthStatusKind};
use crate::models::mount::MountPoint;
use crate::models::port::{PortBinding, TransportProtocol};
use crate::models::status::{ContainerStatus, DockerEventType};

const EXIT_CODE_ATTRIBUTE: &str = "exitCode";
const NON_LABEL_ATTRIBUTES: [&str; 4] = [EXIT_CODE_ATTRIBUTE, "image", "name", "signal"];
/// Unix seconds of the engine's zero time, `0001-01-01T00:00:00Z`.
const ENGINE_ZERO_TIME_SECS: i64 = -62_135_596_800;

impl From<ContainerInspectResponse> for ContainerMetadata {
    fn from(value: ContainerInspectResponse) -> Self {
        let state = value.state.unwrap_or_default();

        let started_at = state.started_at.as_deref().and_then(parse_engine_time);
        let finished_at = state.finished_at.as_deref().and_then(parse_engine_time);

        let running = state.running.unwrap_or(false);
        let exit_code = match (running, finished_at) {
            (false, Some(_)) => state.exit_code,
            _ => None,
        };

        let error = state.oom_killed.unwrap_or(false).then(|| {
            ContainerTransitionError::new(
                TransitionErrorKind::OutOfMemory,
                "OutOfMemoryError: Container killed due to memory usage",
            )
        });

        let health = state
            .health
            .map(|health| HealthStatus {
                status: health_status_kind(health.status),
                since: None,
                exit_code: health
                    .log
                    .as_ref()
                    .and_then(|log| log.last())
                    .and_then(|result| result.exit_code),
                output: health
                    .log
                    .and_then(|log| log.into_iter().last())
                    .and_then(|result| result.output),
            })
            .unwrap_or_default();

        let port_bindings = value
            .network_settings
            .as_ref()
            .and_then(|settings| settings.ports.as_ref())
            .map(port_bindings_from)
            .unwrap_or_default();

        ContainerMetadata {
            docker_id: value.id.unwrap_or_default(),
            exit_code,
            port_bindings,
            error,
            volumes: value
                .mounts
                .unwrap_or_default()
                .into_iter()
                .map(MountPoint::from)
                .collect(),
            labels: value
                .config
                .and_then(|config| config.labels)
                .unwrap_or_default(),
            created_at: value.created.as_deref().and_then(parse_engine_time),
            started_at,
            finished_at,
            health,
            network_mode: value
                .host_config
                .and_then(|host_config| host_config.network_mode)
                .unwrap_or_default(),
            network_settings: value.network_settings,
        }
    }
}

/// Classifies an engine event, returning `None` for events that do not change container state.
pub fn parse_event(event: EventMessage) -> Option<ContainerChangeEvent> {
    if event.typ != Some(EventMessageTypeEnum::CONTAINER) {
        return None;
    }

    let actor = event.actor?;
    let docker_id = actor.id?;
    let action = event.action?;
    let occurred_at = event_time(event.time, event.time_nano);

    let (status, event_type) = match classify_action(&action) {
        Some(classification) => classification,
        None => {
            debug!(action = %action, docker_id = %docker_id, "Ignoring container event");
            return None;
        }
    };

    let attributes = actor.attributes.unwrap_or_default();
    let mut metadata = ContainerMetadata::new(docker_id);
    metadata.exit_code = attributes
        .get(EXIT_CODE_ATTRIBUTE)
        .and_then(|code| code.parse().ok());
    metadata.labels = labels_from(attributes);

    match event_type {
        DockerEventType::Health => {
            metadata.health = HealthStatus {
                status: health_kind_from_action(&action),
                since: occurred_at,
                ..Default::default()
            };
        }
        DockerEventType::Container => match status {
            ContainerStatus::Created => metadata.created_at = occurred_at,
            ContainerStatus::Running => metadata.started_at = occurred_at,
            ContainerStatus::Stopped => metadata.finished_at = occurred_at,
            _ => {}
        },
    }

    Some(ContainerChangeEvent::new(status, metadata, event_type))
}

fn classify_action(action: &str) -> Option<(ContainerStatus, DockerEventType)> {
    if action.starts_with("health_status") {
        return Some((ContainerStatus::Running, DockerEventType::Health));
    }

    let status = match action {
        "create" => ContainerStatus::Created,
        "start" | "restart" | "unpause" => ContainerStatus::Running,
        "stop" | "die" => ContainerStatus::Stopped,
        _ => return None,
    };
    Some((status, DockerEventType::Container))
}

fn health_kind_from_action(action: &str) -> HealthStatusKind {
    match action.trim_start_matches("health_status:").trim() {
        "healthy" => HealthStatusKind::Healthy,
        "unhealthy" => HealthStatusKind::Unhealthy,
        _ => HealthStatusKind::Unknown,
    }
}

fn health_status_kind(status: Option<HealthStatusEnum>) -> HealthStatusKind {
    match status {
        Some(HealthStatusEnum::HEALTHY) => HealthStatusKind::Healthy,
        Some(HealthStatusEnum::UNHEALTHY) => HealthStatusKind::Unhealthy,
        _ => HealthStatusKind::Unknown,
    }
}

fn labels_from(attributes: HashMap<String, String>) -> HashMap<String, String> {
    attributes
        .into_iter()
        .filter(|(key, _)| !NON_LABEL_ATTRIBUTES.contains(&key.as_str()))
        .collect()
}

fn event_time(seconds: Option<i64>, nanos: Option<i64>) -> Option<DateTime<Utc>> {
    match (seconds, nanos) {
        (_, Some(nanos)) => Some(DateTime::from_timestamp_nanos(nanos)),
        (Some(seconds), None) => DateTime::from_timestamp(seconds, 0),
        (None, None) => None,
    }
}

/// Parses an engine timestamp, mapping the engine's zero time to `None`.
pub fn parse_engine_time(value: &str) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value).ok()?.with_timezone(&Utc);
    if parsed.timestamp() == ENGINE_ZERO_TIME_SECS && parsed.timestamp_subsec_nanos() == 0 {
        return None;
    }
    Some(parsed)
}

fn port_bindings_from(ports: &bollard::models::PortMap) -> Vec<PortBinding> {
    let mut bindings: Vec<PortBinding> = ports
        .iter()
        .filter_map(|(key, host_bindings)| {
            let (container_port, protocol) = parse_port_key(key)?;
            Some(
                host_bindings
                    .iter()
                    .flatten()
                    .filter_map(move |host_binding| {
                        let host_port = host_binding.host_port.as_deref()?.parse().ok()?;
                        Some(PortBinding {
                            container_port,
                            host_port,
                            bind_ip: host_binding.host_ip.clone().unwrap_or_default(),
                            protocol,
                        })
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .flatten()
        .collect();

    bindings.sort_by(|a, b| {
        let left = (a.container_port, a.host_port, &a.bind_ip);
        left.cmp(&(b.container_port, b.host_port, &b.bind_ip))
    });
    bindings
}

fn parse_port_key(key: &str) -> Option<(u16, TransportProtocol)> {
    let (port, protocol) = key.split_once('/').unwrap_or((key, "tcp"));
    Some((port.parse().ok()?, protocol.parse().ok()?))
}
