use std::collections::HashMap;

use anyhow::Result;
use bollard::models::{ContainerInspectResponse, EventMessage};
use futures_util::stream::{self, StreamExt};
use tokio::sync::mpsc;

use dockerapi::errors::container::ContainerNotFound;
use dockerapi::errors::HasErrorCode;
use dockerapi::models::response::{ListContainersResponse, VolumeResponse};
use dockerapi::models::status::ContainerStatus;
use dockerapi::repositories::event_source::MockEventSource;
use dockerapi::usecases::event_watcher::EventWatcher;
use dockerapi::ContainerMetadata;

const DIE_EVENT_JSON: &str = r#"{
    "Type": "container",
    "Action": "die",
    "Actor": {
        "ID": "4f66ad9a0b2e",
        "Attributes": {
            "exitCode": "0",
            "image": "busybox",
            "name": "sleepy",
            "com.amazonaws.ecs.container-name": "sleepy"
        }
    },
    "time": 1700000000,
    "timeNano": 1700000000000000000
}"#;

const INSPECT_JSON: &str = r#"{
    "Id": "4f66ad9a0b2e",
    "Created": "2024-03-01T10:00:00.000000001Z",
    "State": {
        "Status": "exited",
        "Running": false,
        "OOMKilled": false,
        "ExitCode": 0,
        "StartedAt": "2024-03-01T10:00:01Z",
        "FinishedAt": "2024-03-01T10:05:00Z"
    },
    "HostConfig": { "NetworkMode": "awsvpc" },
    "Config": { "Labels": { "com.amazonaws.ecs.task-arn": "arn:task/1" } }
}"#;

#[tokio::test]
async fn watcher_translates_engine_json_into_change_event() -> Result<()> {
    let message: EventMessage = serde_json::from_str(DIE_EVENT_JSON)?;
    let mut source = MockEventSource::new();
    source
        .expect_events()
        .returning(move || stream::iter(vec![Ok(message.clone())]).boxed());

    let (tx, mut rx) = mpsc::channel(4);
    EventWatcher::new(source).run(tx).await;

    let event = rx.recv().await.expect("one change event");
    assert_eq!(event.status, ContainerStatus::Stopped);
    assert_eq!(event.exit_code, Some(0));
    assert_eq!(
        event.to_string(),
        "Status: STOPPED, DockerID: 4f66ad9a0b2e, health: UNKNOWN, ExitCode: 0, \
         Labels: map[com.amazonaws.ecs.container-name:sleepy], \
         FinishedAt: 2023-11-14 22:13:20 UTC"
    );
    Ok(())
}

#[test]
fn inspect_response_translates_into_metadata() -> Result<()> {
    let response: ContainerInspectResponse = serde_json::from_str(INSPECT_JSON)?;

    let metadata = ContainerMetadata::from(response);

    assert_eq!(metadata.docker_id, "4f66ad9a0b2e");
    assert_eq!(metadata.exit_code, Some(0));
    assert_eq!(metadata.network_mode, "awsvpc");
    assert_eq!(
        metadata.labels,
        HashMap::from([(
            "com.amazonaws.ecs.task-arn".to_string(),
            "arn:task/1".to_string()
        )])
    );
    assert!(metadata.is_authoritative());
    Ok(())
}

#[test]
fn envelopes_carry_either_payload_or_error() {
    let listed: ListContainersResponse = Ok(vec!["a".to_string(), "b".to_string()]);
    let missing: VolumeResponse = Err(ContainerNotFound::new("task", "db").into());

    assert_eq!(listed.map(|ids| ids.len()).ok(), Some(2));
    let error = missing.unwrap_err();
    assert_eq!(error.error_code(), "C100");
    assert_eq!(
        error.to_string(),
        "Could not find container 'db' in task 'task'"
    );
}
