pub mod config;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod telemetry;
pub mod usecases;

use std::path::Path;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::Config;
use crate::repositories::docker_event_source::DockerEventSource;
use crate::telemetry::init_telemetry;
use crate::usecases::event_watcher::EventWatcher;

pub use crate::errors::{DockerApiError, DockerApiResult};
pub use crate::models::container::{ContainerChangeEvent, ContainerMetadata};

const CONFIG_PATH_ENV: &str = "DOCKERAPI_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration, falling back to defaults when the file does not exist.
pub fn load_config() -> DockerApiResult<Config> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !Path::new(&path).exists() {
        return Ok(Config::default());
    }
    Ok(Config::from_file(&path)?)
}

pub async fn start() -> Result<()> {
    let config = load_config()?;
    let telemetry = init_telemetry(&config.telemetry)?;

    let source = DockerEventSource::new(&config.docker)?;
    let watcher = EventWatcher::new(source);
    let (tx, mut rx) = mpsc::channel(config.docker.event_buffer);

    let watch = tokio::spawn(async move { watcher.run(tx).await });

    info!("Watching container events");
    while let Some(event) = rx.recv().await {
        if event.is_authoritative() {
            info!(event_type = %event.event_type, "{}", event);
        } else {
            warn!(event_type = %event.event_type, "{}", event);
        }
    }

    if let Err(err) = watch.await {
        warn!(error = %err, "Event watcher task failed");
    }

    telemetry.shutdown();
    Ok(())
}
