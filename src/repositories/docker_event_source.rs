use std::collections::HashMap;

use anyhow::{Context, Result};
use bollard::errors::Error;
use bollard::models::EventMessage;
use bollard::system::EventsOptions;
use bollard::{Docker, API_DEFAULT_VERSION};
use futures_util::stream::{BoxStream, StreamExt};
use tracing::info;

use crate::config::DockerConfig;
use crate::repositories::event_source::EventSource;

#[derive(Debug, Clone)]
pub struct DockerEventSource {
    docker: Docker,
}

impl DockerEventSource {
    pub fn new(config: &DockerConfig) -> Result<DockerEventSource> {
        let docker = match &config.socket_path {
            Some(path) => {
                info!(socket = %path, "Connecting to Docker engine");
                Docker::connect_with_unix(path, config.timeout_secs, API_DEFAULT_VERSION)
                    .with_context(|| format!("Connecting to Docker socket '{}'", path))?
            }
            None => {
                info!("Connecting to Docker engine using local defaults");
                Docker::connect_with_local_defaults()
                    .context("Connecting to Docker with local defaults")?
            }
        };
        Ok(Self { docker })
    }
}

impl EventSource for DockerEventSource {
    fn events(&self) -> BoxStream<'static, Result<EventMessage, Error>> {
        let filters = HashMap::from([("type".to_string(), vec!["container".to_string()])]);
        let options = EventsOptions::<String> {
            filters,
            ..Default::default()
        };

        self.docker.events(Some(options)).boxed()
    }
}
