pub mod docker_event_source;
pub mod event_source;
