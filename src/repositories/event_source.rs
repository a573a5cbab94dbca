use bollard::errors::Error;
use bollard::models::EventMessage;
use futures_util::stream::BoxStream;
use mockall::automock;

/// A stream of raw notifications from the container engine.
#[automock]
pub trait EventSource {
    fn events(&self) -> BoxStream<'static, Result<EventMessage, Error>>;
}
