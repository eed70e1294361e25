use std::sync::Arc;

use event_queue::KafkaPublisher;
use interaction_gateway::http::Server;
use interaction_gateway::{Config, Error};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let publisher = KafkaPublisher::new(
        &config.brokers,
        config.topic.clone(),
        config.publish_timeout,
    )
    .map_err(Error::QueueError)?;

    info!(topic = %config.topic, addr = %config.server_addr, "Starting interaction gateway");

    let server = Server::new(config, Arc::new(publisher));
    server.start().await
}
