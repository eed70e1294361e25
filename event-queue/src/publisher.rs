use std::time::Duration;

use async_trait::async_trait;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use tracing::debug;

use crate::Result;

/// The queue boundary as seen by the gateway: hand over an opaque payload,
/// suspend until the broker confirms it has accepted the message.
#[async_trait]
pub trait EventPublisher {
    async fn publish(&self, payload: &[u8]) -> Result<()>;
}

pub struct KafkaPublisher {
    topic: String,
    producer: FutureProducer,
    delivery_timeout: Duration,
}

impl KafkaPublisher {
    pub fn new(brokers: &[String], topic: String, delivery_timeout: Duration) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers.join(","))
            .set(
                "message.timeout.ms",
                delivery_timeout.as_millis().to_string(),
            )
            .create()?;

        Ok(Self {
            topic,
            producer,
            delivery_timeout,
        })
    }
}

#[async_trait]
impl EventPublisher for KafkaPublisher {
    /// Payloads are published unkeyed: the topic is an unordered work queue,
    /// so there is no partitioning or grouping to preserve.
    async fn publish(&self, payload: &[u8]) -> Result<()> {
        let record: FutureRecord<'_, (), [u8]> = FutureRecord::to(&self.topic).payload(payload);

        let (partition, offset) = self
            .producer
            .send(record, Timeout::After(self.delivery_timeout))
            .await
            .map_err(|(e, _)| e)?;

        debug!(%partition, %offset, "Broker acknowledged message");

        Ok(())
    }
}
