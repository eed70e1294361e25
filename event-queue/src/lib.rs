mod error;
pub use error::{QueueError, Result};

mod publisher;
pub use publisher::{EventPublisher, KafkaPublisher};
