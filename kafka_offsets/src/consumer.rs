mod consumer_wrapper;
mod security_protocol;

pub use consumer_wrapper::ConsumerWrapper;
pub use security_protocol::SecurityProtocol;

use std::time::Duration;

use anyhow::{bail, Context};
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use tracing::trace;

/// Looks up the partition ids of a topic from broker metadata. A topic the
/// cluster does not know is an error, never an empty list.
pub fn fetch_partition_ids(
    consumer: &ConsumerWrapper,
    topic: &str,
    timeout: Duration,
) -> Result<Vec<i32>, anyhow::Error> {
    let metadata = consumer
        .fetch_metadata(Some(topic), Timeout::After(timeout))
        .context("While fetching topic metadata")?;

    let Some(topic_metadata) = metadata.topics().iter().find(|t| t.name() == topic) else {
        bail!("Topic {} was not found in cluster metadata", topic)
    };

    if let Some(error) = topic_metadata.error() {
        bail!("Metadata for topic {} arrived with error {:?}", topic, error)
    }

    let partition_ids = topic_metadata
        .partitions()
        .iter()
        .map(|partition| partition.id())
        .collect::<Vec<_>>();

    if partition_ids.is_empty() {
        bail!("Topic {} has no partitions", topic)
    }

    trace!("Topic {} has partitions {:?}", topic, partition_ids);

    Ok(partition_ids)
}
