use std::time::Duration;

use anyhow::Context;
use rayon::prelude::*;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use tracing::trace;

use crate::connection_settings::ConnectionSettings;
use crate::consumer::{fetch_partition_ids, ConsumerWrapper};
use crate::sources::{PartitionWatermarks, WatermarkSource};

/// Broker-side view read from the cluster itself: oldest and newest offsets
/// are requested from the partition leaders, one watermark query per
/// partition, fanned out across the rayon pool.
pub struct KafkaWatermarkSource {
    connection_settings: ConnectionSettings,
}

impl KafkaWatermarkSource {
    pub fn new(connection_settings: ConnectionSettings) -> Self {
        Self {
            connection_settings,
        }
    }
}

impl WatermarkSource for KafkaWatermarkSource {
    fn fetch_topic_watermarks(&self, topic: &str) -> Result<Vec<PartitionWatermarks>, anyhow::Error> {
        let timeout = self.connection_settings.timeout;

        let consumer = ConsumerWrapper::create(&self.connection_settings)
            .context("While creating a consumer")?;

        let partition_ids = fetch_partition_ids(&consumer, topic, timeout)?;

        trace!("Fetching watermarks for {} partitions of topic {}", partition_ids.len(), topic);

        let watermarks = partition_ids
            .into_par_iter()
            .map(|partition| fetch_partition_watermarks(&consumer, topic, partition, timeout))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("While fetching watermarks for topic {}", topic))?;

        Ok(watermarks)
    }
}

fn fetch_partition_watermarks(
    consumer: &ConsumerWrapper,
    topic: &str,
    partition: i32,
    timeout: Duration,
) -> Result<PartitionWatermarks, anyhow::Error> {
    let (oldest, newest) = consumer
        .fetch_watermarks(topic, partition, Timeout::After(timeout))
        .with_context(|| {
            format!(
                "While fetching watermarks for topic {} and partition {}",
                topic, partition
            )
        })?;

    Ok(PartitionWatermarks {
        partition,
        oldest,
        newest,
    })
}
