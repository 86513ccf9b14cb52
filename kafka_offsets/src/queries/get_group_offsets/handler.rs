use anyhow::Context;
use tracing::debug;

use crate::broker::KafkaWatermarkSource;
use crate::group::KafkaCommittedOffsetSource;
use crate::queries::get_group_offsets::{GetGroupOffsetsQuery, GroupOffsetsReport};
use crate::snapshot::ConsumerOffsetsSnapshot;
use crate::sources::{CommittedOffsetSource, WatermarkSource};

pub async fn get_group_offsets(
    query: GetGroupOffsetsQuery,
) -> Result<GroupOffsetsReport, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || build_report(query));

    handle.await.context("While joining handle")?
}

fn build_report(query: GetGroupOffsetsQuery) -> Result<GroupOffsetsReport, anyhow::Error> {
    let committed_source = KafkaCommittedOffsetSource::new(query.connection_settings.clone());
    let watermark_source = KafkaWatermarkSource::new(query.connection_settings);

    let snapshot = build_snapshot(
        &committed_source,
        &watermark_source,
        &query.group,
        &query.topic,
    )?;

    Ok(GroupOffsetsReport {
        group: query.group,
        topic: query.topic,
        records: snapshot.finalize(),
    })
}

/// Merges the two upstream views into one snapshot. The committed-offset pass
/// runs to completion first; the watermark source is not consulted until it
/// has succeeded.
pub fn build_snapshot(
    committed_source: &dyn CommittedOffsetSource,
    watermark_source: &dyn WatermarkSource,
    group: &str,
    topic: &str,
) -> Result<ConsumerOffsetsSnapshot, anyhow::Error> {
    let mut snapshot = ConsumerOffsetsSnapshot::new(group, topic);

    let committed = committed_source
        .fetch_committed(group, topic)
        .with_context(|| {
            format!(
                "While fetching committed offsets of group {} for topic {}",
                group, topic
            )
        })?;
    debug!(
        "Fetched {} committed-offset records for group {}",
        committed.len(),
        group
    );

    for record in committed {
        snapshot.merge_committed(record.partition, record.offset, record.owner)?;
    }

    let watermarks = watermark_source
        .fetch_topic_watermarks(topic)
        .with_context(|| format!("While fetching watermarks for topic {}", topic))?;
    debug!(
        "Fetched watermarks for {} partitions of topic {}",
        watermarks.len(),
        topic
    );

    for record in watermarks {
        snapshot.merge_watermarks(record.partition, record.oldest, record.newest)?;
    }

    Ok(snapshot)
}
