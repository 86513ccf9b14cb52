use anyhow::Result;

/// Committed-offset record for one partition as seen by the group coordinator.
/// `offset` is `None` when the group has no commit for the partition, `owner`
/// is `None` when no live group member has the partition assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedOffset {
    pub partition: i32,
    pub offset: Option<i64>,
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionWatermarks {
    pub partition: i32,
    pub oldest: i64,
    pub newest: i64,
}

/// Coordination-side view of a consumer group: which offsets it has committed
/// for a topic and which members currently own the partitions.
pub trait CommittedOffsetSource {
    fn fetch_committed(&self, group: &str, topic: &str) -> Result<Vec<CommittedOffset>>;
}

/// Broker-side view of a topic: the oldest and newest available offset of
/// every partition.
pub trait WatermarkSource {
    fn fetch_topic_watermarks(&self, topic: &str) -> Result<Vec<PartitionWatermarks>>;
}
