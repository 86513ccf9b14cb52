use thiserror::Error;

/// Failure states of the snapshot merge itself, as opposed to failures of the
/// upstream Kafka lookups which are propagated as contextual errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("partition id {partition} is negative")]
    InvalidPartition { partition: i32 },

    #[error(
        "watermarks received for partition {partition} which has no committed-offset record"
    )]
    PartitionMismatch { partition: i32 },

    #[error("impossible watermarks for partition {partition}: oldest {oldest}, newest {newest}")]
    InvalidWatermarks {
        partition: i32,
        oldest: i64,
        newest: i64,
    },
}
