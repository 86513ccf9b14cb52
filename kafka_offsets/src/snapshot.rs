use std::collections::BTreeMap;

use getset::Getters;

use crate::error::SnapshotError;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Watermarks {
    oldest: i64,
    newest: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct PartitionEntry {
    owner: Option<String>,
    committed: Option<i64>,
    watermarks: Option<Watermarks>,
}

/// One finalized row of the offsets report. `log_size` and `lag` are computed
/// once, when the snapshot is finalized; `lag` is absent for partitions the
/// group has never committed for and is never clamped when negative.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct PartitionRecord {
    partition: i32,
    owner: Option<String>,
    committed_offset: Option<i64>,
    oldest_offset: i64,
    newest_offset: i64,
    log_size: i64,
    lag: Option<i64>,
}

/// Per-partition state of one consumer group on one topic, merged from the
/// coordination view (committed offsets, owners) and the broker view
/// (watermarks). Populated in two passes: every committed-offset merge must
/// happen before the watermark merges.
#[derive(Debug, Getters)]
pub struct ConsumerOffsetsSnapshot {
    #[getset(get = "pub")]
    group: String,
    #[getset(get = "pub")]
    topic: String,
    partitions: BTreeMap<i32, PartitionEntry>,
}

impl ConsumerOffsetsSnapshot {
    pub fn new(group: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            topic: topic.into(),
            partitions: BTreeMap::new(),
        }
    }

    /// Inserts or updates the committed offset and owner for a partition.
    /// `committed_offset` of `None` means the group has never committed for
    /// this partition; the value is kept undefined rather than defaulted to
    /// zero. Applying the same update twice is equivalent to applying it once.
    pub fn merge_committed(
        &mut self,
        partition: i32,
        committed_offset: Option<i64>,
        owner: Option<String>,
    ) -> Result<(), SnapshotError> {
        if partition < 0 {
            return Err(SnapshotError::InvalidPartition { partition });
        }

        let entry = self.partitions.entry(partition).or_default();
        entry.committed = committed_offset;
        entry.owner = owner;

        Ok(())
    }

    /// Inserts or updates the log boundaries for a partition already seen in
    /// the committed-offset pass. A partition unknown to that pass is a
    /// `PartitionMismatch`, never a silently fabricated record.
    pub fn merge_watermarks(
        &mut self,
        partition: i32,
        oldest: i64,
        newest: i64,
    ) -> Result<(), SnapshotError> {
        if oldest < 0 || newest < oldest {
            return Err(SnapshotError::InvalidWatermarks {
                partition,
                oldest,
                newest,
            });
        }

        let Some(entry) = self.partitions.get_mut(&partition) else {
            return Err(SnapshotError::PartitionMismatch { partition });
        };
        entry.watermarks = Some(Watermarks { oldest, newest });

        Ok(())
    }

    /// Produces the report rows in ascending partition order, computing
    /// `log_size` and `lag` for every record at this single point. Does not
    /// consume the snapshot, and repeated calls yield identical output.
    pub fn finalize(&self) -> Vec<PartitionRecord> {
        self.partitions
            .iter()
            .map(|(partition, entry)| {
                let Watermarks { oldest, newest } = entry.watermarks.unwrap_or_default();

                PartitionRecord {
                    partition: *partition,
                    owner: entry.owner.clone(),
                    committed_offset: entry.committed,
                    oldest_offset: oldest,
                    newest_offset: newest,
                    log_size: newest - oldest,
                    lag: entry.committed.map(|committed| newest - committed),
                }
            })
            .collect()
    }
}
