use crate::snapshot::PartitionRecord;

/// Finalized offsets report for one group and topic, one record per partition
/// in ascending partition order.
#[derive(Debug)]
pub struct GroupOffsetsReport {
    pub group: String,
    pub topic: String,
    pub records: Vec<PartitionRecord>,
}
