use anyhow::bail;
use bytes::Buf;

/// Topic partitions assigned to one group member, decoded from the
/// ConsumerProtocol assignment blob the coordinator keeps per member.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemberAssignment {
    assignments: Vec<TopicAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TopicAssignment {
    topic: String,
    partitions: Vec<i32>,
}

impl MemberAssignment {
    pub fn partitions_for_topic(&self, topic: &str) -> &[i32] {
        self.assignments
            .iter()
            .find(|assignment| assignment.topic == topic)
            .map(|assignment| assignment.partitions.as_slice())
            .unwrap_or_default()
    }
}

/// Decodes the MemberAssignment wire format: a big-endian i16 version, an i32
/// topic count, then per topic a length-prefixed name and an i32 partition id
/// array. Trailing user data is ignored. An empty blob decodes to an empty
/// assignment, which is what the coordinator returns while a group rebalances.
pub fn parse_member_assignment(mut blob: &[u8]) -> Result<MemberAssignment, anyhow::Error> {
    if blob.is_empty() {
        return Ok(MemberAssignment::default());
    }

    if blob.remaining() < 6 {
        bail!("Assignment blob of {} bytes is truncated", blob.remaining())
    }

    let _version = blob.get_i16();
    let topic_count = blob.get_i32();
    if topic_count < 0 {
        bail!("Assignment topic count {} is negative", topic_count)
    }

    let mut assignments = Vec::with_capacity(topic_count as usize);
    for _ in 0..topic_count {
        let topic = read_string(&mut blob)?;

        if blob.remaining() < 4 {
            bail!("Assignment for topic {} is truncated", topic)
        }
        let partition_count = blob.get_i32();
        if partition_count < 0 {
            bail!(
                "Assignment partition count {} for topic {} is negative",
                partition_count,
                topic
            )
        }
        if blob.remaining() < partition_count as usize * 4 {
            bail!(
                "Assignment for topic {} declares {} partitions but only {} bytes remain",
                topic,
                partition_count,
                blob.remaining()
            )
        }

        let mut partitions = Vec::with_capacity(partition_count as usize);
        for _ in 0..partition_count {
            partitions.push(blob.get_i32());
        }

        assignments.push(TopicAssignment { topic, partitions });
    }

    Ok(MemberAssignment { assignments })
}

fn read_string(blob: &mut &[u8]) -> Result<String, anyhow::Error> {
    if blob.remaining() < 2 {
        bail!("Assignment string length prefix is truncated")
    }
    let length = blob.get_i16();
    if length < 0 {
        bail!("Assignment string length {} is negative", length)
    }
    if blob.remaining() < length as usize {
        bail!("Assignment string of {} bytes is truncated", length)
    }

    let bytes = blob.copy_to_bytes(length as usize);

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
