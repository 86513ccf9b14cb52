use std::collections::HashMap;

use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use rdkafka::{Offset, TopicPartitionList};
use tracing::{info, trace, warn};

use crate::connection_settings::ConnectionSettings;
use crate::consumer::{fetch_partition_ids, ConsumerWrapper};
use crate::group::parse_member_assignment;
use crate::sources::{CommittedOffset, CommittedOffsetSource};

/// Coordination-side view read from the cluster itself: committed offsets
/// through the group coordinator, partition owners from the group member list.
pub struct KafkaCommittedOffsetSource {
    connection_settings: ConnectionSettings,
}

impl KafkaCommittedOffsetSource {
    pub fn new(connection_settings: ConnectionSettings) -> Self {
        Self {
            connection_settings,
        }
    }

    /// Maps partition ids to the id of the group member each one is assigned
    /// to. A group unknown to the cluster or speaking a non-consumer protocol
    /// yields no owners rather than an error.
    fn fetch_partition_owners(
        &self,
        consumer: &ConsumerWrapper,
        group: &str,
        topic: &str,
    ) -> Result<HashMap<i32, String>, anyhow::Error> {
        let timeout = self.connection_settings.timeout;

        let group_list = consumer
            .fetch_group_list(Some(group), Timeout::After(timeout))
            .context("While fetching the group list")?;

        let Some(group_info) = group_list.groups().iter().find(|g| g.name() == group) else {
            warn!("Group {} is not known to any broker, reporting no owners", group);
            return Ok(HashMap::new());
        };

        info!("Group {} is in state {}", group, group_info.state());

        if group_info.protocol_type() != "consumer" {
            warn!(
                "Group {} has protocol type {}, reporting no owners",
                group,
                group_info.protocol_type()
            );
            return Ok(HashMap::new());
        }

        let mut owners = HashMap::new();
        for member in group_info.members() {
            let Some(blob) = member.assignment() else {
                continue;
            };
            let assignment = parse_member_assignment(blob).with_context(|| {
                format!("While decoding the assignment of member {}", member.id())
            })?;

            for partition in assignment.partitions_for_topic(topic) {
                owners.insert(*partition, member.id().to_owned());
            }
        }

        trace!("Group {} owners for topic {}: {:?}", group, topic, owners);

        Ok(owners)
    }
}

impl CommittedOffsetSource for KafkaCommittedOffsetSource {
    /// Fetches one committed-offset record per partition of the topic. The
    /// partition set comes from broker metadata; partitions the group has
    /// never committed for appear with an undefined offset.
    fn fetch_committed(&self, group: &str, topic: &str) -> Result<Vec<CommittedOffset>, anyhow::Error> {
        let timeout = self.connection_settings.timeout;

        let consumer = ConsumerWrapper::create_for_group(&self.connection_settings, group)
            .context("While creating a group consumer")?;

        let partition_ids = fetch_partition_ids(&consumer, topic, timeout)?;

        let mut tpl = TopicPartitionList::new();
        for partition in &partition_ids {
            tpl.add_partition_offset(topic, *partition, Offset::Invalid)
                .context("While adding a partition to the offsets request")?;
        }

        let committed_list = consumer
            .committed_offsets(tpl, Timeout::After(timeout))
            .context("While fetching committed offsets")?;

        let mut owners = self.fetch_partition_owners(&consumer, group, topic)?;

        let committed = committed_list
            .elements_for_topic(topic)
            .iter()
            .map(|element| CommittedOffset {
                partition: element.partition(),
                offset: element
                    .offset()
                    .to_raw()
                    .and_then(|offset| if offset >= 0 { Some(offset) } else { None }),
                owner: owners.remove(&element.partition()),
            })
            .collect::<Vec<_>>();

        Ok(committed)
    }
}
