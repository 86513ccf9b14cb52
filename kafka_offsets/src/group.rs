mod committed_offset_source;
mod member_assignment;

pub use committed_offset_source::KafkaCommittedOffsetSource;
pub use member_assignment::{parse_member_assignment, MemberAssignment};
