use clap::Parser;
use kafka_offsets::consumer::SecurityProtocol;

/// Reports the committed offset, log boundaries, lag and owning consumer for
/// every partition of a topic, as seen by one consumer group.
#[derive(Debug, Parser)]
#[command(name = "kafka-offsets", version, about)]
pub struct OffsetsArgs {
    /// Comma separated list of bootstrap brokers, host:port
    #[arg(long, env = "KAFKA_BROKERS", value_delimiter = ',')]
    pub brokers: Option<Vec<String>>,

    /// Consumer group id to inspect
    #[arg(long, env = "KAFKA_GROUP_ID")]
    pub group_id: Option<String>,

    /// Topic to report offsets for
    #[arg(long, env = "KAFKA_TOPIC")]
    pub topic: Option<String>,

    /// Timeout in milliseconds for every request to the cluster
    #[arg(long, default_value_t = 1000)]
    pub timeout: u64,

    /// Transport protocol used to reach the brokers
    #[arg(long, default_value_t = SecurityProtocol::Plaintext)]
    pub security_protocol: SecurityProtocol,
}
