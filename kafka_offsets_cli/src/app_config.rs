use std::time::Duration;

use kafka_offsets::connection_settings::ConnectionSettings;

use crate::args::OffsetsArgs;
use crate::error::CliError;

/// Fully resolved inputs of one invocation. Flags and their environment
/// fallbacks are merged by clap; this step checks that every required input
/// ended up present and reports all the missing ones at once.
#[derive(Debug)]
pub struct AppConfig {
    pub connection_settings: ConnectionSettings,
    pub group: String,
    pub topic: String,
}

impl AppConfig {
    pub fn from_args(args: OffsetsArgs) -> Result<Self, CliError> {
        let mut missing = Vec::new();

        let mut brokers = args.brokers.unwrap_or_default();
        brokers.retain(|broker| !broker.is_empty());
        if brokers.is_empty() {
            missing.push("A broker connection string is required (--brokers or KAFKA_BROKERS)");
        }

        let group = args.group_id.unwrap_or_default();
        if group.is_empty() {
            missing.push("A consumer group id is required (--group-id or KAFKA_GROUP_ID)");
        }

        let topic = args.topic.unwrap_or_default();
        if topic.is_empty() {
            missing.push("A topic name is required (--topic or KAFKA_TOPIC)");
        }

        if !missing.is_empty() {
            return Err(CliError::Usage(missing.join("\n")));
        }

        Ok(Self {
            connection_settings: ConnectionSettings {
                brokers,
                security_protocol: args.security_protocol,
                timeout: Duration::from_millis(args.timeout),
            },
            group,
            topic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use kafka_offsets::consumer::SecurityProtocol;

    fn args_with(brokers: Option<Vec<String>>, group_id: Option<String>, topic: Option<String>) -> OffsetsArgs {
        OffsetsArgs {
            brokers,
            group_id,
            topic,
            timeout: 1000,
            security_protocol: SecurityProtocol::Plaintext,
        }
    }

    #[test]
    fn resolves_a_full_set_of_flags() {
        let args = OffsetsArgs::parse_from([
            "kafka-offsets",
            "--brokers",
            "b1:9092,b2:9092",
            "--group-id",
            "g1",
            "--topic",
            "t1",
        ]);

        let config = AppConfig::from_args(args).unwrap();

        assert_eq!(
            config.connection_settings.brokers,
            vec!["b1:9092".to_owned(), "b2:9092".to_owned()]
        );
        assert_eq!(config.connection_settings.timeout, Duration::from_millis(1000));
        assert_eq!(
            config.connection_settings.security_protocol,
            SecurityProtocol::Plaintext
        );
        assert_eq!(config.group, "g1");
        assert_eq!(config.topic, "t1");
    }

    #[test]
    fn timeout_flag_overrides_the_default() {
        let args = OffsetsArgs::parse_from([
            "kafka-offsets",
            "--brokers",
            "b1:9092",
            "--group-id",
            "g1",
            "--topic",
            "t1",
            "--timeout",
            "250",
        ]);

        let config = AppConfig::from_args(args).unwrap();

        assert_eq!(config.connection_settings.timeout, Duration::from_millis(250));
    }

    #[test]
    fn reports_every_missing_input_at_once() {
        let args = args_with(None, None, None);

        let error = AppConfig::from_args(args).unwrap_err();

        let CliError::Usage(message) = error else {
            panic!("expected a usage error");
        };
        assert!(message.contains("A broker connection string is required"));
        assert!(message.contains("A consumer group id is required"));
        assert!(message.contains("A topic name is required"));
        assert_eq!(message.lines().count(), 3);
    }

    #[test]
    fn blank_broker_entries_do_not_satisfy_the_requirement() {
        let args = args_with(
            Some(vec![String::new()]),
            Some("g1".to_owned()),
            Some("t1".to_owned()),
        );

        let error = AppConfig::from_args(args).unwrap_err();

        let CliError::Usage(message) = error else {
            panic!("expected a usage error");
        };
        assert!(message.contains("A broker connection string is required"));
        assert!(!message.contains("A consumer group id is required"));
    }
}
