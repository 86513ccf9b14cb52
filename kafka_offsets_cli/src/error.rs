use thiserror::Error;

/// Exit code for a command line usage error, from BSD sysexits.
pub const EX_USAGE: u8 = 64;

/// Exit code for a failing or unreachable upstream service, from BSD sysexits.
pub const EX_UNAVAILABLE: u8 = 69;

/// Failures of one invocation, split by who is at fault: the command line that
/// was given, or the cluster that was asked.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Runtime(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => EX_USAGE,
            CliError::Runtime(_) => EX_UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn usage_errors_map_to_the_usage_exit_code() {
        let error = CliError::Usage("A topic name is required".to_owned());

        assert_eq!(error.exit_code(), 64);
    }

    #[test]
    fn runtime_errors_map_to_the_unavailable_exit_code() {
        let error = CliError::from(anyhow!("Broker did not answer"));

        assert_eq!(error.exit_code(), 69);
    }
}
