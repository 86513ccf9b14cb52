use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SecurityProtocol {
    Plaintext,
    Ssl,
}

impl Display for SecurityProtocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityProtocol::Plaintext => write!(f, "plaintext"),
            SecurityProtocol::Ssl => write!(f, "ssl"),
        }
    }
}

impl FromStr for SecurityProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plaintext" => Ok(SecurityProtocol::Plaintext),
            "ssl" => Ok(SecurityProtocol::Ssl),
            other => Err(format!(
                "Unknown security protocol {other}, expected plaintext or ssl"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_protocols_case_insensitively() {
        assert_eq!("plaintext".parse(), Ok(SecurityProtocol::Plaintext));
        assert_eq!("SSL".parse(), Ok(SecurityProtocol::Ssl));
    }

    #[test]
    fn rejects_unknown_protocol() {
        assert!("sasl_ssl".parse::<SecurityProtocol>().is_err());
    }

    #[test]
    fn display_matches_librdkafka_config_values() {
        assert_eq!(SecurityProtocol::Plaintext.to_string(), "plaintext");
        assert_eq!(SecurityProtocol::Ssl.to_string(), "ssl");
    }
}
