use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// A pinned upstream source location.
///
/// Inputs are fetched by the invoking tool, never by the descriptor itself;
/// the descriptor only records where they live and which revision or channel
/// they are pinned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SourceInput {
    /// Location of the upstream source (git repository or tarball).
    pub url: Url,

    /// The pin: exactly one of `channel` or `rev`.
    #[serde(flatten)]
    pub pin: Pin,
}

/// How an input is pinned to a retrievable state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Pin {
    /// A named channel that the upstream advances (e.g. `stable-24.05`).
    Channel(String),
    /// An exact revision identifier (commit hash or tag).
    Rev(String),
}

impl Pin {
    /// The raw channel name or revision string.
    pub fn reference(&self) -> &str {
        match self {
            Pin::Channel(c) => c,
            Pin::Rev(r) => r,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reference().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_channel_pin_toml() {
        let toml = r#"
            url = "https://github.com/NixOS/nixpkgs"
            channel = "nixpkgs-unstable"
        "#;
        let input: SourceInput = toml::from_str(toml).unwrap();
        assert_eq!(input.pin, Pin::Channel("nixpkgs-unstable".to_string()));
        assert_eq!(input.pin.reference(), "nixpkgs-unstable");
    }

    #[test]
    fn test_rev_pin_toml() {
        let toml = r#"
            url = "https://github.com/numtide/flake-utils"
            rev = "11707dc2f618dd54ca8739b309ec4fc024de578b"
        "#;
        let input: SourceInput = toml::from_str(toml).unwrap();
        match &input.pin {
            Pin::Rev(r) => assert_eq!(r, "11707dc2f618dd54ca8739b309ec4fc024de578b"),
            other => panic!("Expected Rev, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_pin_is_empty() {
        assert!(Pin::Channel("  ".to_string()).is_empty());
        assert!(!Pin::Rev("abc123".to_string()).is_empty());
    }
}
