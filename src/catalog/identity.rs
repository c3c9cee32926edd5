use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the five capability tables.
///
/// The declaration order here is the traversal order used everywhere a
/// selection is walked: matching, import collection, package accumulation and
/// section rendering all visit categories in this sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Transport,
    Multiplexer,
    Encryption,
    Discovery,
    Protocol,
}

/// Raised when a category name does not match any table.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unknown capability category '{0}' (expected transport|multiplexer|encryption|discovery|protocol)")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Transport,
        Category::Multiplexer,
        Category::Encryption,
        Category::Discovery,
        Category::Protocol,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Multiplexer => "multiplexer",
            Category::Encryption => "encryption",
            Category::Discovery => "discovery",
            Category::Protocol => "protocol",
        }
    }

    /// Field name of this category in the selection and in the generated
    /// node options.
    pub fn selection_field(&self) -> &'static str {
        match self {
            Category::Transport => "transports",
            Category::Multiplexer => "streamMuxers",
            Category::Encryption => "connectionEncryption",
            Category::Discovery => "peerDiscovery",
            Category::Protocol => "protocols",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "transport" | "transports" => Ok(Category::Transport),
            "multiplexer" | "muxer" | "streamMuxers" => Ok(Category::Multiplexer),
            "encryption" | "connectionEncryption" => Ok(Category::Encryption),
            "discovery" | "peerDiscovery" => Ok(Category::Discovery),
            "protocol" | "protocols" => Ok(Category::Protocol),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
