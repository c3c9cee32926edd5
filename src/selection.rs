//! Request and response shapes for the generator.
//!
//! Field names follow the JSON contract (camelCase) so a request body can be
//! deserialized straight into [`Selection`] and a [`GeneratedResult`] can be
//! returned to the caller without remapping.

use crate::catalog::Category;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Connection ceiling used when the caller does not pick one.
pub const DEFAULT_MAX_CONNECTIONS: i64 = 100;
/// Connection-manager label used when the caller does not pick one.
pub const DEFAULT_CONNECTION_MANAGER: &str = "basic";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Requested capability identifiers plus the two scalar settings.
///
/// The five lists are required; requests missing one are malformed. The lists
/// may hold duplicates or identifiers the catalog does not know.
pub struct Selection {
    pub transports: Vec<String>,
    pub stream_muxers: Vec<String>,
    pub connection_encryption: Vec<String>,
    pub peer_discovery: Vec<String>,
    pub protocols: Vec<String>,
    /// Inserted into the generated code verbatim. Negative values are not
    /// rejected; any integral JSON number in the `i64` range is accepted, so
    /// `100.0` reads as 100.
    #[serde(deserialize_with = "integral_i64")]
    pub max_connections: i64,
    /// Carried through but not interpreted by the generator. Missing and
    /// `null` both read as empty.
    #[serde(default, deserialize_with = "string_or_null")]
    pub connection_manager: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            transports: Vec::new(),
            stream_muxers: Vec::new(),
            connection_encryption: Vec::new(),
            peer_discovery: Vec::new(),
            protocols: Vec::new(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connection_manager: DEFAULT_CONNECTION_MANAGER.to_string(),
        }
    }
}

impl Selection {
    /// Requested identifiers for one category, in request order.
    pub fn requested(&self, category: Category) -> &[String] {
        match category {
            Category::Transport => &self.transports,
            Category::Multiplexer => &self.stream_muxers,
            Category::Encryption => &self.connection_encryption,
            Category::Discovery => &self.peer_discovery,
            Category::Protocol => &self.protocols,
        }
    }

    pub fn requested_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Transport => &mut self.transports,
            Category::Multiplexer => &mut self.stream_muxers,
            Category::Encryption => &mut self.connection_encryption,
            Category::Discovery => &mut self.peer_discovery,
            Category::Protocol => &mut self.protocols,
        }
    }
}

fn integral_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    match number.as_f64() {
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(D::Error::custom(format!(
            "expected an integer in the i64 range, got {number}"
        ))),
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Everything produced for one selection.
pub struct GeneratedResult {
    pub code: String,
    /// Unique package identifiers in first-seen order; the root package is
    /// always first.
    pub packages: Vec<String>,
    pub install_command: String,
}
