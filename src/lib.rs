//! Shared library for the p2p-wizard generator.
//!
//! The crate turns a [`Selection`] of libp2p capabilities into ready-to-paste
//! node construction code, the packages that code imports, and an install
//! command. [`generate`] is the whole contract; the other modules are its
//! parts (catalog lookup, selection, rendering, packaging) plus the JSON
//! request boundary and the file scaffolding helper used by the binary.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub mod api;
pub mod catalog;
pub mod emitter;
pub mod engine;
pub mod logging;
pub mod ordered;
pub mod packager;
pub mod scaffold;
pub mod selection;
pub mod selector;

pub use api::{ApiResponse, RequestError, handle_generate_request};
pub use catalog::{CATALOG, CapabilityOption, Catalog, Category};
pub use engine::generate;
pub use ordered::OrderedSet;
pub use packager::{INSTALL_PREFIX, ROOT_PACKAGE};
pub use selection::{GeneratedResult, Selection};
pub use selector::MatchedSelection;

/// Split comma- or whitespace-delimited lists into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Read raw input bytes from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Load a JSON selection file.
pub fn load_selection_from_path(path: &Path) -> Result<Selection> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing selection {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn split_list_accepts_commas_and_spaces() {
        assert_eq!(split_list("tcp, quic  webrtc,,"), vec!["tcp", "quic", "webrtc"]);
        assert!(split_list(" , ").is_empty());
        assert_eq!(split_list("\tping,\ndht "), vec!["ping", "dht"]);
    }

    #[test]
    fn load_selection_reports_path_on_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"transports\": 1}}").unwrap();
        let err = load_selection_from_path(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing selection"));
    }

    #[test]
    fn load_selection_reads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"transports":["tcp"],"streamMuxers":[],"connectionEncryption":[],"peerDiscovery":[],"protocols":[],"maxConnections":8}}"#
        )
        .unwrap();
        let selection = load_selection_from_path(file.path()).unwrap();
        assert_eq!(selection.transports, vec!["tcp"]);
        assert_eq!(selection.max_connections, 8);
    }
}
