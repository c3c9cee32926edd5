//! Source text for the generated `createNode` module.
//!
//! Output layout:
//!
//! 1. Import declarations, deduplicated and sorted, then a blank line.
//! 2. `createNode` wrapping a `createLibp2p({ ... })` call whose options are
//!    rendered by [`template`]: one array section per list-valued category
//!    (omitted when empty), a `services` object for protocols, and an
//!    always-present `connectionManager` record.
//! 3. A fixed usage comment.

pub mod template;

use crate::catalog::{CapabilityOption, Category};
use crate::packager::{ROOT_PACKAGE, package_for};
use crate::selector::MatchedSelection;
use std::collections::BTreeSet;
use template::{Section, render_sections};

const ROOT_IMPORT_SYMBOL: &str = "createLibp2p";

const FUNCTION_OPEN: &str = "export async function createNode() {\n  const node = await createLibp2p({\n";
const FUNCTION_CLOSE: &str = "  })\n\n  return node\n}\n\n";
const USAGE_EXAMPLE: &str = "// Usage example:\n\
// const node = await createNode()\n\
// await node.start()\n\
// console.log(\"Libp2p node started with ID:\", node.peerId.toString())";

pub fn import_declaration(symbol: &str, package: &str) -> String {
    format!("import {{ {symbol} }} from '{package}'")
}

/// Lower connection watermark derived from the ceiling: `floor(max / 4)`.
///
/// Floor division holds for negative ceilings too, which are passed through
/// unvalidated.
pub fn min_connections(max_connections: i64) -> i64 {
    max_connections.div_euclid(4)
}

/// Import lines for the root entry point and every matched entry, sorted.
pub fn collect_imports(matched: &MatchedSelection) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();
    imports.insert(import_declaration(ROOT_IMPORT_SYMBOL, ROOT_PACKAGE));
    for (category, option) in matched.iter() {
        imports.insert(import_declaration(
            option.import_symbol,
            &package_for(category, option),
        ));
    }
    imports
}

fn config_lines(options: &[&'static CapabilityOption]) -> Vec<String> {
    options
        .iter()
        .map(|option| option.config_expression.to_string())
        .collect()
}

/// Protocol entries keyed by value. A repeated key keeps its first position
/// and takes the later expression.
fn service_entries(options: &[&'static CapabilityOption]) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = Vec::new();
    for option in options {
        let expression = option.config_expression.to_string();
        match entries.iter_mut().find(|(key, _)| key == option.value) {
            Some(entry) => entry.1 = expression,
            None => entries.push((option.value.to_string(), expression)),
        }
    }
    entries
}

/// Options-object sections in render order.
pub fn node_sections(matched: &MatchedSelection, max_connections: i64) -> Vec<Section> {
    let mut sections: Vec<Section> = [
        Category::Transport,
        Category::Multiplexer,
        Category::Encryption,
        Category::Discovery,
    ]
    .into_iter()
    .map(|category| {
        Section::array(
            category.selection_field(),
            config_lines(matched.get(category)),
        )
    })
    .collect();

    sections.push(Section::object(
        "services",
        service_entries(matched.get(Category::Protocol)),
    ));
    sections.push(Section::record(
        "connectionManager",
        vec![
            ("maxConnections".to_string(), max_connections.to_string()),
            (
                "minConnections".to_string(),
                min_connections(max_connections).to_string(),
            ),
        ],
    ));
    sections
}

/// Render the complete module text.
pub fn render_code(matched: &MatchedSelection, max_connections: i64) -> String {
    let imports = collect_imports(matched);
    let mut code = imports.into_iter().collect::<Vec<_>>().join("\n");
    code.push_str("\n\n");
    code.push_str(FUNCTION_OPEN);
    code.push_str(&render_sections(&node_sections(matched, max_connections)));
    code.push_str(FUNCTION_CLOSE);
    code.push_str(USAGE_EXAMPLE);
    code
}
