use crate::emitter::render_code;
use crate::packager::{collect_packages, install_command};
use crate::selection::{GeneratedResult, Selection};
use crate::selector::MatchedSelection;
use tracing::debug;

/// Produce code, packages and install command for a selection.
///
/// Pure and infallible: unknown identifiers are dropped, empty lists are
/// fine, and the same selection always yields byte-identical output.
pub fn generate(selection: &Selection) -> GeneratedResult {
    let matched = MatchedSelection::resolve(selection);
    let code = render_code(&matched, selection.max_connections);
    let packages = collect_packages(&matched);
    let install_command = install_command(&packages);

    debug!(
        matched = matched.total(),
        packages = packages.len(),
        max_connections = selection.max_connections,
        connection_manager = %selection.connection_manager,
        "generated node configuration"
    );

    GeneratedResult {
        code,
        packages,
        install_command,
    }
}
