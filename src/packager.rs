//! Package identifiers implied by a selection and the install command.
//!
//! [`package_for`] is the single derivation rule shared with the emitter, so
//! every import line names a package that also appears in the package list.

use crate::catalog::{CapabilityOption, Category};
use crate::ordered::OrderedSet;
use crate::selector::MatchedSelection;
use tracing::warn;

/// Package providing the node-construction entry point.
pub const ROOT_PACKAGE: &str = "libp2p";
/// Namespace shared by transport, multiplexer and encryption packages.
pub const PACKAGE_NAMESPACE: &str = "@libp2p";
pub const INSTALL_PREFIX: &str = "npm install";

/// Discovery value served by the local-network package.
pub const LOCAL_DISCOVERY_VALUE: &str = "mdns";
pub const LOCAL_DISCOVERY_PACKAGE: &str = "@libp2p/mdns";
pub const BOOTSTRAP_DISCOVERY_PACKAGE: &str = "@libp2p/bootstrap";

/// Package identifier owning `option` within `category`.
///
/// Transports, multiplexers and encryption live under [`PACKAGE_NAMESPACE`];
/// discovery follows the mdns/bootstrap rule; protocols use the package their
/// row declares. Every built-in protocol row declares one. A protocol row
/// without a declared package is logged and falls back to the namespace form
/// so its import still has a matching package entry.
pub fn package_for(category: Category, option: &CapabilityOption) -> String {
    match category {
        Category::Transport | Category::Multiplexer | Category::Encryption => {
            format!("{PACKAGE_NAMESPACE}/{}", option.value)
        }
        // Two-way rule: anything that is not mdns maps to bootstrap.
        Category::Discovery => {
            if option.value == LOCAL_DISCOVERY_VALUE {
                LOCAL_DISCOVERY_PACKAGE.to_string()
            } else {
                BOOTSTRAP_DISCOVERY_PACKAGE.to_string()
            }
        }
        Category::Protocol => match option.package_name {
            Some(name) => name.to_string(),
            None => {
                warn!(value = option.value, "protocol entry declares no package");
                format!("{PACKAGE_NAMESPACE}/{}", option.value)
            }
        },
    }
}

/// Root package followed by every derived package, first-seen order.
pub fn collect_packages(matched: &MatchedSelection) -> Vec<String> {
    let mut packages = OrderedSet::new();
    packages.insert(ROOT_PACKAGE.to_string());
    for (category, option) in matched.iter() {
        packages.insert(package_for(category, option));
    }
    packages.into_vec()
}

pub fn install_command(packages: &[String]) -> String {
    let mut command = String::from(INSTALL_PREFIX);
    for package in packages {
        command.push(' ');
        command.push_str(package);
    }
    command
}
