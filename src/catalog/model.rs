//! Catalog entry type.
//!
//! Entries are `'static` data: the tables in [`crate::catalog::tables`] are
//! compiled into the binary and handed out by reference, so nothing downstream
//! ever owns or mutates a catalog row.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// One pluggable networking component and how generated code refers to it.
pub struct CapabilityOption {
    /// Short identifier, unique within its category. Selections refer to
    /// entries by this value.
    pub value: &'static str,
    /// Name bound by the generated import declaration.
    pub import_symbol: &'static str,
    /// Literal snippet instantiating the capability.
    pub config_expression: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Explicit package for protocol entries. Other categories derive their
    /// package from `value` (see [`crate::packager::package_for`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<&'static str>,
}

impl CapabilityOption {
    pub(crate) const fn new(
        value: &'static str,
        import_symbol: &'static str,
        config_expression: &'static str,
        display_name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            value,
            import_symbol,
            config_expression,
            display_name,
            description,
            package_name: None,
        }
    }

    pub(crate) const fn with_package(mut self, package_name: &'static str) -> Self {
        self.package_name = Some(package_name);
        self
    }
}
