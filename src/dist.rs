//! Distribution naming.
//!
//! Product names, the distributor, and the fixed table of components whose
//! versions are reported for a packaged install.

/// Name of the overall product.
pub const WORKSTATION_PRODUCT: &str = "Chef Workstation";

/// Company that ships the platform-specific packages.
pub const DISTRIBUTOR_NAME: &str = "Chef Software Inc.";

/// Manifest key holding the overall product build version.
pub const BUILD_VERSION_KEY: &str = "build_version";

/// Absolute path of the ruby embedded in a packaged install.
pub const EMBEDDED_RUBY_PATH: &str = "/opt/chef-workstation/embedded/bin/ruby";

pub const CLIENT_PRODUCT: &str = "Chef Infra Client";
pub const CLIENT_GEM: &str = "chef";
pub const INSPEC_PRODUCT: &str = "Chef InSpec";
pub const INSPEC_GEM: &str = "inspec";
pub const CLI_PRODUCT: &str = "Chef CLI";
pub const CLI_GEM: &str = "chef-cli";
pub const HAB_PRODUCT: &str = "Chef Habitat";
pub const HAB_SOFTWARE_NAME: &str = "hab";

/// A reported component: how it is shown and how it is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Human-readable product name.
    pub display_name: &'static str,
    /// Key used in the manifests.
    pub key: &'static str,
}

/// Components reported after the product version, in output order.
pub const COMPONENTS: &[Component] = &[
    Component {
        display_name: CLIENT_PRODUCT,
        key: CLIENT_GEM,
    },
    Component {
        display_name: INSPEC_PRODUCT,
        key: INSPEC_GEM,
    },
    Component {
        display_name: CLI_PRODUCT,
        key: CLI_GEM,
    },
    Component {
        display_name: HAB_PRODUCT,
        key: HAB_SOFTWARE_NAME,
    },
    Component {
        display_name: "Test Kitchen",
        key: "test-kitchen",
    },
    Component {
        display_name: "Cookstyle",
        key: "cookstyle",
    },
];

/// Message shown when the running binary is not part of a packaged install.
pub fn not_packaged_message() -> String {
    format!(
        "{} has not been installed via the platform-specific package provided by {} Version information is not available.",
        WORKSTATION_PRODUCT, DISTRIBUTOR_NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_components_are_reported() {
        assert_eq!(COMPONENTS.len(), 6);
    }

    #[test]
    fn component_keys_are_unique() {
        let keys: HashSet<_> = COMPONENTS.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), COMPONENTS.len());
    }

    #[test]
    fn habitat_uses_software_name() {
        let hab = COMPONENTS
            .iter()
            .find(|c| c.display_name == "Chef Habitat")
            .unwrap();
        assert_eq!(hab.key, "hab");
    }

    #[test]
    fn not_packaged_message_names_product_and_distributor() {
        let msg = not_packaged_message();
        assert!(msg.starts_with("Chef Workstation has not been installed"));
        assert!(msg.contains("Chef Software Inc."));
        assert!(msg.ends_with("Version information is not available."));
    }
}
