use serde::{Deserialize, Serialize};
use serde_plain::{derive_display_from_serialize, derive_fromstr_from_deserialize};

/// The recognized top-level configuration sections. A config document may not
/// contain any top-level key outside this set; once defaults have been
/// applied, every section's value is a mapping (possibly empty), never null
/// or a scalar.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    /// Settings for the current run: log locations, tool directories, the
    /// kubeconfig used to reach the cluster.
    Run,
    /// The target environment: platform, cluster name and namespace, node
    /// counts.
    EnvData,
    /// Installer and deployment settings.
    Deployment,
    /// Result reporting: email, test case management system.
    Reporting,
    /// Credentials and authentication material references.
    Auth,
    /// Upgrade-run settings.
    Upgrade,
    /// Settings consumed by the cluster provisioning templates.
    Flexy,
    /// Per-component enable/disable switches.
    Components,
}

derive_display_from_serialize!(Section);
derive_fromstr_from_deserialize!(Section);

impl Section {
    /// Every recognized section, in canonical order.
    pub const ALL: [Section; 8] = [
        Section::Run,
        Section::EnvData,
        Section::Deployment,
        Section::Reporting,
        Section::Auth,
        Section::Upgrade,
        Section::Flexy,
        Section::Components,
    ];

    /// Comma-separated list of every recognized section name, for error
    /// messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(Section::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
