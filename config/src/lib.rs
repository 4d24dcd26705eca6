/*!

This library provides the layered, multi-cluster configuration system for the
storsys storage test framework.

Configuration is organized into a fixed set of named [`Section`]s, each a
hierarchical YAML mapping. A [`ClusterConfig`] holds one mapping per section
for a single target cluster, seeded from the bundled default document and then
layered with user-supplied override documents via deep merge. A
[`MultiClusterConfig`] holds one `ClusterConfig` per configured cluster and an
active context that can be switched between them; switching redirects external
Kubernetes tooling by pointing `KUBECONFIG` at the active cluster's
credentials. The [`ConfigLoader`] discovers configuration sources in priority
order (bundled defaults, repeated `--conf` documents, a final `--cluster-conf`
document) and builds the aggregate.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use cluster::ClusterConfig;
pub use error::{Error, Result};
pub use loader::{read_config_file, ConfigFileArg, ConfigLoader};
pub use merge::{merge_maps, merge_values};
pub use multicluster::{MultiClusterConfig, KUBECONFIG_ENV};
pub use section::Section;

mod cluster;
mod error;
mod loader;
mod merge;
mod multicluster;
mod section;
