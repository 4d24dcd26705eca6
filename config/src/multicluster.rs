use crate::cluster::ClusterConfig;
use crate::error::{self, Result};
use crate::section::Section;
use log::debug;
use serde_json::{Map, Value};
use snafu::{ensure, OptionExt};
use std::env;

/// The environment variable external Kubernetes tooling reads to locate
/// cluster credentials. Switching the active context overwrites it.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// An ordered collection of [`ClusterConfig`]s with one active context.
///
/// The active context determines which cluster's sections ambient readers
/// observe; every accessor resolves the current index on the call, so a
/// context switch is immediately visible to all subsequent reads. Switching
/// also points [`KUBECONFIG_ENV`] at the active cluster's `RUN.kubeconfig`
/// entry (when set), which is what redirects `oc` and Kubernetes client
/// invocations to the right cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiClusterConfig {
    clusters: Vec<ClusterConfig>,
    index: usize,
    multicluster: bool,
}

impl MultiClusterConfig {
    /// Creates `cluster_count` freshly-defaulted cluster configs (at least
    /// one) with cluster 0 active.
    pub fn new(cluster_count: usize) -> Result<Self> {
        let count = cluster_count.max(1);
        let mut clusters = Vec::with_capacity(count);
        for _ in 0..count {
            clusters.push(ClusterConfig::new()?);
        }
        let mut config = MultiClusterConfig {
            clusters,
            index: 0,
            multicluster: count > 1,
        };
        config.activate(0);
        Ok(config)
    }

    /// Replaces every cluster config with fresh defaults and reactivates
    /// cluster 0. Any overrides applied before this call are lost; apply
    /// them again afterwards.
    pub fn init_cluster_configs(&mut self, cluster_count: usize) -> Result<()> {
        *self = Self::new(cluster_count)?;
        Ok(())
    }

    /// Makes cluster `index` the active context.
    pub fn switch_ctx(&mut self, index: usize) -> Result<()> {
        ensure!(
            index < self.clusters.len(),
            error::ClusterIndexSnafu {
                index,
                count: self.clusters.len(),
            }
        );
        self.activate(index);
        Ok(())
    }

    /// Switches back to cluster 0.
    pub fn reset_ctx(&mut self) {
        self.activate(0);
    }

    fn activate(&mut self, index: usize) {
        self.index = index;
        match self
            .active()
            .get(Section::Run, "kubeconfig")
            .and_then(Value::as_str)
        {
            Some(kubeconfig) => {
                debug!(
                    "Activating cluster {} with kubeconfig '{}'",
                    index, kubeconfig
                );
                env::set_var(KUBECONFIG_ENV, kubeconfig);
            }
            None => debug!("Activating cluster {}", index),
        }
    }

    /// The active cluster's config.
    pub fn active(&self) -> &ClusterConfig {
        &self.clusters[self.index]
    }

    /// Mutable access to the active cluster's config.
    pub fn active_mut(&mut self) -> &mut ClusterConfig {
        &mut self.clusters[self.index]
    }

    /// The config of cluster `index`, active or not.
    pub fn cluster(&self, index: usize) -> Result<&ClusterConfig> {
        let count = self.clusters.len();
        self.clusters
            .get(index)
            .context(error::ClusterIndexSnafu { index, count })
    }

    /// Mutable access to the config of cluster `index`, active or not.
    pub fn cluster_mut(&mut self, index: usize) -> Result<&mut ClusterConfig> {
        let count = self.clusters.len();
        self.clusters
            .get_mut(index)
            .context(error::ClusterIndexSnafu { index, count })
    }

    /// The active cluster's mapping for `section`, resolved on every call.
    pub fn section(&self, section: Section) -> &Map<String, Value> {
        self.active().section(section)
    }

    /// Applies a partial document to the active cluster.
    pub fn update(&mut self, doc: &Map<String, Value>) -> Result<()> {
        self.active_mut().update(doc)
    }

    /// Snapshot of the active cluster's config keyed by section name.
    pub fn to_map(&self) -> Map<String, Value> {
        self.active().to_map()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Whether this run spans more than one cluster.
    pub fn is_multicluster(&self) -> bool {
        self.multicluster
    }
}
