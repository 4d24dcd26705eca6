use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use storsys_config::MultiClusterConfig;

/// Check that every configured cluster context is reachable by querying its
/// API server version. Each context switch points `KUBECONFIG` at that
/// cluster's credentials, so the client built here targets the cluster the
/// active context describes.
#[derive(Debug, Parser)]
pub(crate) struct CheckClusters {}

impl CheckClusters {
    pub(crate) async fn run(&self, mut config: MultiClusterConfig) -> Result<()> {
        for index in 0..config.cluster_count() {
            config
                .switch_ctx(index)
                .context("Unable to switch cluster context")?;
            let client = Client::try_default().await.context(format!(
                "Unable to create a client for cluster {}",
                index
            ))?;
            let version = client.apiserver_version().await.context(format!(
                "Unable to reach the API server for cluster {}",
                index
            ))?;
            println!(
                "cluster {}: API server {}.{}",
                index, version.major, version.minor
            );
        }
        Ok(())
    }
}
