use anyhow::{Context, Result};
use clap::Parser;
use storsys_config::{ClusterConfig, MultiClusterConfig};

/// Print the effective merged configuration as YAML, after all documents have
/// been applied.
#[derive(Debug, Parser)]
pub(crate) struct ShowConfig {
    /// Print only the config of this cluster index. Without it, every
    /// configured cluster is printed.
    #[clap(long = "cluster")]
    cluster: Option<usize>,
}

impl ShowConfig {
    pub(crate) fn run(&self, config: &MultiClusterConfig) -> Result<()> {
        match self.cluster {
            Some(index) => {
                let cluster = config
                    .cluster(index)
                    .context("Unable to select cluster")?;
                print_cluster(cluster)
            }
            None => {
                for index in 0..config.cluster_count() {
                    let cluster = config
                        .cluster(index)
                        .context("Unable to select cluster")?;
                    if config.is_multicluster() {
                        println!("# cluster {}", index);
                    }
                    print_cluster(cluster)?;
                }
                Ok(())
            }
        }
    }
}

fn print_cluster(cluster: &ClusterConfig) -> Result<()> {
    let rendered =
        serde_yaml::to_string(&cluster.to_map()).context("Unable to render configuration")?;
    println!("{}", rendered);
    Ok(())
}
