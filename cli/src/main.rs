/*!

This is the command line interface for building and inspecting the storsys
multi-cluster configuration.

!*/

mod check_clusters;
mod sections;
mod show_config;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use std::path::PathBuf;
use storsys_config::{ConfigFileArg, ConfigLoader};

/// The command line interface for the storsys multi-cluster configuration
/// system.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    /// Path to a config document with section overrides. May be repeated; documents apply in the
    /// order given. Prefix a path with a cluster index (`1:overrides.yaml`) to scope the document
    /// to that cluster.
    #[clap(long = "conf")]
    conf: Vec<ConfigFileArg>,
    /// Path to a document describing an existing cluster, applied after all `--conf` documents.
    #[clap(long = "cluster-conf")]
    cluster_conf: Option<PathBuf>,
    /// Number of independently configured clusters for this run.
    #[clap(long = "cluster-count", default_value = "1")]
    cluster_count: usize,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Check that every configured cluster context is reachable.
    CheckClusters(check_clusters::CheckClusters),
    /// List the recognized config section names.
    Sections(sections::Sections),
    /// Print the effective merged configuration.
    ShowConfig(show_config::ShowConfig),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let Args {
        conf,
        cluster_conf,
        cluster_count,
        command,
        ..
    } = args;
    let mut loader = ConfigLoader::new(cluster_count).config_files(conf);
    if let Some(path) = cluster_conf {
        loader = loader.cluster_config(path);
    }
    match command {
        Command::CheckClusters(check_clusters) => {
            let config = loader
                .load()
                .context("Unable to build cluster configuration")?;
            check_clusters.run(config).await
        }
        Command::Sections(sections) => sections.run(),
        Command::ShowConfig(show_config) => {
            let config = loader
                .load()
                .context("Unable to build cluster configuration")?;
            show_config.run(&config)
        }
    }
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate and the config
            // library.
            Builder::new()
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("storsys_config"), level)
                .init();
        }
    }
}
