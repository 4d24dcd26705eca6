use crate::error::{self, Result};
use crate::multicluster::MultiClusterConfig;
use log::debug;
use serde_json::{Map, Value};
use snafu::ResultExt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A config document argument: a path, optionally scoped to a single cluster
/// with an `INDEX:` prefix (for example `1:cluster-b.yaml`). Unscoped
/// documents apply to every cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileArg {
    pub index: Option<usize>,
    pub path: PathBuf,
}

impl ConfigFileArg {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ConfigFileArg {
            index: None,
            path: path.into(),
        }
    }

    pub fn scoped<P: Into<PathBuf>>(index: usize, path: P) -> Self {
        ConfigFileArg {
            index: Some(index),
            path: path.into(),
        }
    }
}

impl FromStr for ConfigFileArg {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some((prefix, rest)) = s.split_once(':') {
            if let Ok(index) = prefix.parse::<usize>() {
                return Ok(ConfigFileArg::scoped(index, rest));
            }
        }
        Ok(ConfigFileArg::new(s))
    }
}

/// Reads a YAML config document into a section-keyed mapping. An empty or
/// null document yields an empty mapping.
pub fn read_config_file(path: &Path) -> Result<Map<String, Value>> {
    let contents = std::fs::read_to_string(path).context(error::FileReadSnafu { path })?;
    if contents.trim().is_empty() {
        return Ok(Map::new());
    }
    let value: Value = serde_yaml::from_str(&contents).context(error::ParseConfigSnafu { path })?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => error::DocumentNotMappingSnafu { path }.fail(),
    }
}

/// Discovers configuration sources in priority order and builds the
/// process-wide [`MultiClusterConfig`].
///
/// Sources apply later-wins via deep merge: the bundled defaults first, then
/// every config document in the order given, then the cluster document (the
/// one describing an already-deployed cluster) last.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    cluster_count: usize,
    config_files: Vec<ConfigFileArg>,
    cluster_config: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(cluster_count: usize) -> Self {
        ConfigLoader {
            cluster_count,
            config_files: Vec::new(),
            cluster_config: None,
        }
    }

    /// Adds one config document.
    pub fn config_file(mut self, file: ConfigFileArg) -> Self {
        self.config_files.push(file);
        self
    }

    /// Adds config documents, preserving the order given.
    pub fn config_files<I>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = ConfigFileArg>,
    {
        self.config_files.extend(files);
        self
    }

    /// Sets the cluster document, applied after all config documents to the
    /// active (index 0) cluster.
    pub fn cluster_config<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cluster_config = Some(path.into());
        self
    }

    /// Builds the aggregate: bundled defaults per cluster, each config
    /// document in order, then the cluster document.
    pub fn load(&self) -> Result<MultiClusterConfig> {
        let mut config = MultiClusterConfig::new(self.cluster_count)?;
        for file in &self.config_files {
            let doc = read_config_file(&file.path)?;
            match file.index {
                Some(index) => {
                    debug!(
                        "Applying config file '{}' to cluster {}",
                        file.path.display(),
                        index
                    );
                    config.cluster_mut(index)?.update(&doc)?;
                }
                None => {
                    debug!(
                        "Applying config file '{}' to all clusters",
                        file.path.display()
                    );
                    for index in 0..config.cluster_count() {
                        config.cluster_mut(index)?.update(&doc)?;
                    }
                }
            }
        }
        if let Some(path) = &self.cluster_config {
            debug!("Applying cluster config file '{}'", path.display());
            let doc = read_config_file(path)?;
            config.update(&doc)?;
        }
        Ok(config)
    }
}
