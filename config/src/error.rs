use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// The error type for configuration loading and manipulation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "Cluster index {} is out of range for {} configured cluster(s)",
        index,
        count
    ))]
    ClusterIndex { index: usize, count: usize },

    #[snafu(display("Bundled default config is malformed: {}", source))]
    DefaultsParse { source: serde_yaml::Error },

    #[snafu(display(
        "Config file '{}' must contain a mapping of sections at the top level",
        path.display()
    ))]
    DocumentNotMapping { path: PathBuf },

    #[snafu(display("Unable to read config file '{}': {}", path.display(), source))]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Unable to parse config file '{}': {}", path.display(), source))]
    ParseConfig {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[snafu(display(
        "Config section '{}' must be a mapping or null, not a scalar or list",
        section
    ))]
    SectionNotMapping { section: String },

    #[snafu(display(
        "Unrecognized config section '{}'. Valid sections are: {}",
        section,
        valid
    ))]
    UnknownSection { section: String, valid: String },
}
