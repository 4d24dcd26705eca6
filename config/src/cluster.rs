use crate::error::{self, Result};
use crate::merge::merge_maps;
use crate::section::Section;
use lazy_static::lazy_static;
use serde_json::{Map, Value};
use snafu::{OptionExt, ResultExt};
use std::collections::BTreeMap;

/// The bundled baseline configuration document, compiled into the crate.
const DEFAULT_CONFIG: &str = include_str!("default_config.yaml");

lazy_static! {
    static ref EMPTY_SECTION: Map<String, Value> = Map::new();
}

/// The complete set of section mappings describing one target cluster.
///
/// A new instance starts from the bundled default document; user-supplied
/// partial documents are layered on top with [`ClusterConfig::update`], which
/// deep-merges into the existing section mappings so defaults survive
/// wherever an override omits a key.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterConfig {
    sections: BTreeMap<Section, Map<String, Value>>,
}

impl ClusterConfig {
    /// Creates a cluster config holding the bundled defaults.
    pub fn new() -> Result<Self> {
        let mut config = ClusterConfig {
            sections: BTreeMap::new(),
        };
        config.reset()?;
        Ok(config)
    }

    /// Parses the bundled default document and returns it as a fresh,
    /// independently owned copy. The embedded resource is re-parsed on every
    /// call so callers can mutate the result freely, e.g. to diff live state
    /// against a pristine baseline.
    pub fn default_document() -> Result<BTreeMap<Section, Map<String, Value>>> {
        serde_yaml::from_str(DEFAULT_CONFIG).context(error::DefaultsParseSnafu)
    }

    /// Restores every section to the bundled defaults, discarding any
    /// overrides applied so far. Fails only if the bundled document is
    /// malformed, which no run can recover from.
    pub fn reset(&mut self) -> Result<()> {
        self.sections = Section::ALL.iter().map(|s| (*s, Map::new())).collect();
        for (section, defaults) in Self::default_document()? {
            merge_maps(self.sections.entry(section).or_default(), &defaults);
        }
        Ok(())
    }

    /// Applies a user-supplied partial document. Every top-level key must be
    /// a recognized section name and its value a mapping, or null to skip the
    /// section. The whole document is validated before anything is merged, so
    /// a rejected document changes nothing.
    pub fn update(&mut self, doc: &Map<String, Value>) -> Result<()> {
        let mut updates = Vec::new();
        for (key, value) in doc {
            let section = key
                .parse::<Section>()
                .ok()
                .context(error::UnknownSectionSnafu {
                    section: key.clone(),
                    valid: Section::valid_names(),
                })?;
            match value {
                Value::Null => continue,
                Value::Object(map) => updates.push((section, map)),
                _ => {
                    return error::SectionNotMappingSnafu {
                        section: key.clone(),
                    }
                    .fail()
                }
            }
        }
        for (section, map) in updates {
            merge_maps(self.sections.entry(section).or_default(), map);
        }
        Ok(())
    }

    /// The live mapping for `section`.
    pub fn section(&self, section: Section) -> &Map<String, Value> {
        self.sections.get(&section).unwrap_or(&EMPTY_SECTION)
    }

    /// Mutable access to the mapping for `section`.
    pub fn section_mut(&mut self, section: Section) -> &mut Map<String, Value> {
        self.sections.entry(section).or_default()
    }

    /// Convenience lookup of a top-level key within a section.
    pub fn get(&self, section: Section, key: &str) -> Option<&Value> {
        self.section(section).get(key)
    }

    /// Snapshot of the whole config as a mapping keyed by section name.
    pub fn to_map(&self) -> Map<String, Value> {
        self.sections
            .iter()
            .map(|(section, map)| (section.to_string(), Value::Object(map.clone())))
            .collect()
    }
}
