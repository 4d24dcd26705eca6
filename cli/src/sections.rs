use anyhow::Result;
use clap::Parser;
use storsys_config::Section;

/// Print the recognized config section names, one per line. These are the
/// only top-level keys a config document may contain.
#[derive(Debug, Parser)]
pub(crate) struct Sections {}

impl Sections {
    pub(crate) fn run(&self) -> Result<()> {
        for section in Section::ALL {
            println!("{}", section);
        }
        Ok(())
    }
}
