//! Installed-format bookkeeping.
//!
//! Backends describe each output format they provide as a `FormatRecord`;
//! hosts install the records they want available and select one by name
//! at job time. Several backends may claim the same name, in which case
//! the highest-quality record wins.

use crate::engine::RenderEngine;
use crate::error::RenderError;
use crate::features::RenderFeatures;
use std::io::Write;

/// Builds a fresh engine instance for one job.
pub type EngineFactory<W> = fn() -> Box<dyn RenderEngine<W>>;

#[derive(Debug)]
pub struct FormatRecord<W: Write> {
    /// Backend-local id; engines serving several formats branch on it.
    pub id: u32,
    /// Name hosts select the format by.
    pub name: &'static str,
    /// Preference among records sharing a name; higher wins.
    pub quality: i32,
    pub engine: EngineFactory<W>,
    pub features: &'static RenderFeatures,
}

impl<W: Write> FormatRecord<W> {
    pub fn create(&self) -> Box<dyn RenderEngine<W>> {
        (self.engine)()
    }
}

#[derive(Default)]
pub struct Registry<W: Write> {
    records: Vec<FormatRecord<W>>,
}

impl<W: Write> Registry<W> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn install(&mut self, record: FormatRecord<W>) {
        log::debug!("installing format {:?} (id {})", record.name, record.id);
        self.records.push(record);
    }

    pub fn install_all(&mut self, records: impl IntoIterator<Item = FormatRecord<W>>) {
        for record in records {
            self.install(record);
        }
    }

    /// Find the preferred record for `name`. Ties on quality keep the
    /// record installed first.
    pub fn find(&self, name: &str) -> Option<&FormatRecord<W>> {
        let mut best: Option<&FormatRecord<W>> = None;
        for record in &self.records {
            if record.name != name {
                continue;
            }
            match best {
                Some(current) if record.quality <= current.quality => {}
                _ => best = Some(record),
            }
        }
        best
    }

    pub fn select(&self, name: &str) -> Result<&FormatRecord<W>, RenderError> {
        self.find(name)
            .ok_or_else(|| RenderError::UnknownFormat(name.to_string()))
    }

    /// Names of all installed formats, sorted and deduplicated.
    pub fn format_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.records.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
