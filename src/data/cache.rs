//! Explicit memo of prepared tables, keyed by source identity.
//!
//! Sources are static for the lifetime of a run, so entries are never
//! invalidated. Failed loads are not cached.

use super::loader::load_and_prepare;
use super::model::PreparedTable;
use crate::source::DataSource;
use crate::utils::error::DataError;
use log::debug;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct DatasetCache {
    tables: HashMap<String, Rc<PreparedTable>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and prepare `source` unless it is already cached
    ///
    /// **Public** - used by commands that render several pages
    pub fn get_or_load(&mut self, source: &DataSource) -> Result<Rc<PreparedTable>, DataError> {
        self.get_or_insert_with(&source.key(), || load_and_prepare(source))
    }

    /// Return the cached table for `key`, calling `load` on a miss
    pub fn get_or_insert_with<F>(&mut self, key: &str, load: F) -> Result<Rc<PreparedTable>, DataError>
    where
        F: FnOnce() -> Result<PreparedTable, DataError>,
    {
        if let Some(table) = self.tables.get(key) {
            debug!("Dataset cache hit: {}", key);
            return Ok(Rc::clone(table));
        }

        debug!("Dataset cache miss: {}", key);
        let table = Rc::new(load()?);
        self.tables.insert(key.to_string(), Rc::clone(&table));

        Ok(table)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tables.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
