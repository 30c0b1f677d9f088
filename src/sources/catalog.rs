//! The menu orders are drawn from.
//!
//! A catalog file is a JSON array of records:
//!
//! ```json
//! [
//!   { "name": "Banana Split", "temp": "frozen", "shelfLife": 20, "decayRate": 0.63 },
//!   { "name": "McFlury", "temp": "frozen", "shelfLife": 375, "decayRate": 0.4 }
//! ]
//! ```
//!
//! Records that fail to parse or validate are logged and skipped. A catalog with
//! nothing left is an error.

use crate::model::{OrderCreate, OrderError};
use rand::Rng;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog is not a JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no usable entries")]
    Empty,
}

/// One catalog record as written on disk. `temp` stays a string until it is
/// checked against the known temperature classes.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    name: String,
    temp: String,
    #[serde(rename = "shelfLife")]
    shelf_life: u32,
    #[serde(rename = "decayRate")]
    decay_rate: f64,
}

impl CatalogRecord {
    fn into_order_create(self) -> Result<OrderCreate, OrderError> {
        Ok(OrderCreate {
            name: self.name,
            temperature: self.temp.parse()?,
            shelf_life: self.shelf_life,
            decay_rate: self.decay_rate,
        })
    }
}

/// A non-empty list of validated order templates.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<OrderCreate>,
}

impl Catalog {
    /// Keeps the entries that validate.
    pub fn new(entries: Vec<OrderCreate>) -> Result<Self, CatalogError> {
        let entries: Vec<_> = entries
            .into_iter()
            .filter(|entry| match entry.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(name = %entry.name, error = %e, "Skipping invalid catalog entry");
                    false
                }
            })
            .collect();
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        info!(path = %path.display(), entries = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(text)?;
        let entries = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let record = serde_json::from_value::<CatalogRecord>(record)
                    .map_err(|e| warn!(index, error = %e, "Skipping malformed catalog record"))
                    .ok()?;
                record
                    .into_order_create()
                    .map_err(|e| warn!(index, error = %e, "Skipping catalog record"))
                    .ok()
            })
            .collect();
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[OrderCreate] {
        &self.entries
    }

    /// A uniformly random entry.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &OrderCreate {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }
}
