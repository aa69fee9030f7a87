use crate::error::StoreError;
use crate::model::{Component, Page, Site};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Built-in demo seed used when no seed file is supplied
const DEMO_SEED: &str = include_str!("../data/seed.json");

/// The three seed collections loaded at process start.
///
/// This is the only persisted shape in the system; every mutation after load
/// is in-memory for the lifetime of the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub sites: Vec<Site>,

    #[serde(default)]
    pub pages: Vec<Page>,

    #[serde(default)]
    pub components: Vec<Component>,
}

impl SeedData {
    /// Load seed collections from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load seed collections from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let seed: Self = serde_json::from_str(json)?;
        Ok(seed)
    }

    /// The built-in demo seed
    pub fn demo() -> Result<Self, StoreError> {
        Self::from_json(DEMO_SEED)
    }

    /// Empty collections, useful as a blank slate
    pub fn empty() -> Self {
        Self::default()
    }
}
