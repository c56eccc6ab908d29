use crate::consts::DEFAULT_TABLE_SIZE;
use crate::errors::Result;
use crate::key::KeyPolicy;
use crate::table::CourseTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Table construction settings. Missing fields take their defaults, so
/// `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub table_size: usize,
    pub key_policy: KeyPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            key_policy: KeyPolicy::Permissive,
        }
    }
}

impl TableConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let cfg: TableConfig = serde_json::from_str(&s)?;
        debug!(path = %path.display(), ?cfg, "loaded table config");
        Ok(cfg)
    }

    /// Validates the size and builds an empty table.
    pub fn build(&self) -> Result<CourseTable> {
        CourseTable::with_policy(self.table_size, self.key_policy)
    }
}
