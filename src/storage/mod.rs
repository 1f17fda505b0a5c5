//! Storage layer for Horizon
//!
//! JSON file storage with atomic writes. The engine itself never touches
//! this layer; the CLI loads planner snapshots here and hands them to the
//! report code read-only.

pub mod file_io;
pub mod planners;

pub use file_io::{read_json, write_json_atomic};
pub use planners::PlannerRepository;

use crate::config::paths::HorizonPaths;
use crate::error::HorizonResult;

/// Main storage coordinator
pub struct Storage {
    paths: HorizonPaths,
    pub planners: PlannerRepository,
}

impl Storage {
    /// Create a new Storage instance, ensuring directories exist
    pub fn new(paths: HorizonPaths) -> HorizonResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            planners: PlannerRepository::new(paths.planners_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &HorizonPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> HorizonResult<()> {
        self.planners.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> HorizonResult<()> {
        self.planners.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HorizonPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert!(storage.planners.list().unwrap().is_empty());
    }
}
