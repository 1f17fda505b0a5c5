//! Planner repository
//!
//! Persists the full planner set (each planner with its owned entries) as one
//! JSON snapshot. The engine never sees this layer; it is handed cloned
//! planner snapshots, which keeps each computation consistent even if the
//! repository is mutated between calls.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{HorizonError, HorizonResult};
use crate::models::{Planner, PlannerId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct PlannerData {
    #[serde(default)]
    planners: Vec<Planner>,
}

/// Repository for planners and their ledger records
pub struct PlannerRepository {
    path: PathBuf,
    planners: RwLock<Vec<Planner>>,
}

impl PlannerRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            planners: RwLock::new(Vec::new()),
        }
    }

    /// Load the snapshot from disk
    pub fn load(&self) -> HorizonResult<()> {
        let data: PlannerData = read_json(&self.path)?;

        let mut planners = self
            .planners
            .write()
            .map_err(|e| HorizonError::Storage(format!("Lock poisoned: {}", e)))?;
        *planners = data.planners;
        Ok(())
    }

    /// Save the snapshot to disk
    pub fn save(&self) -> HorizonResult<()> {
        let planners = self
            .planners
            .read()
            .map_err(|e| HorizonError::Storage(format!("Lock poisoned: {}", e)))?;

        let mut list = planners.clone();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &PlannerData { planners: list })
    }

    /// Insert a new planner; names must be unique (case-insensitive)
    pub fn insert(&self, planner: Planner) -> HorizonResult<()> {
        planner.validate()?;

        let mut planners = self
            .planners
            .write()
            .map_err(|e| HorizonError::Storage(format!("Lock poisoned: {}", e)))?;

        if planners
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&planner.name))
        {
            return Err(HorizonError::Duplicate {
                entity_type: "Planner",
                identifier: planner.name,
            });
        }

        planners.push(planner);
        Ok(())
    }

    /// Replace a planner with an updated snapshot of itself
    pub fn upsert(&self, planner: Planner) -> HorizonResult<()> {
        planner.validate()?;

        let mut planners = self
            .planners
            .write()
            .map_err(|e| HorizonError::Storage(format!("Lock poisoned: {}", e)))?;

        match planners.iter_mut().find(|p| p.id == planner.id) {
            Some(existing) => *existing = planner,
            None => planners.push(planner),
        }
        Ok(())
    }

    /// Get a planner snapshot by id
    pub fn get(&self, id: PlannerId) -> HorizonResult<Option<Planner>> {
        let planners = self
            .planners
            .read()
            .map_err(|e| HorizonError::Storage(format!("Lock poisoned: {}", e)))?;
        Ok(planners.iter().find(|p| p.id == id).cloned())
    }

    /// Get a planner snapshot by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> HorizonResult<Option<Planner>> {
        let planners = self
            .planners
            .read()
            .map_err(|e| HorizonError::Storage(format!("Lock poisoned: {}", e)))?;
        Ok(planners
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// All planner snapshots, ordered by creation time
    pub fn list(&self) -> HorizonResult<Vec<Planner>> {
        let planners = self
            .planners
            .read()
            .map_err(|e| HorizonError::Storage(format!("Lock poisoned: {}", e)))?;

        let mut list = planners.clone();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// Delete a planner by name; returns the removed planner if it existed
    pub fn delete_by_name(&self, name: &str) -> HorizonResult<Option<Planner>> {
        let mut planners = self
            .planners
            .write()
            .map_err(|e| HorizonError::Storage(format!("Lock poisoned: {}", e)))?;

        let pos = planners
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name));
        Ok(pos.map(|i| planners.remove(i)))
    }
}
