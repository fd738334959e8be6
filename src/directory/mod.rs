//! Employee directory: an in-memory lookup table built once from CSV

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HrdeskError, HrdeskResult};

/// A single employee row from the source table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub role: String,
    pub location: String,
    pub paid_leaves: u32,
    pub sick_leaves: u32,
}

/// Read-only lookup table keyed by uppercase employee id
///
/// Ids are case-normalized at load time; lookups trim and uppercase the
/// requested id before comparison. When the source table contains duplicate
/// ids, the first row wins.
pub struct EmployeeDirectory {
    records: HashMap<String, EmployeeRecord>,
}

impl EmployeeDirectory {
    /// Load the directory from a CSV file with columns
    /// `employee_id,name,department,role,location,paid_leaves,sick_leaves`
    pub fn load_csv(path: impl AsRef<Path>) -> HrdeskResult<Self> {
        let path = path.as_ref();
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| HrdeskError::from_csv(path, e))?;

        let mut records = HashMap::new();
        for row in reader.deserialize() {
            let mut record: EmployeeRecord =
                row.map_err(|e| HrdeskError::from_csv(path, e))?;
            record.employee_id = record.employee_id.trim().to_uppercase();
            let id = record.employee_id.clone();
            if records.contains_key(&id) {
                tracing::warn!("Duplicate employee id '{}' in {}, keeping first row", id, path.display());
                continue;
            }
            records.insert(id, record);
        }

        tracing::info!("Loaded {} employee records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Build a directory from records already in memory. Ids are
    /// case-normalized; the first record wins on duplicates.
    pub fn from_records(records: Vec<EmployeeRecord>) -> Self {
        let mut map = HashMap::new();
        for mut record in records {
            record.employee_id = record.employee_id.trim().to_uppercase();
            map.entry(record.employee_id.clone()).or_insert(record);
        }
        Self { records: map }
    }

    /// Look up an employee by id, case-insensitively
    pub fn lookup(&self, employee_id: &str) -> Option<&EmployeeRecord> {
        let id = employee_id.trim().to_uppercase();
        if id.is_empty() {
            return None;
        }
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
