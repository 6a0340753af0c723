//! Reading the three JSON collections from disk.

use crate::index::Index;
use crate::model::{Organization, Record, Ticket, User};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a JSON array of objects into records
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!(path = %path.display(), records = records.len(), "read records");
    Ok(records)
}

/// All parsed data, one vector per collection
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub organizations: Vec<Organization>,
    pub users: Vec<User>,
    pub tickets: Vec<Ticket>,
}

impl DataSet {
    /// Read every collection from its file
    pub fn load(organizations: &Path, users: &Path, tickets: &Path) -> Result<Self> {
        Ok(Self {
            organizations: read_records(organizations)?,
            users: read_records(users)?,
            tickets: read_records(tickets)?,
        })
    }

    /// Build the search index, consuming the data
    pub fn into_index(self) -> Result<Index> {
        let index = Index::build(self.organizations, self.users, self.tickets)
            .context("Failed to build index")?;
        Ok(index)
    }
}
