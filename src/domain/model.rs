use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column order of the output CSV. `ct` holds the city.
pub const CSV_HEADERS: [&str; 6] = ["username", "rating", "text", "date", "ct", "company"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub name: String,
    pub place_id: String,
}

/// Companies resolved for a run, keyed by display name.
///
/// Iteration follows the order in which names were first seen. Inserting a
/// name that is already present replaces its place id but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    companies: Vec<CompanyRecord>,
    index: HashMap<String, usize>,
}

impl CompanyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced place id when `name` was already present.
    pub fn insert(&mut self, name: String, place_id: String) -> Option<String> {
        match self.index.get(&name) {
            Some(&position) => Some(std::mem::replace(
                &mut self.companies[position].place_id,
                place_id,
            )),
            None => {
                self.index.insert(name.clone(), self.companies.len());
                self.companies.push(CompanyRecord { name, place_id });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&position| self.companies[position].place_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompanyRecord> {
        self.companies.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.companies.iter().map(|c| c.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a CompanyDirectory {
    type Item = &'a CompanyRecord;
    type IntoIter = std::slice::Iter<'a, CompanyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One review flattened into an output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub username: Option<String>,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "ct")]
    pub city: String,
    pub company: String,
}

impl ReviewRecord {
    pub fn with_company(mut self, company: &str) -> Self {
        self.company = company.to_string();
        self
    }
}

/// Terminal state of one run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Company resolution produced nothing; no file was written.
    NoCompanies,
    Completed {
        output_path: String,
        companies: usize,
        rows: usize,
    },
    WriteFailed {
        companies: usize,
        rows: usize,
        error: String,
    },
}
