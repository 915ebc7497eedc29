use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Batch<T> {
    #[serde(alias = "packets", alias = "streams")]
    pub records:   Vec<T>,
    #[serde(alias = "unique_protocols", default)]
    pub protocols: Vec<String>,
}

impl<T> Batch<T> {
    pub fn new(records: Vec<T>, protocols: Vec<String>) -> Self {
        Self { records, protocols }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
