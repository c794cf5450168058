use axolog_schemas::Observation;

/// Append-only, in-order log of saved entries.
#[derive(Debug, Clone, Default)]
pub struct ReadingStore {
    records: Vec<Observation>,
}

impl ReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: Observation) {
        self.records.push(record);
    }

    pub fn latest(&self) -> Option<&Observation> {
        self.records.last()
    }

    pub fn all(&self) -> &[Observation] {
        &self.records
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[Observation] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
