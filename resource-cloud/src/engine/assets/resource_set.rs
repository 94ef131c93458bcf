use std::fmt;
use std::sync::Arc;

use bevy::prelude::*;

use super::resource_record::ResourceRecord;
use crate::engine::loading::fallback::fallback_records;

/// Where the current record sequence came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    Fallback,
    Csv(String),
    Host,
    Upload(String),
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback => write!(f, "fallback"),
            Self::Csv(path) => write!(f, "csv:{path}"),
            Self::Host => write!(f, "host"),
            Self::Upload(path) => write!(f, "upload:{path}"),
        }
    }
}

/// The published record sequence. Records are immutable for a generation;
/// replacing them bumps `generation` so derived state is rebuilt as a whole.
#[derive(Resource, Debug, Clone)]
pub struct ResourceSet {
    records: Arc<[ResourceRecord]>,
    generation: u64,
    origin: DataOrigin,
}

impl Default for ResourceSet {
    fn default() -> Self {
        Self::from_records(fallback_records(), DataOrigin::Fallback)
    }
}

impl ResourceSet {
    /// Start a set at generation 1 without the fallback substitution `publish` applies.
    pub fn from_records(records: Vec<ResourceRecord>, origin: DataOrigin) -> Self {
        Self {
            records: records.into(),
            generation: 1,
            origin,
        }
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ResourceRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn origin(&self) -> &DataOrigin {
        &self.origin
    }

    /// Replace the sequence as a new generation. An empty sequence swaps the
    /// fallback back in, unless the fallback is already showing.
    /// Returns whether a new generation was published.
    pub fn publish(&mut self, records: Vec<ResourceRecord>, origin: DataOrigin) -> bool {
        let (records, origin) = if records.is_empty() {
            if self.origin == DataOrigin::Fallback {
                return false;
            }
            warn!("{} yielded no records, restoring fallback dataset", origin);
            (fallback_records(), DataOrigin::Fallback)
        } else {
            (records, origin)
        };

        self.records = records.into();
        self.generation += 1;
        self.origin = origin;
        info!(
            "Published generation {} with {} records from {}",
            self.generation,
            self.records.len(),
            self.origin
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ResourceRecord {
        ResourceRecord::new(name, "Tool", "desc", "High", "")
    }

    #[test]
    fn default_set_is_the_fallback() {
        let set = ResourceSet::default();
        assert_eq!(set.origin(), &DataOrigin::Fallback);
        assert!(!set.is_empty());
        assert_eq!(set.generation(), 1);
    }

    #[test]
    fn publishing_bumps_generation() {
        let mut set = ResourceSet::default();
        assert!(set.publish(vec![record("a"), record("b")], DataOrigin::Host));
        assert_eq!(set.generation(), 2);
        assert_eq!(set.len(), 2);
        assert_eq!(set.origin(), &DataOrigin::Host);
    }

    #[test]
    fn empty_publish_restores_fallback_once() {
        let mut set = ResourceSet::from_records(vec![record("a")], DataOrigin::Host);
        assert!(set.publish(Vec::new(), DataOrigin::Host));
        assert_eq!(set.origin(), &DataOrigin::Fallback);
        assert_eq!(set.len(), fallback_records().len());

        let generation = set.generation();
        assert!(!set.publish(Vec::new(), DataOrigin::Host));
        assert_eq!(set.generation(), generation);
    }
}
