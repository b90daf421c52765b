//! In-memory repository implementation.

use consignment_sdk::Consignment;
use parking_lot::RwLock;

use crate::domain::error::DomainError;
use crate::domain::repo::ConsignmentRepository;

/// Process-lifetime consignment store.
///
/// Writers take the lock exclusively for a single `push`; readers share it
/// while cloning the vector. Neither holds it across an `.await`.
#[derive(Default)]
pub struct InMemoryConsignmentRepository {
    consignments: RwLock<Vec<Consignment>>,
}

impl InMemoryConsignmentRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored consignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.consignments.read().len()
    }

    /// True when nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.consignments.read().is_empty()
    }
}

impl ConsignmentRepository for InMemoryConsignmentRepository {
    fn create(&self, consignment: Consignment) -> Result<Consignment, DomainError> {
        self.consignments.write().push(consignment.clone());
        Ok(consignment)
    }

    fn get_all(&self) -> Vec<Consignment> {
        self.consignments.read().clone()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn consignment(description: &str) -> Consignment {
        Consignment {
            description: description.to_owned(),
            weight: 10,
            destination: "Mombasa".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_repository_is_empty() {
        let repo = InMemoryConsignmentRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.get_all(), Vec::<Consignment>::new());
    }

    #[test]
    fn test_create_returns_stored_record() {
        let repo = InMemoryConsignmentRepository::new();
        let stored = repo.create(consignment("a")).unwrap();
        assert_eq!(stored, consignment("a"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_sequential_creates_preserve_order() {
        let repo = InMemoryConsignmentRepository::new();
        for d in ["a", "b", "c"] {
            repo.create(consignment(d)).unwrap();
        }

        let all = repo.get_all();
        assert_eq!(all, vec![consignment("a"), consignment("b"), consignment("c")]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let repo = InMemoryConsignmentRepository::new();
        repo.create(consignment("same")).unwrap();
        repo.create(consignment("same")).unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_writes() {
        let repo = InMemoryConsignmentRepository::new();
        repo.create(consignment("a")).unwrap();

        let snapshot = repo.get_all();
        repo.create(consignment("b")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.len(), 2);
    }
}
