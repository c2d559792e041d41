//! Global resource registry with ordered multi-lock acquisition.
//!
//! Every job type and every executor thread shares the same fixed pool of
//! exclusive resource slots. Executors acquire the locks for a job's declared
//! resources in a single fixed global order — ascending resource id — which
//! imposes a total order on lock acquisition across all threads and therefore
//! rules out circular-wait deadlocks. Changing that iteration order (for
//! example, walking the job's own resource list) reintroduces deadlock risk.

use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::{Mutex, MutexGuard};

/// One lockable resource slot plus its outstanding-reference counter.
struct ResourceSlot {
    lock: Mutex<()>,
    /// References still pending consumption: incremented by the loader once
    /// per reference, decremented at acquisition time once per occurrence.
    /// Purely observational; it never goes negative under correct input, but
    /// that is monitored, not enforced.
    outstanding: AtomicI64,
}

/// The set of resource locks held on behalf of one job.
///
/// Dropping the claim releases every lock. Release order is unconstrained; no
/// ordering invariant is needed on the way out.
pub struct ResourceClaim<'a> {
    guards: Vec<MutexGuard<'a, ()>>,
}

impl ResourceClaim<'_> {
    /// Number of distinct resource locks held.
    #[must_use]
    pub fn held(&self) -> usize {
        self.guards.len()
    }
}

/// A fixed pool of independently lockable resource slots.
pub struct ResourceRegistry {
    slots: Vec<ResourceSlot>,
}

impl ResourceRegistry {
    /// Create a registry with `num_resources` slots.
    #[must_use]
    pub fn new(num_resources: usize) -> Self {
        Self {
            slots: (0..num_resources)
                .map(|_| ResourceSlot {
                    lock: Mutex::new(()),
                    outstanding: AtomicI64::new(0),
                })
                .collect(),
        }
    }

    /// Number of resource slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Record one loader-side reference to `resource`.
    ///
    /// # Panics
    ///
    /// Panics if `resource` is out of range; callers validate ids first.
    pub fn note_reference(&self, resource: usize) {
        self.slots[resource].outstanding.fetch_add(1, Ordering::Relaxed);
    }

    /// Outstanding-reference counter for `resource`.
    #[must_use]
    pub fn outstanding(&self, resource: usize) -> i64 {
        self.slots[resource].outstanding.load(Ordering::Relaxed)
    }

    /// Acquire every resource lock a job requires, in ascending id order.
    ///
    /// Scans ids `0..len` and locks each one that appears in `resources`. A
    /// resource listed more than once is locked once (the locks are not
    /// reentrant) but its outstanding counter is decremented once per
    /// occurrence, matching the loader-side increments.
    ///
    /// Blocks until every required lock is held. Out-of-range ids are ignored
    /// here; the loader rejects them before a job can reach execution.
    #[must_use]
    pub fn acquire_for_job(&self, resources: &[usize]) -> ResourceClaim<'_> {
        let mut guards = Vec::new();
        for (id, slot) in self.slots.iter().enumerate() {
            let occurrences = resources.iter().filter(|&&r| r == id).count() as i64;
            if occurrences > 0 {
                guards.push(slot.lock.lock());
                slot.outstanding.fetch_sub(occurrences, Ordering::Relaxed);
            }
        }
        ResourceClaim { guards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_empty_resource_list_holds_nothing() {
        let registry = ResourceRegistry::new(4);
        let claim = registry.acquire_for_job(&[]);
        assert_eq!(claim.held(), 0);
    }

    #[test]
    fn test_duplicate_ids_lock_once_count_twice() {
        let registry = ResourceRegistry::new(4);
        registry.note_reference(1);
        registry.note_reference(1);
        assert_eq!(registry.outstanding(1), 2);

        let claim = registry.acquire_for_job(&[1, 1]);
        assert_eq!(claim.held(), 1);
        assert_eq!(registry.outstanding(1), 0);
    }

    #[test]
    fn test_exclusive_while_claimed() {
        let registry = Arc::new(ResourceRegistry::new(3));
        let claim = registry.acquire_for_job(&[0, 2]);

        let contender = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                // Blocks until the main thread drops its claim.
                let claim = registry.acquire_for_job(&[2]);
                claim.held()
            })
        };

        thread::sleep(std::time::Duration::from_millis(20));
        drop(claim);
        assert_eq!(contender.join().unwrap(), 1);
    }

    #[test]
    fn test_overlapping_sets_terminate() {
        // Two threads repeatedly claiming overlapping sets declared in
        // opposite orders. Without the ascending-id scan this interleaving
        // deadlocks quickly.
        let registry = Arc::new(ResourceRegistry::new(3));
        let mut handles = Vec::new();
        for declared in [vec![0, 1, 2], vec![2, 1, 0]] {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..500 {
                    let claim = registry.acquire_for_job(&declared);
                    assert_eq!(claim.held(), 3);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
