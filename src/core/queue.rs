//! Bounded admission queue for one job type.
//!
//! Each job type owns one `AdmissionQueue`: a pending list of loaded jobs and
//! a fixed-capacity ring buffer of admitted jobs, guarded by a single mutex
//! and two condition variables. The admitter side blocks on `space_available`
//! when the ring is full; the executor side blocks on `item_available` when it
//! is empty. The ring preserves FIFO order between the two sides.
//!
//! Termination is race-free: the loader calls [`AdmissionQueue::seal`] exactly
//! once after the last job is pushed, and both sides treat emptiness as
//! exhaustion only once the queue is sealed.

use parking_lot::{Condvar, Mutex};

use super::job::Job;

/// Mutable queue state, guarded by the queue mutex.
struct QueueState {
    /// Jobs loaded but not yet admitted. Drained LIFO; insertion order is set
    /// entirely by the loader.
    pending: Vec<Job>,
    /// Fixed-capacity ring buffer of admitted jobs.
    ring: Vec<Option<Job>>,
    /// Next slot to take from.
    head: usize,
    /// Next slot to write to.
    tail: usize,
    /// Live entries in the ring. Always `0 ..= capacity`.
    count: usize,
    /// Set once by the loader when no more work will ever arrive.
    sealed: bool,
}

/// A bounded producer/consumer queue coordinating one admitter thread and one
/// executor thread.
///
/// The queue mutex guards only the pending list, the ring buffer, and the two
/// condition variables. Resource locks and ledger locks are never touched
/// while it is held.
pub struct AdmissionQueue {
    state: Mutex<QueueState>,
    /// Admitter wait channel: signaled when ring space opens up, when the
    /// loader pushes pending work, and when the queue is sealed.
    space_available: Condvar,
    /// Executor wait channel: signaled once per admitted job, and when the
    /// admitter observes exhaustion so the executor can observe it too.
    item_available: Condvar,
}

impl AdmissionQueue {
    /// Create an empty queue with the given ring-buffer capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(QueueState {
                pending: Vec::new(),
                ring: vec![None; capacity],
                head: 0,
                tail: 0,
                count: 0,
                sealed: false,
            }),
            space_available: Condvar::new(),
            item_available: Condvar::new(),
        }
    }

    /// Push a job onto the head of the pending list (loader side).
    pub fn push_pending(&self, job: Job) {
        let mut state = self.state.lock();
        state.pending.push(job);
        // The admitter may be parked waiting for pending work.
        self.space_available.notify_one();
    }

    /// Mark that no more pending work will ever arrive.
    ///
    /// Called exactly once by the loader after the last `push_pending`. Wakes
    /// both worker sides so their termination checks can run.
    pub fn seal(&self) {
        let mut state = self.state.lock();
        state.sealed = true;
        self.space_available.notify_all();
        self.item_available.notify_all();
    }

    /// Admitter step: move one job from the pending list into the ring.
    ///
    /// Blocks while the ring is full. Returns `false` once the pending source
    /// is exhausted and the queue is sealed; the executor side is woken on the
    /// way out so it can observe exhaustion as well.
    pub fn admit_next(&self) -> bool {
        let mut state = self.state.lock();
        loop {
            if state.pending.is_empty() {
                if state.sealed {
                    self.item_available.notify_one();
                    return false;
                }
                // Loaded concurrently: wait for more pending work or the seal.
                self.space_available.wait(&mut state);
            } else if state.count == state.ring.len() {
                self.space_available.wait(&mut state);
            } else {
                break;
            }
        }

        if let Some(job) = state.pending.pop() {
            let tail = state.tail;
            state.ring[tail] = Some(job);
            state.tail = (tail + 1) % state.ring.len();
            state.count += 1;
            debug_assert!(state.count <= state.ring.len());
            // Exactly one signal per admitted job.
            self.item_available.notify_one();
        }
        true
    }

    /// Executor step: take the oldest admitted job out of the ring.
    ///
    /// Blocks while the ring is empty but more work may still arrive. Returns
    /// `None` once the ring and the pending list are both empty and the queue
    /// is sealed.
    pub fn take_next(&self) -> Option<Job> {
        let mut state = self.state.lock();
        while state.count == 0 {
            if state.pending.is_empty() && state.sealed {
                return None;
            }
            self.item_available.wait(&mut state);
        }

        let head = state.head;
        let job = state.ring[head].take();
        debug_assert!(job.is_some(), "ring slot at head must be occupied");
        state.head = (head + 1) % state.ring.len();
        state.count -= 1;
        self.space_available.notify_one();
        job
    }

    /// Number of jobs currently admitted (in the ring).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.state.lock().count
    }

    /// Number of jobs still pending admission.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Ring-buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.state.lock().ring.len()
    }

    /// Whether the loader has signaled that no more work will arrive.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.state.lock().sealed
    }
}
