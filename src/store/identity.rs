use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// How a store mints identities on first save. The rest of the system is
/// agnostic to which strategy an entity type uses.
pub trait IdentityStrategy<K>: Send + Sync {
    fn next_id(&self) -> K;
}

/// Monotonically increasing numeric identity.
#[derive(Debug)]
pub struct SequenceIdentity {
    next: AtomicI64,
}

impl SequenceIdentity {
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }
}

impl Default for SequenceIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityStrategy<i64> for SequenceIdentity {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Random 128-bit identity, rendered in canonical hyphenated form on the
/// wire. Collision probability is treated as zero.
#[derive(Debug, Default)]
pub struct RandomIdentity;

impl IdentityStrategy<Uuid> for RandomIdentity {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
