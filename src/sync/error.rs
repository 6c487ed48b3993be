use derive_more::{Display, Error};

/// The error returned by the non-blocking accessors of [`SyncTreeMap`](super::SyncTreeMap) when
/// the lock can't be acquired without waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Lock is held elsewhere, unable to access the map without blocking!")]
pub struct LockContended;
