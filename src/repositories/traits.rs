use crate::collection::ContactCollection;
use crate::error::StorageResult;

/// Persistence for the contact collection.
///
/// Abstracts over where the collection lives so the service layer can be
/// exercised against an in-memory store in tests.
pub trait ContactStore: Send + Sync {
    /// Load the stored collection.
    ///
    /// Never fails: a missing or unreadable source yields an empty collection.
    fn load(&self) -> ContactCollection;

    /// Persist the full collection, replacing what was stored before.
    fn save(&self, collection: &ContactCollection) -> StorageResult<()>;
}
