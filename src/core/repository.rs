use serde::{Deserialize, Serialize};

// RepositoryStore selects the persistence adapter wired into the store:
// a JSON flat file for normal sessions, or nothing at all so the catalog
// lives purely in memory.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    JsonFile,
    InMemory,
}
