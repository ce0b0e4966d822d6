//! Persistence module split across logical submodules.

mod backend;
mod dances;

pub use backend::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use dances::{load_dances, store_dances, DANCES_KEY};
