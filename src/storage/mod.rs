mod file_store;
mod kv;

pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore, Result, StoreError};
