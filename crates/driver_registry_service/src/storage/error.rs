//!
//! Errors surfaced by the location store
//!

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage handle is closed")]
    Closed,
}
