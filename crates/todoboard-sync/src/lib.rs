/*
[INPUT]:  Public API exports for todoboard-sync crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-export main types for convenience
pub use config::TodoboardConfig;
pub use engine::SyncEngine;
pub use error::{ErrorKind, SyncError};
pub use state::{
    AppStatus, Board, EntityStatus, Filter, ItemPatch, ListEntity, RequestStatus, Session, Store,
    SyncState,
};
