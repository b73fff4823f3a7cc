/*
[INPUT]:  Engine transitions
[OUTPUT]: Snapshot-friendly client state and the reactive store holding it
[POS]:    State layer - module wiring
[UPDATE]: When adding a new state slice
*/

pub mod app;
pub mod board;
pub mod selectors;
pub mod store;

use serde::Serialize;

pub use app::{AppStatus, RequestStatus, Session};
pub use board::{Board, EntityStatus, Filter, ItemPatch, ListEntity};
pub use store::Store;

/// Everything the client knows, published as one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncState {
    pub app: AppStatus,
    pub session: Session,
    pub board: Board,
}
