/*
[INPUT]:  Caller intents, `TodoApi` outcomes
[OUTPUT]: Coordinated transitions of global status, lists, items, session
[POS]:    Sync layer - operation lifecycle (start / success / failure)
[UPDATE]: When adding an operation or changing failure policy
*/

use std::sync::Arc;

use todoboard_adapter::{Item, LoginRequest, TodoApi};
use tracing::{debug, info, warn};

use crate::error::{Result, SyncError, confirm};
use crate::state::{EntityStatus, Filter, ItemPatch, ListEntity, RequestStatus, Store, SyncState};

/// Drives remote operations and applies their outcome to the store.
///
/// Every operation follows the same lifecycle: local preconditions, a
/// "loading" transition, one remote call (the only suspension point), then a
/// single success or failure transition. Transport and domain failures are
/// written to the global error slot and returned; precondition failures are
/// only returned. Nothing is retried.
pub struct SyncEngine {
    api: Arc<dyn TodoApi>,
    store: Store,
}

impl SyncEngine {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self::with_store(api, Store::new())
    }

    pub fn with_store(api: Arc<dyn TodoApi>, store: Store) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn snapshot(&self) -> SyncState {
        self.store.snapshot()
    }

    fn begin(&self) {
        self.store
            .apply(|state| state.app.set_status(RequestStatus::Loading));
    }

    fn succeed(&self) {
        self.store
            .apply(|state| state.app.set_status(RequestStatus::Succeeded));
    }

    fn fail(&self, operation: &'static str, err: &SyncError) {
        warn!(operation, error = %err, "operation failed");
        let message = err.user_message();
        self.store.apply(|state| state.app.fail(message));
    }

    // ---- session ----

    /// Session bootstrap. Marks the app initialized whatever the outcome;
    /// only an accepted `who_am_i` logs the session in.
    pub async fn initialize(&self) -> bool {
        let logged_in = match confirm(self.api.who_am_i().await) {
            Ok(me) => {
                info!(login = ?me.user.as_ref().map(|user| user.login.as_str()), "session restored");
                true
            }
            Err(err) => {
                info!(error = %err, "no active session");
                false
            }
        };

        self.store.apply(|state| {
            let session_changed = logged_in && state.session.set_logged_in(true);
            state.app.mark_initialized() | session_changed
        });
        logged_in
    }

    /// Rejections keep their messages and field errors in `SyncError::Domain`.
    pub async fn login(&self, params: &LoginRequest) -> Result<()> {
        debug!(email = %params.email, "login started");
        self.begin();

        match confirm(self.api.login(params).await) {
            Ok(data) => {
                info!(user_id = ?data.user_id, "logged in");
                self.store.apply(|state| {
                    state.session.set_logged_in(true) | state.app.set_status(RequestStatus::Succeeded)
                });
                Ok(())
            }
            Err(err) => {
                self.fail("login", &err);
                Err(err)
            }
        }
    }

    pub async fn logout(&self) -> Result<()> {
        debug!("logout started");
        self.begin();

        match confirm(self.api.logout().await) {
            Ok(_) => {
                info!("logged out");
                self.store.apply(|state| {
                    state.session.set_logged_in(false) | state.app.set_status(RequestStatus::Succeeded)
                });
                Ok(())
            }
            Err(err) => {
                self.fail("logout", &err);
                Err(err)
            }
        }
    }

    // ---- lists ----

    /// Full resync of lists. Replaces every list, resets filters and entity
    /// statuses, and empties every item collection; items are fetched per
    /// list afterwards. On failure the board is left as it was.
    pub async fn resync_lists(&self) -> Result<()> {
        debug!("list resync started");
        self.begin();

        match self.api.list_lists().await {
            Ok(lists) => {
                let count = lists.len();
                self.store.apply(|state| {
                    state.board.resync_lists(lists) | state.app.set_status(RequestStatus::Succeeded)
                });
                info!(count, "lists resynced");
                Ok(())
            }
            Err(err) => {
                let err = SyncError::from(err);
                self.fail("resync_lists", &err);
                Err(err)
            }
        }
    }

    pub async fn create_list(&self, title: &str) -> Result<ListEntity> {
        let title = validate_title(title)?;
        debug!(title, "list creation started");
        self.begin();

        let created = confirm(self.api.create_list(title).await).and_then(|payload| {
            payload
                .item
                .ok_or_else(|| SyncError::MalformedResponse("created list missing".to_string()))
        });

        match created {
            Ok(list) => {
                let entity = ListEntity::from(list.clone());
                info!(list_id = %list.id, "list created");
                self.store.apply(|state| {
                    state.board.insert_list(list);
                    state.app.set_status(RequestStatus::Succeeded);
                    true
                });
                Ok(entity)
            }
            Err(err) => {
                self.fail("create_list", &err);
                Err(err)
            }
        }
    }

    /// Removes a list. The list is flagged `Loading` while the call is in
    /// flight and goes back to `Idle` on every failure path.
    pub async fn remove_list(&self, list_id: &str) -> Result<()> {
        if !self.store.read(|state| state.board.contains_list(list_id)) {
            return Err(SyncError::ListNotFound {
                list_id: list_id.to_string(),
            });
        }

        debug!(list_id, "list removal started");
        self.store.apply(|state| {
            state.app.set_status(RequestStatus::Loading)
                | state.board.set_entity_status(list_id, EntityStatus::Loading)
        });

        match confirm(self.api.remove_list(list_id).await) {
            Ok(_) => {
                info!(list_id, "list removed");
                self.store.apply(|state| {
                    state.board.remove_list(list_id) | state.app.set_status(RequestStatus::Succeeded)
                });
                Ok(())
            }
            Err(err) => {
                warn!(operation = "remove_list", list_id, error = %err, "operation failed");
                let message = err.user_message();
                self.store.apply(|state| {
                    state.board.set_entity_status(list_id, EntityStatus::Idle)
                        | state.app.fail(message)
                });
                Err(err)
            }
        }
    }

    pub async fn rename_list(&self, list_id: &str, title: &str) -> Result<()> {
        let title = validate_title(title)?;
        if !self.store.read(|state| state.board.contains_list(list_id)) {
            return Err(SyncError::ListNotFound {
                list_id: list_id.to_string(),
            });
        }
        debug!(list_id, title, "list rename started");
        self.begin();

        match confirm(self.api.rename_list(list_id, title).await) {
            Ok(_) => {
                info!(list_id, title, "list renamed");
                self.store.apply(|state| {
                    state.board.rename_list(list_id, title)
                        | state.app.set_status(RequestStatus::Succeeded)
                });
                Ok(())
            }
            Err(err) => {
                self.fail("rename_list", &err);
                Err(err)
            }
        }
    }

    /// Local only; unknown ids are ignored.
    pub fn set_filter(&self, list_id: &str, filter: Filter) {
        self.store
            .apply(|state| state.board.set_filter(list_id, filter));
    }

    // ---- items ----

    /// Full resync of one list's items.
    pub async fn resync_items(&self, list_id: &str) -> Result<()> {
        if !self.store.read(|state| state.board.contains_list(list_id)) {
            return Err(SyncError::ListNotFound {
                list_id: list_id.to_string(),
            });
        }
        debug!(list_id, "items resync started");
        self.begin();

        let page = self
            .api
            .list_items(list_id)
            .await
            .map_err(SyncError::from)
            .and_then(|page| match page.error {
                Some(message) => Err(SyncError::Domain {
                    messages: vec![message],
                    field_errors: Vec::new(),
                }),
                None => Ok(page.items),
            });

        match page {
            Ok(items) => {
                let count = items.len();
                // a list removed meanwhile stays removed
                self.store.apply(|state| {
                    state.board.resync_items(list_id, items)
                        | state.app.set_status(RequestStatus::Succeeded)
                });
                info!(list_id, count, "items resynced");
                Ok(())
            }
            Err(err) => {
                self.fail("resync_items", &err);
                Err(err)
            }
        }
    }

    /// Resyncs lists, then the items of every list. Item failures do not stop
    /// the remaining lists; the first one is returned.
    pub async fn resync_all(&self) -> Result<()> {
        self.resync_lists().await?;

        let list_ids: Vec<String> = self.store.read(|state| {
            state
                .board
                .lists()
                .iter()
                .map(|list| list.id.clone())
                .collect()
        });

        let mut first_error = None;
        for list_id in list_ids {
            if let Err(err) = self.resync_items(&list_id).await {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Creates an item and prepends it to the list the service files it under.
    pub async fn create_item(&self, list_id: &str, title: &str) -> Result<Item> {
        let title = validate_title(title)?;
        if !self.store.read(|state| state.board.contains_list(list_id)) {
            return Err(SyncError::ListNotFound {
                list_id: list_id.to_string(),
            });
        }
        debug!(list_id, title, "item creation started");
        self.begin();

        let created = confirm(self.api.create_item(list_id, title).await).and_then(|payload| {
            payload
                .item
                .ok_or_else(|| SyncError::MalformedResponse("created item missing".to_string()))
        });

        match created {
            Ok(item) => {
                info!(list_id = %item.list_id, item_id = %item.id, "item created");
                let inserted = item.clone();
                self.store.apply(|state| {
                    state.board.insert_item(inserted) | state.app.set_status(RequestStatus::Succeeded)
                });
                Ok(item)
            }
            Err(err) => {
                self.fail("create_item", &err);
                Err(err)
            }
        }
    }

    /// Removes an item. Missing items are ignored once the service confirms.
    pub async fn remove_item(&self, list_id: &str, item_id: &str) -> Result<()> {
        debug!(list_id, item_id, "item removal started");
        self.begin();

        match confirm(self.api.remove_item(list_id, item_id).await) {
            Ok(_) => {
                info!(list_id, item_id, "item removed");
                self.store.apply(|state| {
                    state.board.remove_item(list_id, item_id)
                        | state.app.set_status(RequestStatus::Succeeded)
                });
                Ok(())
            }
            Err(err) => {
                self.fail("remove_item", &err);
                Err(err)
            }
        }
    }

    /// Sends the current item merged with `patch` as a full record, then
    /// applies only `patch` locally. Unknown items fail before any call.
    pub async fn update_item(&self, list_id: &str, item_id: &str, patch: &ItemPatch) -> Result<()> {
        let current = self
            .store
            .read(|state| state.board.item(list_id, item_id).cloned());
        let Some(current) = current else {
            debug!(list_id, item_id, "update skipped, item not in state");
            return Err(SyncError::ItemNotFound {
                list_id: list_id.to_string(),
                item_id: item_id.to_string(),
            });
        };

        let model = patch.merged_request(&current);
        debug!(list_id, item_id, "item update started");
        self.begin();

        match confirm(self.api.update_item(list_id, item_id, &model).await) {
            Ok(_) => {
                info!(list_id, item_id, "item updated");
                self.store.apply(|state| {
                    state.board.patch_item(list_id, item_id, patch)
                        | state.app.set_status(RequestStatus::Succeeded)
                });
                Ok(())
            }
            Err(err) => {
                self.fail("update_item", &err);
                Err(err)
            }
        }
    }

    /// Clears the global error slot, e.g. after the UI showed it.
    pub fn dismiss_error(&self) {
        self.store.apply(|state| state.app.set_error(None));
    }
}

fn validate_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(SyncError::InvalidTitle);
    }
    Ok(trimmed)
}
