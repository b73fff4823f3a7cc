/*
[INPUT]:  Server-confirmed lists/items and local annotations
[OUTPUT]: Lists and per-list item collections kept in lockstep
[POS]:    State layer - single mutation surface for lists and items
[UPDATE]: When list/item transition rules change
*/

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;
use todoboard_adapter::{Item, ItemPriority, ItemStatus, TodoList, UpdateItemRequest};

/// Client-only view filter of a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

/// Client-only flag for the list's own in-flight remote operation.
///
/// The engine only moves a list between `Idle` and `Loading`: a failed
/// remote call puts the list back to `Idle` and reports through the global
/// error slot. `Failed` is left for callers that mark lists themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// A list as held by the client: server fields plus local annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntity {
    pub id: String,
    pub title: String,
    pub added_at: NaiveDateTime,
    pub order: i64,
    pub filter: Filter,
    pub entity_status: EntityStatus,
}

impl From<TodoList> for ListEntity {
    fn from(list: TodoList) -> Self {
        Self {
            id: list.id,
            title: list.title,
            added_at: list.added_at,
            order: list.order,
            filter: Filter::default(),
            entity_status: EntityStatus::default(),
        }
    }
}

/// Partial change to an item. `None` leaves a field as it is; for optional
/// fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<ItemStatus>,
    pub priority: Option<ItemPriority>,
    pub start_date: Option<Option<NaiveDateTime>>,
    pub deadline: Option<Option<NaiveDateTime>>,
}

impl ItemPatch {
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: ItemPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_deadline(mut self, deadline: Option<NaiveDateTime>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrites only the fields this patch names.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(priority) = self.priority {
            item.priority = priority;
        }
        if let Some(start_date) = self.start_date {
            item.start_date = start_date;
        }
        if let Some(deadline) = self.deadline {
            item.deadline = deadline;
        }
    }

    /// Full update record: `current` with this patch laid over it.
    pub fn merged_request(&self, current: &Item) -> UpdateItemRequest {
        let mut merged = current.clone();
        self.apply_to(&mut merged);
        UpdateItemRequest::from(&merged)
    }
}

/// Lists and their item collections.
///
/// Fields are private so the only way to add or drop a list also adds or
/// drops its item collection: `items.keys()` always equals the list ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    lists: Vec<ListEntity>,
    items: BTreeMap<String, Vec<Item>>,
}

impl Board {
    pub fn lists(&self) -> &[ListEntity] {
        &self.lists
    }

    pub fn list(&self, list_id: &str) -> Option<&ListEntity> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    pub fn contains_list(&self, list_id: &str) -> bool {
        self.list(list_id).is_some()
    }

    /// Items of a list, `None` when the list does not exist.
    pub fn items(&self, list_id: &str) -> Option<&[Item]> {
        self.items.get(list_id).map(Vec::as_slice)
    }

    pub fn item(&self, list_id: &str, item_id: &str) -> Option<&Item> {
        self.items
            .get(list_id)
            .and_then(|items| items.iter().find(|item| item.id == item_id))
    }

    pub fn item_collections(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.items
            .iter()
            .map(|(list_id, items)| (list_id.as_str(), items.as_slice()))
    }

    /// True when every list has exactly one item collection and vice versa.
    pub fn is_lockstep(&self) -> bool {
        self.lists.len() == self.items.len()
            && self.lists.iter().all(|list| self.items.contains_key(&list.id))
    }

    fn list_mut(&mut self, list_id: &str) -> Option<&mut ListEntity> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }

    /// Full resync: lists replaced in server order, local annotations reset,
    /// every item collection replaced by an empty one.
    pub fn resync_lists(&mut self, lists: Vec<TodoList>) -> bool {
        let lists: Vec<ListEntity> = lists.into_iter().map(ListEntity::from).collect();
        let items = lists
            .iter()
            .map(|list| (list.id.clone(), Vec::new()))
            .collect();
        if self.lists == lists && self.items == items {
            return false;
        }
        self.lists = lists;
        self.items = items;
        true
    }

    /// Prepends a confirmed list and seeds its empty item collection.
    pub fn insert_list(&mut self, list: TodoList) -> bool {
        self.remove_list(&list.id);
        self.items.insert(list.id.clone(), Vec::new());
        self.lists.insert(0, ListEntity::from(list));
        true
    }

    /// Drops a list together with its item collection.
    pub fn remove_list(&mut self, list_id: &str) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != list_id);
        let removed_items = self.items.remove(list_id).is_some();
        before != self.lists.len() || removed_items
    }

    pub fn rename_list(&mut self, list_id: &str, title: &str) -> bool {
        match self.list_mut(list_id) {
            Some(list) if list.title != title => {
                list.title = title.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn set_filter(&mut self, list_id: &str, filter: Filter) -> bool {
        match self.list_mut(list_id) {
            Some(list) if list.filter != filter => {
                list.filter = filter;
                true
            }
            _ => false,
        }
    }

    pub fn set_entity_status(&mut self, list_id: &str, status: EntityStatus) -> bool {
        match self.list_mut(list_id) {
            Some(list) if list.entity_status != status => {
                list.entity_status = status;
                true
            }
            _ => false,
        }
    }

    /// Replaces a list's items. No-op when the list is gone.
    pub fn resync_items(&mut self, list_id: &str, items: Vec<Item>) -> bool {
        match self.items.get_mut(list_id) {
            Some(current) if *current != items => {
                *current = items;
                true
            }
            _ => false,
        }
    }

    /// Prepends an item to the list it names. No-op when that list is gone.
    pub fn insert_item(&mut self, item: Item) -> bool {
        match self.items.get_mut(&item.list_id) {
            Some(items) => {
                items.retain(|existing| existing.id != item.id);
                items.insert(0, item);
                true
            }
            None => false,
        }
    }

    pub fn remove_item(&mut self, list_id: &str, item_id: &str) -> bool {
        let Some(items) = self.items.get_mut(list_id) else {
            return false;
        };
        let before = items.len();
        items.retain(|item| item.id != item_id);
        before != items.len()
    }

    pub fn patch_item(&mut self, list_id: &str, item_id: &str, patch: &ItemPatch) -> bool {
        let Some(item) = self
            .items
            .get_mut(list_id)
            .and_then(|items| items.iter_mut().find(|item| item.id == item_id))
        else {
            return false;
        };
        let before = item.clone();
        patch.apply_to(item);
        *item != before
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use todoboard_adapter::{Item, ItemPriority, ItemStatus, TodoList};

    pub fn timestamp() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    pub fn list(id: &str, title: &str) -> TodoList {
        TodoList {
            id: id.to_string(),
            title: title.to_string(),
            added_at: timestamp(),
            order: 0,
        }
    }

    pub fn item(list_id: &str, id: &str, title: &str, status: ItemStatus) -> Item {
        Item {
            id: id.to_string(),
            list_id: list_id.to_string(),
            title: title.to_string(),
            description: None,
            status,
            priority: ItemPriority::Low,
            start_date: None,
            deadline: None,
            order: 0,
            added_at: Some(timestamp()),
        }
    }
}
