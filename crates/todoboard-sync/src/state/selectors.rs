/*
[INPUT]:  Board snapshot
[OUTPUT]: Derived read-only views (filtered items, busy flags)
[POS]:    State layer - pure selectors for presentation code
[UPDATE]: When a view needs a new derived value
*/

use todoboard_adapter::{Item, ItemStatus};

use super::board::{Board, EntityStatus, Filter};

impl Filter {
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => item.status != ItemStatus::Completed,
            Filter::Completed => item.status == ItemStatus::Completed,
        }
    }
}

impl Board {
    /// Items of a list narrowed by that list's filter. Empty for unknown lists.
    pub fn visible_items(&self, list_id: &str) -> Vec<&Item> {
        let Some(list) = self.list(list_id) else {
            return Vec::new();
        };
        self.items(list_id)
            .unwrap_or_default()
            .iter()
            .filter(|item| list.filter.matches(item))
            .collect()
    }

    /// Whether the list has its own remote operation in flight.
    pub fn is_busy(&self, list_id: &str) -> bool {
        self.list(list_id)
            .is_some_and(|list| list.entity_status == EntityStatus::Loading)
    }
}
