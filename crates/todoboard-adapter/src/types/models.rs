/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - server-confirmed entities
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::{ItemPriority, ItemStatus};

/// Server-confirmed fields of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: String,
    pub title: String,
    #[serde(rename = "addedDate")]
    pub added_at: NaiveDateTime,
    pub order: i64,
}

/// Server-confirmed item. `list_id` is the foreign key into the owning list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(rename = "todoListId")]
    pub list_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ItemStatus,
    pub priority: ItemPriority,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
    pub order: i64,
    #[serde(rename = "addedDate", default)]
    pub added_at: Option<NaiveDateTime>,
}

/// Identity returned by `auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub login: String,
}
