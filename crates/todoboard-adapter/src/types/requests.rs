/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::{ItemPriority, ItemStatus};
use super::models::Item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRequest {
    pub title: String,
}

/// Full item record sent on update. The service replaces every field, so
/// callers build it from the current item merged with their change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub title: String,
    pub description: Option<String>,
    pub status: ItemStatus,
    pub priority: ItemPriority,
    pub start_date: Option<NaiveDateTime>,
    pub deadline: Option<NaiveDateTime>,
}

impl From<&Item> for UpdateItemRequest {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            status: item.status,
            priority: item.priority,
            start_date: item.start_date,
            deadline: item.deadline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
}
