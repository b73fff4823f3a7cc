/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with integer wire representation
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Item lifecycle status. Travels as an integer and compares by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItemStatus {
    New,
    InProgress,
    Completed,
    Draft,
}

impl TryFrom<u8> for ItemStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ItemStatus::New),
            1 => Ok(ItemStatus::InProgress),
            2 => Ok(ItemStatus::Completed),
            3 => Ok(ItemStatus::Draft),
            other => Err(format!("unknown item status: {other}")),
        }
    }
}

impl From<ItemStatus> for u8 {
    fn from(value: ItemStatus) -> Self {
        match value {
            ItemStatus::New => 0,
            ItemStatus::InProgress => 1,
            ItemStatus::Completed => 2,
            ItemStatus::Draft => 3,
        }
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(ItemStatus::New),
            "in-progress" | "in_progress" | "inprogress" => Ok(ItemStatus::InProgress),
            "completed" | "done" => Ok(ItemStatus::Completed),
            "draft" => Ok(ItemStatus::Draft),
            other => Err(format!("unknown item status: {other}")),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemStatus::New => "new",
            ItemStatus::InProgress => "in-progress",
            ItemStatus::Completed => "completed",
            ItemStatus::Draft => "draft",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItemPriority {
    Low,
    Middle,
    High,
    Urgent,
    Later,
}

impl TryFrom<u8> for ItemPriority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ItemPriority::Low),
            1 => Ok(ItemPriority::Middle),
            2 => Ok(ItemPriority::High),
            3 => Ok(ItemPriority::Urgent),
            4 => Ok(ItemPriority::Later),
            other => Err(format!("unknown item priority: {other}")),
        }
    }
}

impl From<ItemPriority> for u8 {
    fn from(value: ItemPriority) -> Self {
        match value {
            ItemPriority::Low => 0,
            ItemPriority::Middle => 1,
            ItemPriority::High => 2,
            ItemPriority::Urgent => 3,
            ItemPriority::Later => 4,
        }
    }
}
