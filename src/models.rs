use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One to-do item. Children form an ordered subtree of unbounded depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    pub id: String,
    pub text: String,
    pub done: bool,
    #[serde(default)]
    pub children: Vec<TaskNode>,
}

impl TaskNode {
    /// Fresh incomplete leaf with a store-wide unique id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            done: false,
            children: Vec::new(),
        }
    }
}

/// Root-level tasks recorded for one calendar day, in display order.
pub type DayForest = Vec<TaskNode>;

/// Date key (`YYYY-MM-DD`, local time) to day forest. Entries appear when the
/// first task is added on a date and are never pruned automatically.
pub type Days = BTreeMap<String, DayForest>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Whole in-memory application state: the task store plus the theme
/// preference. The two are persisted as separate storage entries.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub days: Days,
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    pub date: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub date: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SubtaskRequest {
    pub date: String,
    pub parent_id: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub total: usize,
    pub completed: usize,
    pub percentage: u8,
    pub stars: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: String,
    pub tasks: DayForest,
    pub stats: DayStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    pub days: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}
