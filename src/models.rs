//! Frontend Models
//!
//! Data structures persisted to and rendered from the todo store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single todo entry, stored as `{id, text, completed}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// View-level predicate selecting which todos are displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Filter options in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        let open = Todo::new(1, "open");
        let mut done = Todo::new(2, "done");
        done.completed = true;

        assert!(Filter::All.matches(&open) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open) && !Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&open) && Filter::Completed.matches(&done));
    }

    #[test]
    fn test_filter_names_and_labels() {
        let names: Vec<String> = Filter::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, vec!["all", "active", "completed"]);
        assert_eq!(Filter::default(), Filter::All);
        assert_eq!(Filter::Completed.label(), "Completed");
    }

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo::new(1700000000000, "Buy milk");
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"text":"Buy milk","completed":false}"#);
    }
}
