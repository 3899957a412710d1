//! App Configuration

use tracing::Level;

/// Key the todo list is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub title: String,
    pub placeholder: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            title: "My Todo List".to_string(),
            placeholder: "Add a new todo".to_string(),
            log_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "todos");
        // index.html <title> carries the same text
        assert_eq!(config.title, "My Todo List");
    }
}
