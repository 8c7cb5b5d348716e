//! Runtime configuration.
//!
//! Values come from environment variables with fallback to defaults; the CLI
//! may override the menu file afterwards.

use crate::menu::{MenuCatalog, MenuError};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Path to a menu file; the built-in menus are used when unset.
pub const MENU_FILE_ENV: &str = "ORDER_BOT_MENU_FILE";
/// Mailbox size of the order book actor.
pub const CHANNEL_CAPACITY_ENV: &str = "ORDER_BOT_CHANNEL_CAPACITY";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub menu_file: Option<PathBuf>,
    pub channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            menu_file: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let menu_file = lookup(MENU_FILE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let channel_capacity = match lookup(CHANNEL_CAPACITY_ENV) {
            None => DEFAULT_CHANNEL_CAPACITY,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: CHANNEL_CAPACITY_ENV,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            menu_file,
            channel_capacity,
        })
    }

    pub fn with_menu_file(mut self, menu_file: Option<PathBuf>) -> Self {
        if menu_file.is_some() {
            self.menu_file = menu_file;
        }
        self
    }

    /// Reads the configured menu file, or returns the built-in menus.
    pub fn load_catalog(&self) -> Result<MenuCatalog, ConfigError> {
        match &self.menu_file {
            Some(path) => Ok(MenuCatalog::load(path)?),
            None => Ok(MenuCatalog::builtin()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Menu(#[from] MenuError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.load_catalog().unwrap(), MenuCatalog::builtin());
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            (MENU_FILE_ENV, "/etc/order-bot/menus.txt"),
            (CHANNEL_CAPACITY_ENV, " 8 "),
        ]))
        .unwrap();
        assert_eq!(config.menu_file, Some(PathBuf::from("/etc/order-bot/menus.txt")));
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn test_rejects_bad_capacity() {
        for bad in ["0", "-1", "lots"] {
            let err = AppConfig::from_lookup(lookup(&[(CHANNEL_CAPACITY_ENV, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { key: CHANNEL_CAPACITY_ENV, .. }));
        }
    }

    #[test]
    fn test_cli_menu_file_overrides_env() {
        let config = AppConfig::from_lookup(lookup(&[(MENU_FILE_ENV, "env.txt")]))
            .unwrap()
            .with_menu_file(Some(PathBuf::from("cli.txt")))
            .with_menu_file(None);
        assert_eq!(config.menu_file, Some(PathBuf::from("cli.txt")));
    }

    #[test]
    fn test_missing_menu_file_is_a_menu_error() {
        let config = AppConfig::default().with_menu_file(Some(PathBuf::from("/no/such/menus.txt")));
        assert!(matches!(config.load_catalog(), Err(ConfigError::Menu(MenuError::Io { .. }))));
    }
}
