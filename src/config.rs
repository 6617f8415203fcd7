// Configuration module for reading Snake.toml
// Holds appearance metadata, move scoring weights and debug logging settings

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub scores: ScoresConfig,
    pub debug: DebugConfig,
}

/// Metadata returned to the game engine; has no effect on movement
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppearanceConfig {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// Weights added to a candidate move's score
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScoresConfig {
    /// Target cell holds food
    pub target_food_bonus: i32,
    /// Lookahead cell is off the board
    pub edge_penalty: i32,
    /// Lookahead cell is the head of a snake at least as long as us
    pub larger_head_penalty: i32,
    /// Lookahead cell is the head of a shorter snake
    pub smaller_head_bonus: i32,
    /// Lookahead cell is a body segment
    pub body_penalty: i32,
    /// Lookahead cell holds food
    pub lookahead_food_bonus: i32,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            appearance: AppearanceConfig {
                apiversion: "1".to_string(),
                author: "ksiopiolosz-aterlo".to_string(),
                color: "#2b8020".to_string(),
                head: "fang".to_string(),
                tail: "round-bum".to_string(),
            },
            scores: ScoresConfig {
                target_food_bonus: 10,
                edge_penalty: -1,
                larger_head_penalty: -100,
                smaller_head_bonus: 5,
                body_penalty: -1,
                lookahead_food_bonus: 1,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}
