// ABOUTME: Environment-based engine configuration for database, servings, and lookup behaviour
// ABOUTME: Parses DATABASE_URL and NUTRITION_* variables into a typed EngineConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment configuration for the nutrition engine

use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use nutrition_core::constants::{defaults, thresholds};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ConfigError;
use super::matching::MatchingConfig;

/// Default reference database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/nutrition.db";

/// Default bound on cached reference queries
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1000;

/// Type-safe reference database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// `PostgreSQL` connection
    PostgreSQL {
        /// Full connection string
        connection_string: String,
    },
    /// In-memory `SQLite` (tests and throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse a connection string
    ///
    /// Strings without a recognised scheme are treated as `SQLite` file paths.
    #[must_use]
    pub fn parse_url(url: &str) -> Self {
        if let Some(path) = url.strip_prefix("sqlite:") {
            if path == ":memory:" {
                Self::Memory
            } else {
                Self::SQLite {
                    path: PathBuf::from(path),
                }
            }
        } else if url.starts_with("postgresql://") || url.starts_with("postgres://") {
            Self::PostgreSQL {
                connection_string: url.to_owned(),
            }
        } else {
            Self::SQLite {
                path: PathBuf::from(url),
            }
        }
    }

    /// Connection string suitable for sqlx
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::PostgreSQL { connection_string } => connection_string.clone(),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Whether this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Whether this is a `SQLite` database
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::Memory)
    }

    /// Whether this is a `PostgreSQL` database
    #[must_use]
    pub const fn is_postgresql(&self) -> bool {
        matches!(self, Self::PostgreSQL { .. })
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(DEFAULT_DATABASE_URL)
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Reference lookup cache settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Entry lifetime; `None` disables caching
    pub ttl: Option<Duration>,
    /// Maximum number of cached queries
    pub max_entries: usize,
}

impl CacheConfig {
    /// Whether lookups should be cached
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.ttl.is_some() && self.max_entries > 0
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: None,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

/// Engine configuration loaded from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Reference database location
    pub database: DatabaseUrl,
    /// Servings used when a request omits them
    pub default_servings: f64,
    /// Minimum confidence for a match to contribute nutrition
    pub acceptance_floor: f64,
    /// Resolve ingredient lines concurrently
    pub concurrent_lookups: bool,
    /// Synonym table and scoring rules
    pub matching: MatchingConfig,
    /// Reference lookup cache
    pub cache: CacheConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database: DatabaseUrl::default(),
            default_servings: defaults::SERVINGS,
            acceptance_floor: thresholds::MATCH_ACCEPTANCE_FLOOR,
            concurrent_lookups: false,
            matching: MatchingConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DATABASE_URL` | `sqlite:./data/nutrition.db` |
    /// | `NUTRITION_DEFAULT_SERVINGS` | `2` |
    /// | `NUTRITION_ACCEPTANCE_FLOOR` | `0.5` |
    /// | `NUTRITION_CONCURRENT_LOOKUPS` | `false` |
    /// | `NUTRITION_MATCHING_CONFIG` | built-in tables |
    /// | `NUTRITION_CACHE_TTL_SECS` | `0` (disabled) |
    /// | `NUTRITION_CACHE_MAX_ENTRIES` | `1000` |
    ///
    /// # Errors
    ///
    /// Returns an error if a variable fails to parse, the matching config
    /// file cannot be loaded, or a value is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading engine configuration from environment variables");

        let database = env::var("DATABASE_URL")
            .map_or_else(|_| DatabaseUrl::default(), |url| DatabaseUrl::parse_url(&url));

        let matching = match env::var("NUTRITION_MATCHING_CONFIG") {
            Ok(path) if !path.trim().is_empty() => MatchingConfig::from_json_file(path.trim())?,
            _ => MatchingConfig::default(),
        };

        let ttl_secs: u64 = parse_env("NUTRITION_CACHE_TTL_SECS", 0)?;

        let config = Self {
            database,
            default_servings: parse_env("NUTRITION_DEFAULT_SERVINGS", defaults::SERVINGS)?,
            acceptance_floor: parse_env(
                "NUTRITION_ACCEPTANCE_FLOOR",
                thresholds::MATCH_ACCEPTANCE_FLOOR,
            )?,
            concurrent_lookups: parse_env("NUTRITION_CONCURRENT_LOOKUPS", false)?,
            matching,
            cache: CacheConfig {
                ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
                max_entries: parse_env("NUTRITION_CACHE_MAX_ENTRIES", DEFAULT_CACHE_MAX_ENTRIES)?,
            },
        };

        config.validate()?;
        info!("{}", config.summary());
        Ok(config)
    }

    /// Validate ranges across the whole configuration
    ///
    /// # Errors
    ///
    /// Returns an error if servings are negative or non-finite, the
    /// acceptance floor lies outside [0, 1], or the matching config is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_servings.is_finite() || self.default_servings < 0.0 {
            return Err(ConfigError::InvalidRange(
                "NUTRITION_DEFAULT_SERVINGS must be a finite, non-negative number",
            ));
        }
        if !(0.0..=1.0).contains(&self.acceptance_floor) {
            return Err(ConfigError::InvalidRange(
                "NUTRITION_ACCEPTANCE_FLOOR must be within [0, 1]",
            ));
        }
        self.matching.validate()
    }

    /// One-line description for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let cache = self.cache.ttl.map_or_else(
            || "disabled".to_owned(),
            |ttl| format!("{}s ttl, {} entries", ttl.as_secs(), self.cache.max_entries),
        );
        format!(
            "Engine config: database={}, servings={}, acceptance_floor={}, concurrent={}, synonyms={}, cache={cache}",
            self.database,
            self.default_servings,
            self.acceptance_floor,
            self.concurrent_lookups,
            self.matching.synonyms.len(),
        )
    }
}

fn parse_env<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Parse {
                key,
                message: format!("'{raw}': {e}"),
            })
        }
        _ => Ok(default),
    }
}
