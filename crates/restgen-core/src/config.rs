//! Configuration management for restgen project generation.
//!
//! This module defines the immutable [`ProjectConfig`] that drives every
//! renderer, the [`DatabaseKind`] selector, and [`GeneratorOptions`], the raw
//! options gathered from command-line flags and an optional YAML options file
//! before they are validated.
//!
//! # Examples
//!
//! ```
//! use restgen_core::config::{DatabaseKind, GeneratorOptions};
//!
//! let options = GeneratorOptions {
//!     name: Some("blog".to_string()),
//!     auth: true,
//!     database: None,
//! };
//! let config = options.resolve().unwrap();
//! assert_eq!(config.name, "blog");
//! assert!(config.include_auth);
//! assert_eq!(config.database, DatabaseKind::MongoDb);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Database backend targeted by the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// MongoDB through Mongoose
    #[default]
    #[serde(rename = "mongodb", alias = "mongo")]
    MongoDb,
    /// PostgreSQL through Sequelize
    #[serde(alias = "postgresql")]
    Postgres,
}

impl DatabaseKind {
    /// Returns the database identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MongoDb => "mongodb",
            Self::Postgres => "postgres",
        }
    }

    /// Returns an iterator over all supported databases
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::MongoDb, Self::Postgres].into_iter()
    }
}

impl FromStr for DatabaseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(Error::config(format!(
                "unsupported database '{}' (expected one of: {})",
                s,
                Self::all()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated configuration for a single generation run.
///
/// Built once from [`GeneratorOptions::resolve`] and never mutated afterwards;
/// every template renderer receives it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project name, used as directory name, package name and database name
    pub name: String,

    /// Whether to generate authentication code paths
    pub include_auth: bool,

    /// Database the generated code talks to
    pub database: DatabaseKind,
}

impl ProjectConfig {
    /// Create a new ProjectConfig with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            include_auth: false,
            database: DatabaseKind::default(),
        }
    }

    /// Enable or disable authentication code paths
    pub fn with_auth(mut self, include_auth: bool) -> Self {
        self.include_auth = include_auth;
        self
    }

    /// Select the database backend
    pub fn with_database(mut self, database: DatabaseKind) -> Self {
        self.database = database;
        self
    }

    /// Check the only invariant the generator enforces: a non-empty name.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::config("project name is required"));
        }
        Ok(())
    }
}

/// Unvalidated generator options, as read from flags or an options file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Project name
    #[serde(default)]
    pub name: Option<String>,

    /// Include authentication
    #[serde(default, alias = "include_auth")]
    pub auth: bool,

    /// Database type
    #[serde(default)]
    pub database: Option<String>,
}

impl GeneratorOptions {
    /// Load options from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let options = serde_yaml::from_str(&content)?;
        log::debug!("Loaded generator options from {}", path.display());
        Ok(options)
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Values present in `overrides` win; `auth` is on if either side turns it on.
    pub fn merge(self, overrides: GeneratorOptions) -> Self {
        Self {
            name: overrides.name.or(self.name),
            auth: self.auth || overrides.auth,
            database: overrides.database.or(self.database),
        }
    }

    /// Validate the options and produce the run's [`ProjectConfig`]
    pub fn resolve(self) -> Result<ProjectConfig> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| Error::config("project name is required"))?;

        let database = match self.database {
            Some(database) => database.parse()?,
            None => DatabaseKind::default(),
        };

        let config = ProjectConfig::new(name)
            .with_auth(self.auth)
            .with_database(database);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn named(name: &str) -> GeneratorOptions {
        GeneratorOptions {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_defaults() -> Result<()> {
        let config = named("blog").resolve()?;
        assert_eq!(config, ProjectConfig::new("blog"));
        assert!(!config.include_auth);
        assert_eq!(config.database, DatabaseKind::MongoDb);
        Ok(())
    }

    #[test]
    fn test_resolve_requires_name() {
        let err = GeneratorOptions::default().resolve().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("project name is required"));

        let err = named("").resolve().unwrap_err();
        assert!(err.is_config());

        let err = named("   ").resolve().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_resolve_rejects_unknown_database() {
        let options = GeneratorOptions {
            database: Some("mysql".to_string()),
            ..named("blog")
        };
        let err = options.resolve().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("mysql"));
        assert!(err.to_string().contains("mongodb, postgres"));
    }

    #[test]
    fn test_database_parsing() -> Result<()> {
        assert_eq!("mongodb".parse::<DatabaseKind>()?, DatabaseKind::MongoDb);
        assert_eq!("Mongo".parse::<DatabaseKind>()?, DatabaseKind::MongoDb);
        assert_eq!("postgres".parse::<DatabaseKind>()?, DatabaseKind::Postgres);
        assert_eq!(
            "PostgreSQL".parse::<DatabaseKind>()?,
            DatabaseKind::Postgres
        );
        assert_eq!(DatabaseKind::Postgres.to_string(), "postgres");
        Ok(())
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = GeneratorOptions {
            name: Some("from-file".to_string()),
            auth: true,
            database: Some("postgres".to_string()),
        };
        let merged = file.clone().merge(named("from-flags"));
        assert_eq!(merged.name.as_deref(), Some("from-flags"));
        assert!(merged.auth);
        assert_eq!(merged.database.as_deref(), Some("postgres"));

        let merged = file.merge(GeneratorOptions::default());
        assert_eq!(merged.name.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_options_from_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("restgen.yaml");
        std::fs::write(&path, "name: shop\ninclude_auth: true\ndatabase: postgres\n")?;

        let config = GeneratorOptions::from_file(&path)?.resolve()?;
        assert_eq!(config.name, "shop");
        assert!(config.include_auth);
        assert_eq!(config.database, DatabaseKind::Postgres);
        Ok(())
    }

    #[test]
    fn test_options_from_missing_file() {
        let err = GeneratorOptions::from_file("/nonexistent/restgen.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_options_from_malformed_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("restgen.yaml");
        std::fs::write(&path, "name: [unterminated\n")?;

        let err = GeneratorOptions::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
        Ok(())
    }
}
