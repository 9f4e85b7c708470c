//! The kinds of files a generated project is made of.
//!
//! Each [`TemplateKind`] knows where its output lands, which embedded template
//! renders it for a given database, and whether a configuration asks for it.
//!
//! # Examples
//!
//! ```
//! use restgen_core::config::ProjectConfig;
//! use restgen_core::templates::TemplateKind;
//!
//! let config = ProjectConfig::new("blog");
//! assert_eq!(TemplateKind::Manifest.destination(), "package.json");
//! assert!(!TemplateKind::AuthMiddleware.applies_to(&config));
//! assert_eq!(TemplateKind::for_config(&config).count(), 6);
//! ```

// Internal imports (std, crate)
use std::fmt;

use crate::config::{DatabaseKind, ProjectConfig};

/// One generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `package.json`
    Manifest,
    /// `.env`
    Env,
    /// `src/index.js`
    EntryPoint,
    /// `src/models/user.js`
    Model,
    /// `src/controllers/userController.js`
    Controller,
    /// `src/routes/users.js`
    Routes,
    /// `src/middleware/auth.js`, only generated with authentication
    AuthMiddleware,
}

impl TemplateKind {
    /// Returns the template identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::Env => "env",
            Self::EntryPoint => "entry_point",
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Routes => "routes",
            Self::AuthMiddleware => "auth_middleware",
        }
    }

    /// Returns all template kinds in write order
    pub fn all() -> impl Iterator<Item = Self> {
        use TemplateKind::*;
        [
            Manifest,
            Env,
            EntryPoint,
            Model,
            Controller,
            Routes,
            AuthMiddleware,
        ]
        .into_iter()
    }

    /// Returns the kinds the given configuration generates, in write order
    pub fn for_config(config: &ProjectConfig) -> impl Iterator<Item = Self> + '_ {
        Self::all().filter(move |kind| kind.applies_to(config))
    }

    /// Output path relative to the project directory
    pub fn destination(&self) -> &'static str {
        match self {
            Self::Manifest => "package.json",
            Self::Env => ".env",
            Self::EntryPoint => "src/index.js",
            Self::Model => "src/models/user.js",
            Self::Controller => "src/controllers/userController.js",
            Self::Routes => "src/routes/users.js",
            Self::AuthMiddleware => "src/middleware/auth.js",
        }
    }

    /// Name of the embedded template that renders this kind
    pub fn source(&self, database: DatabaseKind) -> &'static str {
        match (self, database) {
            (Self::Manifest, _) => "package.json.tera",
            (Self::Env, _) => "env.tera",
            (Self::EntryPoint, _) => "index.js.tera",
            (Self::Model, DatabaseKind::MongoDb) => "models/user.mongodb.js.tera",
            (Self::Model, DatabaseKind::Postgres) => "models/user.postgres.js.tera",
            (Self::Controller, _) => "controllers/userController.js.tera",
            (Self::Routes, _) => "routes/users.js.tera",
            (Self::AuthMiddleware, _) => "middleware/auth.js.tera",
        }
    }

    /// Whether the configuration generates this file
    pub fn applies_to(&self, config: &ProjectConfig) -> bool {
        match self {
            Self::AuthMiddleware => config.include_auth,
            _ => true,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
