//! Template context builders for generated projects.
//!
//! The database-independent parts of the context are produced by the named
//! sub-builders in this module; everything that depends on the database goes
//! through a [`DatabaseContextBuilder`] implementation.
pub mod mongodb;
pub mod postgres;

use crate::config::{DatabaseKind, ProjectConfig};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Version written into every generated package manifest
pub const PROJECT_VERSION: &str = "1.0.0";

/// Description written into every generated package manifest
pub const PROJECT_DESCRIPTION: &str = "REST API generated with rest-api-generator";

/// A package manifest dependency entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub name: &'static str,
    pub version: &'static str,
}

impl Dependency {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

/// A `KEY=value` line of the generated `.env` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    pub key: &'static str,
    pub value: String,
}

impl EnvVar {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// A router mounted by the generated entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMount {
    /// URL prefix, e.g. `/api/v1/users`
    pub path: &'static str,
    /// Module passed to `require`
    pub module: &'static str,
}

/// ORM method names used by the controller and auth middleware
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelQueries {
    pub find_all: &'static str,
    pub find_by_id: &'static str,
}

/// Trait for the database-specific parts of a project context.
pub trait DatabaseContextBuilder {
    /// Driver/ORM packages, inserted after the web stack in the manifest
    fn dependencies(&self) -> Vec<Dependency>;

    /// The connection string entry of the `.env` file
    fn connection_var(&self, project_name: &str) -> EnvVar;

    /// Query method names of the generated model
    fn queries(&self) -> ModelQueries;
}

pub fn get_builder(database: DatabaseKind) -> Box<dyn DatabaseContextBuilder> {
    match database {
        DatabaseKind::MongoDb => Box::new(mongodb::MongoContextBuilder),
        DatabaseKind::Postgres => Box::new(postgres::PostgresContextBuilder),
    }
}

/// Everything a template may reference, built once per run.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    pub project_name: String,
    pub version: &'static str,
    pub description: &'static str,
    pub include_auth: bool,
    pub database: DatabaseKind,
    pub dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
    pub env: Vec<EnvVar>,
    pub mounts: Vec<RouteMount>,
    /// Middleware placed in front of the guarded user routes
    pub guards: Vec<&'static str>,
    pub queries: ModelQueries,
}

impl ProjectContext {
    pub fn build(config: &ProjectConfig) -> Self {
        let builder = get_builder(config.database);

        let mut dependencies = base_dependencies();
        // joi stays after the database packages
        dependencies.extend(builder.dependencies());
        dependencies.push(Dependency::new("joi", "^17.6.0"));

        let mut env = vec![
            EnvVar::new("NODE_ENV", "development"),
            EnvVar::new("PORT", "3000"),
            builder.connection_var(&config.name),
        ];

        let mut mounts = vec![RouteMount {
            path: "/api/v1/users",
            module: "./routes/users",
        }];

        if config.include_auth {
            dependencies.extend(auth_dependencies());
            env.extend(auth_env());
            mounts.extend(auth_mounts());
        }

        Self {
            project_name: config.name.clone(),
            version: PROJECT_VERSION,
            description: PROJECT_DESCRIPTION,
            include_auth: config.include_auth,
            database: config.database,
            dependencies,
            dev_dependencies: dev_dependencies(),
            env,
            mounts,
            guards: route_guards(config),
            queries: builder.queries(),
        }
    }

    /// Convert to the JSON object handed to the template engine
    pub fn to_json(&self) -> crate::Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

fn base_dependencies() -> Vec<Dependency> {
    vec![
        Dependency::new("express", "^4.17.1"),
        Dependency::new("cors", "^2.8.5"),
        Dependency::new("dotenv", "^16.0.0"),
        Dependency::new("helmet", "^5.0.2"),
        Dependency::new("morgan", "^1.10.0"),
    ]
}

fn dev_dependencies() -> Vec<Dependency> {
    vec![
        Dependency::new("nodemon", "^2.0.15"),
        Dependency::new("jest", "^27.5.1"),
    ]
}

fn auth_dependencies() -> Vec<Dependency> {
    vec![
        Dependency::new("jsonwebtoken", "^8.5.1"),
        Dependency::new("bcryptjs", "^2.4.3"),
    ]
}

fn auth_env() -> Vec<EnvVar> {
    vec![
        EnvVar::new("JWT_SECRET", "your_jwt_secret"),
        EnvVar::new("JWT_EXPIRES_IN", "90d"),
    ]
}

fn auth_mounts() -> Vec<RouteMount> {
    vec![RouteMount {
        path: "/api/v1/auth",
        module: "./routes/auth",
    }]
}

fn route_guards(config: &ProjectConfig) -> Vec<&'static str> {
    if config.include_auth {
        vec!["authMiddleware"]
    } else {
        Vec::new()
    }
}
