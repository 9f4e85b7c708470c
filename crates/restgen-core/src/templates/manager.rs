//! Template loading and rendering

// Internal imports (std, crate)
use std::path::PathBuf;

use crate::{
    builders::ProjectContext,
    config::ProjectConfig,
    error::{Error, Result},
    manifest::{RenderedFile, RenderedProject},
};

use super::TemplateKind;

// External imports (alphabetized)
use tera::{Context, Tera};

/// Templates compiled into the binary, keyed by the name templates include them by
const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    (
        "package.json.tera",
        include_str!("../../templates/package.json.tera"),
    ),
    ("env.tera", include_str!("../../templates/env.tera")),
    ("index.js.tera", include_str!("../../templates/index.js.tera")),
    (
        "models/user.mongodb.js.tera",
        include_str!("../../templates/models/user.mongodb.js.tera"),
    ),
    (
        "models/user.postgres.js.tera",
        include_str!("../../templates/models/user.postgres.js.tera"),
    ),
    (
        "controllers/userController.js.tera",
        include_str!("../../templates/controllers/userController.js.tera"),
    ),
    (
        "routes/users.js.tera",
        include_str!("../../templates/routes/users.js.tera"),
    ),
    (
        "middleware/auth.js.tera",
        include_str!("../../templates/middleware/auth.js.tera"),
    ),
    (
        "partials/bcrypt_require.js.tera",
        include_str!("../../templates/partials/bcrypt_require.js.tera"),
    ),
    (
        "partials/auth_middleware_require.js.tera",
        include_str!("../../templates/partials/auth_middleware_require.js.tera"),
    ),
    (
        "partials/mongodb/password_field.js.tera",
        include_str!("../../templates/partials/mongodb/password_field.js.tera"),
    ),
    (
        "partials/mongodb/password_hooks.js.tera",
        include_str!("../../templates/partials/mongodb/password_hooks.js.tera"),
    ),
    (
        "partials/postgres/password_field.js.tera",
        include_str!("../../templates/partials/postgres/password_field.js.tera"),
    ),
    (
        "partials/postgres/password_scope.js.tera",
        include_str!("../../templates/partials/postgres/password_scope.js.tera"),
    ),
    (
        "partials/postgres/password_hooks.js.tera",
        include_str!("../../templates/partials/postgres/password_hooks.js.tera"),
    ),
];

/// Renders the embedded project templates
#[derive(Debug, Clone)]
pub struct TemplateManager {
    tera: Tera,
}

impl TemplateManager {
    /// Create a new TemplateManager with every embedded template registered
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        // Output is source code, never HTML
        tera.autoescape_on(Vec::new());
        tera.add_raw_templates(EMBEDDED_TEMPLATES.iter().copied())?;

        log::debug!(
            "Registered {} embedded templates",
            tera.get_template_names().count()
        );
        Ok(Self { tera })
    }

    /// Check if a template exists
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template(name).is_ok()
    }

    /// Render a single file for the given configuration
    pub fn render(&self, kind: TemplateKind, config: &ProjectConfig) -> Result<String> {
        let context = Self::build_context(config)?;
        self.render_with_context(kind, config, &context)
    }

    /// Render every file the configuration asks for, without touching the filesystem
    pub fn render_project(&self, config: &ProjectConfig) -> Result<RenderedProject> {
        config.validate()?;
        let context = Self::build_context(config)?;

        let files = TemplateKind::for_config(config)
            .map(|kind| {
                Ok(RenderedFile {
                    kind,
                    path: PathBuf::from(kind.destination()),
                    contents: self.render_with_context(kind, config, &context)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RenderedProject {
            name: config.name.clone(),
            files,
        })
    }

    fn build_context(config: &ProjectConfig) -> Result<Context> {
        let value = ProjectContext::build(config).to_json()?;
        Ok(Context::from_value(value)?)
    }

    fn render_with_context(
        &self,
        kind: TemplateKind,
        config: &ProjectConfig,
        context: &Context,
    ) -> Result<String> {
        let source = kind.source(config.database);
        log::debug!("Rendering template {} for {}", source, kind);
        if !self.has_template(source) {
            return Err(Error::template(format!("Template not found: {}", source)));
        }

        self.tera.render(source, context).map_err(|e| {
            log::error!("Template rendering failed for '{}': {}", source, e);
            Error::template(format!("Failed to render template '{}': {}", source, e))
        })
    }
}
