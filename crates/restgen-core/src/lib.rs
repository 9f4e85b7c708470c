//! restgen Core Library
//!
//! This library provides the core functionality for generating REST API
//! project skeletons: resolving generator options, rendering the embedded
//! templates and writing the project tree.

pub mod builders;
pub mod config;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod templates;

pub use crate::{
    config::{DatabaseKind, GeneratorOptions, ProjectConfig},
    error::{Error, Result},
    generate::{generate, GeneratedProject},
    manifest::RenderedProject,
    templates::{TemplateKind, TemplateManager},
};
