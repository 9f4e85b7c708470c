//! The generated project's layout.
//!
//! This module describes the fixed directory tree every project gets and the
//! in-memory [`RenderedProject`] produced before anything is written.

use std::path::{Path, PathBuf};

use crate::templates::TemplateKind;

/// Directories created under the project root, in creation order
pub const PROJECT_DIRECTORIES: &[&str] = &[
    "src",
    "src/models",
    "src/controllers",
    "src/routes",
    "src/middleware",
    "src/utils",
];

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Which template produced the file
    pub kind: TemplateKind,

    /// Destination path, relative to the project directory
    pub path: PathBuf,

    /// File contents
    pub contents: String,
}

/// Every file of a project, rendered and held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProject {
    /// Project name, also the name of the directory to create
    pub name: String,

    /// Files in write order
    pub files: Vec<RenderedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::templates::TemplateManager;

    #[test]
    fn test_every_destination_has_a_directory() {
        for kind in TemplateKind::all() {
            let parent = Path::new(kind.destination())
                .parent()
                .and_then(Path::to_str)
                .unwrap_or_default();
            assert!(
                parent.is_empty() || PROJECT_DIRECTORIES.contains(&parent),
                "{} has no directory",
                kind.destination()
            );
        }
    }

    #[test]
    fn test_rendered_paths_match_destinations() -> crate::Result<()> {
        let project = TemplateManager::new()?.render_project(&ProjectConfig::new("blog"))?;
        for file in &project.files {
            assert_eq!(file.path, Path::new(file.kind.destination()));
        }
        assert!(project
            .files
            .iter()
            .all(|file| file.kind != TemplateKind::AuthMiddleware));
        Ok(())
    }
}
