//! Project generation: render everything, then write the tree to disk.
//!
//! Rendering happens fully in memory first. Writing is sequential and stops at
//! the first filesystem error; whatever was created before it stays on disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::{
    config::ProjectConfig,
    error::{Error, Result},
    manifest::{RenderedProject, PROJECT_DIRECTORIES},
    templates::TemplateManager,
};

/// What a successful run created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// The project directory
    pub root: PathBuf,

    /// Paths of the written files, in write order
    pub files: Vec<PathBuf>,
}

/// Main entry point for project generation
pub fn generate(config: &ProjectConfig, output_dir: &Path) -> Result<GeneratedProject> {
    // 1. Render every template while nothing has been touched yet
    let manager = TemplateManager::new()?;
    let project = manager.render_project(config)?;

    // 2. Write the tree
    materialize(&project, output_dir)
}

/// Write a rendered project into `output_dir/<name>`.
///
/// The project directory must not exist yet. Files are overwritten without
/// checks; nothing is rolled back on failure.
pub fn materialize(project: &RenderedProject, output_dir: &Path) -> Result<GeneratedProject> {
    if !output_dir.as_os_str().is_empty() && !output_dir.exists() {
        log::debug!("Creating output directory: {}", output_dir.display());
        fs::create_dir_all(output_dir).map_err(|e| Error::filesystem(output_dir, e))?;
    }

    let root = project_root(output_dir, &project.name);
    log::info!("Creating project directory: {}", root.display());
    fs::create_dir(&root).map_err(|e| Error::filesystem(&root, e))?;

    for dir in PROJECT_DIRECTORIES {
        let path = root.join(dir);
        log::debug!("Creating directory: {}", path.display());
        fs::create_dir(&path).map_err(|e| Error::filesystem(&path, e))?;
    }

    let mut files = Vec::with_capacity(project.files.len());
    for file in &project.files {
        let path = root.join(&file.path);
        log::debug!(
            "Writing {} ({} bytes) to {}",
            file.kind,
            file.contents.len(),
            path.display()
        );
        fs::write(&path, &file.contents).map_err(|e| Error::filesystem(&path, e))?;
        files.push(path);
    }

    log::info!("Generated {} files in {}", files.len(), root.display());
    Ok(GeneratedProject { root, files })
}

/// Join the project name under `output_dir`, the way Node's `path.join` does.
///
/// Root and drive prefixes of the name are dropped, so an absolute name still
/// lands inside `output_dir`.
fn project_root(output_dir: &Path, name: &str) -> PathBuf {
    let relative: PathBuf = Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    output_dir.join(relative)
}
