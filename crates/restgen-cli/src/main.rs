//! restgen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use restgen_core::{GeneratedProject, GeneratorOptions, ProjectConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "restgen")]
#[command(author, version, about = "Generate a REST API boilerplate", long_about = None)]
struct Cli {
    /// Project name
    #[arg(short, long)]
    name: Option<String>,
    /// Include authentication
    #[arg(short, long)]
    auth: bool,
    /// Database type (mongodb/postgres) [default: mongodb]
    #[arg(short, long)]
    database: Option<String>,
    /// YAML file providing defaults for the options above
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory the project is created in
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

impl Cli {
    /// Merge the flags over the options file and validate the result
    fn resolve(&self) -> anyhow::Result<ProjectConfig> {
        let flags = GeneratorOptions {
            name: self.name.clone(),
            auth: self.auth,
            database: self.database.clone(),
        };

        let options = match &self.config {
            Some(path) => GeneratorOptions::from_file(path)
                .with_context(|| format!("Failed to load options file {}", path.display()))?
                .merge(flags),
            None => flags,
        };

        Ok(options.resolve()?)
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Nothing touches the filesystem until the configuration is valid
    let config = cli.resolve()?;
    tracing::debug!(
        name = %config.name,
        auth = config.include_auth,
        database = %config.database,
        "Resolved configuration"
    );

    let generated = restgen_core::generate(&config, &cli.output_dir)
        .with_context(|| format!("Error creating project {}", config.name))?;
    tracing::info!(
        root = %generated.root.display(),
        files = generated.files.len(),
        "Project generated"
    );

    print_next_steps(&config, &cli.output_dir, &generated);
    Ok(())
}

fn print_next_steps(config: &ProjectConfig, output_dir: &Path, generated: &GeneratedProject) {
    // Relative to the working directory when generating in place
    let target = if output_dir == Path::new(".") {
        config.name.clone()
    } else {
        generated.root.display().to_string()
    };

    println!(
        "\n{}",
        format!("✨ Project {} created successfully!", config.name).green()
    );
    println!("{}", "\nNext steps:".blue());
    println!("{}", format!("1. cd {}", target).white());
    println!("{}", "2. npm install".white());
    println!("{}", "3. Update .env file with your configuration".white());
    println!("{}", "4. npm run dev".white());
}
