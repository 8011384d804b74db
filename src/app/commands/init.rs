//! Scaffold the working directory: default templates, default config,
//! and the sites directory the proxy loads from.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::scaffold_embedded;
use crate::app::config::{CONFIG_FILE, ProvisionConfig};
use crate::domain::{AppError, TemplateKind};

/// What `init` wrote and what it left alone.
#[derive(Debug, Default)]
pub struct InitOutcome {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Execute the init command.
///
/// Existing files are never overwritten; each one is reported as skipped
/// instead, so a re-run is safe after hand-editing the templates.
pub fn execute(root: &Path, config: &ProvisionConfig) -> Result<InitOutcome, AppError> {
    let mut outcome = InitOutcome::default();

    let templates_dir = root.join(&config.paths.templates_dir);
    fs::create_dir_all(&templates_dir)?;
    fs::create_dir_all(root.join(&config.paths.sites_dir))?;

    write_fresh(root.join(CONFIG_FILE), scaffold_embedded::DEFAULT_CONFIG, &mut outcome)?;
    for kind in TemplateKind::ALL {
        let path = templates_dir.join(kind.file_name());
        write_fresh(path, scaffold_embedded::default_template(kind), &mut outcome)?;
    }

    Ok(outcome)
}

fn write_fresh(path: PathBuf, contents: &str, outcome: &mut InitOutcome) -> Result<(), AppError> {
    if path.exists() {
        outcome.skipped.push(path);
        return Ok(());
    }
    fs::write(&path, contents)?;
    outcome.written.push(path);
    Ok(())
}
