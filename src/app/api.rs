//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together config
//! loading, context creation and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    DialoguerPrompter, FilesystemSiteStore, FilesystemTemplateStore, ProcessCommandRunner,
};
use crate::app::AppContext;
use crate::app::commands::{init, new_site};
use crate::app::config::ProvisionConfig;
use crate::domain::AppError;

pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::new_site::{NewSiteOptions, NewSiteOutcome};

type ProductionContext = AppContext<
    DialoguerPrompter,
    FilesystemTemplateStore,
    FilesystemSiteStore,
    ProcessCommandRunner,
>;

/// Create an `AppContext` wired to the real terminal, filesystem and
/// subprocess adapters for the given working directory.
fn create_context(root: &Path, config: &ProvisionConfig) -> ProductionContext {
    AppContext::new(
        DialoguerPrompter::new(),
        FilesystemTemplateStore::new(root.join(&config.paths.templates_dir)),
        FilesystemSiteStore::new(root.join(&config.paths.sites_dir)),
        ProcessCommandRunner::new(),
    )
}

/// Scaffold the current directory.
pub fn init() -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?)
}

/// Scaffold the specified directory.
pub fn init_at(root: impl Into<PathBuf>) -> Result<InitOutcome, AppError> {
    let root = root.into();
    let config = ProvisionConfig::load(&root)?;
    init::execute(&root, &config)
}

/// Run the provisioning wizard in the current directory.
pub fn new_site(options: &NewSiteOptions) -> Result<NewSiteOutcome, AppError> {
    new_site_at(std::env::current_dir()?, options)
}

/// Run the provisioning wizard against the specified directory.
pub fn new_site_at(
    root: impl Into<PathBuf>,
    options: &NewSiteOptions,
) -> Result<NewSiteOutcome, AppError> {
    let root = root.into();
    let config = ProvisionConfig::load(&root)?;
    let ctx = create_context(&root, &config);
    new_site::execute(&ctx, &config, options)
}
