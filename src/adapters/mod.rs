mod process_runner;
mod prompt_dialoguer;
pub mod scaffold_embedded;
mod site_filesystem;
mod template_filesystem;

pub use process_runner::ProcessCommandRunner;
pub use prompt_dialoguer::DialoguerPrompter;
pub use site_filesystem::FilesystemSiteStore;
pub use template_filesystem::FilesystemTemplateStore;
