mod command_runner;
mod prompt;
mod site_store;
mod template_store;

pub use command_runner::CommandRunner;
pub use prompt::Prompter;
pub use site_store::SiteConfigStore;
pub use template_store::TemplateStore;
