use crate::ports::{CommandRunner, Prompter, SiteConfigStore, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Prompter, T: TemplateStore, S: SiteConfigStore, R: CommandRunner> {
    prompter: P,
    templates: T,
    sites: S,
    runner: R,
}

impl<P: Prompter, T: TemplateStore, S: SiteConfigStore, R: CommandRunner> AppContext<P, T, S, R> {
    /// Create a new application context.
    pub fn new(prompter: P, templates: T, sites: S, runner: R) -> Self {
        Self { prompter, templates, sites, runner }
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the site-config store.
    pub fn sites(&self) -> &S {
        &self.sites
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
