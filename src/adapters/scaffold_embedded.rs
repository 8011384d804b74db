//! Defaults written by `siteup init`, embedded at compile time.

use crate::domain::TemplateKind;

/// Commented default configuration, written to the working directory.
pub static DEFAULT_CONFIG: &str = include_str!("../assets/siteup.toml");

/// Default text for the given template.
pub fn default_template(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Challenge => include_str!("../assets/challenge.conf.tmpl"),
        TemplateKind::Site => include_str!("../assets/site.conf.tmpl"),
        TemplateKind::Redirect => include_str!("../assets/redirect.conf.tmpl"),
    }
}
