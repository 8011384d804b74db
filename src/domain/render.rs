//! Literal placeholder substitution and virtual-host document assembly.

use crate::domain::proxy_target::ProxyTarget;
use crate::domain::site_request::SiteRequest;

/// Replaced with the space-joined domain list (all domains in the
/// challenge and site renders, the alias list in the redirect render).
pub const SERVER_NAMES_TOKEN: &str = "{{SERVER_NAMES}}";
/// Replaced with the primary domain.
pub const DOMAIN_TOKEN: &str = "{{DOMAIN}}";
/// Replaced with the backend URL.
pub const PROXY_HOST_TOKEN: &str = "{{PROXY_HOST}}";

/// The named templates a site render draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Pre-certificate block serving the ACME webroot over plain HTTP.
    Challenge,
    /// Final block: TLS termination and reverse proxy to the backend.
    Site,
    /// TLS block redirecting alias domains to the primary.
    Redirect,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] =
        [TemplateKind::Challenge, TemplateKind::Site, TemplateKind::Redirect];

    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::Challenge => "challenge.conf.tmpl",
            TemplateKind::Site => "site.conf.tmpl",
            TemplateKind::Redirect => "redirect.conf.tmpl",
        }
    }
}

/// Replace every occurrence of every `(token, value)` pair, literally.
///
/// Plain string replacement, not a pattern language: values are inert
/// text, so a `*.example.com` wildcard or a URL full of metacharacters
/// cannot corrupt the output. Text outside the tokens passes through
/// byte for byte.
pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (token, value) in replacements {
        rendered = rendered.replace(token, value);
    }
    rendered
}

/// Render the pre-certificate document: a single challenge block with
/// every requested domain in its server-name list, so each one can
/// answer HTTP-01.
pub fn render_challenge(template: &str, request: &SiteRequest) -> String {
    let server_names = request.server_names();
    substitute(
        template,
        &[
            (SERVER_NAMES_TOKEN, server_names.as_str()),
            (DOMAIN_TOKEN, request.primary_domain().as_str()),
        ],
    )
}

/// Render the final document: the TLS-terminating proxy block, followed
/// by a blank line and the alias-redirect block when `redirect_template`
/// is supplied (i.e. when the request carries more than one domain).
pub fn render_final(
    site_template: &str,
    redirect_template: Option<&str>,
    request: &SiteRequest,
    target: &ProxyTarget,
) -> String {
    let server_names = request.server_names();
    let primary = request.primary_domain().as_str();

    let mut document = substitute(
        site_template,
        &[
            (SERVER_NAMES_TOKEN, server_names.as_str()),
            (DOMAIN_TOKEN, primary),
            (PROXY_HOST_TOKEN, target.as_str()),
        ],
    );

    if let Some(redirect) = redirect_template {
        let aliases = request.alias_names();
        document.push_str("\n\n");
        document.push_str(&substitute(
            redirect,
            &[(SERVER_NAMES_TOKEN, aliases.as_str()), (DOMAIN_TOKEN, primary)],
        ));
    }

    document
}
