//! The provisioning wizard: collect inputs, stage the HTTP-01 challenge
//! config, issue the certificate, then point the site at its backend.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::config::ProvisionConfig;
use crate::domain::{
    AppError, EmailAddress, Fqdn, ProxyTarget, SiteRequest, TemplateKind, certbot, render,
};
use crate::ports::{CommandRunner, Prompter, SiteConfigStore, TemplateStore};

/// Inputs optionally supplied as flags; anything left `None` is prompted
/// for interactively.
#[derive(Debug, Default)]
pub struct NewSiteOptions {
    pub domain: Option<String>,
    pub www_alias: Option<bool>,
    pub email: Option<String>,
    pub proxy_target: Option<String>,
}

/// What the wizard provisioned.
#[derive(Debug)]
pub struct NewSiteOutcome {
    pub request: SiteRequest,
    pub config_path: PathBuf,
    pub backend: Option<ProxyTarget>,
}

/// Execute the new-site wizard.
///
/// Steps run strictly in order and the first failure aborts the rest:
/// collect inputs, write the challenge vhost, restart the proxy, rehearse
/// issuance with `--dry-run`, issue for real, then (unless disabled)
/// collect the backend, write the final vhost, and restart again.
pub fn execute<P, T, S, R>(
    ctx: &AppContext<P, T, S, R>,
    config: &ProvisionConfig,
    options: &NewSiteOptions,
) -> Result<NewSiteOutcome, AppError>
where
    P: Prompter,
    T: TemplateStore,
    S: SiteConfigStore,
    R: CommandRunner,
{
    let restart = config.proxy_restart_command()?;
    let request = collect_request(ctx.prompter(), config, options)?;

    let challenge = ctx.templates().load(TemplateKind::Challenge)?;
    let document = render::render_challenge(&challenge, &request);
    let config_path = ctx.sites().write(&request.config_file_name(), &document)?;
    println!("✅ Wrote challenge config to {}", config_path.display());

    ctx.runner().run(&restart)?;
    println!("✅ Restarted {}", config.proxy.service);

    let webroot = &config.paths.webroot;
    let dry_run = config.certbot_command(certbot::certonly_args(&request, webroot, true))?;
    ctx.runner().run(&dry_run)?;
    println!("✅ Certificate dry run passed");

    let live = config.certbot_command(certbot::certonly_args(&request, webroot, false))?;
    ctx.runner().run(&live)?;
    println!("✅ Certificate issued for {}", request.server_names());

    let mut backend = None;
    if config.workflow.configure_backend {
        let target = resolve_proxy_target(ctx.prompter(), options)?;

        let site = ctx.templates().load(TemplateKind::Site)?;
        let redirect = request
            .has_aliases()
            .then(|| ctx.templates().load(TemplateKind::Redirect))
            .transpose()?;
        let document = render::render_final(&site, redirect.as_deref(), &request, &target);
        let final_path = ctx.sites().write(&request.config_file_name(), &document)?;
        println!("✅ Wrote proxy config to {}", final_path.display());

        ctx.runner().run(&restart)?;
        println!("✅ Restarted {}", config.proxy.service);
        backend = Some(target);
    }

    Ok(NewSiteOutcome { request, config_path, backend })
}

fn collect_request<P: Prompter>(
    prompter: &P,
    config: &ProvisionConfig,
    options: &NewSiteOptions,
) -> Result<SiteRequest, AppError> {
    let primary = match &options.domain {
        Some(value) => Fqdn::parse(value, &config.validation)?,
        None => prompter.input_domain(&config.validation)?,
    };

    // A wildcard already covers the www host, so the question is skipped.
    let add_www = match options.www_alias {
        Some(value) => value,
        None if primary.is_wildcard() || !config.workflow.offer_www_alias => false,
        None => prompter.confirm_www_alias(&primary)?,
    };

    let email = match &options.email {
        Some(value) => EmailAddress::parse(value)?,
        None => prompter.input_email()?,
    };

    let mut request = SiteRequest::new(primary, email);
    if add_www {
        request.add_www_alias();
    }
    Ok(request)
}

fn resolve_proxy_target<P: Prompter>(
    prompter: &P,
    options: &NewSiteOptions,
) -> Result<ProxyTarget, AppError> {
    match &options.proxy_target {
        Some(value) => ProxyTarget::parse(value),
        None => prompter.input_proxy_target(),
    }
}
