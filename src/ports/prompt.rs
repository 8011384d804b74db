use crate::domain::{AppError, EmailAddress, Fqdn, FqdnPolicy, ProxyTarget};

/// Interactive input, one question per method. Implementations re-ask on
/// invalid input and only ever return a parsed value; cancellation (EOF
/// or interrupt) surfaces as `AppError::Aborted`.
pub trait Prompter {
    /// Ask for the site's primary domain.
    fn input_domain(&self, policy: &FqdnPolicy) -> Result<Fqdn, AppError>;

    /// Ask whether to also serve `www.<primary>`. Defaults to yes.
    fn confirm_www_alias(&self, primary: &Fqdn) -> Result<bool, AppError>;

    /// Ask for the certificate account email.
    fn input_email(&self) -> Result<EmailAddress, AppError>;

    /// Ask for the backend URL the site proxies to.
    fn input_proxy_target(&self) -> Result<ProxyTarget, AppError>;
}
