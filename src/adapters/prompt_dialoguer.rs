use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::{AppError, EmailAddress, Fqdn, FqdnPolicy, ProxyTarget};
use crate::ports::Prompter;

/// Terminal prompts over dialoguer. Invalid answers are rejected inline
/// and asked again; Ctrl-C surfaces as `AppError::Aborted`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn interact<T>(result: Result<T, DialoguerError>, question: &str) -> Result<T, AppError> {
    match result {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(AppError::Aborted)
        }
        Err(err) => Err(AppError::configuration(format!("Failed to read {question}: {err}"))),
    }
}

impl Prompter for DialoguerPrompter {
    fn input_domain(&self, policy: &FqdnPolicy) -> Result<Fqdn, AppError> {
        let policy = *policy;
        let value: String = interact(
            Input::new()
                .with_prompt("Domain name (e.g. example.com)")
                .validate_with(move |input: &String| Fqdn::check(input, &policy))
                .interact_text(),
            "domain name",
        )?;
        Fqdn::parse(&value, &policy)
    }

    fn confirm_www_alias(&self, primary: &Fqdn) -> Result<bool, AppError> {
        interact(
            Confirm::new()
                .with_prompt(format!("Also serve www.{primary}?"))
                .default(true)
                .interact(),
            "www alias answer",
        )
    }

    fn input_email(&self) -> Result<EmailAddress, AppError> {
        let value: String = interact(
            Input::new()
                .with_prompt("Email address for the certificate account")
                .validate_with(|input: &String| EmailAddress::check(input))
                .interact_text(),
            "email address",
        )?;
        EmailAddress::parse(&value)
    }

    fn input_proxy_target(&self) -> Result<ProxyTarget, AppError> {
        let value: String = interact(
            Input::new()
                .with_prompt("Backend URL to proxy to (e.g. http://app:8080)")
                .validate_with(|input: &String| ProxyTarget::check(input))
                .interact_text(),
            "backend URL",
        )?;
        ProxyTarget::parse(&value)
    }
}
