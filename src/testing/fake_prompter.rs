use std::sync::Mutex;

use crate::domain::{AppError, EmailAddress, Fqdn, FqdnPolicy, ProxyTarget};
use crate::ports::Prompter;

/// Scripted prompter. Answers come from the preset values and every
/// question asked is recorded in order.
pub struct FakePrompter {
    pub domain: Mutex<String>,
    pub www_answer: Mutex<bool>,
    pub email: Mutex<String>,
    pub proxy_target: Mutex<String>,
    pub questions: Mutex<Vec<String>>,
}

impl FakePrompter {
    pub fn new() -> Self {
        Self {
            domain: Mutex::new("example.com".to_string()),
            www_answer: Mutex::new(true),
            email: Mutex::new("admin@example.com".to_string()),
            proxy_target: Mutex::new("http://app:8080".to_string()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn set_domain(&self, value: &str) {
        *self.domain.lock().unwrap() = value.to_string();
    }

    pub fn set_www_answer(&self, value: bool) {
        *self.www_answer.lock().unwrap() = value;
    }

    pub fn set_proxy_target(&self, value: &str) {
        *self.proxy_target.lock().unwrap() = value.to_string();
    }

    pub fn asked(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Default for FakePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for FakePrompter {
    fn input_domain(&self, policy: &FqdnPolicy) -> Result<Fqdn, AppError> {
        self.questions.lock().unwrap().push("domain".to_string());
        Fqdn::parse(&self.domain.lock().unwrap(), policy)
    }

    fn confirm_www_alias(&self, _primary: &Fqdn) -> Result<bool, AppError> {
        self.questions.lock().unwrap().push("www".to_string());
        Ok(*self.www_answer.lock().unwrap())
    }

    fn input_email(&self) -> Result<EmailAddress, AppError> {
        self.questions.lock().unwrap().push("email".to_string());
        EmailAddress::parse(&self.email.lock().unwrap())
    }

    fn input_proxy_target(&self) -> Result<ProxyTarget, AppError> {
        self.questions.lock().unwrap().push("proxy_target".to_string());
        ProxyTarget::parse(&self.proxy_target.lock().unwrap())
    }
}
