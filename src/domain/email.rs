use std::fmt;

use crate::domain::AppError;
use crate::domain::fqdn::{Fqdn, FqdnPolicy};

/// Maximum length of the local part, per RFC 5321.
const MAX_LOCAL_LEN: usize = 64;

/// Characters permitted in the local part besides ASCII alphanumerics.
const LOCAL_SYMBOLS: &str = "!#$%&'*+/=?^_`{|}~.-";

/// A syntactically validated email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `value` and wrap it.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match Self::check(value) {
            Ok(()) => Ok(Self(value.to_string())),
            Err(reason) => Err(AppError::InvalidEmail { value: value.to_string(), reason }),
        }
    }

    /// Validate `value` without constructing, returning the rejection reason.
    pub fn check(value: &str) -> Result<(), String> {
        let Some((local, domain)) = value.split_once('@') else {
            return Err("must contain an '@'".to_string());
        };
        if domain.contains('@') {
            return Err("must contain exactly one '@'".to_string());
        }
        if local.is_empty() {
            return Err("local part must not be empty".to_string());
        }
        if local.len() > MAX_LOCAL_LEN {
            return Err(format!("local part must be at most {} characters", MAX_LOCAL_LEN));
        }
        if let Some(c) =
            local.chars().find(|c| !c.is_ascii_alphanumeric() && !LOCAL_SYMBOLS.contains(*c))
        {
            return Err(format!("local part contains invalid character '{}'", c));
        }
        // The domain side follows host rules: no wildcard, no underscores.
        if let Err(reason) = Fqdn::check(domain, &FqdnPolicy::default()) {
            return Err(format!("domain part {}", reason));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
