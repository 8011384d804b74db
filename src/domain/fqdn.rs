use std::fmt;

use serde::Deserialize;

use crate::domain::AppError;

/// Maximum total length of a domain name, per RFC 1035.
const MAX_LEN: usize = 253;
/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// Acceptance policy for domain-name input.
///
/// Historically deployments disagreed on whether wildcard and underscore
/// names were accepted; both knobs are explicit configuration now and
/// default to the strict variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FqdnPolicy {
    /// Accept a leading `*.` wildcard label.
    pub allow_wildcard: bool,
    /// Accept underscores inside labels.
    pub allow_underscore: bool,
}

/// A validated fully-qualified domain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fqdn(String);

impl Fqdn {
    /// Validate `value` against `policy` and wrap it.
    pub fn parse(value: &str, policy: &FqdnPolicy) -> Result<Self, AppError> {
        match Self::check(value, policy) {
            Ok(()) => Ok(Self(value.to_string())),
            Err(reason) => Err(AppError::InvalidDomain { value: value.to_string(), reason }),
        }
    }

    /// Validate `value` without constructing, returning the rejection reason.
    ///
    /// Prompt validators call this directly so the question can be re-asked
    /// with the reason displayed.
    pub fn check(value: &str, policy: &FqdnPolicy) -> Result<(), String> {
        if value.is_empty() {
            return Err("must not be empty".to_string());
        }
        if value.ends_with('.') {
            return Err("must not end with a dot".to_string());
        }
        if value.len() > MAX_LEN {
            return Err(format!("must be at most {} characters", MAX_LEN));
        }

        let host = match value.strip_prefix("*.") {
            Some(rest) if policy.allow_wildcard => rest,
            Some(_) => return Err("wildcard domains are not accepted".to_string()),
            None => value,
        };

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() < 2 {
            return Err("must contain at least two labels (e.g. example.com)".to_string());
        }

        for label in labels {
            if label.is_empty() {
                return Err("contains an empty label".to_string());
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(format!("label '{}' exceeds {} characters", label, MAX_LABEL_LEN));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(format!("label '{}' must not begin or end with a hyphen", label));
            }
            for c in label.chars() {
                if c == '_' {
                    if !policy.allow_underscore {
                        return Err("underscores are not accepted".to_string());
                    }
                } else if !c.is_ascii_alphanumeric() && c != '-' {
                    return Err(format!("label '{}' contains invalid characters", label));
                }
            }
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name begins with a `*.` wildcard label.
    pub fn is_wildcard(&self) -> bool {
        self.0.starts_with("*.")
    }

    /// The `www.`-prefixed alias of this name.
    ///
    /// `None` when the name is a wildcard (which already covers the `www`
    /// host) or when prefixing would exceed the length limit.
    pub fn with_www_alias(&self) -> Option<Fqdn> {
        if self.is_wildcard() {
            return None;
        }
        let prefixed = format!("www.{}", self.0);
        (prefixed.len() <= MAX_LEN).then_some(Fqdn(prefixed))
    }
}

impl fmt::Display for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
