use std::fmt;

use url::Url;

use crate::domain::AppError;

/// The backend a provisioned site forwards to.
///
/// Validated by parsing, but the operator's original spelling is kept:
/// `Url` re-serialization appends a trailing slash to a bare authority,
/// and a trailing slash changes nginx `proxy_pass` path handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTarget(String);

impl ProxyTarget {
    /// Validate `value` and wrap it.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match Self::check(value) {
            Ok(()) => Ok(Self(value.to_string())),
            Err(reason) => Err(AppError::InvalidProxyTarget { value: value.to_string(), reason }),
        }
    }

    /// Validate `value` without constructing, returning the rejection reason.
    pub fn check(value: &str) -> Result<(), String> {
        let url = Url::parse(value).map_err(|e| e.to_string())?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!("scheme must be http or https, got '{}'", url.scheme()));
        }
        if url.host_str().is_none() {
            return Err("must include a host".to_string());
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProxyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
