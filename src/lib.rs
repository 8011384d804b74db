//! siteup: provision nginx virtual hosts behind docker-compose and issue
//! Let's Encrypt certificates over the webroot challenge.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{InitOutcome, NewSiteOptions, NewSiteOutcome};
pub use domain::AppError;
