pub mod certbot;
pub mod command;
pub mod email;
pub mod error;
pub mod fqdn;
pub mod proxy_target;
pub mod render;
pub mod site_request;

pub use command::ExternalCommand;
pub use email::EmailAddress;
pub use error::AppError;
pub use fqdn::{Fqdn, FqdnPolicy};
pub use proxy_target::ProxyTarget;
pub use render::TemplateKind;
pub use site_request::SiteRequest;
