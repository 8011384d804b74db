use crate::domain::email::EmailAddress;
use crate::domain::fqdn::Fqdn;

/// One website-provisioning request: the domains the site answers for and
/// the administrator email used for certificate issuance.
///
/// The first domain is the canonical one; it names the rendered
/// configuration file and is the target of alias redirects. The list is
/// only ever extended by [`SiteRequest::add_www_alias`], before the
/// request reaches the workflow.
#[derive(Debug, Clone)]
pub struct SiteRequest {
    domains: Vec<Fqdn>,
    email: EmailAddress,
}

impl SiteRequest {
    pub fn new(primary: Fqdn, email: EmailAddress) -> Self {
        Self { domains: vec![primary], email }
    }

    /// Append the `www.` alias of the primary domain.
    ///
    /// No-op when the primary is a wildcard (which already covers `www`)
    /// or when prefixing would exceed the domain length limit.
    pub fn add_www_alias(&mut self) {
        if let Some(alias) = self.domains[0].with_www_alias() {
            self.domains.push(alias);
        }
    }

    pub fn primary_domain(&self) -> &Fqdn {
        &self.domains[0]
    }

    pub fn domains(&self) -> &[Fqdn] {
        &self.domains
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// All domains, space-joined, in request order.
    pub fn server_names(&self) -> String {
        self.domains.iter().map(Fqdn::as_str).collect::<Vec<_>>().join(" ")
    }

    /// Every domain except the primary, space-joined.
    pub fn alias_names(&self) -> String {
        self.domains[1..].iter().map(Fqdn::as_str).collect::<Vec<_>>().join(" ")
    }

    pub fn has_aliases(&self) -> bool {
        self.domains.len() > 1
    }

    /// File name of the rendered configuration, derived from the primary
    /// domain regardless of how many aliases follow it.
    pub fn config_file_name(&self) -> String {
        format!("{}.conf", self.primary_domain())
    }
}
