//! Argument assembly for `certbot certonly` over the webroot challenge.

use crate::domain::site_request::SiteRequest;

/// Build the `certonly` argument vector for `request`.
///
/// The account email is taken from the request, consent flags are fixed
/// (`--agree-tos --no-eff-email`), the webroot path is the directory the
/// challenge block serves, and every domain becomes its own `-d` pair in
/// request order. `--dry-run` goes last so the staging rehearsal and the
/// live issuance differ by exactly one trailing flag.
pub fn certonly_args(request: &SiteRequest, webroot: &str, dry_run: bool) -> Vec<String> {
    let mut args = vec![
        "certonly".to_string(),
        "--email".to_string(),
        request.email().as_str().to_string(),
        "--agree-tos".to_string(),
        "--no-eff-email".to_string(),
        "--webroot".to_string(),
        "--webroot-path".to_string(),
        webroot.to_string(),
    ];
    for domain in request.domains() {
        args.push("-d".to_string());
        args.push(domain.as_str().to_string());
    }
    if dry_run {
        args.push("--dry-run".to_string());
    }
    args
}
