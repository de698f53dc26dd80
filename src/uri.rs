//! Absolute URI resolution
//!
//! The link builder produces absolute URIs but owns no knowledge of
//! where the service is deployed. [`ResolveUri`] is that seam: an
//! injected collaborator that turns a relative path plus query string
//! into an absolute URI. [`ServiceUrl`] is the deployment-anchored
//! implementation built from [`crate::config::ServiceConfig`].

use crate::error::{Error, Result};
use url::Url;

/// Turns a relative path plus query string into an absolute URI
pub trait ResolveUri: Send + Sync {
    /// Resolve `path_and_query` against the service base
    fn resolve(&self, path_and_query: &str) -> Result<Url>;
}

/// Resolver anchored at a base URL plus an API version path component
///
/// Resolves `applications/?offset=10&limit=10` against
/// `https://idp.example.com` with api path `v1/` to
/// `https://idp.example.com/v1/applications/?offset=10&limit=10`.
#[derive(Debug, Clone)]
pub struct ServiceUrl {
    root: Url,
}

impl ServiceUrl {
    /// Create a resolver from a base URL and an API path component
    ///
    /// The API path is relative to the base URL; leading slashes are
    /// ignored and a trailing slash is added so that resource paths
    /// resolve underneath it rather than replacing its last segment.
    pub fn new(base_url: &str, api_path: &str) -> Result<Self> {
        let mut root = Url::parse(base_url)?;
        if root.cannot_be_a_base() {
            return Err(Error::CannotBeABase {
                url: base_url.to_string(),
            });
        }
        // Url::join resolves against the parent of a path that lacks a
        // trailing slash, silently dropping the last segment.
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }
        let root = root.join(&as_dir(api_path))?;
        Ok(Self { root })
    }

    /// The absolute root all relative paths resolve under
    pub fn base(&self) -> &Url {
        &self.root
    }
}

impl ResolveUri for ServiceUrl {
    fn resolve(&self, path_and_query: &str) -> Result<Url> {
        Ok(self.root.join(path_and_query.trim_start_matches('/'))?)
    }
}

/// Normalize a path component to directory form: no leading slash, one
/// trailing slash (empty stays empty).
fn as_dir(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() || trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
