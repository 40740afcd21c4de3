//! Request context and page URL inference

use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{MetaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// The current request as seen by the host server.
///
/// `path` is the raw request URI including any query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

impl RequestContext {
    pub fn new(scheme: Scheme, host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
            path: path.into(),
        }
    }

    /// Build a context from an absolute request URL
    pub fn from_url(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| MetaError::InvalidRequestUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;

        let scheme = match parsed.scheme() {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            _ => return Err(invalid("scheme must be http or https")),
        };
        let host = parsed.host_str().ok_or_else(|| invalid("missing host"))?;
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| invalid("missing port"))?;

        let mut path = parsed.path().to_string();
        if let Some(query) = parsed.query() {
            path.push('?');
            path.push_str(query);
        }

        Ok(Self::new(scheme, host, port, path))
    }

    /// `scheme://host[:port]path`, the port omitted only when it is 80
    pub fn page_url(&self) -> String {
        if self.port == 80 {
            format!("{}://{}{}", self.scheme.as_str(), self.host, self.path)
        } else {
            format!(
                "{}://{}:{}{}",
                self.scheme.as_str(),
                self.host,
                self.port,
                self.path
            )
        }
    }
}

/// The canonical page URL: the explicit one when set, else rebuilt from the
/// request. Without either the URL is empty and reported as missing.
pub fn infer_url(explicit: Option<&str>, request: Option<&RequestContext>) -> String {
    if let Some(url) = explicit.filter(|u| !u.is_empty()) {
        return url.to_string();
    }
    match request {
        Some(ctx) => {
            let url = ctx.page_url();
            debug!("Inferred page URL {}", url);
            url
        }
        None => String::new(),
    }
}
