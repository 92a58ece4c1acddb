/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{PathAndQuery, Scheme, Uri};
use std::fmt;
use std::str::FromStr;

/// API Endpoint
///
/// Either a bare host (`opsworks-cm.us-west-2.amazonaws.com`) or a full URL
/// (`http://localhost:8000`). A bare host is reached over https.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidEndpoint {
    #[error("endpoint must not be empty")]
    Empty,
    #[error("endpoint `{endpoint}` is not a valid URI: {reason}")]
    InvalidUri { endpoint: String, reason: String },
    #[error("endpoint `{0}` has no host")]
    EndpointMustHaveAuthority(String),
    #[error("endpoint `{0}` must use http or https")]
    UnsupportedScheme(String),
}

impl Endpoint {
    /// Parses a host or URL. Input without a scheme gets `https://`.
    pub fn parse(endpoint: &str) -> Result<Self, InvalidEndpoint> {
        let trimmed = endpoint.trim();
        if trimmed.is_empty() {
            return Err(InvalidEndpoint::Empty);
        }
        let with_scheme = if trimmed.contains("://") {
            trimmed.to_owned()
        } else {
            format!("https://{}", trimmed)
        };
        let uri = Uri::from_str(&with_scheme).map_err(|err| InvalidEndpoint::InvalidUri {
            endpoint: endpoint.to_owned(),
            reason: err.to_string(),
        })?;
        Endpoint::from_uri(uri)
    }

    /// Uses `uri` as is. It must carry an http(s) scheme and a host.
    pub fn from_uri(uri: Uri) -> Result<Self, InvalidEndpoint> {
        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            _ => return Err(InvalidEndpoint::UnsupportedScheme(uri.to_string())),
        }
        if uri.authority().is_none() {
            return Err(InvalidEndpoint::EndpointMustHaveAuthority(uri.to_string()));
        }
        Ok(Endpoint { uri })
    }

    /// `https://{host}/`
    pub fn https_host(host: &str) -> Result<Self, InvalidEndpoint> {
        let uri = Uri::builder()
            .scheme(Scheme::HTTPS)
            .authority(host)
            .path_and_query(PathAndQuery::from_static("/"))
            .build()
            .map_err(|err| InvalidEndpoint::InvalidUri {
                endpoint: host.to_owned(),
                reason: err.to_string(),
            })?;
        Ok(Endpoint { uri })
    }

    /// Uses a known-good static URL.
    ///
    /// # Panics
    /// Panics if `uri` is not a valid URI.
    pub fn from_static(uri: &'static str) -> Self {
        Endpoint {
            uri: Uri::from_static(uri),
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn host(&self) -> &str {
        self.uri.host().unwrap_or_default()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl FromStr for Endpoint {
    type Err = InvalidEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::{Endpoint, InvalidEndpoint};

    #[test]
    fn bare_host_defaults_to_https() {
        let endpoint = Endpoint::parse("waf.amazonaws.com").unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("https"));
        assert_eq!(endpoint.host(), "waf.amazonaws.com");
        assert_eq!(endpoint.to_string(), "https://waf.amazonaws.com/");
    }

    #[test]
    fn explicit_scheme_is_kept() {
        let endpoint: Endpoint = "http://localhost:8000".parse().unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("http"));
        assert_eq!(endpoint.uri().port_u16(), Some(8000));
    }

    #[test]
    fn invalid_endpoints_are_rejected() {
        assert_eq!(Endpoint::parse("  "), Err(InvalidEndpoint::Empty));
        assert!(matches!(
            Endpoint::parse("ftp://example.com"),
            Err(InvalidEndpoint::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Endpoint::parse("not a host"),
            Err(InvalidEndpoint::InvalidUri { .. })
        ));
    }

    #[test]
    fn static_endpoints() {
        let endpoint = Endpoint::from_static("https://waf.amazonaws.com/");
        assert_eq!(endpoint, Endpoint::parse("waf.amazonaws.com").unwrap());
    }

    #[test]
    fn https_host_matches_parse() {
        assert_eq!(
            Endpoint::https_host("opsworks-cm.us-east-1.amazonaws.com").unwrap(),
            Endpoint::parse("opsworks-cm.us-east-1.amazonaws.com").unwrap()
        );
    }
}
