/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::{Endpoint, Region};

/// Names the API version in the `x-amz-target` header of every request.
pub const TARGET_PREFIX: &str = "OpsWorksCM_V2016_11_01";

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://opsworks-cm.us-east-1.amazonaws.com/";

/// Service configuration, fixed once built.
///
/// ```rust
/// use opsworkscm::{Config, Endpoint, Region};
/// let conf = Config::builder()
///     .region(Region::new("us-west-2"))
///     .endpoint(Endpoint::parse("opsworks-cm.us-west-2.amazonaws.com").unwrap())
///     .build();
/// assert_eq!(conf.endpoint().host(), "opsworks-cm.us-west-2.amazonaws.com");
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint: Endpoint,
    pub(crate) metadata_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Builder::default().build()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The region requests are signed for, if one was configured.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn metadata_cache_capacity(&self) -> usize {
        self.metadata_cache_capacity
    }
}

#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<Endpoint>,
    metadata_cache_capacity: Option<usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region_provider: impl Into<Option<Region>>) -> Self {
        self.region = region_provider.into();
        self
    }

    /// Send requests to `endpoint` instead of the default OpsWorks CM endpoint.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Number of calls whose response metadata the client keeps. Zero disables the cache.
    pub fn metadata_cache_capacity(mut self, capacity: usize) -> Self {
        self.metadata_cache_capacity = Some(capacity);
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| Endpoint::from_static(DEFAULT_ENDPOINT)),
            metadata_cache_capacity: self
                .metadata_cache_capacity
                .unwrap_or(smithy_client::DEFAULT_METADATA_CACHE_CAPACITY),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Config, DEFAULT_ENDPOINT};
    use aws_types::{Endpoint, Region};

    #[test]
    fn defaults() {
        let conf = Config::builder().build();
        assert_eq!(conf.endpoint(), &Endpoint::from_static(DEFAULT_ENDPOINT));
        assert_eq!(conf.region(), None);
        assert_eq!(conf.metadata_cache_capacity(), 50);
    }

    #[test]
    fn overrides() {
        let conf = Config::builder()
            .region(Region::new("eu-west-1"))
            .endpoint(Endpoint::parse("http://localhost:8000").unwrap())
            .metadata_cache_capacity(3)
            .build();
        assert_eq!(conf.region(), Some(&Region::new("eu-west-1")));
        assert_eq!(conf.endpoint().uri().port_u16(), Some(8000));
        assert_eq!(conf.metadata_cache_capacity(), 3);
    }
}
