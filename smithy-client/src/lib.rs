/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! A connector-agnostic Smithy service client.
#![warn(missing_debug_implementations, missing_docs, rustdoc::all)]

mod metadata_cache;

#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;

use bytes::Bytes;
use http::Uri;
use smithy_http::json;
use smithy_http::operation::OperationInput;
use smithy_http::response::{parse_response, ResponseMetadata};
pub use smithy_http::result::{SdkError, SdkSuccess};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::Instrument;

pub use metadata_cache::DEFAULT_CAPACITY as DEFAULT_METADATA_CACHE_CAPACITY;
use metadata_cache::{CacheKey, ResponseMetadataCache};

/// Error type connectors may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Smithy service client.
///
/// The client owns a connector, the [`tower::Service`] that turns each fully built
/// [`http::Request`] into an [`http::Response`]. The connector is where transport,
/// signing and retries live; this client only builds the request for an operation,
/// hands it over, and parses what comes back.
///
/// Cloning a client shares its shutdown state and its response-metadata cache.
#[derive(Debug)]
pub struct Client<Connector> {
    connector: Connector,
    state: Arc<State>,
}

#[derive(Debug)]
struct State {
    shut_down: AtomicBool,
    metadata_cache: ResponseMetadataCache,
}

impl<C: Clone> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            connector: self.connector.clone(),
            state: self.state.clone(),
        }
    }
}

/// A builder that provides more customization options when constructing a [`Client`].
#[derive(Clone, Debug)]
pub struct Builder<C> {
    connector: C,
    metadata_cache_capacity: usize,
}

impl Default for Builder<()> {
    fn default() -> Self {
        Builder {
            connector: (),
            metadata_cache_capacity: DEFAULT_METADATA_CACHE_CAPACITY,
        }
    }
}

impl Builder<()> {
    /// Construct a new, unconfigured builder.
    ///
    /// This builder cannot yet be used, as it does not specify a [connector](Builder::connector).
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> Builder<C> {
    /// Specify the connector for the eventual client to use.
    ///
    /// The connector dictates how requests are turned into responses. Normally, this would entail
    /// sending the request to some kind of remote server, but in certain settings it's useful to
    /// be able to use a custom connector instead, such as to mock the network for tests.
    pub fn connector<C2>(self, connector: C2) -> Builder<C2> {
        Builder {
            connector,
            metadata_cache_capacity: self.metadata_cache_capacity,
        }
    }

    /// Use a connector that directly maps each request to a response.
    ///
    /// ```rust
    /// use bytes::Bytes;
    /// let client = smithy_client::Builder::new()
    ///   .map_connector(|_req: http::Request<Bytes>| {
    ///     async move {
    ///       Ok::<_, smithy_client::BoxError>(http::Response::new(Bytes::from_static(b"{}")))
    ///     }
    ///   })
    ///   .build();
    /// # let _ = client;
    /// ```
    pub fn map_connector<F, FF>(self, map: F) -> Builder<tower::util::ServiceFn<F>>
    where
        F: Fn(http::Request<Bytes>) -> FF + Send,
        FF: std::future::Future<Output = Result<http::Response<Bytes>, BoxError>>,
    {
        self.connector(tower::service_fn(map))
    }

    /// Number of calls whose [`ResponseMetadata`] is retained. Zero disables the cache.
    pub fn metadata_cache_capacity(mut self, capacity: usize) -> Self {
        self.metadata_cache_capacity = capacity;
        self
    }

    /// Build a Smithy service [`Client`].
    pub fn build(self) -> Client<C> {
        Client {
            connector: self.connector,
            state: Arc::new(State {
                shut_down: AtomicBool::new(false),
                metadata_cache: ResponseMetadataCache::new(self.metadata_cache_capacity),
            }),
        }
    }
}

impl<C> Client<C> {
    /// Create a client with the default settings around `connector`.
    pub fn new(connector: C) -> Self {
        Builder::new().connector(connector).build()
    }

    /// Release the client. Every later call fails with [`SdkError::ConstructionFailure`].
    ///
    /// Calling this more than once has no further effect.
    pub fn shutdown(&self) {
        if !self.state.shut_down.swap(true, Ordering::SeqCst) {
            self.state.metadata_cache.close();
            tracing::debug!("client shut down");
        }
    }

    /// Whether [`shutdown`](Client::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.state.shut_down.load(Ordering::SeqCst)
    }

    /// Metadata of the most recent call made with an input equal to `input`, while it is
    /// still retained.
    pub fn cached_response_metadata<I: OperationInput>(&self, input: &I) -> Option<ResponseMetadata> {
        let metadata = CacheKey::for_input(I::metadata(), input)
            .and_then(|key| self.state.metadata_cache.get(&key));
        tracing::trace!(found = metadata.is_some(), "response metadata lookup");
        metadata
    }
}

impl<C> Client<C>
where
    C: bounds::SmithyConnector,
{
    /// Dispatch this request to the network
    ///
    /// `endpoint` is where the request goes and `target_prefix` names the service API
    /// version in the `x-amz-target` header. For ergonomics, this does not include the
    /// raw response for successful responses. To access the raw response use `call_raw`.
    pub async fn call<I>(
        &self,
        endpoint: &Uri,
        target_prefix: &str,
        input: I,
    ) -> Result<I::Output, SdkError<I::Error>>
    where
        I: OperationInput,
    {
        self.call_raw(endpoint, target_prefix, input)
            .await
            .map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<I>(
        &self,
        endpoint: &Uri,
        target_prefix: &str,
        input: I,
    ) -> Result<SdkSuccess<I::Output>, SdkError<I::Error>>
    where
        I: OperationInput,
    {
        let metadata = I::metadata();
        let span = tracing::info_span!(
            "send_operation",
            operation = metadata.name(),
            service = metadata.service()
        );
        async move {
            if self.is_shut_down() {
                tracing::warn!("operation attempted after shutdown");
                return Err(SdkError::ConstructionFailure(
                    "the client has been shut down".into(),
                ));
            }
            let target = format!("{}.{}", target_prefix, metadata.name());
            let request = json::serialize_request(&input, &target, endpoint)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;

            let key = CacheKey::from_body(metadata.clone(), request.body().clone());

            tracing::debug!(x_amz_target = %target, endpoint = %endpoint, "dispatching request");
            let response = self
                .connector
                .clone()
                .oneshot(request)
                .await
                .map_err(|err| SdkError::DispatchFailure(err.into()))?;
            tracing::debug!(status = %response.status(), "received response");

            self.state
                .metadata_cache
                .insert(key, ResponseMetadata::new(metadata, &response));
            parse_response::<I::Output, I::Error>(response)
        }
        .instrument(span)
        .await
    }
}

/// This module holds convenient short-hands for the otherwise fairly extensive trait bounds
/// required for `call` and friends.
///
/// The short-hands will one day be true [trait aliases], but for now they are traits with blanket
/// implementations.
///
/// [trait aliases]: https://rust-lang.github.io/rfcs/1733-trait-alias.html
pub mod bounds {
    use super::*;

    /// A low-level Smithy connector that maps from [`http::Request`] to [`http::Response`].
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyConnector:
        tower::Service<
            http::Request<Bytes>,
            Response = http::Response<Bytes>,
            Error = <Self as SmithyConnector>::Error,
            Future = <Self as SmithyConnector>::Future,
        > + Send
        + Clone
        + 'static
    {
        /// Forwarding type to `<Self as Service>::Error` for bound inference.
        ///
        /// See module-level docs for details.
        type Error: Into<BoxError> + Send + Sync + 'static;

        /// Forwarding type to `<Self as Service>::Future` for bound inference.
        ///
        /// See module-level docs for details.
        type Future: Send + 'static;
    }

    impl<T> SmithyConnector for T
    where
        T: tower::Service<http::Request<Bytes>, Response = http::Response<Bytes>>
            + Send
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
        type Error = T::Error;
        type Future = T::Future;
    }
}
