/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! Module with client connectors useful for testing.

use bytes::Bytes;
use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<Bytes>, http::Response<B>)>;

/// A request the connection received, next to the request the test expected.
#[derive(Debug)]
pub struct ValidateRequest {
    /// The canned request this exchange was recorded with.
    pub expected: http::Request<Bytes>,
    /// The request the client actually sent.
    pub actual: http::Request<Bytes>,
}

impl ValidateRequest {
    /// Assert that the actual request carries every expected header (except those in
    /// `ignore_headers`), an equivalent body and, when one was given, the expected URI.
    ///
    /// JSON bodies are compared as documents, so key order does not matter.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(
                    actual_header.to_str().unwrap(),
                    value.to_str().unwrap(),
                    "Header mismatch for {:?}",
                    name
                );
            }
        }
        let is_json = actual
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().contains("json"))
            .unwrap_or(false);
        if is_json && !expected.body().is_empty() {
            let actual_body: serde_json::Value =
                serde_json::from_slice(actual.body()).expect("actual body is not JSON");
            let expected_body: serde_json::Value =
                serde_json::from_slice(expected.body()).expect("expected body is not JSON");
            assert_eq!(actual_body, expected_body, "body mismatch");
        } else {
            assert_eq!(actual.body(), expected.body(), "body mismatch");
        }
        // Canned requests built with `Request::new` leave the URI unchecked.
        if expected.uri() != &http::Uri::default() {
            assert_eq!(actual.uri(), expected.uri());
        }
    }
}

/// TestConnection for use with a [`Client`](crate::Client).
///
/// A basic test connection. It will:
/// - Response to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// The generic parameter `B` is the type of the response body.
/// Usage example:
/// ```rust
/// use smithy_client::test_connection::TestConnection;
/// use bytes::Bytes;
/// let events = vec![(
///    http::Request::new(Bytes::from_static(b"request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = smithy_client::Client::from(conn);
/// # let _ = client;
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// Need a clone impl that ignores `B`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    /// Creates a connection that answers with `data`'s responses, in order.
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    /// Every request received so far.
    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    /// Assert every received request matched its canned counterpart and that every
    /// canned response was used.
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = lock(&self.data).len();
        let actual_requests = self.requests().len();
        assert_eq!(
            remaining_requests, 0,
            "Expected {} additional requests ({} were made)",
            remaining_requests, actual_requests
        );
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl<B> tower::Service<http::Request<Bytes>> for TestConnection<B>
where
    Bytes: From<B>,
{
    type Response = http::Response<Bytes>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<Bytes>) -> Self::Future {
        if let Some((expected, resp)) = lock(&self.data).pop() {
            lock(&self.requests).push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(Bytes::from)))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

impl<B> From<TestConnection<B>> for crate::Client<TestConnection<B>>
where
    B: Send + 'static,
    Bytes: From<B>,
{
    fn from(tc: TestConnection<B>) -> Self {
        crate::Builder::new().connector(tc).build()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::TestConnection;
    use crate::{BoxError, Client};
    use bytes::Bytes;
    use tower::Service;

    fn is_send_sync<T: Send + Sync>(_: T) {}

    #[test]
    fn construct_test_client() {
        let test_conn = TestConnection::<String>::new(vec![]);
        let client: Client<_> = test_conn.into();
        is_send_sync(client);
    }

    fn is_valid_smithy_connector<T>(_: T)
    where
        T: Service<http::Request<Bytes>, Response = http::Response<Bytes>>
            + Send
            + Sync
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
    }

    #[test]
    fn test_connection_is_a_connector() {
        is_valid_smithy_connector(TestConnection::<&'static str>::new(vec![]))
    }

    #[tokio::test]
    async fn responses_replay_in_order() {
        let mut conn = TestConnection::new(vec![
            (
                http::Request::new(Bytes::new()),
                http::Response::new("first"),
            ),
            (
                http::Request::new(Bytes::new()),
                http::Response::new("second"),
            ),
        ]);
        let first = conn.call(http::Request::new(Bytes::new())).await.unwrap();
        let second = conn.call(http::Request::new(Bytes::new())).await.unwrap();
        assert_eq!(first.body(), "first");
        assert_eq!(second.body(), "second");
        assert!(conn.call(http::Request::new(Bytes::new())).await.is_err());
        conn.assert_requests_match(&[]);
    }
}
