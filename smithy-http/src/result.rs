/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Successful Sdk Result
///
/// Carries the raw response next to the parsed output for callers that need
/// headers or the status code.
#[derive(Debug)]
pub struct SdkSuccess<O, B = Bytes> {
    pub raw: http::Response<B>,
    pub parsed: O,
}

/// Failing Sdk Result
///
/// `E` is the operation's modeled error type. Everything the service did not model, and
/// every client side failure, is one of the other variants.
#[derive(Debug)]
pub enum SdkError<E, B = Bytes> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<B>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError { raw: http::Response<B>, err: E },
}

impl<E, B> SdkError<E, B> {
    /// The failure happened on this side of the connection, before or while sending.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            SdkError::ConstructionFailure(_) | SdkError::DispatchFailure(_)
        )
    }

    /// The service answered, either with a fault or with a response that could not be read.
    pub fn is_service_fault(&self) -> bool {
        !self.is_client_fault()
    }

    /// Returns the modeled service error, if this is one.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Returns the raw response, if one was received.
    pub fn raw_response(&self) -> Option<&http::Response<B>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E, B> Display for SdkError<E, B>
where
    E: Error,
    B: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { err, raw } => {
                write!(f, "response error ({}): {}", raw.status(), err)
            }
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E, B> Error for SdkError<E, B>
where
    E: Error + 'static,
    B: Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkError;
    use smithy_types::Error as GenericError;
    use std::error::Error;

    #[test]
    fn fault_classification() {
        let construction: SdkError<GenericError> = SdkError::ConstructionFailure("bad input".into());
        assert!(construction.is_client_fault());
        assert_eq!(
            construction.to_string(),
            "failed to construct request: bad input"
        );

        let service: SdkError<GenericError> = SdkError::ServiceError {
            raw: http::Response::builder()
                .status(400)
                .body(bytes::Bytes::new())
                .unwrap(),
            err: GenericError::builder().code("Nope").build(),
        };
        assert!(service.is_service_fault());
        assert_eq!(service.service_error().and_then(|e| e.code()), Some("Nope"));
        assert_eq!(service.raw_response().map(|r| r.status().as_u16()), Some(400));
        assert!(service.source().is_some());
    }
}
