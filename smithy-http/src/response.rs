/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::json;
use crate::operation::{Metadata, ParseServiceError};
use crate::result::{SdkError, SdkSuccess};
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Diagnostic information about a completed call, kept by the client for a short while
/// after the call returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseMetadata {
    metadata: Metadata,
    request_id: Option<String>,
    status: u16,
}

impl ResponseMetadata {
    pub fn new(metadata: Metadata, response: &http::Response<Bytes>) -> Self {
        ResponseMetadata {
            metadata,
            request_id: json::request_id(response.headers()).map(str::to_owned),
            status: response.status().as_u16(),
        }
    }

    /// The id the service assigned to the request, if it sent one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn operation(&self) -> &str {
        self.metadata.name()
    }

    pub fn service(&self) -> &str {
        self.metadata.service()
    }

    /// HTTP status of the response.
    pub fn status(&self) -> u16 {
        self.status
    }
}

/// Parses a response into the operation's output or its typed error.
///
/// Success responses that do not match the output shape, and error responses whose
/// body cannot be read, become [`SdkError::ResponseError`].
pub fn parse_response<O, E>(response: http::Response<Bytes>) -> Result<SdkSuccess<O>, SdkError<E>>
where
    O: DeserializeOwned,
    E: ParseServiceError,
{
    if response.status().is_success() {
        return match json::deserialize_body::<O>(response.body()) {
            Ok(parsed) => Ok(SdkSuccess {
                raw: response,
                parsed,
            }),
            Err(err) => Err(SdkError::ResponseError {
                raw: response,
                err: err.into(),
            }),
        };
    }

    let parsed = json::parse_generic_error(response.headers(), response.body())
        .and_then(|generic| E::parse_service_error(generic, response.body()));
    match parsed {
        Ok(err) => Err(SdkError::ServiceError { raw: response, err }),
        Err(err) => Err(SdkError::ResponseError {
            raw: response,
            err: err.into(),
        }),
    }
}
