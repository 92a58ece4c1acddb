/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_types::Error as GenericError;
use std::borrow::Cow;
use std::hash::Hash;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// An input shape that can be sent as a single remote operation.
///
/// The input is hashed to key the client's response-metadata cache, so two equal inputs
/// share a cache entry.
pub trait OperationInput: Serialize + Hash + Send + Sync {
    /// The shape returned on success.
    type Output: DeserializeOwned;

    /// The operation's modeled faults.
    type Error: ParseServiceError;

    /// Operation and service names for this input.
    fn metadata() -> Metadata;
}

/// Converts a service fault into an operation's typed error.
pub trait ParseServiceError: Sized {
    /// `generic` carries the code and message already read from the response; `body` is
    /// the raw response body, from which modeled exception fields are read.
    ///
    /// Fails only when the code is modeled but the body does not match its shape.
    fn parse_service_error(generic: GenericError, body: &[u8]) -> Result<Self, serde_json::Error>;
}

impl ParseServiceError for GenericError {
    fn parse_service_error(generic: GenericError, _body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(generic)
    }
}

#[cfg(test)]
mod test {
    use super::Metadata;

    #[test]
    fn metadata_accessors() {
        let metadata = Metadata::new("CreateBackup", String::from("opsworkscm"));
        assert_eq!(metadata.name(), "CreateBackup");
        assert_eq!(metadata.service(), "opsworkscm");
        assert_eq!(metadata.clone(), metadata);
    }
}
