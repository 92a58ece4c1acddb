/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic errors for service crates

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

/// Generic Error type
///
/// Service faults that a service crate does not model surface as this type. It
/// carries the wire `code`, the `message` and the `request_id` of the failed call.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the id the service assigned to the failed request.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request id of the failed request, if the service sent one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorKind for Error {
    fn error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;
    use crate::retry::ProvideErrorKind;

    #[test]
    fn display_lists_present_fields() {
        let err = Error::builder()
            .code("ThrottlingException")
            .message("slow down")
            .build();
        assert_eq!(
            err.to_string(),
            r#"Error { code: "ThrottlingException", message: "slow down" }"#
        );
        assert_eq!(ProvideErrorKind::code(&err), Some("ThrottlingException"));
        assert_eq!(err.error_kind(), None);
    }

    #[test]
    fn into_builder_preserves_fields() {
        let err = Error::builder()
            .code("Boom")
            .build()
            .into_builder()
            .request_id("1234")
            .build();
        assert_eq!(err.code(), Some("Boom"));
        assert_eq!(err.request_id(), Some("1234"));
        assert_eq!(err.message(), None);
    }
}
