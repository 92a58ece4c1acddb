/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shared shapes for service crates: timestamps, blobs, the generic service error
//! and the macros that generate model structures and string enums.

#[macro_use]
mod macros;

pub mod display;
pub mod error;
pub mod instant;
pub mod retry;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub use crate::error::Error;
pub use crate::instant::Instant;

/// Raw bytes. Carried as base64 text on the wire.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for Blob {
    fn from(inp: Vec<u8>) -> Self {
        Blob::new(inp)
    }
}

impl<'a> From<&'a [u8]> for Blob {
    fn from(inp: &'a [u8]) -> Self {
        Blob::new(inp)
    }
}

impl<'a> From<&'a str> for Blob {
    fn from(inp: &'a str) -> Self {
        Blob::new(inp.as_bytes())
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base64::encode(&self.inner))
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64::encode(&self.inner))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BlobVisitor;

        impl<'de> Visitor<'de> for BlobVisitor {
            type Value = Blob;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a base64 encoded string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                base64::decode(v).map(Blob::new).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BlobVisitor)
    }
}

/// Returned by a string enum's strict `from_value` when the input is not one of its
/// known wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid value for {enum_name}")]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        UnknownVariantError {
            enum_name,
            value: value.into(),
        }
    }

    /// Name of the enum that rejected the value.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Blob, Instant};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn whole_seconds_keep_trailing_zero() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn blob_is_base64_on_the_wire() {
        let blob = Blob::new("hello");
        assert_eq!(blob.to_string(), "aGVsbG8=");
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, "\"aGVsbG8=\"");
        let parsed: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_ref(), b"hello");
    }

    #[test]
    fn invalid_base64_is_rejected() {
        assert!(serde_json::from_str::<Blob>("\"not base64!\"").is_err());
    }
}
