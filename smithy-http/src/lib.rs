/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The request/response envelope shared by service crates.

#[macro_use]
mod macros;

pub mod json;
pub mod operation;
pub mod response;
pub mod result;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::Error as JsonError;
    pub use smithy_types::retry::{ErrorKind, ProvideErrorKind};
    pub use smithy_types::Error as GenericError;
}
