/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod endpoint;
pub mod region;

pub use endpoint::{Endpoint, InvalidEndpoint};
pub use region::Region;
