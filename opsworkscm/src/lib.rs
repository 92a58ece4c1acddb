/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>AWS OpsWorks CM</fullname>
//!
//! AWS OpsWorks for configuration management (CM) is a service that runs and manages
//! configuration management servers. You can use AWS OpsWorks CM to create and manage AWS
//! OpsWorks for Chef Automate and AWS OpsWorks for Puppet Enterprise servers, and add or
//! remove nodes for the servers to manage.

mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use aws_types::{Endpoint, Region};
pub use client::Client;
pub use config::Config;
pub use smithy_http::response::ResponseMetadata;
pub use smithy_http::result::SdkError;
