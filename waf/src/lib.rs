/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>AWS WAF Classic</fullname>
//!
//! This is the AWS WAF Classic API for protecting Amazon CloudFront distributions. It covers
//! conditions (byte match, geo match, IP, regex, size, SQL injection and cross-site
//! scripting sets), rules, rate-based rules, rule groups and web ACLs, along with logging
//! configuration, permission policies and tagging.

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
