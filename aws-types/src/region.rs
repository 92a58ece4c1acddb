/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// An AWS region name such as `us-east-1`.
///
/// Stored in a service `Config` for the connector that signs requests. Endpoints are
/// not derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

#[cfg(test)]
mod test {
    use super::Region;

    #[test]
    fn static_and_owned_regions_compare_equal() {
        const WEST: Region = Region::from_static("us-west-2");
        assert_eq!(WEST, Region::new(String::from("us-west-2")));
        assert_eq!(WEST.to_string(), "us-west-2");
        assert_eq!(WEST.as_ref(), "us-west-2");
    }
}
