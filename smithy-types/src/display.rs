/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Diagnostic rendering shared by generated structures.
//!
//! Structures render as `{Name: value,Other: value}`, listing only the fields that are
//! set, in declaration order. Lists render as `[a, b]`.

use std::fmt;

/// Incremental writer for a structure's `Display` output, in the manner of
/// [`std::fmt::DebugStruct`].
#[must_use = "must eventually call `finish()`"]
pub struct DisplayFields<'a, 'b: 'a> {
    f: &'a mut fmt::Formatter<'b>,
    has_fields: bool,
    result: fmt::Result,
}

impl<'a, 'b: 'a> DisplayFields<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        DisplayFields {
            f,
            has_fields: false,
            result,
        }
    }

    /// Writes `name: value`, preceded by a comma unless this is the first field.
    pub fn field(&mut self, name: &str, value: &dyn fmt::Display) -> &mut Self {
        if self.result.is_ok() {
            let separator = if self.has_fields { "," } else { "" };
            self.result = write!(self.f, "{}{}: {}", separator, name, value);
        }
        self.has_fields = true;
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

/// Renders a slice as `[a, b, c]`.
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<'a, T: fmt::Display> fmt::Display for DisplayList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod test {
    use super::{DisplayFields, DisplayList};
    use std::fmt;

    struct Pair {
        name: Option<&'static str>,
        values: Option<Vec<i32>>,
    }

    impl fmt::Display for Pair {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut fields = DisplayFields::new(f);
            if let Some(name) = &self.name {
                fields.field("Name", name);
            }
            if let Some(values) = &self.values {
                fields.field("Values", &DisplayList(values));
            }
            fields.finish()
        }
    }

    #[test]
    fn no_trailing_separator() {
        let pair = Pair {
            name: Some("a"),
            values: Some(vec![1, 2]),
        };
        assert_eq!(pair.to_string(), "{Name: a,Values: [1, 2]}");
    }

    #[test]
    fn unset_fields_are_skipped() {
        let pair = Pair {
            name: None,
            values: Some(vec![]),
        };
        assert_eq!(pair.to_string(), "{Values: []}");
        let empty = Pair {
            name: None,
            values: None,
        };
        assert_eq!(empty.to_string(), "{}");
    }
}
