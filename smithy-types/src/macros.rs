/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros that generate the shapes of a service crate.
//!
//! Every structure field is declared as
//! `getter / setter: kind = "WireName"` where `kind` is one of
//!
//! * `string`: an `Option<String>`, read back as `Option<&str>`
//! * `value(T)`: a `Copy` scalar such as `i32` or `bool`, read back as `Option<T>`
//! * `shape(T)`: an owned shape (structure, string enum, `Instant`, `Blob`), read back as `Option<&T>`
//! * `list(T)`: an `Option<Vec<T>>`, read back as `Option<&[T]>`; the fluent builder method appends

/// Generate a structure shape, its getters, its `Display` and its builder module.
///
/// ```rust
/// smithy_types::structure! {
///     /// A key/value pair.
///     pub struct Tag in mod tag {
///         /// The tag key.
///         key / set_key: string = "Key",
///         value / set_value: string = "Value",
///     }
/// }
///
/// fn main() {
///     let tag = Tag::builder().key("Stage").value("prod").build();
///     assert_eq!(tag.key(), Some("Stage"));
///     assert_eq!(tag.to_string(), "{Key: Stage,Value: prod}");
/// }
/// ```
#[macro_export]
macro_rules! structure {
    (
        $(#[$meta:meta])*
        pub struct $name:ident in mod $module:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $kind:ident $(($ty:ty))? = $wire:literal
            ),* $(,)?
        }
    ) => {
        $crate::__structure_impl! {
            [fields]
            $(#[$meta])*
            pub struct $name in mod $module {
                $(
                    $(#[$fmeta])*
                    $field / $setter : $kind $(($ty))? = $wire
                ),*
            }
        }
    };
}

/// Generate a modeled service exception. A `message` field is always present; extra
/// fields use the [`structure!`] field syntax.
#[macro_export]
macro_rules! exception {
    (
        $(#[$meta:meta])*
        pub struct $name:ident in mod $module:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $kind:ident $(($ty:ty))? = $wire:literal
            ),* $(,)?
        }
    ) => {
        $crate::__structure_impl! {
            [exception]
            $(#[$meta])*
            pub struct $name in mod $module {
                /// The error message returned by the service.
                #[serde(alias = "Message")]
                message / set_message : string = "message"
                $(
                    ,
                    $(#[$fmeta])*
                    $field / $setter : $kind $(($ty))? = $wire
                )*
            }
        }

        impl ::std::error::Error for $name {}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __structure_impl {
    (
        [$display:ident]
        $(#[$meta:meta])*
        pub struct $name:ident in mod $module:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $kind:ident $(($ty:ty))? = $wire:literal
            ),*
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(
            ::std::clone::Clone,
            ::std::fmt::Debug,
            ::std::default::Default,
            ::std::cmp::PartialEq,
            ::std::cmp::Eq,
            ::std::hash::Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: ::std::option::Option<$crate::__field_type!($kind $(($ty))?)>,
            )*
        }

        impl $name {
            $(
                $crate::__field_getter!($kind $(($ty))? $field $wire);
            )*

            /// Creates a new builder-style object to manufacture this structure.
            pub fn builder() -> $module::Builder {
                $module::Builder::default()
            }
        }

        $crate::__structure_display!([$display] $name { $($field : $kind = $wire),* });

        /// See the owning structure.
        pub mod $module {
            #[allow(unused_imports)]
            use super::*;

            /// A builder for the owning structure.
            #[derive(
                ::std::clone::Clone,
                ::std::fmt::Debug,
                ::std::default::Default,
                ::std::cmp::PartialEq,
            )]
            pub struct Builder {
                $(
                    $field: ::std::option::Option<$crate::__field_type!($kind $(($ty))?)>,
                )*
            }

            impl Builder {
                $(
                    $crate::__builder_methods!($kind $(($ty))? $field $setter $wire);
                )*

                /// Consumes the builder and constructs the structure.
                pub fn build(self) -> super::$name {
                    super::$name {
                        $(
                            $field: self.$field,
                        )*
                    }
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_type {
    (string) => { ::std::string::String };
    (value($ty:ty)) => { $ty };
    (shape($ty:ty)) => { $ty };
    (list($ty:ty)) => { ::std::vec::Vec<$ty> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_getter {
    (string $field:ident $wire:literal) => {
        #[doc = concat!("Returns the `", $wire, "` field.")]
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    (value($ty:ty) $field:ident $wire:literal) => {
        #[doc = concat!("Returns the `", $wire, "` field.")]
        pub fn $field(&self) -> ::std::option::Option<$ty> {
            self.$field
        }
    };
    (shape($ty:ty) $field:ident $wire:literal) => {
        #[doc = concat!("Returns the `", $wire, "` field.")]
        pub fn $field(&self) -> ::std::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };
    (list($ty:ty) $field:ident $wire:literal) => {
        #[doc = concat!("Returns the `", $wire, "` list.")]
        pub fn $field(&self) -> ::std::option::Option<&[$ty]> {
            self.$field.as_deref()
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __builder_methods {
    (string $field:ident $setter:ident $wire:literal) => {
        #[doc = concat!("Sets `", $wire, "`.")]
        pub fn $field(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.$field = ::std::option::Option::Some(input.into());
            self
        }

        #[doc = concat!("Sets or clears `", $wire, "`.")]
        pub fn $setter(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.$field = input;
            self
        }
    };
    (value($ty:ty) $field:ident $setter:ident $wire:literal) => {
        #[doc = concat!("Sets `", $wire, "`.")]
        pub fn $field(mut self, input: $ty) -> Self {
            self.$field = ::std::option::Option::Some(input);
            self
        }

        #[doc = concat!("Sets or clears `", $wire, "`.")]
        pub fn $setter(mut self, input: ::std::option::Option<$ty>) -> Self {
            self.$field = input;
            self
        }
    };
    (shape($ty:ty) $field:ident $setter:ident $wire:literal) => {
        #[doc = concat!("Sets `", $wire, "`.")]
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.$field = ::std::option::Option::Some(input.into());
            self
        }

        #[doc = concat!("Sets or clears `", $wire, "`.")]
        pub fn $setter(mut self, input: ::std::option::Option<$ty>) -> Self {
            self.$field = input;
            self
        }
    };
    (list($ty:ty) $field:ident $setter:ident $wire:literal) => {
        #[doc = concat!("Appends an item to `", $wire, "`.")]
        ///
        /// The list is created on first use.
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.$field
                .get_or_insert_with(::std::vec::Vec::new)
                .push(input.into());
            self
        }

        #[doc = concat!("Replaces `", $wire, "`. `None` clears the list.")]
        pub fn $setter(mut self, input: ::std::option::Option<::std::vec::Vec<$ty>>) -> Self {
            self.$field = input;
            self
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __structure_display {
    ([fields] $name:ident { $($field:ident : $kind:ident = $wire:literal),* }) => {
        impl ::std::fmt::Display for $name {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut fields = $crate::display::DisplayFields::new(f);
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        $crate::__display_field!($kind fields $wire value);
                    }
                )*
                fields.finish()
            }
        }
    };
    ([exception] $name:ident { $($field:ident : $kind:ident = $wire:literal),* }) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(stringify!($name))?;
                if let ::std::option::Option::Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                ::std::result::Result::Ok(())
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __display_field {
    (list $fields:ident $wire:literal $value:ident) => {
        $fields.field($wire, &$crate::display::DisplayList($value));
    };
    ($kind:ident $fields:ident $wire:literal $value:ident) => {
        $fields.field($wire, $value);
    };
}

/// Generate a string enum: the listed variants plus `Unknown(String)` for values this
/// crate does not know about yet.
///
/// `from_value` is the strict lookup and rejects anything that is not an exact wire
/// value. `From<&str>` and `FromStr` keep unrecognized input in `Unknown`.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(
            ::std::clone::Clone,
            ::std::fmt::Debug,
            ::std::cmp::PartialEq,
            ::std::cmp::Eq,
            ::std::cmp::PartialOrd,
            ::std::cmp::Ord,
            ::std::hash::Hash,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = concat!("`", $wire, "`")]
                $variant,
            )+
            /// A value this version of the crate does not recognize.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Returns the wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Every wire value this enum recognizes, in declaration order.
            pub fn values() -> &'static [&'static str] {
                &[$($wire),+]
            }

            /// Strict lookup: fails unless `value` is exactly one of [`Self::values`].
            pub fn from_value(value: &str) -> ::std::result::Result<Self, $crate::UnknownVariantError> {
                match value {
                    $( $wire => ::std::result::Result::Ok($name::$variant), )+
                    other => ::std::result::Result::Err(
                        $crate::UnknownVariantError::new(stringify!($name), other),
                    ),
                }
            }
        }

        impl<'a> ::std::convert::From<&'a str> for $name {
            fn from(s: &'a str) -> Self {
                match $name::from_value(s) {
                    ::std::result::Result::Ok(known) => known,
                    ::std::result::Result::Err(_) => $name::Unknown(s.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(s: ::std::string::String) -> Self {
                match $name::from_value(&s) {
                    ::std::result::Result::Ok(known) => known,
                    ::std::result::Result::Err(_) => $name::Unknown(s),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok($name::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                ::std::result::Result::Ok($name::from(value))
            }
        }
    };
}

#[cfg(test)]
mod test {
    use crate::Instant;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    string_enum! {
        /// Colors used by the tests below.
        pub enum Color {
            Red = "RED",
            LightBlue = "light-blue",
        }
    }

    structure! {
        /// A test shape covering every field kind.
        pub struct Widget in mod widget {
            /// Name of the widget.
            name / set_name: string = "Name",
            count / set_count: value(i32) = "Count",
            color / set_color: shape(Color) = "Color",
            created_at / set_created_at: shape(Instant) = "CreatedAt",
            labels / set_labels: list(String) = "Labels",
        }
    }

    structure! {
        pub struct Empty in mod empty {}
    }

    exception! {
        /// Raised by tests.
        pub struct BrokenException in mod broken_exception {
            reason / set_reason: string = "reason",
        }
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_builds_are_equal_and_hash_equal() {
        let make = || {
            Widget::builder()
                .name("w")
                .count(3)
                .color(Color::Red)
                .labels("a")
                .build()
        };
        assert_eq!(make(), make());
        assert_eq!(hash_of(&make()), hash_of(&make()));
    }

    #[test]
    fn list_builder_appends_and_setter_replaces() {
        let widget = Widget::builder().labels("a").labels("b").build();
        assert_eq!(widget.labels(), Some(&["a".to_string(), "b".to_string()][..]));

        let cleared = Widget::builder().labels("a").set_labels(None).build();
        assert_eq!(cleared.labels(), None);

        let empty = Widget::builder().set_labels(Some(vec![])).build();
        assert_eq!(empty.labels(), Some(&[][..]));
        assert_ne!(empty, cleared);
    }

    #[test]
    fn display_skips_unset_fields() {
        let widget = Widget::builder()
            .name("w")
            .labels("a")
            .labels("b")
            .build();
        assert_eq!(widget.to_string(), "{Name: w,Labels: [a, b]}");
        assert_eq!(Empty::builder().build().to_string(), "{}");
    }

    #[test]
    fn enum_setter_accepts_wire_strings() {
        let by_variant = Widget::builder().color(Color::LightBlue).build();
        let by_string = Widget::builder().color("light-blue").build();
        assert_eq!(by_variant, by_string);
        let unknown = Widget::builder().color("GREEN").build();
        assert_eq!(unknown.color(), Some(&Color::Unknown("GREEN".into())));
    }

    #[test]
    fn strict_lookup_rejects_unknown_values() {
        for value in Color::values() {
            assert_eq!(Color::from_value(value).unwrap().as_str(), *value);
        }
        assert!(Color::from_value("bogus").is_err());
        assert!(Color::from_value("").is_err());
        assert!(Color::from_value("red").is_err());
        let err = Color::from_value("bogus").unwrap_err();
        assert_eq!(err.to_string(), "`bogus` is not a valid value for Color");
    }

    #[test]
    fn serde_uses_wire_names() {
        let widget = Widget::builder()
            .name("w")
            .color(Color::Red)
            .created_at(Instant::from_epoch_seconds(10))
            .build();
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Name": "w", "Color": "RED", "CreatedAt": 10})
        );
        let parsed: Widget =
            serde_json::from_str(r#"{"Name":"w","Color":"PURPLE","Extra":1}"#).unwrap();
        assert_eq!(parsed.name(), Some("w"));
        assert_eq!(parsed.color(), Some(&Color::Unknown("PURPLE".into())));
    }

    #[test]
    fn exception_display_and_aliases() {
        let err: BrokenException =
            serde_json::from_str(r#"{"Message":"it broke","reason":"gremlins"}"#).unwrap();
        assert_eq!(err.message(), Some("it broke"));
        assert_eq!(err.reason(), Some("gremlins"));
        assert_eq!(err.to_string(), "BrokenException: it broke");
        let bare = BrokenException::builder().build();
        assert_eq!(bare.to_string(), "BrokenException");
    }

    mod lookup {
        use super::Color;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lenient_lookup_preserves_input(value in ".*") {
                let parsed = Color::from(value.as_str());
                prop_assert_eq!(parsed.as_str(), value.as_str());
            }

            #[test]
            fn strict_lookup_accepts_only_known_values(value in "[A-Za-z-]{0,12}") {
                let known = Color::values().contains(&value.as_str());
                prop_assert_eq!(Color::from_value(&value).is_ok(), known);
            }
        }
    }
}
