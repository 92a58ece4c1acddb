/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Generate the error type of one operation: a variant per modeled fault, keyed by its
/// wire code, plus `Unhandled` for every fault the operation does not model.
///
/// A fault that should be reported as a server side problem is marked `=> ServerError`
/// (any [`ErrorKind`](smithy_types::retry::ErrorKind) variant may be named).
#[macro_export]
macro_rules! operation_error {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty) = $code:literal $(=> $kind:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(::std::fmt::Debug)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )*
            /// A fault this operation does not model.
            Unhandled($crate::__private::GenericError),
        }

        impl $name {
            /// Wire code of the fault.
            pub fn code(&self) -> ::std::option::Option<&str> {
                match self {
                    $( $name::$variant(_) => ::std::option::Option::Some($code), )*
                    $name::Unhandled(inner) => inner.code(),
                }
            }

            /// Message sent by the service, if any.
            pub fn message(&self) -> ::std::option::Option<&str> {
                match self {
                    $( $name::$variant(inner) => inner.message(), )*
                    $name::Unhandled(inner) => inner.message(),
                }
            }

            pub fn is_unhandled(&self) -> bool {
                ::std::matches!(self, $name::Unhandled(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $( $name::$variant(inner) => ::std::fmt::Display::fmt(inner, f), )*
                    $name::Unhandled(inner) => ::std::fmt::Display::fmt(inner, f),
                }
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    $( $name::$variant(inner) => ::std::option::Option::Some(inner), )*
                    $name::Unhandled(inner) => ::std::option::Option::Some(inner),
                }
            }
        }

        impl $crate::__private::ProvideErrorKind for $name {
            fn error_kind(&self) -> ::std::option::Option<$crate::__private::ErrorKind> {
                match self {
                    $( $name::$variant(_) => $crate::__error_kind!($($kind)?), )*
                    $name::Unhandled(_) => ::std::option::Option::None,
                }
            }

            fn code(&self) -> ::std::option::Option<&str> {
                $name::code(self)
            }
        }

        impl $crate::operation::ParseServiceError for $name {
            #[allow(unused_variables)]
            fn parse_service_error(
                generic: $crate::__private::GenericError,
                body: &[u8],
            ) -> ::std::result::Result<Self, $crate::__private::JsonError> {
                let code = generic.code().map(::std::borrow::ToOwned::to_owned);
                match code.as_deref() {
                    $(
                        ::std::option::Option::Some($code) => {
                            $crate::json::deserialize_body::<$ty>(body).map($name::$variant)
                        }
                    )*
                    _ => ::std::result::Result::Ok($name::Unhandled(generic)),
                }
            }
        }
    };
}

/// Bind each input shape of a service to its operation name, output shape and error type.
///
/// ```rust,ignore
/// smithy_http::operation_inputs! {
///     service = "opsworkscm";
///     CreateBackup: CreateBackupInput => CreateBackupOutput, CreateBackupError;
/// }
/// ```
#[macro_export]
macro_rules! operation_inputs {
    (
        service = $service:expr;
        $(
            $operation:ident : $input:ty => $output:ty, $error:ty;
        )*
    ) => {
        $(
            impl $crate::operation::OperationInput for $input {
                type Output = $output;
                type Error = $error;

                fn metadata() -> $crate::operation::Metadata {
                    $crate::operation::Metadata::new(stringify!($operation), $service)
                }
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __error_kind {
    () => {
        ::std::option::Option::None
    };
    ($kind:ident) => {
        ::std::option::Option::Some($crate::__private::ErrorKind::$kind)
    };
}

#[cfg(test)]
mod test {
    use serde::Deserialize;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};
    use smithy_types::Error as GenericError;
    use std::fmt;

    #[derive(Debug, Deserialize)]
    pub struct StaleData {
        message: Option<String>,
    }

    impl StaleData {
        fn message(&self) -> Option<&str> {
            self.message.as_deref()
        }
    }

    impl fmt::Display for StaleData {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StaleData")
        }
    }

    impl std::error::Error for StaleData {}

    operation_error! {
        pub enum UpdateThingError {
            StaleData(StaleData) = "StaleData",
            InternalError(StaleData) = "InternalError" => ServerError,
        }
    }

    operation_error! {
        pub enum NoFaultsError {}
    }

    use crate::operation::ParseServiceError;

    fn generic(code: &str) -> GenericError {
        GenericError::builder().code(code).message("m").build()
    }

    #[test]
    fn modeled_codes_select_variants() {
        let err = UpdateThingError::parse_service_error(generic("StaleData"), br#"{"message":"old"}"#)
            .unwrap();
        assert!(matches!(err, UpdateThingError::StaleData(_)));
        assert_eq!(err.message(), Some("old"));
        assert_eq!(err.code(), Some("StaleData"));
        assert_eq!(err.error_kind(), None);

        let err = UpdateThingError::parse_service_error(generic("InternalError"), b"{}").unwrap();
        assert_eq!(err.error_kind(), Some(ErrorKind::ServerError));
    }

    #[test]
    fn unknown_codes_are_unhandled() {
        let err = UpdateThingError::parse_service_error(generic("Mystery"), b"{}").unwrap();
        assert!(err.is_unhandled());
        assert_eq!(ProvideErrorKind::code(&err), Some("Mystery"));
        assert_eq!(err.message(), Some("m"));

        let err = NoFaultsError::parse_service_error(generic("StaleData"), b"{}").unwrap();
        assert!(err.is_unhandled());
    }

    #[derive(serde::Serialize, Hash)]
    struct UpdateThingInput {
        name: String,
    }

    operation_inputs! {
        service = "things";
        UpdateThing: UpdateThingInput => serde_json::Value, UpdateThingError;
    }

    #[test]
    fn inputs_carry_operation_metadata() {
        use crate::operation::OperationInput;
        let metadata = UpdateThingInput::metadata();
        assert_eq!(metadata.name(), "UpdateThing");
        assert_eq!(metadata.service(), "things");
    }

    #[test]
    fn modeled_code_with_wrong_shape_fails() {
        assert!(
            UpdateThingError::parse_service_error(generic("StaleData"), br#"{"message":5}"#)
                .is_err()
        );
    }
}
