/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The awsJson1.1 envelope: every operation is a `POST /` whose target is named by the
//! `x-amz-target` header and whose input and output are JSON documents.

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, Uri};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use smithy_types::Error as GenericError;

pub const CONTENT_TYPE_AWS_JSON_1_1: &str = "application/x-amz-json-1.1";
pub const X_AMZ_TARGET: &str = "x-amz-target";
pub const X_AMZN_REQUEST_ID: &str = "x-amzn-requestid";
pub const X_AMZN_ERROR_TYPE: &str = "x-amzn-errortype";

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to serialize input: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),
}

/// Builds the request for `target` (`<TargetPrefix>.<Operation>`) sent to `endpoint`.
pub fn serialize_request<I: Serialize>(
    input: &I,
    target: &str,
    endpoint: &Uri,
) -> Result<http::Request<Bytes>, BuildError> {
    let body = serde_json::to_vec(input)?;
    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(endpoint.clone())
        .header(CONTENT_TYPE, CONTENT_TYPE_AWS_JSON_1_1)
        .header(X_AMZ_TARGET, target)
        .header(CONTENT_LENGTH, body.len())
        .body(Bytes::from(body))?;
    Ok(request)
}

/// Deserializes a JSON body. An empty body reads as `{}`.
pub fn deserialize_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// Trim a trailing URL (beginning with `:`) and a namespace prefix (ending with `#`)
/// from a wire error code.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Reads the code, message and request id of an error response.
///
/// The `x-amzn-errortype` header wins over the body's `__type` field, which wins over a
/// `code` field.
pub fn parse_generic_error(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<GenericError, serde_json::Error> {
    let parsed: ErrorBody = deserialize_body(body)?;
    let header_code = headers
        .get(X_AMZN_ERROR_TYPE)
        .and_then(|value| value.to_str().ok());
    let code = header_code
        .or_else(|| parsed.error_type.as_deref())
        .or_else(|| parsed.code.as_deref())
        .map(sanitize_error_code);

    let mut builder = GenericError::builder();
    if let Some(code) = code {
        builder = builder.code(code);
    }
    if let Some(message) = parsed.message {
        builder = builder.message(message);
    }
    if let Some(request_id) = request_id(headers) {
        builder = builder.request_id(request_id);
    }
    Ok(builder.build())
}

pub fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(X_AMZN_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn error_code_sanitization() {
        assert_eq!(sanitize_error_code("aws.protocoltests#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }

    #[test]
    fn request_envelope() {
        let endpoint: Uri = "https://waf.amazonaws.com/".parse().unwrap();
        let request = serialize_request(
            &json!({"Name": "my-set", "ChangeToken": "abc"}),
            "AWSWAF_20150824.CreateIPSet",
            &endpoint,
        )
        .unwrap();
        assert_eq!(request.method(), &http::Method::POST);
        assert_eq!(request.uri(), &endpoint);
        assert_eq!(request.headers()[CONTENT_TYPE], CONTENT_TYPE_AWS_JSON_1_1);
        assert_eq!(request.headers()[X_AMZ_TARGET], "AWSWAF_20150824.CreateIPSet");
        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(body, json!({"Name": "my-set", "ChangeToken": "abc"}));
        assert_eq!(
            request.headers()[CONTENT_LENGTH],
            request.body().len().to_string().as_str()
        );
    }

    #[test]
    fn generic_error_from_body_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AMZN_REQUEST_ID, "bfe81a0a".parse().unwrap());
        let err = parse_generic_error(
            &headers,
            br#"{"__type":"com.amazonaws.waf#WAFStaleDataException","message":"stale"}"#,
        )
        .unwrap();
        assert_eq!(err.code(), Some("WAFStaleDataException"));
        assert_eq!(err.message(), Some("stale"));
        assert_eq!(err.request_id(), Some("bfe81a0a"));

        headers.insert(X_AMZN_ERROR_TYPE, "ThrottlingException:http://x".parse().unwrap());
        let err = parse_generic_error(&headers, br#"{"Message":"slow down"}"#).unwrap();
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("slow down"));
    }

    #[test]
    fn empty_error_body() {
        let err = parse_generic_error(&HeaderMap::new(), b"").unwrap();
        assert_eq!(err, GenericError::builder().build());
        assert!(parse_generic_error(&HeaderMap::new(), b"<html>").is_err());
    }

    proptest! {
        #[test]
        fn sanitized_codes_never_carry_urls(code in ".*") {
            let sanitized = sanitize_error_code(&code);
            prop_assert!(!sanitized.contains(':'));
            prop_assert!(code.contains(sanitized));
        }
    }
}
