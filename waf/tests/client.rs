/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Uri;
use smithy_client::test_connection::TestConnection;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use waf::error::{
    CreateIpSetError, CreateWebAclMigrationStackError, GetChangeTokenError, ListRuleGroupsError,
    UpdateIpSetError,
};
use waf::input::{
    CreateIpSetInput, CreateWebAclMigrationStackInput, GetChangeTokenInput,
    GetChangeTokenStatusInput, GetSampledRequestsInput, ListRuleGroupsInput, UpdateIpSetInput,
};
use waf::model::{
    ChangeAction, ChangeTokenStatus, IpSetDescriptor, IpSetDescriptorType, IpSetUpdate,
    MigrationErrorType, ParameterExceptionField, ParameterExceptionReason, TimeWindow,
};
use waf::{Client, Config, SdkError};

const TOKEN: &str = "abcd12f2-46da-4fdb-b8d5-fbd4c466928f";

fn request(target: &str, content_length: &str, body: &'static str) -> http::Request<Bytes> {
    http::Request::builder()
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", format!("AWSWAF_20150824.{}", target))
        .header("content-length", content_length)
        .uri(Uri::from_static("https://waf.amazonaws.com/"))
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-requestid", "5f2f8f8e-6b5a-11e7-907b-a6b2c1e0d9a1")
        .body(body)
        .unwrap()
}

fn client(conn: TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
    Client::from_conf_conn(Config::builder().build(), conn)
}

#[tokio::test]
async fn change_token_flow() {
    let conn = TestConnection::new(vec![
        (
            request("GetChangeToken", "2", "{}"),
            response(200, r#"{"ChangeToken":"abcd12f2-46da-4fdb-b8d5-fbd4c466928f"}"#),
        ),
        (
            request(
                "CreateIPSet",
                "70",
                r#"{"Name":"office","ChangeToken":"abcd12f2-46da-4fdb-b8d5-fbd4c466928f"}"#,
            ),
            response(
                200,
                r#"{"ChangeToken":"abcd12f2-46da-4fdb-b8d5-fbd4c466928f","IPSet":{"IPSetId":"example1ds3t-46da-4fdb-b8d5-abc321j569j5","Name":"office","IPSetDescriptors":[]}}"#,
            ),
        ),
        (
            request(
                "GetChangeTokenStatus",
                "54",
                r#"{"ChangeToken":"abcd12f2-46da-4fdb-b8d5-fbd4c466928f"}"#,
            ),
            response(200, r#"{"ChangeTokenStatus":"PENDING"}"#),
        ),
    ]);
    let client = client(conn.clone());

    let token = client
        .get_change_token(GetChangeTokenInput::builder().build())
        .await
        .expect("token issued");
    assert_eq!(token.change_token(), Some(TOKEN));

    let created = client
        .create_ip_set(
            CreateIpSetInput::builder()
                .name("office")
                .set_change_token(token.change_token)
                .build(),
        )
        .await
        .expect("ip set created");
    let ip_set = created.ip_set().expect("ip set returned");
    assert_eq!(ip_set.ip_set_id(), Some("example1ds3t-46da-4fdb-b8d5-abc321j569j5"));
    assert_eq!(ip_set.ip_set_descriptors(), Some(&[][..]));
    assert_eq!(created.change_token(), Some(TOKEN));

    let status = client
        .get_change_token_status(GetChangeTokenStatusInput::builder().change_token(TOKEN).build())
        .await
        .unwrap();
    assert_eq!(status.change_token_status(), Some(&ChangeTokenStatus::Pending));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn reusing_a_change_token_is_stale_data() {
    let conn = TestConnection::new(vec![(
        http::Request::new(Bytes::new()),
        response(
            400,
            r#"{"__type":"com.amazonaws.waf#WAFStaleDataException","message":"The input token is no longer current."}"#,
        ),
    )]);
    let client = client(conn.clone());
    let update = IpSetUpdate::builder()
        .action(ChangeAction::Insert)
        .ip_set_descriptor(
            IpSetDescriptor::builder()
                .r#type(IpSetDescriptorType::Ipv4)
                .value("192.0.2.44/32")
                .build(),
        )
        .build();
    let err = client
        .update_ip_set(
            UpdateIpSetInput::builder()
                .ip_set_id("example1ds3t-46da-4fdb-b8d5-abc321j569j5")
                .change_token(TOKEN)
                .updates(update)
                .build(),
        )
        .await
        .unwrap_err();
    match &err {
        SdkError::ServiceError {
            err: UpdateIpSetError::WafStaleDataException(stale),
            ..
        } => assert_eq!(stale.message(), Some("The input token is no longer current.")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_service_fault());

    let sent: serde_json::Value =
        serde_json::from_slice(conn.requests()[0].actual.body()).unwrap();
    assert_eq!(
        sent["Updates"],
        serde_json::json!([{
            "Action": "INSERT",
            "IPSetDescriptor": {"Type": "IPV4", "Value": "192.0.2.44/32"}
        }])
    );
}

#[tokio::test]
async fn invalid_parameter_carries_its_field() {
    let conn = TestConnection::new(vec![(
        http::Request::new(Bytes::new()),
        response(
            400,
            r#"{"__type":"WAFInvalidParameterException","field":"IPSET_TYPE","parameter":"IPV5","reason":"INVALID_OPTION"}"#,
        ),
    )]);
    let err = client(conn)
        .create_ip_set(CreateIpSetInput::builder().name("office").change_token(TOKEN).build())
        .await
        .unwrap_err();
    match err.service_error() {
        Some(CreateIpSetError::WafInvalidParameterException(invalid)) => {
            assert_eq!(invalid.field(), Some(&ParameterExceptionField::IpsetType));
            assert_eq!(invalid.parameter(), Some("IPV5"));
            assert_eq!(invalid.reason(), Some(&ParameterExceptionReason::InvalidOption));
            assert_eq!(invalid.message(), None);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn migration_failures_explain_themselves() {
    let conn = TestConnection::new(vec![(
        http::Request::new(Bytes::new()),
        response(
            400,
            r#"{"__type":"WAFEntityMigrationException","Message":"bucket missing","MigrationErrorType":"S3_BUCKET_NOT_FOUND","MigrationErrorReason":"aws-waf-migration-demo"}"#,
        ),
    )]);
    let err = client(conn)
        .create_web_acl_migration_stack(
            CreateWebAclMigrationStackInput::builder()
                .web_acl_id("webacl-1")
                .s3_bucket_name("aws-waf-migration-demo")
                .ignore_unsupported_type(true)
                .build(),
        )
        .await
        .unwrap_err();
    match err.service_error() {
        Some(CreateWebAclMigrationStackError::WafEntityMigrationException(migration)) => {
            assert_eq!(
                migration.migration_error_type(),
                Some(&MigrationErrorType::S3BucketNotFound)
            );
            assert_eq!(migration.migration_error_reason(), Some("aws-waf-migration-demo"));
            assert_eq!(migration.message(), Some("bucket missing"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn internal_errors_are_reported_as_server_errors() {
    let conn = TestConnection::new(vec![
        (
            http::Request::new(Bytes::new()),
            http::Response::builder()
                .status(500)
                .header("x-amzn-errortype", "WAFInternalErrorException")
                .body("")
                .unwrap(),
        ),
        (
            http::Request::new(Bytes::new()),
            response(400, r#"{"__type":"WAFInvalidAccountException"}"#),
        ),
    ]);
    let client = client(conn);
    let err = client
        .get_change_token(GetChangeTokenInput::builder().build())
        .await
        .unwrap_err();
    let err = err.service_error().expect("modeled fault");
    assert!(matches!(err, GetChangeTokenError::WafInternalErrorException(_)));
    assert_eq!(err.error_kind(), Some(ErrorKind::ServerError));

    // ListRuleGroups does not model WAFInvalidAccountException.
    let err = client
        .list_rule_groups(ListRuleGroupsInput::builder().limit(10).build())
        .await
        .unwrap_err();
    match err.service_error() {
        Some(ListRuleGroupsError::Unhandled(generic)) => {
            assert_eq!(generic.code(), Some("WAFInvalidAccountException"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn sampled_requests_carry_timestamps() {
    let conn = TestConnection::new(vec![(
        http::Request::new(Bytes::new()),
        response(
            200,
            r#"{"PopulationSize":52,"SampledRequests":[{"Action":"BLOCK","Request":{"ClientIP":"192.0.2.44","Country":"US","HTTPVersion":"HTTP/1.1","Headers":[{"Name":"User-Agent","Value":"BadBot"}],"Method":"HEAD","URI":"/"},"Timestamp":1480099920.5,"Weight":1}],"TimeWindow":{"EndTime":1480100100,"StartTime":1480099800}}"#,
        ),
    )]);
    let client = client(conn.clone());
    let window = TimeWindow::builder()
        .start_time(smithy_types::Instant::from_epoch_seconds(1480099800))
        .end_time(smithy_types::Instant::from_epoch_seconds(1480100100))
        .build();
    let output = client
        .get_sampled_requests(
            GetSampledRequestsInput::builder()
                .web_acl_id("createwebacl-1472061481310")
                .rule_id("Default_Action")
                .time_window(window.clone())
                .max_items(100)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(output.population_size(), Some(52));
    assert_eq!(output.time_window(), Some(&window));
    let sample = &output.sampled_requests().unwrap()[0];
    assert_eq!(sample.action(), Some("BLOCK"));
    assert_eq!(sample.weight(), Some(1));
    assert_eq!(
        sample.timestamp().map(|t| t.epoch_fractional_seconds()),
        Some(1480099920.5)
    );
    let request = sample.request().unwrap();
    assert_eq!(request.client_ip(), Some("192.0.2.44"));
    assert_eq!(request.uri(), Some("/"));
    assert_eq!(request.http_version(), Some("HTTP/1.1"));
    assert_eq!(request.headers().unwrap()[0].value(), Some("BadBot"));

    let sent: serde_json::Value =
        serde_json::from_slice(conn.requests()[0].actual.body()).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({
            "WebAclId": "createwebacl-1472061481310",
            "RuleId": "Default_Action",
            "TimeWindow": {"StartTime": 1480099800, "EndTime": 1480100100},
            "MaxItems": 100
        })
    );
}

#[tokio::test]
async fn metadata_is_cached_per_input() {
    let conn = TestConnection::new(vec![
        (
            http::Request::new(Bytes::new()),
            response(200, r#"{"ChangeToken":"first"}"#),
        ),
        (
            http::Request::new(Bytes::new()),
            http::Response::builder()
                .status(400)
                .header("x-amzn-requestid", "second-request")
                .body(r#"{"__type":"WAFNonexistentItemException"}"#)
                .unwrap(),
        ),
    ]);
    let client = client(conn);
    let get_token = GetChangeTokenInput::builder().build();
    let status = GetChangeTokenStatusInput::builder().change_token("first").build();
    client.get_change_token(get_token.clone()).await.unwrap();
    client.get_change_token_status(status.clone()).await.unwrap_err();

    let metadata = client.cached_response_metadata(&get_token).unwrap();
    assert_eq!(metadata.operation(), "GetChangeToken");
    assert_eq!(metadata.service(), "waf");
    assert_eq!(metadata.status(), 200);

    let metadata = client.cached_response_metadata(&status).unwrap();
    assert_eq!(metadata.request_id(), Some("second-request"));
    assert_eq!(metadata.status(), 400);

    let other = GetChangeTokenStatusInput::builder().change_token("second").build();
    assert!(client.cached_response_metadata(&other).is_none());
}

#[tokio::test]
async fn shutdown_is_shared_by_clones() {
    let conn = TestConnection::new(vec![]);
    let client = client(conn.clone());
    let clone = client.clone();
    clone.shutdown();
    let err = client
        .get_change_token(GetChangeTokenInput::builder().build())
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(err.is_client_fault());
    assert!(conn.requests().is_empty());
}
