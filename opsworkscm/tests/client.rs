/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Uri;
use opsworkscm::error::{CreateBackupError, DescribeAccountAttributesError, DescribeServersError};
use opsworkscm::input::{
    CreateBackupInput, DescribeAccountAttributesInput, DescribeServersInput, RestoreServerInput,
};
use opsworkscm::model::{BackupStatus, BackupType, ServerStatus};
use opsworkscm::{Client, Config, Region, SdkError};
use smithy_client::test_connection::TestConnection;
use smithy_types::retry::ProvideErrorKind;

fn conf() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-requestid", "8c6d28c3-0cf0-4b1d-b9b2-3b1f1a6b5d11")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn create_backup() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "OpsWorksCM_V2016_11_01.CreateBackup")
            .header("content-length", "49")
            .uri(Uri::from_static("https://opsworks-cm.us-east-1.amazonaws.com/"))
            .body(Bytes::from_static(
                br#"{"ServerName":"MyServer","Description":"nightly"}"#,
            ))
            .unwrap(),
        response(
            200,
            r#"{"Backup":{"BackupId":"MyServer-20210305134922000","BackupType":"MANUAL","Status":"IN_PROGRESS","CreatedAt":1614952162,"SecurityGroupIds":["sg-1"]}}"#,
        ),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let input = CreateBackupInput::builder()
        .server_name("MyServer")
        .description("nightly")
        .build();
    let output = client
        .create_backup(input.clone())
        .await
        .expect("request should succeed");
    let backup = output.backup().expect("backup is set");
    assert_eq!(backup.backup_id(), Some("MyServer-20210305134922000"));
    assert_eq!(backup.backup_type(), Some(&BackupType::Manual));
    assert_eq!(backup.status(), Some(&BackupStatus::InProgress));
    assert_eq!(backup.created_at().map(|t| t.epoch_seconds()), Some(1614952162));
    assert_eq!(backup.security_group_ids(), Some(&["sg-1".to_string()][..]));
    conn.assert_requests_match(&[]);

    let metadata = client
        .cached_response_metadata(&input)
        .expect("metadata is cached");
    assert_eq!(
        metadata.request_id(),
        Some("8c6d28c3-0cf0-4b1d-b9b2-3b1f1a6b5d11")
    );
    assert_eq!(metadata.operation(), "CreateBackup");
    assert_eq!(metadata.service(), "opsworkscm");
    assert_eq!(metadata.status(), 200);
}

#[tokio::test]
async fn modeled_faults_are_typed() {
    let conn = TestConnection::new(vec![
        (
            http::Request::new(Bytes::new()),
            response(
                400,
                r#"{"__type":"LimitExceededException","message":"Maximum number of backups reached"}"#,
            ),
        ),
        (
            http::Request::new(Bytes::new()),
            response(
                400,
                r#"{"__type":"ThrottlingException","message":"Rate exceeded"}"#,
            ),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn);
    let input = CreateBackupInput::builder().server_name("MyServer").build();

    let err = client.create_backup(input.clone()).await.unwrap_err();
    match err {
        SdkError::ServiceError {
            err: CreateBackupError::LimitExceededException(inner),
            raw,
        } => {
            assert_eq!(inner.message(), Some("Maximum number of backups reached"));
            assert_eq!(raw.status(), 400);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = client.create_backup(input).await.unwrap_err();
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(err.is_unhandled());
            assert_eq!(err.code(), Some("ThrottlingException"));
            assert_eq!(err.error_kind(), None);
            assert!(err.to_string().contains("Rate exceeded"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn faults_outside_the_operation_are_unhandled() {
    // ResourceAlreadyExistsException is modeled for CreateServer only.
    let conn = TestConnection::new(vec![(
        http::Request::new(Bytes::new()),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "ResourceAlreadyExistsException:http://internal.amazon.com/")
            .body(r#"{"message":"exists"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .describe_servers(DescribeServersInput::builder().server_name("MyServer").build())
        .await
        .unwrap_err();
    match err {
        SdkError::ServiceError {
            err: DescribeServersError::Unhandled(generic),
            ..
        } => {
            assert_eq!(generic.code(), Some("ResourceAlreadyExistsException"));
            assert_eq!(generic.message(), Some("exists"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn operations_without_modeled_faults() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .header("x-amz-target", "OpsWorksCM_V2016_11_01.DescribeAccountAttributes")
                .body(Bytes::from_static(b"{}"))
                .unwrap(),
            response(
                200,
                r#"{"Attributes":[{"Name":"ServerLimit","Maximum":10,"Used":2}]}"#,
            ),
        ),
        (
            http::Request::new(Bytes::new()),
            response(500, r#"{"__type":"InternalFailure"}"#),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn);
    let output = client
        .describe_account_attributes(DescribeAccountAttributesInput::builder().build())
        .await
        .unwrap();
    let attributes = output.attributes().unwrap();
    assert_eq!(attributes[0].name(), Some("ServerLimit"));
    assert_eq!(attributes[0].maximum(), Some(10));
    assert_eq!(attributes[0].used(), Some(2));

    let err = client
        .describe_account_attributes(DescribeAccountAttributesInput::builder().build())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::ServiceError {
            err: DescribeAccountAttributesError::Unhandled(_),
            ..
        }
    ));
}

#[tokio::test]
async fn empty_success_body() {
    let conn = TestConnection::new(vec![(http::Request::new(Bytes::new()), response(200, ""))]);
    let client = Client::from_conf_conn(conf(), conn);
    let output = client
        .restore_server(
            RestoreServerInput::builder()
                .backup_id("MyServer-20210305134922000")
                .server_name("MyServer")
                .build(),
        )
        .await
        .expect("empty body is an empty output");
    assert_eq!(output.to_string(), "{}");
}

#[tokio::test]
async fn malformed_response() {
    let conn = TestConnection::new(vec![(
        http::Request::new(Bytes::new()),
        // last `}` replaced with a space
        response(200, r#"{"Servers":[{"ServerName":"MyServer","Status":"HEALTHY"}] "#),
    )]);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .describe_servers(DescribeServersInput::builder().build())
        .await
        .expect_err("response was malformed");
    assert!(matches!(err, SdkError::ResponseError { .. }));
}

#[tokio::test]
async fn describe_servers_reads_unknown_status() {
    let conn = TestConnection::new(vec![(
        http::Request::new(Bytes::new()),
        response(
            200,
            r#"{"Servers":[{"ServerName":"a","Status":"HEALTHY"},{"ServerName":"b","Status":"HIBERNATING"}]}"#,
        ),
    )]);
    let client = Client::from_conf_conn(conf(), conn);
    let output = client
        .describe_servers(DescribeServersInput::builder().build())
        .await
        .unwrap();
    let servers = output.servers().unwrap();
    assert_eq!(servers[0].status(), Some(&ServerStatus::Healthy));
    assert_eq!(
        servers[1].status(),
        Some(&ServerStatus::Unknown("HIBERNATING".into()))
    );
}

#[tokio::test]
async fn shutdown_stops_further_calls() {
    let conn = TestConnection::new(vec![(http::Request::new(Bytes::new()), response(200, "{}"))]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let input = DescribeServersInput::builder().build();
    client.describe_servers(input.clone()).await.unwrap();

    client.shutdown();
    client.shutdown();
    let err = client.describe_servers(input.clone()).await.unwrap_err();
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(client.cached_response_metadata(&input).is_none());
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn metadata_cache_is_bounded() {
    let events = (0..3)
        .map(|_| (http::Request::new(Bytes::new()), response(200, "{}")))
        .collect();
    let conn = TestConnection::new(events);
    let client = Client::from_conf_conn(
        Config::builder().metadata_cache_capacity(2).build(),
        conn,
    );
    let inputs: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|name| DescribeServersInput::builder().server_name(*name).build())
        .collect();
    for input in &inputs {
        client.describe_servers(input.clone()).await.unwrap();
    }
    assert!(client.cached_response_metadata(&inputs[0]).is_none());
    assert!(client.cached_response_metadata(&inputs[1]).is_some());
    assert!(client.cached_response_metadata(&inputs[2]).is_some());
}

#[test]
fn clients_are_send_and_sync() {
    fn is_send_sync<T: Send + Sync>(_: &T) {}
    let client = Client::from_conf_conn(conf(), TestConnection::<&'static str>::new(vec![]));
    is_send_sync(&client);
    is_send_sync(&client.clone());
}
