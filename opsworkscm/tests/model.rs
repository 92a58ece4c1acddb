/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use opsworkscm::input::{CreateBackupInput, CreateServerInput, TagResourceInput};
use opsworkscm::model::{
    AccountAttribute, Backup, BackupStatus, BackupType, MaintenanceStatus, NodeAssociationStatus,
    ServerStatus, Tag,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag(key: &str, value: &str) -> Tag {
    Tag::builder().key(key).value(value).build()
}

#[test]
fn identical_builds_are_equal() {
    let build = || {
        Backup::builder()
            .backup_id("MyServer-20210305134922000")
            .backup_type(BackupType::Manual)
            .s3_data_size(12)
            .security_group_ids("sg-1")
            .status(BackupStatus::Ok)
            .build()
    };
    let (a, b) = (build(), build());
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn clearing_a_list_leaves_it_unset() {
    let input = TagResourceInput::builder()
        .resource_arn("arn:aws:opsworks-cm:us-east-1:123456789012:server/MyServer")
        .tags(tag("Stage", "prod"))
        .set_tags(None)
        .build();
    assert_eq!(input.tags(), None);
    assert_eq!(
        input.to_string(),
        "{ResourceArn: arn:aws:opsworks-cm:us-east-1:123456789012:server/MyServer}"
    );
}

#[test]
fn stored_lists_do_not_alias_the_callers_list() {
    let mut ids = vec!["sg-1".to_string()];
    let input = CreateServerInput::builder()
        .set_security_group_ids(Some(ids.clone()))
        .build();
    ids.push("sg-2".to_string());
    assert_eq!(input.security_group_ids(), Some(&["sg-1".to_string()][..]));
}

#[test]
fn list_builder_appends() {
    let input = CreateServerInput::builder()
        .security_group_ids("a")
        .security_group_ids("b")
        .build();
    assert_eq!(
        input.security_group_ids(),
        Some(&["a".to_string(), "b".to_string()][..])
    );
}

#[test]
fn enums_round_trip_their_wire_values() {
    for value in MaintenanceStatus::values() {
        assert_eq!(MaintenanceStatus::from_value(value).unwrap().as_str(), *value);
    }
    for value in BackupStatus::values() {
        assert_eq!(BackupStatus::from_value(value).unwrap().to_string(), *value);
    }
    for value in BackupType::values() {
        assert_eq!(BackupType::from_value(value).unwrap().as_str(), *value);
    }
    for value in NodeAssociationStatus::values() {
        assert_eq!(NodeAssociationStatus::from_value(value).unwrap().as_str(), *value);
    }
    for value in ServerStatus::values() {
        assert_eq!(ServerStatus::from_value(value).unwrap().as_str(), *value);
    }
    assert!(MaintenanceStatus::from_value("bogus").is_err());
    assert!(MaintenanceStatus::from_value("").is_err());
    assert!(MaintenanceStatus::from_value("success").is_err());
}

#[test]
fn enum_and_string_setters_are_equivalent() {
    let by_enum = Backup::builder().backup_type(BackupType::Manual).build();
    let by_string = Backup::builder().backup_type("MANUAL").build();
    assert_eq!(by_enum, by_string);
}

#[test]
fn create_backup_display_omits_unset_tags() {
    let input = CreateBackupInput::builder()
        .server_name("MyServer")
        .description("nightly")
        .build();
    assert_eq!(input.to_string(), "{ServerName: MyServer,Description: nightly}");
}

#[test]
fn an_extra_field_breaks_equality() {
    let name_only = AccountAttribute::builder().name("ServerLimit").build();
    let with_maximum = AccountAttribute::builder()
        .name("ServerLimit")
        .maximum(10)
        .build();
    assert_ne!(name_only, with_maximum);
    assert_ne!(with_maximum, name_only);
}

#[test]
fn empty_and_unset_lists_differ() {
    let unset = CreateBackupInput::builder().server_name("s").build();
    let empty = CreateBackupInput::builder()
        .server_name("s")
        .set_tags(Some(vec![]))
        .build();
    assert_ne!(unset, empty);
    assert_eq!(empty.to_string(), "{ServerName: s,Tags: []}");
    assert_eq!(serde_json::to_value(&unset).unwrap(), serde_json::json!({"ServerName": "s"}));
    assert_eq!(
        serde_json::to_value(&empty).unwrap(),
        serde_json::json!({"ServerName": "s", "Tags": []})
    );
}
