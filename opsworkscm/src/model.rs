/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared by the inputs and outputs of the OpsWorks CM operations.

use smithy_types::{string_enum, structure, Instant};

string_enum! {
    /// Lifecycle state of a [`Backup`].
    pub enum BackupStatus {
        InProgress = "IN_PROGRESS",
        Ok = "OK",
        Failed = "FAILED",
        Deleting = "DELETING",
    }
}

string_enum! {
    /// Whether a backup was taken on schedule or on request.
    pub enum BackupType {
        Automated = "AUTOMATED",
        Manual = "MANUAL",
    }
}

string_enum! {
    /// Outcome of the most recent maintenance run of a server.
    pub enum MaintenanceStatus {
        Success = "SUCCESS",
        Failed = "FAILED",
    }
}

string_enum! {
    /// The status of the association or disassociation request.
    pub enum NodeAssociationStatus {
        Success = "SUCCESS",
        Failed = "FAILED",
        InProgress = "IN_PROGRESS",
    }
}

string_enum! {
    /// Lifecycle state of a [`Server`].
    pub enum ServerStatus {
        BackingUp = "BACKING_UP",
        ConnectionLost = "CONNECTION_LOST",
        Creating = "CREATING",
        Deleting = "DELETING",
        Modifying = "MODIFYING",
        Failed = "FAILED",
        Healthy = "HEALTHY",
        Running = "RUNNING",
        Restoring = "RESTORING",
        Setup = "SETUP",
        UnderMaintenance = "UNDER_MAINTENANCE",
        Unhealthy = "UNHEALTHY",
        Terminated = "TERMINATED",
    }
}

structure! {
    /// Stores account attributes.
    pub struct AccountAttribute in mod account_attribute {
        /// The attribute name. The following are supported attribute names.
        ///
        /// * `ServerLimit`: The number of current servers/maximum number of servers allowed.
        /// * `ManualBackupLimit`: The number of current manual backups/maximum number of
        ///   backups allowed.
        name / set_name: string = "Name",
        /// The maximum allowed value.
        maximum / set_maximum: value(i32) = "Maximum",
        /// The current usage, such as the current number of servers that are associated with the account.
        used / set_used: value(i32) = "Used",
    }
}

structure! {
    /// Describes a single backup.
    pub struct Backup in mod backup {
        /// The ARN of the backup.
        ///
        /// Length: at most 10000.
        backup_arn / set_backup_arn: string = "BackupArn",
        /// The generated ID of the backup. Example: `myServerName-yyyyMMddHHmmssSSS`
        ///
        /// Length: at most 79. Pattern: `[a-zA-Z][a-zA-Z0-9\-\.\:]*`
        backup_id / set_backup_id: string = "BackupId",
        /// The backup type.
        backup_type / set_backup_type: shape(BackupType) = "BackupType",
        /// The time stamp when the backup was created in the database.
        created_at / set_created_at: shape(Instant) = "CreatedAt",
        /// A user-provided description for a manual backup. This field is empty for automated backups.
        description / set_description: string = "Description",
        /// The engine type that is obtained from the server when the backup is created.
        engine / set_engine: string = "Engine",
        /// The engine model that is obtained from the server when the backup is created.
        engine_model / set_engine_model: string = "EngineModel",
        /// The engine version that is obtained from the server when the backup is created.
        engine_version / set_engine_version: string = "EngineVersion",
        /// The EC2 instance profile ARN that is obtained from the server when the backup is created.
        instance_profile_arn / set_instance_profile_arn: string = "InstanceProfileArn",
        /// The instance type that is obtained from the server when the backup is created.
        instance_type / set_instance_type: string = "InstanceType",
        /// The key pair that is obtained from the server when the backup is created.
        key_pair / set_key_pair: string = "KeyPair",
        /// The preferred backup period that is obtained from the server when the backup is created.
        preferred_backup_window / set_preferred_backup_window: string = "PreferredBackupWindow",
        /// The preferred maintenance period that is obtained from the server when the backup is created.
        preferred_maintenance_window / set_preferred_maintenance_window: string = "PreferredMaintenanceWindow",
        /// This field is deprecated and is no longer used.
        s3_data_size / set_s3_data_size: value(i32) = "S3DataSize",
        /// This field is deprecated and is no longer used.
        s3_data_url / set_s3_data_url: string = "S3DataUrl",
        /// The Amazon S3 URL of the backup's log file.
        s3_log_url / set_s3_log_url: string = "S3LogUrl",
        /// The security group IDs that are obtained from the server when the backup is created.
        security_group_ids / set_security_group_ids: list(String) = "SecurityGroupIds",
        /// The name of the server from which the backup was made.
        ///
        /// Length: 1 to 40. Pattern: `[a-zA-Z][a-zA-Z0-9\-]*`
        server_name / set_server_name: string = "ServerName",
        /// The service role ARN that is obtained from the server when the backup is created.
        service_role_arn / set_service_role_arn: string = "ServiceRoleArn",
        /// The status of a backup while in progress.
        status / set_status: shape(BackupStatus) = "Status",
        /// An informational message about backup status.
        status_description / set_status_description: string = "StatusDescription",
        /// The subnet IDs that are obtained from the server when the backup is created.
        subnet_ids / set_subnet_ids: list(String) = "SubnetIds",
        /// The version of AWS OpsWorks CM-specific tools that is obtained from the server when the backup is created.
        tools_version / set_tools_version: string = "ToolsVersion",
        /// The IAM user ARN of the requester for manual backups. This field is empty for automated backups.
        user_arn / set_user_arn: string = "UserArn",
    }
}

structure! {
    /// A name and value pair that is specific to the engine of the server.
    pub struct EngineAttribute in mod engine_attribute {
        /// The name of the engine attribute.
        name / set_name: string = "Name",
        /// The value of the engine attribute.
        value / set_value: string = "Value",
    }
}

structure! {
    /// Describes a configuration management server.
    pub struct Server in mod server {
        /// Associate a public IP address with a server that you are launching.
        associate_public_ip_address / set_associate_public_ip_address: value(bool) = "AssociatePublicIpAddress",
        /// The number of automated backups to keep.
        backup_retention_count / set_backup_retention_count: value(i32) = "BackupRetentionCount",
        /// The name of the server.
        server_name / set_server_name: string = "ServerName",
        /// Time stamp of server creation.
        created_at / set_created_at: shape(Instant) = "CreatedAt",
        /// The ARN of the CloudFormation stack that was used to create the server.
        cloud_formation_stack_arn / set_cloud_formation_stack_arn: string = "CloudFormationStackArn",
        /// An optional public endpoint of a server, such as `https://aws.my-company.com`.
        custom_domain / set_custom_domain: string = "CustomDomain",
        /// Disables automated backups. The number of stored backups is dependent on the value of `PreferredBackupCount`.
        disable_automated_backup / set_disable_automated_backup: value(bool) = "DisableAutomatedBackup",
        /// A DNS name that can be used to access the engine.
        endpoint / set_endpoint: string = "Endpoint",
        /// The engine type of the server. Valid values in this release include `ChefAutomate` and `Puppet`.
        engine / set_engine: string = "Engine",
        /// The engine model of the server. Valid values in this release include `Monolithic` for Puppet and `Single` for Chef.
        engine_model / set_engine_model: string = "EngineModel",
        /// The response of a createServer() request returns the master credential to access the server in EngineAttributes.
        engine_attributes / set_engine_attributes: list(EngineAttribute) = "EngineAttributes",
        /// The engine version of the server.
        engine_version / set_engine_version: string = "EngineVersion",
        /// The instance profile ARN of the server.
        instance_profile_arn / set_instance_profile_arn: string = "InstanceProfileArn",
        /// The instance type for the server, as specified in the CloudFormation stack.
        instance_type / set_instance_type: string = "InstanceType",
        /// The key pair associated with the server.
        key_pair / set_key_pair: string = "KeyPair",
        /// The status of the most recent server maintenance run.
        maintenance_status / set_maintenance_status: shape(MaintenanceStatus) = "MaintenanceStatus",
        /// The preferred maintenance period specified for the server.
        preferred_maintenance_window / set_preferred_maintenance_window: string = "PreferredMaintenanceWindow",
        /// The preferred backup period specified for the server.
        preferred_backup_window / set_preferred_backup_window: string = "PreferredBackupWindow",
        /// The security group IDs for the server, as specified in the CloudFormation stack.
        security_group_ids / set_security_group_ids: list(String) = "SecurityGroupIds",
        /// The service role ARN used to create the server.
        service_role_arn / set_service_role_arn: string = "ServiceRoleArn",
        /// The server's status.
        status / set_status: shape(ServerStatus) = "Status",
        /// Depending on the server status, this field has either a human-readable message
        /// (such as a create or backup error), or an escaped block of JSON.
        status_reason / set_status_reason: string = "StatusReason",
        /// The subnet IDs specified in a CreateServer request.
        subnet_ids / set_subnet_ids: list(String) = "SubnetIds",
        /// The ARN of the server.
        server_arn / set_server_arn: string = "ServerArn",
    }
}

structure! {
    /// An event that is related to the server, such as the start of maintenance or backup.
    pub struct ServerEvent in mod server_event {
        /// The time when the event occurred.
        created_at / set_created_at: shape(Instant) = "CreatedAt",
        /// The name of the server on or for which the event occurred.
        server_name / set_server_name: string = "ServerName",
        /// A human-readable informational or status message.
        message / set_message: string = "Message",
        /// The Amazon S3 URL of the event's log file.
        log_url / set_log_url: string = "LogUrl",
    }
}

structure! {
    /// A map that contains tag keys and tag values to attach to an AWS OpsWorks for Chef
    /// Automate or AWS OpsWorks for Puppet Enterprise server.
    pub struct Tag in mod tag {
        /// A tag key, such as `Stage` or `Name`.
        ///
        /// Length: 1 to 128. Pattern: `^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$`
        key / set_key: string = "Key",
        /// An optional tag value, such as `Production` or `test-owcm-server`.
        ///
        /// Length: at most 256.
        value / set_value: string = "Value",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn backup_status_wire_values() {
        assert_eq!(BackupStatus::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(
            BackupStatus::values(),
            &["IN_PROGRESS", "OK", "FAILED", "DELETING"]
        );
        assert!(BackupStatus::from_value("in_progress").is_err());
    }

    #[test]
    fn server_status_unknown_values_survive_deserialization() {
        let server: Server =
            serde_json::from_str(r#"{"ServerName":"s","Status":"HIBERNATING"}"#).unwrap();
        assert_eq!(
            server.status(),
            Some(&ServerStatus::Unknown("HIBERNATING".into()))
        );
        assert!(ServerStatus::from_value("HIBERNATING").is_err());
    }

    #[test]
    fn nested_shapes_display() {
        let server = Server::builder()
            .server_name("s")
            .engine_attributes(EngineAttribute::builder().name("CHEF_PIVOTAL_KEY").build())
            .status(ServerStatus::Healthy)
            .build();
        assert_eq!(
            server.to_string(),
            "{ServerName: s,EngineAttributes: [{Name: CHEF_PIVOTAL_KEY}],Status: HEALTHY}"
        );
    }
}
