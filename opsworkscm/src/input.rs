/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs.
//!
//! Server names are 1 to 40 characters matching `[a-zA-Z][a-zA-Z0-9\-]*`. Backup ids are at
//! most 79 characters matching `[a-zA-Z][a-zA-Z0-9\-\.\:]*`. Most other strings are at
//! most 10000 characters. None of these limits are checked before a request is sent.

use crate::model::{EngineAttribute, Tag};
use smithy_types::structure;

structure! {
    pub struct AssociateNodeInput in mod associate_node_input {
        /// The name of the server with which to associate the node.
        server_name / set_server_name: string = "ServerName",
        /// The name of the node.
        ///
        /// Pattern: `^[\-\p{Alnum}_:.]+$`
        node_name / set_node_name: string = "NodeName",
        /// Engine attributes used for associating the node, such as `CHEF_ORGANIZATION`
        /// and `CHEF_NODE_PUBLIC_KEY` for Chef servers, or `PUPPET_NODE_CSR` for Puppet servers.
        engine_attributes / set_engine_attributes: list(EngineAttribute) = "EngineAttributes",
    }
}

structure! {
    pub struct CreateBackupInput in mod create_backup_input {
        /// The name of the server that you want to back up.
        server_name / set_server_name: string = "ServerName",
        /// A user-defined description of the backup.
        description / set_description: string = "Description",
        /// A map that contains tag keys and tag values to attach to the backup. At most 50 tags.
        tags / set_tags: list(Tag) = "Tags",
    }
}

structure! {
    pub struct CreateServerInput in mod create_server_input {
        /// Associate a public IP address with a server that you are launching. Valid values
        /// are `true` or `false`. The default value is `true`.
        associate_public_ip_address / set_associate_public_ip_address: value(bool) = "AssociatePublicIpAddress",
        /// An optional public endpoint of a server, such as `https://aws.my-company.com`.
        ///
        /// Length: at most 253.
        custom_domain / set_custom_domain: string = "CustomDomain",
        /// A PEM-formatted HTTPS certificate. Required if `CustomDomain` is set.
        ///
        /// Length: at most 2097152.
        custom_certificate / set_custom_certificate: string = "CustomCertificate",
        /// A private key in PEM format for connecting to the server by using HTTPS.
        ///
        /// Length: at most 4096.
        custom_private_key / set_custom_private_key: string = "CustomPrivateKey",
        /// Enable or disable scheduled backups.
        disable_automated_backup / set_disable_automated_backup: value(bool) = "DisableAutomatedBackup",
        /// The configuration management engine to use. Valid values include `ChefAutomate` and `Puppet`.
        engine / set_engine: string = "Engine",
        /// The engine model of the server.
        engine_model / set_engine_model: string = "EngineModel",
        /// The major release version of the engine that you want to use.
        engine_version / set_engine_version: string = "EngineVersion",
        /// Optional engine attributes on a specified server.
        engine_attributes / set_engine_attributes: list(EngineAttribute) = "EngineAttributes",
        /// The number of automated backups that you want to keep. At least 1.
        backup_retention_count / set_backup_retention_count: value(i32) = "BackupRetentionCount",
        /// The name of the server.
        server_name / set_server_name: string = "ServerName",
        /// The ARN of the instance profile that your Amazon EC2 instances use.
        ///
        /// Pattern: `arn:aws:iam::[0-9]{12}:instance-profile/.*`
        instance_profile_arn / set_instance_profile_arn: string = "InstanceProfileArn",
        /// The Amazon EC2 instance type to use. For example, `m5.large`.
        instance_type / set_instance_type: string = "InstanceType",
        /// The Amazon EC2 key pair to set for the instance.
        key_pair / set_key_pair: string = "KeyPair",
        /// The start time for a one-hour period each week during which AWS OpsWorks CM
        /// performs maintenance on the instance, in `DDD:HH:MM` format.
        preferred_maintenance_window / set_preferred_maintenance_window: string = "PreferredMaintenanceWindow",
        /// The start time for a one-hour period during which AWS OpsWorks CM backs up
        /// application-level data, in `HH:MM` or `DDD:HH:MM` format.
        preferred_backup_window / set_preferred_backup_window: string = "PreferredBackupWindow",
        /// A list of security group IDs to attach to the Amazon EC2 instance.
        security_group_ids / set_security_group_ids: list(String) = "SecurityGroupIds",
        /// The service role that the AWS OpsWorks CM service backend uses to work with your account.
        ///
        /// Pattern: `arn:aws:iam::[0-9]{12}:role/.*`
        service_role_arn / set_service_role_arn: string = "ServiceRoleArn",
        /// The IDs of subnets in which to launch the server EC2 instance.
        subnet_ids / set_subnet_ids: list(String) = "SubnetIds",
        /// A map that contains tag keys and tag values to attach to the server.
        tags / set_tags: list(Tag) = "Tags",
        /// If you specify this field, AWS OpsWorks CM creates the server by using the backup
        /// represented by `BackupId`.
        backup_id / set_backup_id: string = "BackupId",
    }
}

structure! {
    pub struct DeleteBackupInput in mod delete_backup_input {
        /// The ID of the backup to delete.
        backup_id / set_backup_id: string = "BackupId",
    }
}

structure! {
    pub struct DeleteServerInput in mod delete_server_input {
        /// The ID of the server to delete.
        server_name / set_server_name: string = "ServerName",
    }
}

structure! {
    pub struct DescribeAccountAttributesInput in mod describe_account_attributes_input {}
}

structure! {
    pub struct DescribeBackupsInput in mod describe_backups_input {
        /// Describes a single backup.
        backup_id / set_backup_id: string = "BackupId",
        /// Returns backups for the server with the specified ServerName.
        server_name / set_server_name: string = "ServerName",
        /// This is not currently implemented for `DescribeBackups` requests.
        next_token / set_next_token: string = "NextToken",
        /// This is not currently implemented for `DescribeBackups` requests. At least 1.
        max_results / set_max_results: value(i32) = "MaxResults",
    }
}

structure! {
    pub struct DescribeEventsInput in mod describe_events_input {
        /// The name of the server for which you want to view events.
        server_name / set_server_name: string = "ServerName",
        /// The token returned by a previous call, used to get the next page of results.
        next_token / set_next_token: string = "NextToken",
        /// The maximum number of results to return. At least 1.
        max_results / set_max_results: value(i32) = "MaxResults",
    }
}

structure! {
    pub struct DescribeNodeAssociationStatusInput in mod describe_node_association_status_input {
        /// The token returned in either the AssociateNodeResponse or the DisassociateNodeResponse.
        node_association_status_token / set_node_association_status_token: string = "NodeAssociationStatusToken",
        /// The name of the server from which to disassociate the node.
        server_name / set_server_name: string = "ServerName",
    }
}

structure! {
    pub struct DescribeServersInput in mod describe_servers_input {
        /// Describes the server with the specified ServerName.
        server_name / set_server_name: string = "ServerName",
        /// This is not currently implemented for `DescribeServers` requests.
        next_token / set_next_token: string = "NextToken",
        /// This is not currently implemented for `DescribeServers` requests.
        max_results / set_max_results: value(i32) = "MaxResults",
    }
}

structure! {
    pub struct DisassociateNodeInput in mod disassociate_node_input {
        /// The name of the server from which to disassociate the node.
        server_name / set_server_name: string = "ServerName",
        /// The name of the client node.
        node_name / set_node_name: string = "NodeName",
        /// Engine attributes that are used for disassociating the node.
        engine_attributes / set_engine_attributes: list(EngineAttribute) = "EngineAttributes",
    }
}

structure! {
    pub struct ExportServerEngineAttributeInput in mod export_server_engine_attribute_input {
        /// The name of the export attribute. Currently, the supported export attribute is `Userdata`.
        export_attribute_name / set_export_attribute_name: string = "ExportAttributeName",
        /// The name of the server from which you are exporting the attribute.
        server_name / set_server_name: string = "ServerName",
        /// The list of engine attributes.
        input_attributes / set_input_attributes: list(EngineAttribute) = "InputAttributes",
    }
}

structure! {
    pub struct ListTagsForResourceInput in mod list_tags_for_resource_input {
        /// The Amazon Resource Number (ARN) of an AWS OpsWorks for Chef Automate or AWS
        /// OpsWorks for Puppet Enterprise server for which you want to show applied tags.
        resource_arn / set_resource_arn: string = "ResourceArn",
        /// The token returned by a previous call, used to get the next page of results.
        next_token / set_next_token: string = "NextToken",
        /// The maximum number of results to return. At least 1.
        max_results / set_max_results: value(i32) = "MaxResults",
    }
}

structure! {
    pub struct RestoreServerInput in mod restore_server_input {
        /// The ID of the backup that you want to use to restore a server.
        backup_id / set_backup_id: string = "BackupId",
        /// The name of the server that you want to restore.
        server_name / set_server_name: string = "ServerName",
        /// The type of instance to restore. If you do not specify an instance type, the server
        /// uses the instance type of the backed-up server.
        instance_type / set_instance_type: string = "InstanceType",
        /// The name of the key pair to set on the new EC2 instance.
        key_pair / set_key_pair: string = "KeyPair",
    }
}

structure! {
    pub struct StartMaintenanceInput in mod start_maintenance_input {
        /// The name of the server on which to run maintenance.
        server_name / set_server_name: string = "ServerName",
        /// Engine attributes that are specific to the server on which you want to run maintenance.
        engine_attributes / set_engine_attributes: list(EngineAttribute) = "EngineAttributes",
    }
}

structure! {
    pub struct TagResourceInput in mod tag_resource_input {
        /// The Amazon Resource Number (ARN) of a resource to which you want to apply tags.
        resource_arn / set_resource_arn: string = "ResourceArn",
        /// A map that contains tag keys and tag values to attach to the resource.
        tags / set_tags: list(Tag) = "Tags",
    }
}

structure! {
    pub struct UntagResourceInput in mod untag_resource_input {
        /// The Amazon Resource Number (ARN) of a resource from which you want to remove tags.
        resource_arn / set_resource_arn: string = "ResourceArn",
        /// The keys of tags that you want to remove.
        tag_keys / set_tag_keys: list(String) = "TagKeys",
    }
}

structure! {
    pub struct UpdateServerInput in mod update_server_input {
        /// Setting `DisableAutomatedBackup` to `true` disables automated or scheduled backups.
        disable_automated_backup / set_disable_automated_backup: value(bool) = "DisableAutomatedBackup",
        /// Sets the number of automated backups that you want to keep.
        backup_retention_count / set_backup_retention_count: value(i32) = "BackupRetentionCount",
        /// The name of the server to update.
        server_name / set_server_name: string = "ServerName",
        preferred_maintenance_window / set_preferred_maintenance_window: string = "PreferredMaintenanceWindow",
        preferred_backup_window / set_preferred_backup_window: string = "PreferredBackupWindow",
    }
}

structure! {
    pub struct UpdateServerEngineAttributesInput in mod update_server_engine_attributes_input {
        /// The name of the server to update.
        server_name / set_server_name: string = "ServerName",
        /// The name of the engine attribute to update.
        attribute_name / set_attribute_name: string = "AttributeName",
        /// The value to set for the attribute.
        attribute_value / set_attribute_value: string = "AttributeValue",
    }
}
