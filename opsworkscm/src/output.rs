/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{
    AccountAttribute, Backup, EngineAttribute, NodeAssociationStatus, Server, ServerEvent, Tag,
};
use smithy_types::structure;

structure! {
    pub struct AssociateNodeOutput in mod associate_node_output {
        /// Contains a token which can be passed to the `DescribeNodeAssociationStatus` API
        /// call to get the status of the association request.
        node_association_status_token / set_node_association_status_token: string = "NodeAssociationStatusToken",
    }
}

structure! {
    pub struct CreateBackupOutput in mod create_backup_output {
        /// Backup created by request.
        backup / set_backup: shape(Backup) = "Backup",
    }
}

structure! {
    pub struct CreateServerOutput in mod create_server_output {
        /// The server that is created by the request.
        server / set_server: shape(Server) = "Server",
    }
}

structure! {
    pub struct DeleteBackupOutput in mod delete_backup_output {}
}

structure! {
    pub struct DeleteServerOutput in mod delete_server_output {}
}

structure! {
    pub struct DescribeAccountAttributesOutput in mod describe_account_attributes_output {
        /// The attributes that are currently set for the account.
        attributes / set_attributes: list(AccountAttribute) = "Attributes",
    }
}

structure! {
    pub struct DescribeBackupsOutput in mod describe_backups_output {
        /// Contains the response to a `DescribeBackups` request.
        backups / set_backups: list(Backup) = "Backups",
        /// This is not currently implemented for `DescribeBackups` requests.
        next_token / set_next_token: string = "NextToken",
    }
}

structure! {
    pub struct DescribeEventsOutput in mod describe_events_output {
        /// Contains the response to a `DescribeEvents` request.
        server_events / set_server_events: list(ServerEvent) = "ServerEvents",
        /// Pass this token to a later `DescribeEvents` call to get the next page of results.
        next_token / set_next_token: string = "NextToken",
    }
}

structure! {
    pub struct DescribeNodeAssociationStatusOutput in mod describe_node_association_status_output {
        /// The status of the association or disassociation request.
        node_association_status / set_node_association_status: shape(NodeAssociationStatus) = "NodeAssociationStatus",
        /// Attributes specific to the node association.
        engine_attributes / set_engine_attributes: list(EngineAttribute) = "EngineAttributes",
    }
}

structure! {
    pub struct DescribeServersOutput in mod describe_servers_output {
        /// Contains the response to a `DescribeServers` request.
        servers / set_servers: list(Server) = "Servers",
        /// This is not currently implemented for `DescribeServers` requests.
        next_token / set_next_token: string = "NextToken",
    }
}

structure! {
    pub struct DisassociateNodeOutput in mod disassociate_node_output {
        /// Contains a token which can be passed to the `DescribeNodeAssociationStatus` API
        /// call to get the status of the disassociation request.
        node_association_status_token / set_node_association_status_token: string = "NodeAssociationStatusToken",
    }
}

structure! {
    pub struct ExportServerEngineAttributeOutput in mod export_server_engine_attribute_output {
        /// The requested engine attribute pair with attribute name and value.
        engine_attribute / set_engine_attribute: shape(EngineAttribute) = "EngineAttribute",
        /// The server name used in the request.
        server_name / set_server_name: string = "ServerName",
    }
}

structure! {
    pub struct ListTagsForResourceOutput in mod list_tags_for_resource_output {
        /// Tags that have been applied to the resource.
        tags / set_tags: list(Tag) = "Tags",
        /// A token that you can use as the value of `NextToken` in later calls.
        next_token / set_next_token: string = "NextToken",
    }
}

structure! {
    pub struct RestoreServerOutput in mod restore_server_output {}
}

structure! {
    pub struct StartMaintenanceOutput in mod start_maintenance_output {
        /// Contains the response to a `StartMaintenance` request.
        server / set_server: shape(Server) = "Server",
    }
}

structure! {
    pub struct TagResourceOutput in mod tag_resource_output {}
}

structure! {
    pub struct UntagResourceOutput in mod untag_resource_output {}
}

structure! {
    pub struct UpdateServerOutput in mod update_server_output {
        /// Contains the response to a `UpdateServer` request.
        server / set_server: shape(Server) = "Server",
    }
}

structure! {
    pub struct UpdateServerEngineAttributesOutput in mod update_server_engine_attributes_output {
        /// Contains the response to an `UpdateServerEngineAttributes` request.
        server / set_server: shape(Server) = "Server",
    }
}
