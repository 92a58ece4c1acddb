/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::{Config, TARGET_PREFIX};
use crate::error::*;
use crate::input::*;
use crate::output::*;
use smithy_client::bounds::SmithyConnector;
use smithy_http::operation::OperationInput;
use smithy_http::response::ResponseMetadata;
use smithy_http::result::SdkError;
use std::sync::Arc;

/// Client for AWS OpsWorks CM.
///
/// `C` is the connector that carries requests to the service, see
/// [`smithy_client::Client`]. Clones share the connector state, the shutdown flag and the
/// response-metadata cache.
#[derive(Debug)]
pub struct Client<C> {
    inner: smithy_client::Client<C>,
    conf: Arc<Config>,
}

impl<C: Clone> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            inner: self.inner.clone(),
            conf: self.conf.clone(),
        }
    }
}

impl<C> Client<C> {
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let inner = smithy_client::Builder::new()
            .connector(conn)
            .metadata_cache_capacity(conf.metadata_cache_capacity())
            .build();
        tracing::debug!(endpoint = %conf.endpoint(), "created opsworkscm client");
        Client {
            inner,
            conf: Arc::new(conf),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }

    /// Releases the client. Later calls fail without being sent. Calling this again has no effect.
    pub fn shutdown(&self) {
        self.inner.shutdown()
    }

    /// Diagnostic metadata of the most recent call made with an input equal to `input`.
    ///
    /// Only a bounded number of recent calls is retained, so this returns `None` for calls
    /// that were never made or that have since been evicted.
    pub fn cached_response_metadata<I: OperationInput>(&self, input: &I) -> Option<ResponseMetadata> {
        self.inner.cached_response_metadata(input)
    }
}

macro_rules! operations {
    ($(
        $(#[$meta:meta])*
        $method:ident($input:ident) -> $output:ident, $error:ident;
    )*) => {
        impl<C> Client<C>
        where
            C: SmithyConnector,
        {
            $(
                $(#[$meta])*
                pub async fn $method(&self, input: $input) -> Result<$output, SdkError<$error>> {
                    self.inner
                        .call(self.conf.endpoint.uri(), TARGET_PREFIX, input)
                        .await
                }
            )*
        }
    };
}

operations! {
    /// Associates a new node with the server.
    ///
    /// A node can only be associated with servers that are in a `HEALTHY` state.
    associate_node(AssociateNodeInput) -> AssociateNodeOutput, AssociateNodeError;
    /// Creates an application-level backup of a server. While the server is in the
    /// `BACKING_UP` state, the server cannot be changed, and no additional backup can be created.
    create_backup(CreateBackupInput) -> CreateBackupOutput, CreateBackupError;
    /// Creates and immediately starts a new server. The server is ready to use when it is in
    /// the `HEALTHY` state.
    create_server(CreateServerInput) -> CreateServerOutput, CreateServerError;
    /// Deletes a backup. You can delete both manual and automated backups.
    delete_backup(DeleteBackupInput) -> DeleteBackupOutput, DeleteBackupError;
    /// Deletes the server and the underlying AWS CloudFormation stacks.
    delete_server(DeleteServerInput) -> DeleteServerOutput, DeleteServerError;
    /// Describes your OpsWorks-CM account attributes.
    describe_account_attributes(DescribeAccountAttributesInput) -> DescribeAccountAttributesOutput, DescribeAccountAttributesError;
    /// Describes backups. The results are ordered by time, with newest backups first.
    describe_backups(DescribeBackupsInput) -> DescribeBackupsOutput, DescribeBackupsError;
    /// Describes events for a specified server. Results are ordered by time, with newest events first.
    describe_events(DescribeEventsInput) -> DescribeEventsOutput, DescribeEventsError;
    /// Returns the current status of an existing association or disassociation request.
    describe_node_association_status(DescribeNodeAssociationStatusInput) -> DescribeNodeAssociationStatusOutput, DescribeNodeAssociationStatusError;
    /// Lists all configuration management servers that are identified with your account.
    describe_servers(DescribeServersInput) -> DescribeServersOutput, DescribeServersError;
    /// Disassociates a node from an AWS OpsWorks CM server, and removes the node from the
    /// server's managed nodes.
    disassociate_node(DisassociateNodeInput) -> DisassociateNodeOutput, DisassociateNodeError;
    /// Exports a specified server engine attribute as a base64-encoded string.
    export_server_engine_attribute(ExportServerEngineAttributeInput) -> ExportServerEngineAttributeOutput, ExportServerEngineAttributeError;
    /// Returns a list of tags that are applied to the specified server or backup.
    list_tags_for_resource(ListTagsForResourceInput) -> ListTagsForResourceOutput, ListTagsForResourceError;
    /// Restores a backup to a server that is in a `CONNECTION_LOST`, `HEALTHY`, `RUNNING`,
    /// `UNHEALTHY`, or `TERMINATED` state.
    restore_server(RestoreServerInput) -> RestoreServerOutput, RestoreServerError;
    /// Manually starts server maintenance.
    start_maintenance(StartMaintenanceInput) -> StartMaintenanceOutput, StartMaintenanceError;
    /// Applies tags to an AWS OpsWorks for Chef Automate or AWS OpsWorks for Puppet Enterprise
    /// server, or to server backups.
    tag_resource(TagResourceInput) -> TagResourceOutput, TagResourceError;
    /// Removes specified tags from an AWS OpsWorks-CM server or backup.
    untag_resource(UntagResourceInput) -> UntagResourceOutput, UntagResourceError;
    /// Updates settings for a server.
    update_server(UpdateServerInput) -> UpdateServerOutput, UpdateServerError;
    /// Updates engine-specific attributes on a specified server.
    update_server_engine_attributes(UpdateServerEngineAttributesInput) -> UpdateServerEngineAttributesOutput, UpdateServerEngineAttributesError;
}
