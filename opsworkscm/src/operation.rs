/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::*;
use crate::input::*;
use crate::output::*;

/// Service name recorded in the metadata of every operation.
pub const SERVICE_NAME: &str = "opsworkscm";

smithy_http::operation_inputs! {
    service = SERVICE_NAME;
    AssociateNode: AssociateNodeInput => AssociateNodeOutput, AssociateNodeError;
    CreateBackup: CreateBackupInput => CreateBackupOutput, CreateBackupError;
    CreateServer: CreateServerInput => CreateServerOutput, CreateServerError;
    DeleteBackup: DeleteBackupInput => DeleteBackupOutput, DeleteBackupError;
    DeleteServer: DeleteServerInput => DeleteServerOutput, DeleteServerError;
    DescribeAccountAttributes: DescribeAccountAttributesInput => DescribeAccountAttributesOutput, DescribeAccountAttributesError;
    DescribeBackups: DescribeBackupsInput => DescribeBackupsOutput, DescribeBackupsError;
    DescribeEvents: DescribeEventsInput => DescribeEventsOutput, DescribeEventsError;
    DescribeNodeAssociationStatus: DescribeNodeAssociationStatusInput => DescribeNodeAssociationStatusOutput, DescribeNodeAssociationStatusError;
    DescribeServers: DescribeServersInput => DescribeServersOutput, DescribeServersError;
    DisassociateNode: DisassociateNodeInput => DisassociateNodeOutput, DisassociateNodeError;
    ExportServerEngineAttribute: ExportServerEngineAttributeInput => ExportServerEngineAttributeOutput, ExportServerEngineAttributeError;
    ListTagsForResource: ListTagsForResourceInput => ListTagsForResourceOutput, ListTagsForResourceError;
    RestoreServer: RestoreServerInput => RestoreServerOutput, RestoreServerError;
    StartMaintenance: StartMaintenanceInput => StartMaintenanceOutput, StartMaintenanceError;
    TagResource: TagResourceInput => TagResourceOutput, TagResourceError;
    UntagResource: UntagResourceInput => UntagResourceOutput, UntagResourceError;
    UpdateServer: UpdateServerInput => UpdateServerOutput, UpdateServerError;
    UpdateServerEngineAttributes: UpdateServerEngineAttributesInput => UpdateServerEngineAttributesOutput, UpdateServerEngineAttributesError;
}

#[cfg(test)]
mod test {
    use crate::input::{CreateBackupInput, DescribeServersInput};
    use smithy_http::operation::OperationInput;

    #[test]
    fn operation_names() {
        assert_eq!(CreateBackupInput::metadata().name(), "CreateBackup");
        assert_eq!(DescribeServersInput::metadata().name(), "DescribeServers");
        assert_eq!(CreateBackupInput::metadata().service(), super::SERVICE_NAME);
    }
}
