/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled service exceptions and the error type of every operation.
//!
//! Each `<Operation>Error` lists the faults that operation can return. Anything else the
//! service sends back is kept as `Unhandled`.

use smithy_http::operation_error;
use smithy_types::exception;

exception! {
    /// This occurs when the provided nextToken is not valid.
    pub struct InvalidNextTokenException in mod invalid_next_token_exception {}
}

exception! {
    /// The resource is in a state that does not allow you to perform a specified action.
    pub struct InvalidStateException in mod invalid_state_exception {}
}

exception! {
    /// The limit of servers or backups has been reached.
    pub struct LimitExceededException in mod limit_exceeded_exception {}
}

exception! {
    /// The requested resource cannot be created because it already exists.
    pub struct ResourceAlreadyExistsException in mod resource_already_exists_exception {}
}

exception! {
    /// The requested resource does not exist, or access was denied.
    pub struct ResourceNotFoundException in mod resource_not_found_exception {}
}

exception! {
    /// One or more of the provided request parameters are not valid.
    pub struct ValidationException in mod validation_exception {}
}

operation_error! {
    pub enum AssociateNodeError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum CreateBackupError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        LimitExceededException(LimitExceededException) = "LimitExceededException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum CreateServerError {
        LimitExceededException(LimitExceededException) = "LimitExceededException",
        ResourceAlreadyExistsException(ResourceAlreadyExistsException) = "ResourceAlreadyExistsException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum DeleteBackupError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum DeleteServerError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    /// `DescribeAccountAttributes` models no faults of its own.
    pub enum DescribeAccountAttributesError {}
}

operation_error! {
    pub enum DescribeBackupsError {
        ValidationException(ValidationException) = "ValidationException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        InvalidNextTokenException(InvalidNextTokenException) = "InvalidNextTokenException",
    }
}

operation_error! {
    pub enum DescribeEventsError {
        ValidationException(ValidationException) = "ValidationException",
        InvalidNextTokenException(InvalidNextTokenException) = "InvalidNextTokenException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
    }
}

operation_error! {
    pub enum DescribeNodeAssociationStatusError {
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum DescribeServersError {
        ValidationException(ValidationException) = "ValidationException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        InvalidNextTokenException(InvalidNextTokenException) = "InvalidNextTokenException",
    }
}

operation_error! {
    pub enum DisassociateNodeError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum ExportServerEngineAttributeError {
        ValidationException(ValidationException) = "ValidationException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        InvalidStateException(InvalidStateException) = "InvalidStateException",
    }
}

operation_error! {
    pub enum ListTagsForResourceError {
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum RestoreServerError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum StartMaintenanceError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum TagResourceError {
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
        InvalidStateException(InvalidStateException) = "InvalidStateException",
    }
}

operation_error! {
    pub enum UntagResourceError {
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
        InvalidStateException(InvalidStateException) = "InvalidStateException",
    }
}

operation_error! {
    pub enum UpdateServerError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}

operation_error! {
    pub enum UpdateServerEngineAttributesError {
        InvalidStateException(InvalidStateException) = "InvalidStateException",
        ResourceNotFoundException(ResourceNotFoundException) = "ResourceNotFoundException",
        ValidationException(ValidationException) = "ValidationException",
    }
}
