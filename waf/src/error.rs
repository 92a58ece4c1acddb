/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled service exceptions and the error type of every operation.
//!
//! Wire codes carry a `WAF` prefix, for example `WAFStaleDataException`. Internal errors
//! are reported with [`ErrorKind::ServerError`](smithy_types::retry::ErrorKind::ServerError).

use crate::model::{MigrationErrorType, ParameterExceptionField, ParameterExceptionReason};
use smithy_http::operation_error;
use smithy_types::exception;

exception! {
    pub struct WafBadRequestException in mod waf_bad_request_exception {}
}

exception! {
    /// The name specified is invalid.
    pub struct WafDisallowedNameException in mod waf_disallowed_name_exception {}
}

exception! {
    /// The operation failed due to a problem with the migration.
    pub struct WafEntityMigrationException in mod waf_entity_migration_exception {
        migration_error_type / set_migration_error_type: shape(MigrationErrorType) = "MigrationErrorType",
        migration_error_reason / set_migration_error_reason: string = "MigrationErrorReason",
    }
}

exception! {
    /// The operation failed because of a system problem, even though the request was valid.
    /// Retry your request.
    pub struct WafInternalErrorException in mod waf_internal_error_exception {}
}

exception! {
    /// The operation failed because you tried to create, update, or delete an object by
    /// using an invalid account identifier.
    pub struct WafInvalidAccountException in mod waf_invalid_account_exception {}
}

exception! {
    /// The operation failed because there was nothing to do, or the object was not in a
    /// state that allows the operation.
    pub struct WafInvalidOperationException in mod waf_invalid_operation_exception {}
}

exception! {
    /// The operation failed because AWS WAF didn't recognize a parameter in the request.
    pub struct WafInvalidParameterException in mod waf_invalid_parameter_exception {
        /// The request field that was not valid.
        field / set_field: shape(ParameterExceptionField) = "field",
        parameter / set_parameter: string = "parameter",
        reason / set_reason: shape(ParameterExceptionReason) = "reason",
    }
}

exception! {
    /// The operation failed because the specified policy is not in the proper format.
    pub struct WafInvalidPermissionPolicyException in mod waf_invalid_permission_policy_exception {}
}

exception! {
    /// The regular expression (regex) you specified in `RegexPatternString` is invalid.
    pub struct WafInvalidRegexPatternException in mod waf_invalid_regex_pattern_exception {}
}

exception! {
    /// The operation exceeds a resource limit, for example, the maximum number of `WebACL`
    /// objects that you can create for an AWS account.
    pub struct WafLimitsExceededException in mod waf_limits_exceeded_exception {}
}

exception! {
    /// The operation failed because you tried to delete an object that isn't empty.
    pub struct WafNonEmptyEntityException in mod waf_non_empty_entity_exception {}
}

exception! {
    /// The operation failed because you tried to add an object to or delete an object from
    /// another object that doesn't exist.
    pub struct WafNonexistentContainerException in mod waf_nonexistent_container_exception {}
}

exception! {
    /// The operation failed because the referenced object doesn't exist.
    pub struct WafNonexistentItemException in mod waf_nonexistent_item_exception {}
}

exception! {
    /// The operation failed because you tried to delete an object that is still in use.
    pub struct WafReferencedItemException in mod waf_referenced_item_exception {}
}

exception! {
    /// AWS WAF is not able to access the service linked role. This can be caused by a
    /// previous `PutLoggingConfiguration` request still in progress.
    pub struct WafServiceLinkedRoleErrorException in mod waf_service_linked_role_error_exception {}
}

exception! {
    /// The operation failed because you tried to create, update, or delete an object by
    /// using a change token that has already been used.
    pub struct WafStaleDataException in mod waf_stale_data_exception {}
}

exception! {
    /// The specified subscription does not exist.
    pub struct WafSubscriptionNotFoundException in mod waf_subscription_not_found_exception {}
}

exception! {
    pub struct WafTagOperationException in mod waf_tag_operation_exception {}
}

exception! {
    pub struct WafTagOperationInternalErrorException in mod waf_tag_operation_internal_error_exception {}
}

operation_error! {
    pub enum CreateByteMatchSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum CreateGeoMatchSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum CreateIpSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum CreateRateBasedRuleError {
        WafBadRequestException(WafBadRequestException) = "WAFBadRequestException",
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum CreateRegexMatchSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum CreateRegexPatternSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum CreateRuleError {
        WafBadRequestException(WafBadRequestException) = "WAFBadRequestException",
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum CreateRuleGroupError {
        WafBadRequestException(WafBadRequestException) = "WAFBadRequestException",
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum CreateSizeConstraintSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum CreateSqlInjectionMatchSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum CreateWebAclError {
        WafBadRequestException(WafBadRequestException) = "WAFBadRequestException",
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum CreateWebAclMigrationStackError {
        WafEntityMigrationException(WafEntityMigrationException) = "WAFEntityMigrationException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum CreateXssMatchSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteByteMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteGeoMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteIpSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteLoggingConfigurationError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeletePermissionPolicyError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteRateBasedRuleError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum DeleteRegexMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteRegexPatternSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteRuleError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum DeleteRuleGroupError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum DeleteSizeConstraintSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteSqlInjectionMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum DeleteWebAclError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum DeleteXssMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonEmptyEntityException(WafNonEmptyEntityException) = "WAFNonEmptyEntityException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum GetByteMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetChangeTokenError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum GetChangeTokenStatusError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetGeoMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetIpSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetLoggingConfigurationError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetPermissionPolicyError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetRateBasedRuleError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetRateBasedRuleManagedKeysError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetRegexMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetRegexPatternSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetRuleError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetRuleGroupError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetSampledRequestsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetSizeConstraintSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetSqlInjectionMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetWebAclError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum GetXssMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum ListActivatedRulesInRuleGroupError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum ListByteMatchSetsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListGeoMatchSetsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListIpSetsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListLoggingConfigurationsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum ListRateBasedRulesError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListRegexMatchSetsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListRegexPatternSetsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListRuleGroupsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum ListRulesError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListSizeConstraintSetsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListSqlInjectionMatchSetsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListSubscribedRuleGroupsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
    }
}

operation_error! {
    pub enum ListTagsForResourceError {
        WafBadRequestException(WafBadRequestException) = "WAFBadRequestException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum ListWebAclsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum ListXssMatchSetsError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
    }
}

operation_error! {
    pub enum PutLoggingConfigurationError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafServiceLinkedRoleErrorException(WafServiceLinkedRoleErrorException) = "WAFServiceLinkedRoleErrorException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum PutPermissionPolicyError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidPermissionPolicyException(WafInvalidPermissionPolicyException) = "WAFInvalidPermissionPolicyException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum TagResourceError {
        WafBadRequestException(WafBadRequestException) = "WAFBadRequestException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum UntagResourceError {
        WafBadRequestException(WafBadRequestException) = "WAFBadRequestException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafTagOperationException(WafTagOperationException) = "WAFTagOperationException",
        WafTagOperationInternalErrorException(WafTagOperationInternalErrorException) = "WAFTagOperationInternalErrorException" => ServerError,
    }
}

operation_error! {
    pub enum UpdateByteMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateGeoMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateIpSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateRateBasedRuleError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateRegexMatchSetError {
        WafDisallowedNameException(WafDisallowedNameException) = "WAFDisallowedNameException",
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateRegexPatternSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidRegexPatternException(WafInvalidRegexPatternException) = "WAFInvalidRegexPatternException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateRuleError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateRuleGroupError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateSizeConstraintSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateSqlInjectionMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

operation_error! {
    pub enum UpdateWebAclError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafReferencedItemException(WafReferencedItemException) = "WAFReferencedItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
        WafSubscriptionNotFoundException(WafSubscriptionNotFoundException) = "WAFSubscriptionNotFoundException",
    }
}

operation_error! {
    pub enum UpdateXssMatchSetError {
        WafInternalErrorException(WafInternalErrorException) = "WAFInternalErrorException" => ServerError,
        WafInvalidAccountException(WafInvalidAccountException) = "WAFInvalidAccountException",
        WafInvalidOperationException(WafInvalidOperationException) = "WAFInvalidOperationException",
        WafInvalidParameterException(WafInvalidParameterException) = "WAFInvalidParameterException",
        WafLimitsExceededException(WafLimitsExceededException) = "WAFLimitsExceededException",
        WafNonexistentContainerException(WafNonexistentContainerException) = "WAFNonexistentContainerException",
        WafNonexistentItemException(WafNonexistentItemException) = "WAFNonexistentItemException",
        WafStaleDataException(WafStaleDataException) = "WAFStaleDataException",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};

    #[test]
    fn internal_errors_are_server_errors() {
        let err = GetChangeTokenError::WafInternalErrorException(
            WafInternalErrorException::builder().message("try again").build(),
        );
        assert_eq!(err.code(), Some("WAFInternalErrorException"));
        assert_eq!(err.error_kind(), Some(ErrorKind::ServerError));
        assert_eq!(err.to_string(), "WafInternalErrorException: try again");

        let err = UpdateIpSetError::WafStaleDataException(WafStaleDataException::builder().build());
        assert_eq!(err.error_kind(), None);
        assert_eq!(err.message(), None);
    }
}
